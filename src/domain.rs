//! Core data types shared by the scanner, the dump writer and the CLI.

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Name of the dump file written at the project root.
pub const DUMP_FILE_NAME: &str = "proyecto_dump.txt";

const DEFAULT_EXTENSIONS: &[&str] = &[".ts", ".js", ".html", ".scss", ".json", ".md"];

const DEFAULT_IGNORE_DIRS: &[&str] =
    &["node_modules", "dist", ".angular", ".git", "uploads", "cache"];

static EXTENSION_SET: Lazy<BTreeSet<String>> =
    Lazy::new(|| DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect());

static IGNORE_DIR_SET: Lazy<BTreeSet<String>> =
    Lazy::new(|| DEFAULT_IGNORE_DIRS.iter().map(|s| s.to_string()).collect());

/// Extensions (lowercase, with leading dot) eligible for the dump.
pub fn default_extensions() -> &'static BTreeSet<String> {
    &EXTENSION_SET
}

/// Directory names pruned wherever they appear below the root.
pub fn default_ignore_dirs() -> &'static BTreeSet<String> {
    &IGNORE_DIR_SET
}

/// Scan configuration. Defaults reproduce the fixed extension and ignore sets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    #[serde(deserialize_with = "deserialize_extensions")]
    pub extensions: BTreeSet<String>,
    #[serde(deserialize_with = "deserialize_names")]
    pub ignore_dirs: BTreeSet<String>,
    pub follow_symlinks: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions().clone(),
            ignore_dirs: default_ignore_dirs().clone(),
            follow_symlinks: false,
        }
    }
}

/// Accept either `["ts", ".md"]` or `"ts, .md"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    One(String),
    Many(Vec<String>),
}

impl StringOrList {
    fn into_items(self) -> Vec<String> {
        match self {
            StringOrList::One(s) => s.split(',').map(str::to_string).collect(),
            StringOrList::Many(v) => v,
        }
    }
}

/// Lowercase an extension and make sure it carries its leading dot.
pub fn normalize_extension(raw: &str) -> Option<String> {
    let trimmed = raw.trim().to_lowercase();
    if trimmed.is_empty() || trimmed == "." {
        return None;
    }
    if trimmed.starts_with('.') {
        Some(trimmed)
    } else {
        Some(format!(".{trimmed}"))
    }
}

fn deserialize_extensions<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = StringOrList::deserialize(deserializer)?;
    Ok(raw.into_items().iter().filter_map(|e| normalize_extension(e)).collect())
}

fn deserialize_names<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = StringOrList::deserialize(deserializer)?;
    Ok(raw
        .into_items()
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect())
}

/// A collected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Absolute path as produced by the walk.
    pub path: PathBuf,
    /// Root-relative path with forward slashes.
    pub relative_path: String,
}

/// Counters gathered during a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub files_seen: usize,
    pub files_included: usize,
    pub files_skipped_extension: usize,
    pub dirs_pruned: usize,
    pub symlinks_skipped: usize,
    pub walk_errors: usize,
}

/// Outcome of writing a dump.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpSummary {
    pub files_written: usize,
    pub read_errors: usize,
    pub bytes_written: u64,
}
