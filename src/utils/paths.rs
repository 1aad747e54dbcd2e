//! Path normalization

use std::collections::BTreeSet;
use std::path::{Component, Path};

pub fn normalize_path(path: &str) -> String {
    // Convert backslashes to forward slashes and normalize
    path.replace('\\', "/")
}

/// Render `path` relative to `root` with forward slashes.
///
/// Returns `None` when `path` does not live under `root`.
pub fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    Some(normalize_path(&parts.join("/")))
}

/// True when any component of the root-relative path names an ignored directory.
pub fn is_ignored_path(rel: &Path, ignore_dirs: &BTreeSet<String>) -> bool {
    rel.components().any(|c| match c {
        Component::Normal(part) => part.to_str().is_some_and(|name| ignore_dirs.contains(name)),
        _ => false,
    })
}

/// Case-insensitive suffix match, `extensions` holding lowercase dotted entries.
pub fn has_dump_extension(path: &Path, extensions: &BTreeSet<String>) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.is_empty() => extensions.contains(&format!(".{}", ext.to_lowercase())),
        _ => false,
    }
}
