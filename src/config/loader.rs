//! Config file loading

use crate::domain::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Section name that may wrap the settings, e.g. `[proyecto-dump]`.
const SECTION: &str = "proyecto-dump";

/// Load a config file given explicitly on the command line.
///
/// The format follows the extension (`.toml`, `.yaml`, `.yml`); any parse
/// or type error is fatal since the user asked for this file.
pub fn load_config(config_file: &Path) -> Result<Config> {
    let content = fs::read_to_string(config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let config = match ext.as_str() {
        "toml" => parse_toml_config(&content, config_file)?,
        "yaml" | "yml" => parse_yaml_config(&content, config_file)?,
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    };

    tracing::debug!(
        "loaded config {}: {} extensions, {} ignored dirs",
        config_file.display(),
        config.extensions.len(),
        config.ignore_dirs.len()
    );
    Ok(config)
}

/// Parse TOML config, supporting a nested [proyecto-dump] section.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, supporting a nested proyecto-dump section.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    // An empty document means "all defaults".
    if config_val.is_null() {
        return Ok(Config::default());
    }

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::default_ignore_dirs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("dump.toml");
        fs::write(&path, "").expect("write");

        let cfg = load_config(&path).expect("config");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_load_toml_config() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("dump.toml");
        fs::write(&path, "extensions = [\"rs\", \".TOML\"]\nfollow_symlinks = true\n")
            .expect("write");

        let cfg = load_config(&path).expect("config");
        assert_eq!(cfg.extensions.iter().collect::<Vec<_>>(), vec![".rs", ".toml"]);
        assert!(cfg.follow_symlinks);
        // Untouched keys keep their defaults.
        assert_eq!(&cfg.ignore_dirs, default_ignore_dirs());
    }

    #[test]
    fn test_nested_toml_section() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("dump.toml");
        fs::write(&path, "[proyecto-dump]\nignore_dirs = \"target, build ,\"\n").expect("write");

        let cfg = load_config(&path).expect("config");
        assert_eq!(cfg.ignore_dirs.iter().collect::<Vec<_>>(), vec!["build", "target"]);
    }

    #[test]
    fn test_load_yaml_config() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("dump.yml");
        fs::write(&path, "extensions:\n  - ts\n  - md\nignore_dirs: [vendor]\n").expect("write");

        let cfg = load_config(&path).expect("config");
        assert_eq!(cfg.extensions.iter().collect::<Vec<_>>(), vec![".md", ".ts"]);
        assert_eq!(cfg.ignore_dirs.iter().collect::<Vec<_>>(), vec!["vendor"]);
    }

    #[test]
    fn test_invalid_type_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "extensions = 123\n").expect("write");

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_unknown_key_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "output = \"other.txt\"\n").expect("write");

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_unsupported_extension_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("dump.ini");
        fs::write(&path, "x=1\n").expect("write");

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported config extension"));
    }

    #[test]
    fn test_missing_file_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        assert!(load_config(&tmp.path().join("absent.toml")).is_err());
    }
}
