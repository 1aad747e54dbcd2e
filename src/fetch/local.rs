//! Local root validation

use crate::error::DumpError;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Resolve the directory to dump.
///
/// - With an explicit `path`, it is made absolute and must be an existing
///   directory, otherwise [`DumpError::InvalidRoot`] is returned.
/// - Without one, falls back to [`default_root`].
pub fn resolve_root(path: Option<&Path>) -> Result<PathBuf> {
    let Some(path) = path else {
        return default_root();
    };

    match path.canonicalize() {
        Ok(canonical) if canonical.is_dir() => Ok(canonical),
        _ => {
            let shown = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
            Err(DumpError::InvalidRoot { path: shown }.into())
        }
    }
}

/// Parent of the directory holding the running executable.
///
/// Existence is not checked beyond what the walk itself runs into.
pub fn default_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot determine executable location")?;
    let exe = exe.canonicalize().unwrap_or(exe);
    match exe.parent().and_then(Path::parent) {
        Some(root) => Ok(root.to_path_buf()),
        None => Err(DumpError::NoExecutableParent { exe }.into()),
    }
}
