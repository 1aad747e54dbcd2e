//! File collection with ignore-directory pruning

use crate::domain::{Config, FileEntry, ScanStats};
use anyhow::Result;
use std::path::Path;

pub mod scanner;

pub use scanner::{sort_entries, FileScanner};

/// Collect every dump candidate under `root` using `config`.
pub fn scan_repository<P: AsRef<Path>>(
    root: P,
    config: &Config,
) -> Result<(Vec<FileEntry>, ScanStats)> {
    let mut scanner = FileScanner::with_config(root.as_ref().to_path_buf(), config);
    let files = scanner.scan()?;
    let stats = scanner.stats().clone();
    Ok((files, stats))
}
