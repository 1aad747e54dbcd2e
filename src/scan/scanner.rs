//! File scanner that collects dump candidates below a root directory.

use crate::domain::{Config, FileEntry, ScanStats, DUMP_FILE_NAME};
use crate::utils::{has_dump_extension, is_ignored_path, relative_slash_path};
use anyhow::Result;
use ignore::WalkBuilder;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Walks a project tree, pruning ignored directories and keeping files whose
/// extension is in the configured set.
pub struct FileScanner {
    root_path: PathBuf,
    extensions: BTreeSet<String>,
    ignore_dirs: BTreeSet<String>,
    follow_symlinks: bool,
    stats: ScanStats,
}

impl FileScanner {
    /// Create a new FileScanner with the default extension and ignore sets.
    pub fn new(root_path: PathBuf) -> Self {
        Self::with_config(root_path, &Config::default())
    }

    pub fn with_config(root_path: PathBuf, config: &Config) -> Self {
        Self {
            root_path,
            extensions: config.extensions.clone(),
            ignore_dirs: config.ignore_dirs.clone(),
            follow_symlinks: config.follow_symlinks,
            stats: ScanStats::default(),
        }
    }

    /// Set file extensions to include (e.g., ".ts", ".md")
    pub fn extensions(mut self, extensions: BTreeSet<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Set directory names to prune
    pub fn ignore_dirs(mut self, names: BTreeSet<String>) -> Self {
        self.ignore_dirs = names;
        self
    }

    /// Set whether to descend into symlinked directories
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Scan the tree and return the matching files.
    ///
    /// Order follows the walk; callers sort with [`sort_entries`] before writing.
    pub fn scan(&mut self) -> Result<Vec<FileEntry>> {
        self.stats = ScanStats::default();

        let ignore_dirs = self.ignore_dirs.clone();
        let root = self.root_path.clone();
        let pruned = Arc::new(AtomicUsize::new(0));
        let pruned_in_filter = Arc::clone(&pruned);
        let dir_filter = move |entry: &ignore::DirEntry| -> bool {
            if entry.depth() == 0 {
                return true;
            }
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            if !is_dir {
                return true;
            }
            match entry.path().strip_prefix(&root) {
                Ok(rel) if is_ignored_path(rel, &ignore_dirs) => {
                    tracing::debug!("pruning ignored directory {}", entry.path().display());
                    pruned_in_filter.fetch_add(1, Ordering::Relaxed);
                    false
                }
                _ => true,
            }
        };

        // Plain walk: no gitignore, no hidden-file skipping, only our own pruning.
        let mut builder = WalkBuilder::new(&self.root_path);
        builder
            .standard_filters(false)
            .follow_links(self.follow_symlinks)
            .filter_entry(dir_filter);

        let dump_path = self.root_path.join(DUMP_FILE_NAME);
        let mut files = Vec::new();

        for entry_result in builder.build() {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    tracing::warn!("skipping unreadable entry: {}", err);
                    self.stats.walk_errors += 1;
                    continue;
                }
            };

            let path = entry.path();
            let Some(file_type) = entry.file_type() else {
                continue;
            };

            if file_type.is_dir() {
                continue;
            }

            if file_type.is_symlink() {
                // Links to directories are never descended here; links to
                // regular files are dumped like the file itself.
                if !path.is_file() {
                    tracing::debug!("skipping symlink {}", path.display());
                    self.stats.symlinks_skipped += 1;
                    continue;
                }
            } else if !file_type.is_file() {
                continue;
            }

            self.stats.files_seen += 1;

            if path == dump_path {
                continue;
            }

            if !has_dump_extension(path, &self.extensions) {
                self.stats.files_skipped_extension += 1;
                continue;
            }

            let Some(relative_path) = relative_slash_path(&self.root_path, path) else {
                continue;
            };

            self.stats.files_included += 1;
            files.push(FileEntry { path: path.to_path_buf(), relative_path });
        }

        self.stats.dirs_pruned = pruned.load(Ordering::Relaxed);
        Ok(files)
    }

    /// Get scanning statistics
    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }
}

/// Sort entries by relative path, case-insensitively with the exact path as tiebreak.
pub fn sort_entries(entries: &mut [FileEntry]) {
    entries.sort_by(|a, b| {
        a.relative_path
            .to_lowercase()
            .cmp(&b.relative_path.to_lowercase())
            .then_with(|| a.relative_path.cmp(&b.relative_path))
    });
}
