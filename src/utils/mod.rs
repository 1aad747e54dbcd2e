//! Shared helpers: path normalization and text decoding.

pub mod encoding;
pub mod paths;

pub use encoding::read_file_lossy;
pub use paths::{has_dump_extension, is_ignored_path, normalize_path, relative_slash_path};
