//! proyecto-dump: flatten a project source tree into one text file
//!
//! Walks a root directory, keeps files with a recognized extension outside
//! the ignored directories, and writes them into `proyecto_dump.txt` at the
//! root, each preceded by a `=== relative/path ===` header.

pub mod config;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod render;
pub mod scan;
pub mod utils;

pub use domain::{Config, DumpSummary, FileEntry, ScanStats, DUMP_FILE_NAME};
pub use error::DumpError;
