//! Locating the project root to dump

pub mod local;

pub use local::{default_root, resolve_root};
