//! Configuration loading
//!
//! Defaults reproduce the fixed extension and ignore-directory sets; an
//! explicit `--config FILE` may override them.

pub mod loader;

pub use loader::load_config;
