//! Output rendering

pub mod dump;

pub use dump::{write_dump, DumpWriter};
