//! Fatal errors that abort a dump run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DumpError {
    /// The root given on the command line is missing or not a directory.
    #[error("the provided path is not a valid directory: {}", .path.display())]
    InvalidRoot { path: PathBuf },

    #[error("cannot locate the project root from executable {}", .exe.display())]
    NoExecutableParent { exe: PathBuf },

    #[error("failed to create dump file {}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed writing dump file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DumpError {
    /// Errors the user caused and that need no diagnostic trace.
    pub fn is_user_error(&self) -> bool {
        matches!(self, DumpError::InvalidRoot { .. })
    }
}
