//! Dump rendering: one `=== path ===` header per file followed by its text.

use crate::domain::{DumpSummary, FileEntry};
use crate::error::DumpError;
use crate::scan::sort_entries;
use crate::utils::read_file_lossy;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Header line preceding each file's content.
pub fn entry_header(relative_path: &str) -> String {
    format!("=== {relative_path} ===\n")
}

/// Placeholder written instead of content when a file cannot be read.
pub fn read_error_placeholder(relative_path: &str, err: &std::io::Error) -> String {
    format!("[ERROR reading {relative_path}: {err}]")
}

/// Streams dump entries into any writer.
pub struct DumpWriter<W: Write> {
    out: W,
    summary: DumpSummary,
}

impl<W: Write> DumpWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, summary: DumpSummary::default() }
    }

    /// Append one file. Read failures are rendered inline; only write
    /// failures on `out` are returned.
    pub fn write_entry(&mut self, entry: &FileEntry) -> std::io::Result<()> {
        let body = match read_file_lossy(&entry.path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!("failed to read {}: {}", entry.path.display(), err);
                self.summary.read_errors += 1;
                read_error_placeholder(&entry.relative_path, &err)
            }
        };

        let header = entry_header(&entry.relative_path);
        self.out.write_all(header.as_bytes())?;
        self.out.write_all(body.as_bytes())?;
        self.out.write_all(b"\n\n")?;

        self.summary.files_written += 1;
        self.summary.bytes_written += (header.len() + body.len() + 2) as u64;
        Ok(())
    }

    /// Flush and hand back the summary.
    pub fn finish(mut self) -> std::io::Result<DumpSummary> {
        self.out.flush()?;
        Ok(self.summary)
    }
}

/// Write the dump for `entries` (sorted here) into `output`, truncating it.
pub fn write_dump(output: &Path, entries: &mut [FileEntry]) -> Result<DumpSummary, DumpError> {
    sort_entries(entries);

    let file = File::create(output)
        .map_err(|source| DumpError::CreateOutput { path: output.to_path_buf(), source })?;
    let mut writer = DumpWriter::new(BufWriter::new(file));

    let write_err =
        |source: std::io::Error| DumpError::Write { path: PathBuf::from(output), source };
    for entry in entries.iter() {
        writer.write_entry(entry).map_err(write_err)?;
    }
    writer.finish().map_err(write_err)
}
