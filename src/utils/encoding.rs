//! Permissive text decoding for dumped files.
//!
//! Files are read whole and decoded in memory:
//! - BOM detection (UTF-8, UTF-16 LE/BE), the BOM itself is dropped
//! - UTF-8 fast-path with strict validation
//! - Mostly-UTF-8 text with stray bytes stays UTF-8; only the bad bytes are replaced
//! - Fallback encoding detection using chardetng when no UTF-8 multi-byte text is present
//! - Invalid sequences become U+FFFD instead of failing the read

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use std::path::Path;

const DEFAULT_SAMPLE_SIZE: usize = 8192;

/// Pick the encoding for `bytes` and the length of any BOM to skip.
fn detect(bytes: &[u8]) -> (&'static Encoding, usize) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return (encoding, bom_len);
    }
    if std::str::from_utf8(bytes).is_ok() {
        return (UTF_8, 0);
    }

    let sample = &bytes[..bytes.len().min(DEFAULT_SAMPLE_SIZE)];
    if has_multibyte_utf8(sample) {
        return (UTF_8, 0);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(sample, true);
    (detector.guess(None, true), 0)
}

/// True when the valid stretches of `sample` hold at least one non-ASCII char,
/// i.e. the text is UTF-8 with some corrupt bytes rather than a legacy encoding.
fn has_multibyte_utf8(sample: &[u8]) -> bool {
    sample.utf8_chunks().any(|chunk| !chunk.valid().is_ascii())
}

/// Decode raw bytes into text, never failing.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let (encoding, bom_len) = detect(bytes);
    let (decoded, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
    if had_errors {
        tracing::debug!("replaced invalid {} sequences while decoding", encoding.name());
    }
    decoded.into_owned()
}

/// Read a file as text with best-effort decoding.
///
/// Only I/O failures surface as errors; undecodable bytes are replaced.
pub fn read_file_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(decode_lossy(&bytes))
}
