//! Checksum error types.

use std::path::PathBuf;

/// Errors from the reader, file and parsing helpers.
///
/// The engine itself is total and never fails.
#[derive(Debug, thiserror::Error)]
pub enum ChecksumError {
    /// Read failure on a stream with no associated path.
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Read failure on a named file.
    #[error("failed to read {path}: {source}")]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File not found.
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// A string that does not encode a CRC-32 digest.
    #[error("invalid digest {input:?}: {reason}")]
    InvalidDigest { input: String, reason: &'static str },
}
