//! Streaming checksums over readers and files.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::crc32::Crc32;
use crate::digest::Crc32Digest;
use crate::error::ChecksumError;

/// Read buffer size used when none is given.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Checksums everything `reader` yields until EOF.
///
/// The engine is reset first, so it can be reused across inputs.
pub fn checksum_reader<R: Read>(
    engine: &mut Crc32,
    reader: R,
) -> Result<Crc32Digest, ChecksumError> {
    checksum_reader_with_buffer(engine, reader, DEFAULT_BUFFER_SIZE)
}

/// Like [`checksum_reader`] with an explicit buffer size (at least one byte).
pub fn checksum_reader_with_buffer<R: Read>(
    engine: &mut Crc32,
    reader: R,
    buffer_size: usize,
) -> Result<Crc32Digest, ChecksumError> {
    let total = feed(engine, reader, buffer_size)?;

    tracing::debug!(
        bytes = total,
        polynomial = engine.polynomial(),
        "checksummed stream"
    );

    Ok(engine.finalize())
}

/// Checksums the contents of the file at `path`.
pub fn checksum_file(
    engine: &mut Crc32,
    path: impl AsRef<Path>,
) -> Result<Crc32Digest, ChecksumError> {
    checksum_file_with_buffer(engine, path, DEFAULT_BUFFER_SIZE)
}

pub fn checksum_file_with_buffer(
    engine: &mut Crc32,
    path: impl AsRef<Path>,
    buffer_size: usize,
) -> Result<Crc32Digest, ChecksumError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            ChecksumError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ChecksumError::File {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let total = feed(engine, file, buffer_size).map_err(|source| ChecksumError::File {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        bytes = total,
        polynomial = engine.polynomial(),
        "checksummed file"
    );

    Ok(engine.finalize())
}

/// Resets `engine` and streams `reader` through it, returning the byte count.
fn feed<R: Read>(engine: &mut Crc32, mut reader: R, buffer_size: usize) -> std::io::Result<u64> {
    let mut buf = vec![0u8; buffer_size.max(1)];
    let mut total = 0u64;

    engine.reset();
    loop {
        match reader.read(&mut buf) {
            Ok(0) => return Ok(total),
            Ok(n) => {
                engine.update(&buf[..n]);
                total += n as u64;
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
}
