//! # crcsum: table-driven CRC-32
//!
//! A streaming CRC-32 engine with a configurable reflected polynomial and
//! seed, producing big-endian 4-byte digests.
//!
//! - [`Crc32`]: incremental engine (`update` / `finalize` / `reset` / `hash`)
//! - [`LookupTable`]: per-polynomial table, shareable across engines and threads
//! - [`Crc32Digest`]: finalized value with hex rendering and parsing
//! - [`io`]: checksums over `Read` sources and files
//!
//! CRC-32 detects accidental corruption. It is not a cryptographic hash.
//!
//! ```
//! use crcsum::{Crc32, HexCase};
//!
//! let mut engine = Crc32::new();
//! let digest = engine.hash(b"123456789");
//! assert_eq!(digest.to_hex(HexCase::Upper), "CBF43926");
//! ```

mod crc32;
mod digest;
mod error;
pub mod io;

pub use crc32::{
    CASTAGNOLI_POLYNOMIAL, Crc32, Crc32Params, DEFAULT_POLYNOMIAL, DEFAULT_SEED, LookupTable,
    TABLE_SIZE, crc32,
};
pub use digest::{Crc32Digest, DIGEST_LENGTH, HexCase};
pub use error::ChecksumError;
pub use io::{checksum_file, checksum_reader};
