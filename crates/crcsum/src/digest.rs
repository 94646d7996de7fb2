//! CRC-32 digest value and its hexadecimal rendering.

use std::fmt;
use std::str::FromStr;

use crate::error::ChecksumError;

/// Length of a CRC-32 digest in bytes.
pub const DIGEST_LENGTH: usize = 4;

/// Letter case used when rendering a digest as hex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HexCase {
    #[default]
    Lower,
    Upper,
}

/// A finalized CRC-32 value, stored big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Crc32Digest([u8; DIGEST_LENGTH]);

impl Crc32Digest {
    pub const fn from_value(value: u32) -> Self {
        Self(value.to_be_bytes())
    }

    pub const fn from_bytes(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self(bytes)
    }

    /// The checksum as an integer.
    pub const fn value(&self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    /// Big-endian bytes: most significant byte first.
    pub const fn to_bytes(&self) -> [u8; DIGEST_LENGTH] {
        self.0
    }

    pub const fn as_bytes(&self) -> &[u8; DIGEST_LENGTH] {
        &self.0
    }

    /// Renders the digest as 8 hex characters.
    pub fn to_hex(&self, case: HexCase) -> String {
        match case {
            HexCase::Lower => format!("{self:x}"),
            HexCase::Upper => format!("{self:X}"),
        }
    }
}

impl From<u32> for Crc32Digest {
    fn from(value: u32) -> Self {
        Self::from_value(value)
    }
}

impl From<Crc32Digest> for u32 {
    fn from(digest: Crc32Digest) -> Self {
        digest.value()
    }
}

impl AsRef<[u8]> for Crc32Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::LowerHex for Crc32Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.value())
    }
}

impl fmt::UpperHex for Crc32Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.value())
    }
}

impl fmt::Display for Crc32Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl FromStr for Crc32Digest {
    type Err = ChecksumError;

    /// Parses 8 hex digits in either case, with an optional `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() != DIGEST_LENGTH * 2 {
            return Err(ChecksumError::InvalidDigest {
                input: s.to_string(),
                reason: "expected exactly 8 hex digits",
            });
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ChecksumError::InvalidDigest {
                input: s.to_string(),
                reason: "contains non-hex characters",
            });
        }

        u32::from_str_radix(digits, 16)
            .map(Self::from_value)
            .map_err(|_| ChecksumError::InvalidDigest {
                input: s.to_string(),
                reason: "not a 32-bit hex value",
            })
    }
}
