//! Configuration management for crcsum
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. CLI arguments (highest precedence, applied by the caller)
//! 2. Environment variables (`CRCSUM_*` prefix, `__` between sections)
//! 3. crcsum.local.toml (gitignored, local overrides)
//! 4. crcsum.toml (git-tracked, project config)
//! 5. ~/.config/crcsum/config.toml (user defaults)
//! 6. Built-in defaults (lowest precedence)

use crcsum::{Crc32Params, HexCase};
use serde::{Deserialize, Serialize};

mod error;
mod literal;
mod loader;
mod paths;

pub use error::ConfigError;
pub use literal::parse_u32;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Main crcsum configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrcsumConfig {
    pub engine: EngineConfig,
    pub output: OutputConfig,
}

/// CRC parameters. Both values are fixed for the lifetime of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Reflected generator polynomial.
    #[serde(with = "literal::u32_literal")]
    pub polynomial: u32,
    #[serde(with = "literal::u32_literal")]
    pub seed: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let params = Crc32Params::STANDARD;
        Self {
            polynomial: params.polynomial,
            seed: params.seed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub uppercase: bool,
    /// Read buffer size for files and stdin, in bytes.
    pub buffer_size: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            uppercase: false,
            buffer_size: crcsum::io::DEFAULT_BUFFER_SIZE,
        }
    }
}

impl CrcsumConfig {
    /// CRC-32/ISO-HDLC, as used by zlib and PNG
    pub fn standard() -> Self {
        Self::default()
    }

    /// CRC-32C (Castagnoli), as used by iSCSI and ext4
    pub fn castagnoli() -> Self {
        let params = Crc32Params::CASTAGNOLI;
        Self {
            engine: EngineConfig {
                polynomial: params.polynomial,
                seed: params.seed,
            },
            ..Default::default()
        }
    }

    pub fn engine_params(&self) -> Crc32Params {
        Crc32Params::new(self.engine.polynomial, self.engine.seed)
    }

    pub fn hex_case(&self) -> HexCase {
        if self.output.uppercase {
            HexCase::Upper
        } else {
            HexCase::Lower
        }
    }

    /// Check values that deserialize fine but cannot be used
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.buffer_size == 0 {
            return Err(ConfigError::ValidationError(
                "output.buffer_size must be at least 1 byte".to_string(),
            ));
        }
        Ok(())
    }
}
