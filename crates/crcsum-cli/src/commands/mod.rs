//! CLI command implementations.

pub mod check;
pub mod config;
pub mod hash;
pub mod table;
pub mod version;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use crcsum::{ChecksumError, Crc32, Crc32Digest, HexCase};
use crcsum_config::{ConfigLoader, CrcsumConfig, parse_u32};

/// Engine overrides shared by every checksum command.
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Reflected generator polynomial (decimal or 0x-prefixed hex).
    #[arg(short, long, value_parser = parse_u32)]
    pub polynomial: Option<u32>,

    /// Initial register value (decimal or 0x-prefixed hex).
    #[arg(short, long, value_parser = parse_u32)]
    pub seed: Option<u32>,

    /// Print digests in upper-case hex.
    #[arg(short, long)]
    pub upper: bool,
}

/// Effective configuration after files, environment and flags are merged.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: CrcsumConfig,
}

impl Settings {
    pub fn resolve(
        config_file: Option<&Path>,
        project_dir: &Path,
        args: &EngineArgs,
    ) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => ConfigLoader::load_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => ConfigLoader::new()
                .with_project_dir(project_dir)
                .load()
                .context("Failed to load configuration")?,
        };

        if let Some(polynomial) = args.polynomial {
            config.engine.polynomial = polynomial;
        }
        if let Some(seed) = args.seed {
            config.engine.seed = seed;
        }
        if args.upper {
            config.output.uppercase = true;
        }

        Ok(Self { config })
    }

    /// A fresh engine for the configured polynomial and seed.
    pub fn engine(&self) -> Crc32 {
        Crc32::from_params(self.config.engine_params())
    }

    pub fn hex_case(&self) -> HexCase {
        self.config.hex_case()
    }

    pub fn buffer_size(&self) -> usize {
        self.config.output.buffer_size
    }
}

/// Checksums a named input, where "-" means stdin.
pub fn digest_input(
    engine: &mut Crc32,
    input: &str,
    buffer_size: usize,
) -> Result<Crc32Digest, ChecksumError> {
    if input == "-" {
        let stdin = std::io::stdin();
        crcsum::io::checksum_reader_with_buffer(engine, stdin.lock(), buffer_size)
    } else {
        crcsum::io::checksum_file_with_buffer(engine, PathBuf::from(input), buffer_size)
    }
}
