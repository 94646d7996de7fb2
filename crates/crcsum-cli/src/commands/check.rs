//! Check command - compares an input's digest with an expected value.

use anyhow::{Context, Result};
use crcsum::Crc32Digest;

use super::{Settings, digest_input};
use crate::style::{colors::SemanticStyle, print_error, print_success};

pub fn run(settings: &Settings, file: &str, expected: &str) -> Result<()> {
    let expected: Crc32Digest = expected.parse().context("Invalid expected checksum")?;

    let mut engine = settings.engine();
    let actual = digest_input(&mut engine, file, settings.buffer_size())
        .with_context(|| format!("Failed to checksum {file}"))?;

    let case = settings.hex_case();
    if actual == expected {
        print_success(&format!("{file}: OK {}", actual.to_hex(case).muted()));
        Ok(())
    } else {
        print_error(&format!(
            "{file}: FAILED (expected {}, got {})",
            expected.to_hex(case),
            actual.to_hex(case)
        ));
        anyhow::bail!("checksum mismatch for {file}")
    }
}
