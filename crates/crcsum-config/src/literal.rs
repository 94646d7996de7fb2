//! 32-bit integer literals written in decimal or `0x`-prefixed hex.
//!
//! TOML carries hex integers natively, but environment variables and CLI
//! flags arrive as strings, so `engine.polynomial` and `engine.seed` accept
//! either form.

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;

/// Parses a `u32` given in decimal or with a `0x` prefix. Underscores are
/// ignored.
pub fn parse_u32(value: &str) -> Result<u32, String> {
    let value = value.trim();
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => value.replace('_', "").parse(),
    };
    parsed.map_err(|e| format!("invalid 32-bit value '{value}': {e}"))
}

/// Serde module for `#[serde(with = "...")]` on `u32` fields.
pub(crate) mod u32_literal {
    use super::{Deserializer, Serializer, U32Visitor};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S>(value: &u32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(*value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(U32Visitor)
    }
}

struct U32Visitor;

impl Visitor<'_> for U32Visitor {
    type Value = u32;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a 32-bit unsigned integer or a decimal/0x-hex string")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<u32, E> {
        u32::try_from(value).map_err(|_| E::custom(format!("{value} does not fit in 32 bits")))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<u32, E> {
        u32::try_from(value).map_err(|_| E::custom(format!("{value} does not fit in 32 bits")))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<u32, E> {
        parse_u32(value).map_err(E::custom)
    }
}
