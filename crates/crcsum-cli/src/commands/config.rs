//! Configuration management commands.

use anyhow::Result;

use super::Settings;
use crate::style::{print_labeled, print_spacer};

/// Show the effective configuration.
pub fn show(settings: &Settings, format: &str) -> Result<()> {
    let config = &settings.config;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(config)?;
            println!("{json}");
        }
        "toml" => {
            let toml_str = toml::to_string_pretty(config)?;
            println!("{toml_str}");
        }
        "text" => {
            println!("crcsum Configuration");
            println!("====================");
            print_spacer();

            println!("Engine:");
            print_labeled("Polynomial", &format!("{:#010x}", config.engine.polynomial));
            print_labeled("Seed", &format!("{:#010x}", config.engine.seed));
            print_spacer();

            println!("Output:");
            print_labeled("Uppercase", &config.output.uppercase.to_string());
            print_labeled("Buffer size", &config.output.buffer_size.to_string());
        }
        other => anyhow::bail!("Unknown format '{other}' (expected text, json or toml)"),
    }

    Ok(())
}
