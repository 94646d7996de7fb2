//! crcsum command-line interface.
//!
//! Computes and verifies CRC-32 checksums of files and standard input.
//!
//! # Quick Start
//!
//! ```bash
//! # Checksum files (or stdin when no file / "-" is given)
//! crcsum hash Cargo.toml README.md
//!
//! # CRC-32C instead of the standard polynomial
//! crcsum hash --polynomial 0x82F63B78 data.bin
//!
//! # Verify a file against an expected digest
//! crcsum check data.bin cbf43926
//! ```

mod commands;
mod style;

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{EngineArgs, Settings};

/// crcsum - table-driven CRC-32 checksums.
#[derive(Parser)]
#[command(name = "crcsum")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Read configuration from this file only, skipping the layered sources.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Project directory searched for crcsum.toml / crcsum.local.toml.
    #[arg(long, global = true, value_name = "DIR", default_value = ".")]
    project: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Print the checksum of each input.
    Hash {
        /// Files to checksum ("-" for stdin; stdin when omitted).
        files: Vec<String>,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Verify a file against an expected checksum.
    Check {
        /// File to checksum ("-" for stdin).
        file: String,

        /// Expected digest as 8 hex digits (optional 0x prefix).
        expected: String,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Print the 256-entry lookup table for a polynomial.
    Table {
        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Configuration commands.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration.
    Show {
        /// Output format (text, json, toml).
        #[arg(short, long, default_value = "text")]
        format: String,

        #[command(flatten)]
        engine: EngineArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    style::set_no_color(
        cli.no_color || std::env::var_os("NO_COLOR").is_some() || !std::io::stdout().is_terminal(),
    );

    let resolve = |engine: &EngineArgs| Settings::resolve(cli.config.as_deref(), &cli.project, engine);

    match &cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Hash { files, engine } => commands::hash::run(&resolve(engine)?, files),
        Commands::Check {
            file,
            expected,
            engine,
        } => commands::check::run(&resolve(engine)?, file, expected),
        Commands::Table { engine } => commands::table::run(&resolve(engine)?),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { format, engine } => {
                commands::config::show(&resolve(engine)?, format)
            }
        },
    }
}
