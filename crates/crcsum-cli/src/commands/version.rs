//! Version command implementation.

use crcsum::{DEFAULT_POLYNOMIAL, DEFAULT_SEED};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() {
    println!("crcsum {VERSION}");
    println!();
    println!("Table-driven CRC-32 checksums.");
    println!();
    println!("Defaults:");
    println!("  Polynomial: {DEFAULT_POLYNOMIAL:#010x} (reflected 0x04c11db7)");
    println!("  Seed:       {DEFAULT_SEED:#010x}");
    println!("  Target:     {}", std::env::consts::ARCH);
    println!("  OS:         {}", std::env::consts::OS);
}
