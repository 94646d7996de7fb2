//! Table command - prints the lookup table for the configured polynomial.

use anyhow::Result;
use comfy_table::presets::{NOTHING, UTF8_FULL};
use comfy_table::{Cell, Table};
use crcsum::{HexCase, LookupTable};

use super::Settings;
use crate::style::{colors::SemanticStyle, no_color};

const COLUMNS: usize = 8;

pub fn run(settings: &Settings) -> Result<()> {
    let table = LookupTable::shared(settings.config.engine.polynomial);

    println!(
        "{} {}",
        "Polynomial".header(),
        format_entry(table.polynomial(), settings.hex_case()).code()
    );
    println!("{}", render(&table, settings.hex_case()));
    Ok(())
}

fn render(table: &LookupTable, case: HexCase) -> Table {
    let mut rendered = Table::new();
    rendered.load_preset(if no_color() { NOTHING } else { UTF8_FULL });

    let mut header = vec![Cell::new("")];
    header.extend((0..COLUMNS).map(|col| Cell::new(format!("+{col}"))));
    rendered.set_header(header);

    for (row, chunk) in table.entries().chunks(COLUMNS).enumerate() {
        let mut cells = vec![Cell::new(format!("{:02x}", row * COLUMNS))];
        cells.extend(chunk.iter().map(|&entry| Cell::new(format_entry(entry, case))));
        rendered.add_row(cells);
    }

    rendered
}

fn format_entry(value: u32, case: HexCase) -> String {
    match case {
        HexCase::Lower => format!("0x{value:08x}"),
        HexCase::Upper => format!("0x{value:08X}"),
    }
}
