//! Hash command - prints one digest per input.

use anyhow::Result;
use rayon::prelude::*;

use super::{Settings, digest_input};
use crate::style::print_error;

pub fn run(settings: &Settings, files: &[String]) -> Result<()> {
    let stdin_only = [String::from("-")];
    let inputs = if files.is_empty() { &stdin_only[..] } else { files };

    // One engine per input, all sharing the prototype's lookup table.
    let prototype = settings.engine();
    let buffer_size = settings.buffer_size();
    let results: Vec<_> = inputs
        .par_iter()
        .map(|input| {
            let mut engine = prototype.clone();
            digest_input(&mut engine, input, buffer_size)
        })
        .collect();

    let mut failures = 0usize;
    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(digest) => println!("{}  {}", digest.to_hex(settings.hex_case()), input),
            Err(e) => {
                failures += 1;
                print_error(&format!("{input}: {e}"));
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} inputs could not be read", inputs.len());
    }
    Ok(())
}
