//! Validate command implementation.
//!
//! Parses and validates the input without touching any store.

use crate::core::loader::{self, LoadOptions};
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Validate every input file and report record counts.
pub fn validate(input: &Path, options: &LoadOptions) -> Result<()> {
    println!("{}", "Validating sales data...".bold().cyan());
    println!();

    let files = loader::read_records(input, options)?;
    if files.is_empty() {
        println!("{}", "No data files found.".yellow());
        return Ok(());
    }

    let mut total = 0u64;
    for file in &files {
        total += file.source.records;
        println!(
            "{} {} ({} records)",
            "[OK]".green(),
            file.source.path.display(),
            file.source.records
        );
    }

    println!();
    println!(
        "{} {} records in {} file(s)",
        "Valid:".bold().green(),
        total,
        files.len()
    );

    Ok(())
}
