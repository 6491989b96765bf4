//! CLI command implementations.

pub mod queries;
pub mod run;
pub mod validate;

use crate::cli::args::InputFormatArgs;
use crate::core::loader::LoadOptions;
use crate::models::config::LoaderConfig;
use crate::{Error, Result};

/// Parse a delimiter argument into a single byte.
///
/// Accepts any single ASCII character, plus `\t` and `tab` for tab.
pub fn parse_delimiter(raw: &str) -> Result<u8> {
    match raw {
        "\\t" | "tab" => return Ok(b'\t'),
        _ => {}
    }

    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() && c != '"' && c != '\n' && c != '\r' => Ok(c as u8),
        _ => Err(Error::other(format!(
            "Invalid delimiter '{}': expected a single ASCII character",
            raw
        ))),
    }
}

/// Merge loader settings from the config file and the command line.
///
/// Command line values win.
pub fn resolve_load_options(config: &LoaderConfig, args: &InputFormatArgs) -> Result<LoadOptions> {
    let delimiter = match &args.delimiter {
        Some(raw) => parse_delimiter(raw)?,
        None => parse_delimiter(&config.delimiter.to_string())?,
    };
    let date_format = args
        .date_format
        .clone()
        .unwrap_or_else(|| config.date_format.clone());

    Ok(LoadOptions {
        delimiter,
        date_format,
    })
}
