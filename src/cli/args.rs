//! Command line argument definitions.

use crate::models::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Walmart Sales - Load sales records and answer fixed business questions
#[derive(Parser, Debug)]
#[command(name = "walmart-sales")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config.toml (default: user config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a sales dataset and run the query catalog against it
    Run {
        /// Delimited sales file, or a directory of them
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Only run the named query (repeatable)
        #[arg(short, long = "query", value_name = "NAME")]
        queries: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Draw bar charts for queries that support them
        #[arg(long)]
        chart: bool,

        /// Keep the sales table in this SQLite file instead of memory
        #[arg(long, value_name = "PATH")]
        database: Option<PathBuf>,

        /// Also write a JSON report to this path
        #[arg(long, value_name = "PATH")]
        report: Option<PathBuf>,

        #[command(flatten)]
        input_format: InputFormatArgs,
    },

    /// Validate a sales dataset without running any query
    Validate {
        /// Delimited sales file, or a directory of them
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        #[command(flatten)]
        input_format: InputFormatArgs,
    },

    /// List the query catalog
    Queries,
}

/// Options describing the input files.
#[derive(clap::Args, Debug, Default)]
pub struct InputFormatArgs {
    /// Field delimiter (single ASCII character, `\t` for tab)
    #[arg(short, long, value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Date format of the date column, e.g. %Y-%m-%d
    #[arg(long, value_name = "FMT")]
    pub date_format: Option<String>,
}
