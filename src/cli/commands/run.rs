//! Run command implementation.
//!
//! Loads the input into a fresh sales table, runs the selected catalog
//! queries and prints their results. Only results go to stdout.

use crate::core::catalog;
use crate::core::loader::{self, LoadOptions};
use crate::core::report;
use crate::core::runner::QueryRunner;
use crate::core::store::SalesStore;
use crate::generators::{chart, delimited, table};
use crate::models::config::OutputFormat;
use crate::models::query::QueryResult;
use crate::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

/// Options of a single run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Queries to run; empty runs the whole catalog.
    pub queries: Vec<String>,
    /// Output format.
    pub format: OutputFormat,
    /// Draw bar charts in table output.
    pub chart: bool,
    /// Width of the longest chart bar.
    pub chart_width: usize,
    /// On-disk SQLite file.
    pub database: Option<PathBuf>,
    /// JSON report destination.
    pub report: Option<PathBuf>,
    /// Loader options.
    pub load: LoadOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            queries: Vec::new(),
            format: OutputFormat::Table,
            chart: false,
            chart_width: 40,
            database: None,
            report: None,
            load: LoadOptions::default(),
        }
    }
}

/// Load `input` and run the selected queries, returning their results.
pub fn load_and_query(input: &Path, options: &RunOptions) -> Result<(loader::LoadSummary, Vec<QueryResult>)> {
    // Resolve the selection first so a typo fails before any loading.
    let queries = catalog::select(&options.queries)?;

    let mut store = match &options.database {
        Some(path) => SalesStore::open(path)?,
        None => SalesStore::open_in_memory()?,
    };

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .map_err(|e| crate::Error::other(e.to_string()))?
            .progress_chars("=>-"),
    );

    let summary = loader::load(&mut store, input, &options.load, &pb)?;
    let results = QueryRunner::new(&store).run_all(&queries)?;

    Ok((summary, results))
}

/// Render query results in the requested format.
pub fn render_results(results: &[QueryResult], options: &RunOptions) -> Result<String> {
    let mut out = String::new();

    match options.format {
        OutputFormat::Json => {
            out.push_str(&serde_json::to_string_pretty(results)?);
            out.push('\n');
        }
        OutputFormat::Csv => {
            for (i, result) in results.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(&format!("# {}\n", result.name));
                out.push_str(&delimited::render_csv(result)?);
            }
        }
        OutputFormat::Table => {
            for (i, result) in results.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                let query = catalog::find(&result.name);

                out.push_str(&format!("{}\n", format!("== {} ==", result.name).bold().cyan()));
                if let Some(q) = query {
                    out.push_str(&format!("{}\n", q.description.dimmed()));
                }
                out.push_str(&table::render_table(result));

                if options.chart {
                    let rendered = query.and_then(|q| q.chart).and_then(|c| {
                        chart::render_bar_chart(result, c.label, c.value, options.chart_width)
                    });
                    if let Some(rendered) = rendered {
                        out.push('\n');
                        out.push_str(&rendered);
                    }
                }
            }
        }
    }

    Ok(out)
}

/// Execute the run command.
///
/// Nothing reaches stdout unless every step, including saving the report,
/// has succeeded.
pub fn run(input: &Path, options: &RunOptions) -> Result<()> {
    let (summary, results) = load_and_query(input, options)?;
    let rendered = render_results(&results, options)?;

    if let Some(path) = &options.report {
        let report = report::build_report(&summary, &results);
        report::save_report(&report, path)?;
    }

    print!("{}", rendered);
    Ok(())
}
