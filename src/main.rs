//! Walmart Sales CLI
//!
//! Loads a Walmart sales dataset into SQLite and answers fixed business questions.

use clap::Parser;
use walmart_sales::cli::{
    args::{Cli, Commands},
    commands::{self, queries, run, validate},
};
use walmart_sales::models::config;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let config = config::load_config(cli.config.as_deref())?;

    // Run the appropriate command
    match cli.command {
        Commands::Run {
            input,
            queries,
            format,
            chart,
            database,
            report,
            input_format,
        } => {
            let options = run::RunOptions {
                queries,
                format: format.unwrap_or(config.output.format),
                chart: chart || config.output.chart,
                chart_width: config.output.chart_width,
                database: database.or(config.database),
                report,
                load: commands::resolve_load_options(&config.loader, &input_format)?,
            };
            run::run(&input, &options)?;
        }

        Commands::Validate { input, input_format } => {
            let options = commands::resolve_load_options(&config.loader, &input_format)?;
            validate::validate(&input, &options)?;
        }

        Commands::Queries => {
            queries::list_queries();
        }
    }

    Ok(())
}

/// Initialize the logging system.
///
/// Logs go to stderr so that stdout carries only query results.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("walmart_sales=debug")
    } else {
        EnvFilter::new("walmart_sales=info")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
