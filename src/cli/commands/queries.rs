//! Queries command implementation.

use crate::core::catalog::CATALOG;
use colored::Colorize;

/// List the query catalog.
pub fn list_queries() {
    println!("{}", "Query catalog".bold().cyan());
    println!();

    let width = CATALOG.iter().map(|q| q.name.len()).max().unwrap_or(0);
    for query in CATALOG {
        let chart = if query.chart.is_some() { " [chart]" } else { "" };
        println!(
            "  {:<width$}  {}{}",
            query.name.bold(),
            query.description,
            chart.dimmed(),
            width = width
        );
    }
}
