//! Report persistence.

use crate::core::loader::LoadSummary;
use crate::models::query::QueryResult;
use crate::models::report::{Report, REPORT_VERSION};
use crate::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Assemble a report from a load and its query results.
pub fn build_report(summary: &LoadSummary, results: &[QueryResult]) -> Report {
    Report {
        version: REPORT_VERSION.to_string(),
        sources: summary.sources.clone(),
        records_loaded: summary.rows,
        results: results.to_vec(),
    }
}

/// Load a report from a JSON file.
pub fn load_report(path: &Path) -> Result<Report> {
    let content = fs::read_to_string(path)?;
    let report: Report = serde_json::from_str(&content)?;
    Ok(report)
}

/// Save a report to a JSON file.
pub fn save_report(report: &Report, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;

    tracing::info!("Report saved to {:?}", path);
    Ok(())
}
