//! CSV generator.

use crate::models::query::QueryResult;
use crate::Result;

/// Render a query result as CSV with a header row.
pub fn render_csv(result: &QueryResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&result.columns)?;
    for row in &result.rows {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| crate::Error::other(format!("Failed to flush CSV output: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| crate::Error::other(e.to_string()))
}
