//! Report data model.

use crate::models::query::QueryResult;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Current report format version.
pub const REPORT_VERSION: &str = "1.0";

/// Report file structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Report version.
    pub version: String,
    /// Input files that were loaded.
    pub sources: Vec<SourceFile>,
    /// Rows in the sales table.
    pub records_loaded: u64,
    /// Query results, in catalog order.
    pub results: Vec<QueryResult>,
}

/// One loaded input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFile {
    /// File path.
    pub path: PathBuf,
    /// SHA-256 of the file contents.
    pub sha256: String,
    /// Data records read from the file.
    pub records: u64,
}
