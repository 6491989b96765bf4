//! Error types for the sales analysis tool.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be found or read.
    Io,
    /// The input was read but is malformed.
    Validation,
    /// A catalog statement could not be run.
    Query,
    /// Anything else (configuration, serialization).
    Other,
}

/// Main error type for the sales analysis tool.
#[derive(Error, Debug)]
pub enum Error {
    // File system errors
    #[error("Input not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Validation errors
    #[error("Invalid record at {file}:{line}: {reason}")]
    Validation {
        file: String,
        line: u64,
        reason: String,
    },

    #[error("Missing required column '{column}' in {file}")]
    MissingColumn { file: String, column: String },

    // Query errors
    #[error("Query '{query}' failed: {reason}")]
    Query { query: String, reason: String },

    #[error("Unknown query: {0}. Run `walmart-sales queries` to list the catalog")]
    UnknownQuery(String),

    #[error("Sales table has not been loaded")]
    StoreNotLoaded,

    // Library errors
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Create a validation error for a single input line.
    pub fn validation<F, R>(file: F, line: u64, reason: R) -> Self
    where
        F: Into<String>,
        R: Into<String>,
    {
        Error::Validation {
            file: file.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FileNotFound(_) | Error::Io(_) => ErrorKind::Io,
            Error::Validation { .. } | Error::MissingColumn { .. } => ErrorKind::Validation,
            Error::Query { .. } | Error::UnknownQuery(_) | Error::StoreNotLoaded => {
                ErrorKind::Query
            }
            Error::Sqlite(_)
            | Error::Csv(_)
            | Error::Json(_)
            | Error::Config(_)
            | Error::Other(_) => ErrorKind::Other,
        }
    }
}
