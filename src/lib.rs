//! Walmart Sales Library
//!
//! Loads Walmart sales records into an in-process SQLite store and answers
//! a fixed catalog of business questions about them.

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;
pub mod utils;

pub use error::{Error, ErrorKind, Result};
