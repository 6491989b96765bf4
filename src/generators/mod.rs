//! Text generators for query results.

pub mod chart;
pub mod delimited;
pub mod table;
