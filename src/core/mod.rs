//! Core business logic modules.

pub mod catalog;
pub mod loader;
pub mod report;
pub mod runner;
pub mod store;
