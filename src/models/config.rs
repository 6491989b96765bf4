//! Configuration model.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Loader configuration.
    pub loader: LoaderConfig,
    /// Output configuration.
    pub output: OutputConfig,
    /// On-disk SQLite file; the store lives in memory when unset.
    pub database: Option<PathBuf>,
}

/// Loader configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Field delimiter of the input files.
    pub delimiter: char,
    /// `chrono` format of the date column.
    pub date_format: String,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format for query results.
    pub format: OutputFormat,
    /// Draw bar charts for queries that support them.
    pub chart: bool,
    /// Width of the longest chart bar, in characters.
    pub chart_width: usize,
}

/// Output format for query results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            chart: false,
            chart_width: 40,
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("walmart_sales")
}

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs_config_path().join("config.toml")
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

/// Load configuration.
///
/// An explicit path must exist and parse. Without one, the default location
/// is tried and any problem there falls back to the defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        if !path.exists() {
            return Err(crate::Error::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        return parse_config(&content);
    }

    Ok(load_fallback_config(&default_config_path()))
}

/// Load a config file that is allowed to be absent or broken.
///
/// Any problem is logged and the defaults are returned.
fn load_fallback_config(config_path: &Path) -> Config {
    if !config_path.exists() {
        return Config::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match parse_config(&content) {
            Ok(config) => return config,
            Err(e) => tracing::warn!("Ignoring {}: {}", config_path.display(), e),
        },
        Err(e) => tracing::warn!("Cannot read {}: {}", config_path.display(), e),
    }

    Config::default()
}
