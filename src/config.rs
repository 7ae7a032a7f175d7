//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `stat-rows.toml` in the working directory unless a path is given.
//! Every field has a default so the file is optional. Environment variables
//! take precedence over file values; command-line flags are applied last by
//! the binary.

use serde::Deserialize;

use crate::errors::{Result, StatRowError};
use crate::render::OutputFormat;

pub const DEFAULT_CONFIG_PATH: &str = "stat-rows.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
    pub metadata: MetadataConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub format: OutputFormat,
    /// Terminal cells used for a full stat bar.
    pub bar_width: usize,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    /// JSON export of the stat metadata table, overriding the built-in identifiers.
    pub path: Option<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            bar_width: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path` (or the default file, if present) then
    /// apply environment-variable overrides.
    ///
    /// Not validated here: command-line flags still apply on top, so callers
    /// run [`Config::validate`] once everything is merged.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given file is missing, or any file is malformed.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path, true)?,
            None => Self::from_file(DEFAULT_CONFIG_PATH, false)?,
        };
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn from_file(path: &str, required: bool) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound && !required => {
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("STAT_ROWS_FORMAT") {
            if let Ok(format) = <OutputFormat as clap::ValueEnum>::from_str(&val, true) {
                self.display.format = format;
            }
        }
        if let Ok(val) = std::env::var("STAT_ROWS_BAR_WIDTH") {
            if let Ok(width) = val.parse() {
                self.display.bar_width = width;
            }
        }
        if let Ok(val) = std::env::var("STAT_ROWS_METADATA") {
            self.metadata.path = Some(val);
        }
        if let Ok(val) = std::env::var("STAT_ROWS_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=200).contains(&self.display.bar_width) {
            return Err(StatRowError::Validation(format!(
                "bar_width must be between 1 and 200, got {}",
                self.display.bar_width
            )));
        }
        Ok(())
    }
}
