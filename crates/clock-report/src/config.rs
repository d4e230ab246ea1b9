//! Configuration file loading for clock-report.
//!
//! Settings are read from `clock-report.toml` in the working directory, or
//! from the file given with `--config`.

use chess_clock::{ParseOptions, Side};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Report settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Side owning the first clock annotation. Defaults to white.
    #[serde(default = "default_first_mover")]
    pub first_mover: Side,
    /// List per-move times longest first instead of in move order.
    #[serde(default)]
    pub sort_by_worst: bool,
}

fn default_first_mover() -> Side {
    Side::White
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            first_mover: default_first_mover(),
            sort_by_worst: false,
        }
    }
}

impl ReportConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, [`Self::config_path()`]
    /// is used if present, and defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read, or
    /// [`ConfigError::ParseError`] if it contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = Self::config_path();
                if !default_path.exists() {
                    tracing::debug!("No {} found, using defaults", default_path.display());
                    return Ok(Self::default());
                }
                default_path
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;
        let config = toml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Returns the default configuration file path.
    pub fn config_path() -> PathBuf {
        PathBuf::from("clock-report.toml")
    }

    /// Parse options, with `first_mover` overriding the configured side.
    pub fn parse_options(&self, first_mover: Option<Side>) -> ParseOptions {
        ParseOptions {
            first_mover: first_mover.unwrap_or(self.first_mover),
        }
    }
}
