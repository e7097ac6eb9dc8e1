//! Configuration types and parsing for orderlens.yml

use crate::dataset::LoadOptions;
use crate::error::{CoreError, CoreResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured dataset path
pub const DATASET_ENV_VAR: &str = "OL_DATASET";

/// Dataset file name used when nothing else is configured
pub const DEFAULT_DATASET: &str = "all_df_ecommerce.csv";

/// Config file names probed by [`Config::discover`], in order
const CONFIG_FILE_NAMES: &[&str] = &["orderlens.yml", "orderlens.yaml"];

/// Project configuration from orderlens.yml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the dataset CSV, relative to the working directory
    #[serde(default = "default_dataset")]
    pub dataset: String,

    /// CSV field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// How many rows the ranked views show
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Default lower bound of the date filter (inclusive)
    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    /// Default upper bound of the date filter (inclusive)
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

fn default_dataset() -> String {
    DEFAULT_DATASET.to_string()
}

fn default_delimiter() -> char {
    ','
}

fn default_top_n() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: default_dataset(),
            delimiter: default_delimiter(),
            top_n: default_top_n(),
            start_date: None,
            end_date: None,
        }
    }
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load orderlens.yml (or orderlens.yaml) from a directory, falling back
    /// to defaults when the directory has no config file
    pub fn discover(dir: &Path) -> CoreResult<Self> {
        match Self::find_in_dir(dir) {
            Some(path) => {
                log::debug!("Using config {}", path.display());
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    fn find_in_dir(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.dataset.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "dataset path cannot be empty".to_string(),
            });
        }

        if self.top_n == 0 {
            return Err(CoreError::ConfigInvalid {
                message: "top_n must be at least 1".to_string(),
            });
        }

        if !self.delimiter.is_ascii() {
            return Err(CoreError::ConfigInvalid {
                message: format!("delimiter '{}' must be a single ASCII character", self.delimiter),
            });
        }

        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                log::warn!(
                    "Configured start_date {} is after end_date {}; every view will be empty",
                    start,
                    end
                );
            }
        }

        Ok(())
    }

    /// CSV reading options derived from this config
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            delimiter: self.delimiter as u8,
        }
    }

    /// Resolve the dataset path
    ///
    /// Priority: CLI flag > OL_DATASET env var > config file
    pub fn resolve_dataset(&self, cli_dataset: Option<&str>) -> PathBuf {
        cli_dataset
            .map(PathBuf::from)
            .or_else(|| std::env::var(DATASET_ENV_VAR).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(&self.dataset))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
