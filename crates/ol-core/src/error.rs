//! Error types for ol-core

use thiserror::Error;

/// Core error type for Orderlens
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Configuration file is not valid YAML for [`crate::Config`]
    #[error("[E002] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// E003: Invalid configuration value
    #[error("[E003] Invalid config: {message}")]
    ConfigInvalid { message: String },

    // Dataset error types (D001-D004)
    /// D001: Dataset file not found
    #[error("[D001] Dataset not found: {path}")]
    DatasetNotFound { path: String },

    /// D002: Header row lacks a column every record needs
    #[error("[D002] Dataset {path} is missing required column '{column}'")]
    MissingColumn { path: String, column: String },

    /// D003: A data row could not be decoded
    #[error("[D003] Malformed row {row} in {path}: {message}")]
    MalformedRow {
        path: String,
        row: usize,
        message: String,
    },

    /// D004: A timestamp cell could not be parsed
    #[error("[D004] Invalid timestamp '{value}' in column '{column}' at row {row} of {path}")]
    InvalidTimestamp {
        path: String,
        row: usize,
        column: String,
        value: String,
    },

    /// E004: IO error with file path context
    #[error("[E004] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
