//! Core error types for sproutcal-core.
//!
//! The layout functions in [`crate::calendar`] never fail. Errors only come
//! from the boundaries: loading fixtures and reading or writing the config.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use thiserror::Error;

/// Core error type for sproutcal-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors raised while loading calendar data
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization errors
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the config schema
    #[error("unknown config key: {0}")]
    UnknownKey(String),
}

/// Validation errors for calendar records.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Event ends before it starts
    #[error("Invalid range for event '{id}': end ({end}) is before start ({start})")]
    InvalidEventRange {
        id: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// Two events share an id
    #[error("Duplicate event id: {0}")]
    DuplicateEventId(String),

    /// A date string could not be parsed
    #[error("Invalid date '{value}': expected YYYY-MM-DD or an ISO 8601 date-time")]
    InvalidDate { value: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
