//! Core error types for habit-core.
//!
//! The tracker itself only ever fails on storage faults ([`PersistenceError`]).
//! Date validation and configuration live at the boundary and have their own
//! error types.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habit-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Habit file errors
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Failure to save or load a habit file.
///
/// The underlying I/O or JSON error is kept as the source rather than
/// exposed in the variant's message.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The habit file exists but could not be read
    #[error("Failed to read habits from {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The habit file could not be written
    #[error("Failed to save habits to {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The habit file is not a valid habit document
    #[error("Failed to parse habits from {path}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory tracker could not be serialized
    #[error("Failed to serialize habits: {0}")]
    SerializeFailed(#[source] serde_json::Error),
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

    /// Unknown configuration key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Data directory could not be created
    #[error("Failed to access data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Validation errors raised at the input boundary.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Date is not a `YYYY-MM-DD` calendar date
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
