//! Core error types for lifegrid-core.
//!
//! This module defines the error hierarchy using thiserror. Note that most
//! degraded paths in this crate deliberately do not surface errors at all:
//! persistence read failures become absent data and oracle failures become
//! static fallback payloads. The types here cover the remaining cases.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lifegrid-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Store-related errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Oracle-related errors
    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Store-specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the store
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Store is locked
    #[error("Store is locked")]
    Locked,
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

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Oracle-specific errors.
///
/// These never escape the feature-level API: every feature call converts
/// them into its documented fallback record. They exist so the transport
/// layer can report precisely what went wrong to the log.
#[derive(Error, Debug)]
pub enum OracleError {
    /// Transport failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service returned an error payload
    #[error("Service error: {0}")]
    Service(String),

    /// The response carried no generated text
    #[error("Empty response from oracle")]
    EmptyResponse,

    /// The generated text was not valid JSON for the declared schema
    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The client could not be constructed
    #[error("Client setup failed: {0}")]
    Setup(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Empty input where text is required
    #[error("Empty value for '{0}'")]
    Empty(String),

    /// Text exceeds the allowed length
    #[error("Value for '{field}' exceeds {max} characters (got {len})")]
    TooLong {
        field: String,
        max: usize,
        len: usize,
    },

    /// Out of bounds grid coordinate
    #[error("Index {index} out of bounds for {collection} (length: {len})")]
    OutOfBounds {
        collection: String,
        index: usize,
        len: usize,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    StoreError::Locked
                } else {
                    StoreError::QueryFailed(err.to_string())
                }
            }
            _ => StoreError::QueryFailed(err.to_string()),
        }
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for CoreError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CoreError::Custom(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
