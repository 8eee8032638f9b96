//! Core error types for chronocat-core.
//!
//! Expected conditions (missing keys, malformed persisted values, a session
//! that finished while unobserved) are handled with defaults and
//! reconciliation, never with errors. Only storage failures and rejected
//! writes surface here.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for chronocat-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Rejected writes at the validation boundary
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Settings-store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the backing database
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Schema migration failed
    #[error("Store migration failed: {0}")]
    MigrationFailed(String),
}

/// Errors for writes rejected at the boundary. The prior valid value is
/// always retained when one of these is returned.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Session duration must be positive
    #[error("Invalid duration: {minutes} minutes (must be greater than zero)")]
    InvalidDuration { minutes: u64 },

    /// Custom message exceeds the persisted length limit
    #[error("Message too long: {len} chars (maximum {max})")]
    MessageTooLong { len: usize, max: usize },

    /// Accent color must be a #rrggbb hex string
    #[error("Invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),

    /// Unknown timer mode string
    #[error("Invalid mode '{0}': expected 'target' or 'focus'")]
    InvalidMode(String),

    /// Unparsable target date input
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Unknown settings key
    #[error("Unknown settings key: {0}")]
    UnknownKey(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::QueryFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
