//! Error types for the suspense-core library.

use thiserror::Error;

/// Main error type for the suspense library.
#[derive(Error, Debug)]
pub enum SuspenseError {
    /// Party store lookup failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors reported by a party store collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A query was rejected or failed mid-flight.
    #[error("query failed: {0}")]
    Query(String),

    /// The requested record does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Result type for the suspense library.
pub type Result<T> = std::result::Result<T, SuspenseError>;
