//! Store error types.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No task with the given id.
    #[error("Task not found: {0}")]
    NotFound(i64),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The connection string names a scheme no compiled driver handles.
    #[error("Unsupported database URL scheme: {0}")]
    UnsupportedScheme(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
