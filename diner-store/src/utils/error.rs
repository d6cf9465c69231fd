//! Application-level errors
//!
//! Covers configuration, connection and schema bootstrap failures. Per-row
//! failures of store operations are [`RepoError`](crate::db::repository::RepoError)
//! and surface to callers as [`ReturnValue`](shared::ReturnValue).

use thiserror::Error;

/// Application error
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection, pragma or schema failure
    #[error("Database error: {0}")]
    Database(String),

    /// Filesystem failure (database directory, log directory)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Create a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
