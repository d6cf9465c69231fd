//! Repository Module
//!
//! CRUD operations over the SQLite tables. Every function takes the pool,
//! runs one statement and classifies whatever the engine rejects.

// Entities
pub mod customer;
pub mod dish;
pub mod order;

// Relationships
pub mod order_item;
pub mod placement;
pub mod rating;

use shared::ReturnValue;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let message = db_err.message().to_string();
            match db_err.kind() {
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    return RepoError::Validation(message);
                }
                ErrorKind::ForeignKeyViolation => return RepoError::NotFound(message),
                ErrorKind::UniqueViolation => return RepoError::Duplicate(message),
                _ => {}
            }
        }
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for ReturnValue {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Validation(_) => ReturnValue::BadParams,
            RepoError::NotFound(_) => ReturnValue::NotExists,
            RepoError::Duplicate(_) => ReturnValue::AlreadyExists,
            RepoError::Database(_) => ReturnValue::Error,
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Map a zero-row mutation to `NotFound`
pub(crate) fn require_rows(rows_affected: u64, what: impl FnOnce() -> String) -> RepoResult<()> {
    if rows_affected == 0 {
        return Err(RepoError::NotFound(what()));
    }
    Ok(())
}

/// In-memory SQLite pool with the full schema, for tests.
///
/// Pinned to a single connection: every `sqlite::memory:` connection is its
/// own database.
#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();
    crate::db::schema::create_tables(&pool).await.unwrap();
    pool
}
