//! Database Module
//!
//! Handles the SQLite connection pool and schema bootstrap

pub mod repository;
pub mod schema;

use crate::core::Config;
use crate::utils::{AppError, AppResult};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;

/// Database service owning the SQLite connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open a pool for the configured database
    ///
    /// File databases use WAL with normal sync. In-memory databases live and
    /// die with their single connection, so the pool is pinned to one
    /// connection that is never recycled.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        if config.db_path.trim().is_empty() {
            return Err(AppError::config("DINER_DB_PATH must not be empty"));
        }
        let in_memory = config.is_in_memory();
        let url = if in_memory {
            "sqlite::memory:".to_string()
        } else {
            format!("sqlite:{}", config.db_path)
        };

        let mut options = SqliteConnectOptions::from_str(&url)
            .map_err(|e| AppError::database(format!("Invalid database path: {e}")))?
            .foreign_keys(true)
            .busy_timeout(Duration::from_millis(config.busy_timeout_ms));
        if !in_memory {
            options = options
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal);
        }

        let max_connections = if in_memory { 1 } else { config.max_connections.max(1) };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(
            db_path = %config.db_path,
            max_connections,
            busy_timeout_ms = config.busy_timeout_ms,
            "Database connection established"
        );
        Ok(Self { pool })
    }

    /// Connect and make sure every table and view exists
    pub async fn open(config: &Config) -> AppResult<Self> {
        let db = Self::connect(config).await?;
        schema::create_tables(&db.pool).await?;
        Ok(db)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
