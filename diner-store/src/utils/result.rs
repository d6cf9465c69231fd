//! Unified Result Types

use crate::AppError;

/// Application-level Result type
///
/// Used by configuration, connection and bootstrap code
pub type AppResult<T> = Result<T, AppError>;
