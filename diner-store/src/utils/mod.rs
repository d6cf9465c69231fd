//! Utility module
//!
//! - [`AppError`] - application error type
//! - [`AppResult`] - result alias
//! - logger setup

pub mod error;
pub mod logger;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
