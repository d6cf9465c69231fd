//! Shared types for the diner store
//!
//! Domain models and the status codes returned by store operations.

pub mod error;
pub mod models;
pub mod money;

// Re-exports
pub use error::ReturnValue;
pub use serde::{Deserialize, Serialize};
