//! Data models
//!
//! Shared between diner-store and its callers.
//! Row types that map 1:1 onto a table use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`;
//! money fields are `f64` here and whole cents in storage (see [`crate::money`]).
//! All IDs are `i64`.

pub mod customer;
pub mod dish;
pub mod order;
pub mod rating;

// Re-exports
pub use customer::*;
pub use dish::*;
pub use order::*;
pub use rating::*;
