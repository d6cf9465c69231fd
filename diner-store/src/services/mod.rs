//! Services
//!
//! - [`Restaurant`] - status-reporting facade over repositories and analytics

pub mod restaurant;

pub use restaurant::Restaurant;
