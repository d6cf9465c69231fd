//! Status codes shared by the store and its callers
//!
//! - [`ReturnValue`]: closed result set of every mutating operation
//!
//! # Example
//!
//! ```
//! use shared::error::ReturnValue;
//!
//! let status = ReturnValue::try_from(2).unwrap();
//! assert_eq!(status, ReturnValue::NotExists);
//! assert!(!status.is_ok());
//! ```

mod codes;

pub use codes::{InvalidReturnValue, ReturnValue};
