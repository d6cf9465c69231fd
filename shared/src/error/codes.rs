//! Operation status codes
//!
//! Every mutating operation of the store reports exactly one of these.
//! Codes are represented as u16 values for cheap serialization and
//! cross-language compatibility.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Closed set of results for mutating operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ReturnValue {
    /// Operation completed successfully
    Ok = 0,
    /// Missing field or violated check constraint
    BadParams = 1,
    /// Referenced row does not exist
    NotExists = 2,
    /// Primary key or unique pair already present
    AlreadyExists = 3,
    /// Unclassified failure
    Error = 4,
}

impl ReturnValue {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is the success code
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, ReturnValue::Ok)
    }

    /// Get the developer-facing message for this code
    pub const fn message(&self) -> &'static str {
        match self {
            ReturnValue::Ok => "Operation completed successfully",
            ReturnValue::BadParams => "Invalid or missing parameters",
            ReturnValue::NotExists => "Resource not found",
            ReturnValue::AlreadyExists => "Resource already exists",
            ReturnValue::Error => "Database error",
        }
    }
}

impl From<ReturnValue> for u16 {
    #[inline]
    fn from(code: ReturnValue) -> Self {
        code.code()
    }
}

/// Raised when a u16 does not name a [`ReturnValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid return value: {0}")]
pub struct InvalidReturnValue(pub u16);

impl TryFrom<u16> for ReturnValue {
    type Error = InvalidReturnValue;

    fn try_from(value: u16) -> Result<Self, InvalidReturnValue> {
        match value {
            0 => Ok(ReturnValue::Ok),
            1 => Ok(ReturnValue::BadParams),
            2 => Ok(ReturnValue::NotExists),
            3 => Ok(ReturnValue::AlreadyExists),
            4 => Ok(ReturnValue::Error),
            _ => Err(InvalidReturnValue(value)),
        }
    }
}

impl fmt::Display for ReturnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReturnValue::Ok => "OK",
            ReturnValue::BadParams => "BAD_PARAMS",
            ReturnValue::NotExists => "NOT_EXISTS",
            ReturnValue::AlreadyExists => "ALREADY_EXISTS",
            ReturnValue::Error => "ERROR",
        };
        f.write_str(name)
    }
}
