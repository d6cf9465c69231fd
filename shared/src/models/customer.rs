//! Customer Model

use serde::{Deserialize, Serialize};

/// Customer entity (顾客)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Customer {
    pub cust_id: i64,
    pub full_name: String,
    /// 18..=120, enforced by the schema
    pub age: i64,
    /// Exactly 10 characters
    pub phone: String,
}

/// Create customer payload
///
/// Every field is optional so a missing value reaches the database as NULL
/// and is rejected there like any other constraint violation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub cust_id: Option<i64>,
    pub full_name: Option<String>,
    pub age: Option<i64>,
    pub phone: Option<String>,
}

impl CustomerCreate {
    pub fn new(cust_id: i64, full_name: impl Into<String>, age: i64, phone: impl Into<String>) -> Self {
        Self {
            cust_id: Some(cust_id),
            full_name: Some(full_name.into()),
            age: Some(age),
            phone: Some(phone.into()),
        }
    }
}
