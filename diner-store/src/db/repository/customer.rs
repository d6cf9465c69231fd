//! Customer Repository

use super::{RepoError, RepoResult, require_rows};
use shared::models::{Customer, CustomerCreate};
use sqlx::SqlitePool;

const CUSTOMER_SELECT: &str = "SELECT cust_id, full_name, age, phone FROM customers";

pub async fn find_by_id(pool: &SqlitePool, cust_id: i64) -> RepoResult<Option<Customer>> {
    let sql = format!("{CUSTOMER_SELECT} WHERE cust_id = ?");
    let row = sqlx::query_as::<_, Customer>(&sql)
        .bind(cust_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Insert a customer. Missing fields are bound as NULL and rejected by the
/// table constraints.
pub async fn create(pool: &SqlitePool, data: &CustomerCreate) -> RepoResult<Customer> {
    sqlx::query("INSERT INTO customers (cust_id, full_name, age, phone) VALUES (?1, ?2, ?3, ?4)")
        .bind(data.cust_id)
        .bind(&data.full_name)
        .bind(data.age)
        .bind(&data.phone)
        .execute(pool)
        .await?;

    let cust_id = data
        .cust_id
        .ok_or_else(|| RepoError::Validation("cust_id is required".into()))?;
    find_by_id(pool, cust_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create customer".into()))
}

/// Delete a customer. Their orders stay behind as anonymous orders and their
/// ratings go with them.
pub async fn delete(pool: &SqlitePool, cust_id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM customers WHERE cust_id = ?")
        .bind(cust_id)
        .execute(pool)
        .await?;
    require_rows(rows.rows_affected(), || format!("Customer {cust_id} not found"))
}
