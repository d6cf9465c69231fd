//! Placement Repository
//!
//! Links an order to the customer who placed it. An order has at most one
//! placing customer; deleting that customer nulls the link and the order
//! becomes anonymous.

use super::{RepoError, RepoResult};
use shared::models::Customer;
use sqlx::SqlitePool;

/// Record that `cust_id` placed `order_id`.
///
/// An anonymous order (link nulled by a customer deletion) may be claimed
/// again; an order placed by a live customer may not.
pub async fn place(pool: &SqlitePool, cust_id: i64, order_id: i64) -> RepoResult<()> {
    let rows = sqlx::query(
        "INSERT INTO customer_places_order (order_id, cust_id) VALUES (?1, ?2)
         ON CONFLICT(order_id) DO UPDATE SET cust_id = excluded.cust_id
         WHERE customer_places_order.cust_id IS NULL",
    )
    .bind(order_id)
    .bind(cust_id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::Duplicate(format!(
            "Order {order_id} was already placed"
        )));
    }
    Ok(())
}

/// The live customer who placed `order_id`, if any
pub async fn find_customer(pool: &SqlitePool, order_id: i64) -> RepoResult<Option<Customer>> {
    let row = sqlx::query_as::<_, Customer>(
        "SELECT c.cust_id, c.full_name, c.age, c.phone
         FROM customer_places_order p
         JOIN customers c ON c.cust_id = p.cust_id
         WHERE p.order_id = ?",
    )
    .bind(order_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
