//! Order Repository

use super::{RepoError, RepoResult, require_rows};
use chrono::{NaiveDateTime, Timelike};
use shared::models::{Order, OrderCreate};
use shared::money::{from_cents, to_cents};
use sqlx::SqlitePool;

const ORDER_SELECT: &str = "SELECT order_id, date, delivery_fee, delivery_address FROM orders";

/// `orders` row, fee in cents
#[derive(sqlx::FromRow)]
struct OrderRow {
    order_id: i64,
    date: NaiveDateTime,
    delivery_fee: i64,
    delivery_address: String,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            order_id: row.order_id,
            date: row.date,
            delivery_fee: from_cents(row.delivery_fee),
            delivery_address: row.delivery_address,
        }
    }
}

pub async fn find_by_id(pool: &SqlitePool, order_id: i64) -> RepoResult<Option<Order>> {
    let sql = format!("{ORDER_SELECT} WHERE order_id = ?");
    let row = sqlx::query_as::<_, OrderRow>(&sql)
        .bind(order_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(Order::from))
}

/// Insert an order. The timestamp is stored at whole-second precision and
/// the fee in whole cents.
pub async fn create(pool: &SqlitePool, data: &OrderCreate) -> RepoResult<Order> {
    let date = data.date.and_then(|d| d.with_nanosecond(0));
    sqlx::query(
        "INSERT INTO orders (order_id, date, delivery_fee, delivery_address) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(data.order_id)
    .bind(date)
    .bind(data.delivery_fee.and_then(to_cents))
    .bind(&data.delivery_address)
    .execute(pool)
    .await?;

    let order_id = data
        .order_id
        .ok_or_else(|| RepoError::Validation("order_id is required".into()))?;
    find_by_id(pool, order_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create order".into()))
}

/// Delete an order together with its placement link and line items
pub async fn delete(pool: &SqlitePool, order_id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM orders WHERE order_id = ?")
        .bind(order_id)
        .execute(pool)
        .await?;
    require_rows(rows.rows_affected(), || format!("Order {order_id} not found"))
}
