//! Order Item Repository
//!
//! Line items of an order. The dish price is captured when the item is
//! added and never follows later price changes.

use super::{RepoError, RepoResult, require_rows};
use shared::models::OrderDish;
use shared::money::from_cents;
use sqlx::SqlitePool;

/// Add `amount` units of an active dish to an order, capturing the dish's
/// current price in the same statement.
pub async fn add(pool: &SqlitePool, order_id: i64, dish_id: i64, amount: i64) -> RepoResult<()> {
    let rows = sqlx::query(
        "INSERT INTO order_contains_dish (order_id, dish_id, amount, price)
         SELECT ?1, d.dish_id, ?3, d.price FROM dishes d
         WHERE d.dish_id = ?2 AND d.is_active = 1",
    )
    .bind(order_id)
    .bind(dish_id)
    .bind(amount)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Dish {dish_id} not found or inactive"
        )));
    }
    Ok(())
}

pub async fn remove(pool: &SqlitePool, order_id: i64, dish_id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM order_contains_dish WHERE order_id = ?1 AND dish_id = ?2")
        .bind(order_id)
        .bind(dish_id)
        .execute(pool)
        .await?;
    require_rows(rows.rows_affected(), || {
        format!("Order {order_id} does not contain dish {dish_id}")
    })
}

pub async fn find_by_order(pool: &SqlitePool, order_id: i64) -> RepoResult<Vec<OrderDish>> {
    let rows = sqlx::query_as::<_, (i64, i64, i64)>(
        "SELECT dish_id, amount, price FROM order_contains_dish WHERE order_id = ? ORDER BY dish_id",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(rows
        .into_iter()
        .map(|(dish_id, amount, price)| OrderDish::new(dish_id, amount, from_cents(price)))
        .collect())
}
