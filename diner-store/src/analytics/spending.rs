//! Spending aggregates over `order_total_price`

use crate::db::repository::RepoResult;
use shared::money::from_cents;
use sqlx::SqlitePool;

/// Delivery fee plus every line item at its captured price, `None` when the
/// order does not exist
pub async fn order_total_price(pool: &SqlitePool, order_id: i64) -> RepoResult<Option<f64>> {
    let cents = sqlx::query_scalar::<_, i64>(
        "SELECT total_price FROM order_total_price WHERE order_id = ?",
    )
    .bind(order_id)
    .fetch_optional(pool)
    .await?;
    Ok(cents.map(from_cents))
}

/// Customers whose mean order total is the highest, every tie included,
/// by ascending id.
///
/// Totals are integer cents, so equal means compare equal.
pub async fn top_average_spenders(pool: &SqlitePool) -> RepoResult<Vec<i64>> {
    let ids = sqlx::query_scalar::<_, i64>(
        "WITH customer_avg AS (
             SELECT cust_id, AVG(total_price) AS avg_spent
             FROM order_total_price
             WHERE cust_id IS NOT NULL
             GROUP BY cust_id
         )
         SELECT cust_id FROM customer_avg
         WHERE avg_spent = (SELECT MAX(avg_spent) FROM customer_avg)
         ORDER BY cust_id",
    )
    .fetch_all(pool)
    .await?;
    Ok(ids)
}
