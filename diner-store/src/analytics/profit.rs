//! Profit analytics

use crate::db::repository::RepoResult;
use shared::money::from_cents;
use sqlx::SqlitePool;

/// Active dishes whose average profit per order at the current price is
/// below the average profit they made at some earlier, lower captured price.
///
/// Prices and profits are computed from integer cents, so an unchanged
/// profit per order is never reported as a drop.
pub async fn non_worth_price_increase(pool: &SqlitePool) -> RepoResult<Vec<i64>> {
    let ids = sqlx::query_scalar::<_, i64>(
        "SELECT DISTINCT d.dish_id
         FROM dishes d
         JOIN dish_price_profit cur ON cur.dish_id = d.dish_id AND cur.price = d.price
         JOIN dish_price_profit past ON past.dish_id = d.dish_id AND past.price < d.price
         WHERE d.is_active = 1 AND past.avg_profit > cur.avg_profit
         ORDER BY d.dish_id",
    )
    .fetch_all(pool)
    .await?;
    Ok(ids)
}

/// Running total of order revenue through the months of `year`.
///
/// Every month is present, quiet ones carrying the previous total forward.
/// Rows come back December first.
pub async fn cumulative_profit_per_month(pool: &SqlitePool, year: i32) -> RepoResult<Vec<(u32, f64)>> {
    let rows = sqlx::query_as::<_, (i64, i64)>(
        "WITH RECURSIVE months(month) AS (
             SELECT 1 UNION ALL SELECT month + 1 FROM months WHERE month < 12
         ),
         monthly AS (
             SELECT CAST(strftime('%m', date) AS INTEGER) AS month,
                    SUM(total_price) AS profit
             FROM order_total_price
             WHERE CAST(strftime('%Y', date) AS INTEGER) = ?
             GROUP BY 1
         )
         SELECT m.month,
                SUM(COALESCE(p.profit, 0)) OVER (ORDER BY m.month) AS profit
         FROM months m
         LEFT JOIN monthly p ON p.month = m.month
         ORDER BY m.month DESC",
    )
    .bind(year)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(month, cents)| (month as u32, from_cents(cents)))
        .collect())
}
