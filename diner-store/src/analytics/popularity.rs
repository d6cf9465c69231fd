//! Dish popularity among anonymous orders

use crate::db::repository::RepoResult;
use crate::db::repository::dish::DishRow;
use shared::models::Dish;
use sqlx::SqlitePool;

/// The dish bought in the largest total amount across anonymous orders
/// (never placed, or placed by a customer since deleted). Ties go to the
/// lowest dish id.
pub async fn most_purchased_anonymous_dish(pool: &SqlitePool) -> RepoResult<Option<Dish>> {
    let row = sqlx::query_as::<_, DishRow>(
        "SELECT d.dish_id, d.name, d.price, d.is_active
         FROM order_contains_dish i
         JOIN dishes d ON d.dish_id = i.dish_id
         LEFT JOIN customer_places_order p ON p.order_id = i.order_id
         WHERE p.cust_id IS NULL
         GROUP BY d.dish_id, d.name, d.price, d.is_active
         ORDER BY SUM(i.amount) DESC, d.dish_id ASC
         LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;
    Ok(row.map(Dish::from))
}
