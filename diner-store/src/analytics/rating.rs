//! Rating analytics over `dish_avg_rating`
//!
//! Unrated dishes sit at the neutral average, so they compete for both the
//! top and the bottom of the ranking.

use super::RANKED_DISHES;
use crate::db::repository::RepoResult;
use shared::models::{DishRating, NEUTRAL_RATING};
use sqlx::SqlitePool;

/// Highest average rating first, ties by ascending dish id. Binds the limit.
const TOP_RANKED: &str = "SELECT dish_id, avg_rating FROM dish_avg_rating
     ORDER BY avg_rating DESC, dish_id ASC
     LIMIT ?";

/// Lowest average rating first, ties by ascending dish id. Binds the limit.
const LOWEST_RANKED: &str = "SELECT dish_id, avg_rating FROM dish_avg_rating
     ORDER BY avg_rating ASC, dish_id ASC
     LIMIT ?";

pub async fn top_rated_dishes(pool: &SqlitePool, limit: i64) -> RepoResult<Vec<DishRating>> {
    let rows = sqlx::query_as::<_, DishRating>(TOP_RANKED)
        .bind(limit)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Whether the customer ever ordered one of the top five rated dishes
pub async fn ordered_top_rated(pool: &SqlitePool, cust_id: i64) -> RepoResult<bool> {
    let sql = format!(
        "SELECT EXISTS (
             SELECT 1 FROM customer_ordered_dish c
             WHERE c.cust_id = ? AND c.dish_id IN (SELECT dish_id FROM ({TOP_RANKED}))
         )"
    );
    let ordered = sqlx::query_scalar::<_, bool>(&sql)
        .bind(cust_id)
        .bind(RANKED_DISHES)
        .fetch_one(pool)
        .await?;
    Ok(ordered)
}

/// Customers who rated `dish_id` but never ordered it
pub async fn rated_but_not_ordered(pool: &SqlitePool, dish_id: i64) -> RepoResult<Vec<i64>> {
    let ids = sqlx::query_scalar::<_, i64>(
        "SELECT r.cust_id FROM customer_rated_dish r
         WHERE r.dish_id = ?
           AND NOT EXISTS (
               SELECT 1 FROM customer_ordered_dish c
               WHERE c.cust_id = r.cust_id AND c.dish_id = r.dish_id
           )
         ORDER BY r.cust_id",
    )
    .bind(dish_id)
    .fetch_all(pool)
    .await?;
    Ok(ids)
}

/// Customers who rated one of the five lowest rated dishes below neutral
/// without ever ordering it
pub async fn low_raters_without_order(pool: &SqlitePool) -> RepoResult<Vec<i64>> {
    let sql = format!(
        "WITH lowest AS ({LOWEST_RANKED})
         SELECT DISTINCT r.cust_id
         FROM customer_rated_dish r
         JOIN lowest l ON l.dish_id = r.dish_id
         WHERE r.rating < ?
           AND NOT EXISTS (
               SELECT 1 FROM customer_ordered_dish c
               WHERE c.cust_id = r.cust_id AND c.dish_id = r.dish_id
           )
         ORDER BY r.cust_id"
    );
    let ids = sqlx::query_scalar::<_, i64>(&sql)
        .bind(RANKED_DISHES)
        .bind(NEUTRAL_RATING)
        .fetch_all(pool)
        .await?;
    Ok(ids)
}
