//! Rating Repository

use super::{RepoResult, require_rows};
use shared::models::{LIKED_RATING, Rating};
use sqlx::SqlitePool;

pub async fn add(pool: &SqlitePool, cust_id: i64, dish_id: i64, rating: i64) -> RepoResult<()> {
    sqlx::query("INSERT INTO customer_rated_dish (cust_id, dish_id, rating) VALUES (?1, ?2, ?3)")
        .bind(cust_id)
        .bind(dish_id)
        .bind(rating)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn remove(pool: &SqlitePool, cust_id: i64, dish_id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM customer_rated_dish WHERE cust_id = ?1 AND dish_id = ?2")
        .bind(cust_id)
        .bind(dish_id)
        .execute(pool)
        .await?;
    require_rows(rows.rows_affected(), || {
        format!("Customer {cust_id} has not rated dish {dish_id}")
    })
}

/// `(dish_id, rating)` pairs of one customer, by dish id
pub async fn find_by_customer(pool: &SqlitePool, cust_id: i64) -> RepoResult<Vec<(i64, i64)>> {
    let rows = sqlx::query_as::<_, (i64, i64)>(
        "SELECT dish_id, rating FROM customer_rated_dish WHERE cust_id = ? ORDER BY dish_id",
    )
    .bind(cust_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Every rating at or above the "liked" threshold
pub async fn find_liked(pool: &SqlitePool) -> RepoResult<Vec<Rating>> {
    let rows = sqlx::query_as::<_, Rating>(
        "SELECT cust_id, dish_id, rating FROM customer_rated_dish
         WHERE rating >= ? ORDER BY cust_id, dish_id",
    )
    .bind(LIKED_RATING)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
