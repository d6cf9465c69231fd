//! Dish Repository

use super::{RepoError, RepoResult, require_rows};
use shared::models::{Dish, DishCreate};
use shared::money::{from_cents, to_cents};
use sqlx::SqlitePool;

const DISH_SELECT: &str = "SELECT dish_id, name, price, is_active FROM dishes";

/// `dishes` row, price in cents
#[derive(sqlx::FromRow)]
pub(crate) struct DishRow {
    dish_id: i64,
    name: String,
    price: i64,
    is_active: bool,
}

impl From<DishRow> for Dish {
    fn from(row: DishRow) -> Self {
        Self {
            dish_id: row.dish_id,
            name: row.name,
            price: from_cents(row.price),
            is_active: row.is_active,
        }
    }
}

pub async fn find_by_id(pool: &SqlitePool, dish_id: i64) -> RepoResult<Option<Dish>> {
    let sql = format!("{DISH_SELECT} WHERE dish_id = ?");
    let row = sqlx::query_as::<_, DishRow>(&sql)
        .bind(dish_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(Dish::from))
}

pub async fn create(pool: &SqlitePool, data: &DishCreate) -> RepoResult<Dish> {
    sqlx::query("INSERT INTO dishes (dish_id, name, price, is_active) VALUES (?1, ?2, ?3, ?4)")
        .bind(data.dish_id)
        .bind(&data.name)
        .bind(data.price.and_then(to_cents))
        .bind(data.is_active)
        .execute(pool)
        .await?;

    let dish_id = data
        .dish_id
        .ok_or_else(|| RepoError::Validation("dish_id is required".into()))?;
    find_by_id(pool, dish_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create dish".into()))
}

/// Change the price of an active dish, rounded to whole cents. Line items
/// keep the price they captured.
pub async fn update_price(pool: &SqlitePool, dish_id: i64, price: f64) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE dishes SET price = ?1 WHERE dish_id = ?2 AND is_active = 1")
        .bind(to_cents(price))
        .bind(dish_id)
        .execute(pool)
        .await?;
    require_rows(rows.rows_affected(), || {
        format!("Dish {dish_id} not found or inactive")
    })
}

pub async fn update_active(pool: &SqlitePool, dish_id: i64, is_active: bool) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE dishes SET is_active = ?1 WHERE dish_id = ?2")
        .bind(is_active)
        .bind(dish_id)
        .execute(pool)
        .await?;
    require_rows(rows.rows_affected(), || format!("Dish {dish_id} not found"))
}

/// Delete a dish along with every line item and rating that references it
pub async fn delete(pool: &SqlitePool, dish_id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM dishes WHERE dish_id = ?")
        .bind(dish_id)
        .execute(pool)
        .await?;
    require_rows(rows.rows_affected(), || format!("Dish {dish_id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_pool;

    #[tokio::test]
    async fn test_create_and_find() {
        let pool = test_pool().await;
        let dish = create(&pool, &DishCreate::new(1, "Shakshuka", 42.5, true))
            .await
            .unwrap();
        assert_eq!(dish, Dish { dish_id: 1, name: "Shakshuka".into(), price: 42.5, is_active: true });
        assert_eq!(find_by_id(&pool, 1).await.unwrap(), Some(dish));
        assert!(find_by_id(&pool, 2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_bad_fields() {
        let pool = test_pool().await;
        let mut no_flag = DishCreate::new(4, "Falafel", 10.0, true);
        no_flag.is_active = None;
        for bad in [
            DishCreate::new(0, "Falafel", 10.0, true),
            DishCreate::new(1, "Pie", 10.0, true),
            DishCreate::new(2, "Falafel", 0.0, true),
            DishCreate::new(3, "Falafel", -1.0, true),
            no_flag,
        ] {
            let err = create(&pool, &bad).await.unwrap_err();
            assert!(matches!(err, RepoError::Validation(_)), "{bad:?} gave {err:?}");
        }
    }

    #[tokio::test]
    async fn test_update_price() {
        let pool = test_pool().await;
        create(&pool, &DishCreate::new(1, "Falafel", 10.0, true)).await.unwrap();
        create(&pool, &DishCreate::new(2, "Hummus", 12.0, false)).await.unwrap();

        update_price(&pool, 1, 11.5).await.unwrap();
        assert_eq!(find_by_id(&pool, 1).await.unwrap().unwrap().price, 11.5);

        assert!(matches!(update_price(&pool, 1, 0.0).await, Err(RepoError::Validation(_))));
        assert!(matches!(update_price(&pool, 2, 13.0).await, Err(RepoError::NotFound(_))));
        assert!(matches!(update_price(&pool, 3, 13.0).await, Err(RepoError::NotFound(_))));
        assert_eq!(find_by_id(&pool, 2).await.unwrap().unwrap().price, 12.0);
    }

    #[tokio::test]
    async fn test_update_active() {
        let pool = test_pool().await;
        create(&pool, &DishCreate::new(1, "Falafel", 10.0, true)).await.unwrap();

        update_active(&pool, 1, false).await.unwrap();
        assert!(!find_by_id(&pool, 1).await.unwrap().unwrap().is_active);
        // Setting the same value again still matches the row
        update_active(&pool, 1, false).await.unwrap();
        update_active(&pool, 1, true).await.unwrap();
        assert!(find_by_id(&pool, 1).await.unwrap().unwrap().is_active);

        assert!(matches!(update_active(&pool, 9, true).await, Err(RepoError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete() {
        let pool = test_pool().await;
        create(&pool, &DishCreate::new(1, "Falafel", 10.0, true)).await.unwrap();
        delete(&pool, 1).await.unwrap();
        assert!(find_by_id(&pool, 1).await.unwrap().is_none());
        assert!(matches!(delete(&pool, 1).await, Err(RepoError::NotFound(_))));
    }
}
