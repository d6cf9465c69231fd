//! Schema bootstrap
//!
//! Tables carry every constraint the store relies on: store operations hand
//! their input to SQLite unchecked and classify whatever the engine rejects.
//! Keys are declared `INT` rather than `INTEGER` so they are not rowid
//! aliases: a NULL key must fail the NOT NULL constraint instead of being
//! assigned a fresh rowid. Money columns hold integer cents
//! (`shared::money`), so aggregates over them are exact.

use crate::utils::AppResult;
use sqlx::SqlitePool;

pub const TABLES: &[(&str, &str)] = &[
    (
        "customers",
        "CREATE TABLE IF NOT EXISTS customers (
            cust_id INT NOT NULL PRIMARY KEY,
            full_name TEXT NOT NULL,
            age INT NOT NULL,
            phone TEXT NOT NULL,
            CHECK (cust_id > 0),
            CHECK (age >= 18 AND age <= 120),
            CHECK (LENGTH(phone) = 10)
        )",
    ),
    (
        "orders",
        "CREATE TABLE IF NOT EXISTS orders (
            order_id INT NOT NULL PRIMARY KEY,
            date TEXT NOT NULL,
            delivery_fee INT NOT NULL,
            delivery_address TEXT NOT NULL,
            CHECK (order_id > 0),
            CHECK (delivery_fee >= 0),
            CHECK (LENGTH(delivery_address) >= 5)
        )",
    ),
    (
        "dishes",
        "CREATE TABLE IF NOT EXISTS dishes (
            dish_id INT NOT NULL PRIMARY KEY,
            name TEXT NOT NULL,
            price INT NOT NULL,
            is_active BOOLEAN NOT NULL,
            CHECK (dish_id > 0),
            CHECK (price > 0),
            CHECK (LENGTH(name) >= 4)
        )",
    ),
    (
        "customer_places_order",
        "CREATE TABLE IF NOT EXISTS customer_places_order (
            order_id INT NOT NULL PRIMARY KEY REFERENCES orders(order_id) ON DELETE CASCADE,
            cust_id INT REFERENCES customers(cust_id) ON DELETE SET NULL
        )",
    ),
    (
        "order_contains_dish",
        "CREATE TABLE IF NOT EXISTS order_contains_dish (
            order_id INT NOT NULL REFERENCES orders(order_id) ON DELETE CASCADE,
            dish_id INT NOT NULL REFERENCES dishes(dish_id) ON DELETE CASCADE,
            amount INT NOT NULL,
            price INT NOT NULL,
            PRIMARY KEY (order_id, dish_id),
            CHECK (amount >= 0)
        )",
    ),
    (
        "customer_rated_dish",
        "CREATE TABLE IF NOT EXISTS customer_rated_dish (
            cust_id INT NOT NULL REFERENCES customers(cust_id) ON DELETE CASCADE,
            dish_id INT NOT NULL REFERENCES dishes(dish_id) ON DELETE CASCADE,
            rating INT NOT NULL,
            PRIMARY KEY (cust_id, dish_id),
            CHECK (rating >= 1 AND rating <= 5)
        )",
    ),
];

/// Derived views. Unrated dishes average to the neutral 3.0
/// (`shared::models::NEUTRAL_RATING`).
pub const VIEWS: &[(&str, &str)] = &[
    (
        "order_total_price",
        "CREATE VIEW IF NOT EXISTS order_total_price AS
        SELECT o.order_id AS order_id,
               o.date AS date,
               p.cust_id AS cust_id,
               o.delivery_fee + COALESCE(SUM(i.amount * i.price), 0) AS total_price
        FROM orders o
        LEFT JOIN customer_places_order p ON p.order_id = o.order_id
        LEFT JOIN order_contains_dish i ON i.order_id = o.order_id
        GROUP BY o.order_id, o.date, p.cust_id",
    ),
    (
        "dish_avg_rating",
        "CREATE VIEW IF NOT EXISTS dish_avg_rating AS
        SELECT d.dish_id AS dish_id,
               CAST(COALESCE(AVG(r.rating), 3.0) AS REAL) AS avg_rating
        FROM dishes d
        LEFT JOIN customer_rated_dish r ON r.dish_id = d.dish_id
        GROUP BY d.dish_id",
    ),
    (
        "customer_ordered_dish",
        "CREATE VIEW IF NOT EXISTS customer_ordered_dish AS
        SELECT DISTINCT p.cust_id AS cust_id, i.dish_id AS dish_id
        FROM customer_places_order p
        JOIN order_contains_dish i ON i.order_id = p.order_id
        WHERE p.cust_id IS NOT NULL",
    ),
    (
        "dish_price_profit",
        "CREATE VIEW IF NOT EXISTS dish_price_profit AS
        SELECT dish_id, price, CAST(AVG(amount * price) AS REAL) AS avg_profit
        FROM order_contains_dish
        GROUP BY dish_id, price",
    ),
];

/// Create every table and view that does not exist yet
pub async fn create_tables(pool: &SqlitePool) -> AppResult<()> {
    let mut tx = pool.begin().await?;
    for (_, ddl) in TABLES.iter().chain(VIEWS) {
        sqlx::query(ddl).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!(
        tables = TABLES.len(),
        views = VIEWS.len(),
        "Database schema ready"
    );
    Ok(())
}

/// Delete every row, children before parents
pub async fn clear_tables(pool: &SqlitePool) -> AppResult<()> {
    let mut tx = pool.begin().await?;
    for (table, _) in TABLES.iter().rev() {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    tracing::info!("Database tables cleared");
    Ok(())
}

/// Drop views, then tables, children before parents
pub async fn drop_tables(pool: &SqlitePool) -> AppResult<()> {
    let mut tx = pool.begin().await?;
    for (view, _) in VIEWS.iter().rev() {
        sqlx::query(&format!("DROP VIEW IF EXISTS {view}"))
            .execute(&mut *tx)
            .await?;
    }
    for (table, _) in TABLES.iter().rev() {
        sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    tracing::info!("Database tables dropped");
    Ok(())
}
