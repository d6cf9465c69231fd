//! Restaurant Service
//!
//! The public face of the store. Mutations report a [`ReturnValue`]; reads
//! return `None` or an empty list on any failure. Engine errors are logged
//! here, once, on their way out.

use crate::analytics::{RANKED_DISHES, popularity, profit, rating as rating_stats, recommendation, spending};
use crate::core::Config;
use crate::db::Database;
use crate::db::repository::{
    RepoError, RepoResult, customer, dish, order, order_item, placement, rating,
};
use crate::utils::AppResult;
use shared::ReturnValue;
use shared::models::{Customer, CustomerCreate, Dish, DishCreate, Order, OrderCreate, OrderDish};
use sqlx::SqlitePool;

fn status<T>(op: &'static str, result: RepoResult<T>) -> ReturnValue {
    match result {
        Ok(_) => {
            tracing::debug!(op, "Store operation succeeded");
            ReturnValue::Ok
        }
        Err(err) => failure(op, err),
    }
}

fn failure(op: &'static str, err: RepoError) -> ReturnValue {
    match &err {
        RepoError::Database(msg) => tracing::error!(op, error = %msg, "Store operation failed"),
        _ => tracing::warn!(op, error = %err, "Store operation rejected"),
    }
    err.into()
}

fn lookup<T>(op: &'static str, result: RepoResult<Option<T>>) -> Option<T> {
    result.unwrap_or_else(|err| {
        failure(op, err);
        None
    })
}

fn listing<T>(op: &'static str, result: RepoResult<Vec<T>>) -> Vec<T> {
    result.unwrap_or_else(|err| {
        failure(op, err);
        Vec::new()
    })
}

/// Restaurant ordering store (餐厅订单存储)
#[derive(Clone)]
pub struct Restaurant {
    db: Database,
}

impl Restaurant {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Connect to the configured database and bootstrap the schema
    pub async fn open(config: &Config) -> AppResult<Self> {
        Ok(Self::new(Database::open(config).await?))
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    fn pool(&self) -> &SqlitePool {
        self.db.pool()
    }

    // ========== Customers ==========

    pub async fn add_customer(&self, customer: &CustomerCreate) -> ReturnValue {
        status("add_customer", customer::create(self.pool(), customer).await)
    }

    pub async fn get_customer(&self, cust_id: i64) -> Option<Customer> {
        lookup("get_customer", customer::find_by_id(self.pool(), cust_id).await)
    }

    pub async fn delete_customer(&self, cust_id: i64) -> ReturnValue {
        status("delete_customer", customer::delete(self.pool(), cust_id).await)
    }

    // ========== Orders ==========

    pub async fn add_order(&self, order: &OrderCreate) -> ReturnValue {
        status("add_order", order::create(self.pool(), order).await)
    }

    pub async fn get_order(&self, order_id: i64) -> Option<Order> {
        lookup("get_order", order::find_by_id(self.pool(), order_id).await)
    }

    pub async fn delete_order(&self, order_id: i64) -> ReturnValue {
        status("delete_order", order::delete(self.pool(), order_id).await)
    }

    // ========== Dishes ==========

    pub async fn add_dish(&self, dish: &DishCreate) -> ReturnValue {
        status("add_dish", dish::create(self.pool(), dish).await)
    }

    pub async fn get_dish(&self, dish_id: i64) -> Option<Dish> {
        lookup("get_dish", dish::find_by_id(self.pool(), dish_id).await)
    }

    pub async fn delete_dish(&self, dish_id: i64) -> ReturnValue {
        status("delete_dish", dish::delete(self.pool(), dish_id).await)
    }

    /// Fails with `NotExists` for inactive dishes too
    pub async fn update_dish_price(&self, dish_id: i64, price: f64) -> ReturnValue {
        status(
            "update_dish_price",
            dish::update_price(self.pool(), dish_id, price).await,
        )
    }

    pub async fn update_dish_active_status(&self, dish_id: i64, is_active: bool) -> ReturnValue {
        status(
            "update_dish_active_status",
            dish::update_active(self.pool(), dish_id, is_active).await,
        )
    }

    // ========== Relationships ==========

    pub async fn customer_placed_order(&self, cust_id: i64, order_id: i64) -> ReturnValue {
        status(
            "customer_placed_order",
            placement::place(self.pool(), cust_id, order_id).await,
        )
    }

    pub async fn get_customer_that_placed_order(&self, order_id: i64) -> Option<Customer> {
        lookup(
            "get_customer_that_placed_order",
            placement::find_customer(self.pool(), order_id).await,
        )
    }

    pub async fn order_contains_dish(&self, order_id: i64, dish_id: i64, amount: i64) -> ReturnValue {
        status(
            "order_contains_dish",
            order_item::add(self.pool(), order_id, dish_id, amount).await,
        )
    }

    pub async fn order_does_not_contain_dish(&self, order_id: i64, dish_id: i64) -> ReturnValue {
        status(
            "order_does_not_contain_dish",
            order_item::remove(self.pool(), order_id, dish_id).await,
        )
    }

    pub async fn get_all_order_items(&self, order_id: i64) -> Vec<OrderDish> {
        listing(
            "get_all_order_items",
            order_item::find_by_order(self.pool(), order_id).await,
        )
    }

    pub async fn customer_rated_dish(&self, cust_id: i64, dish_id: i64, rating: i64) -> ReturnValue {
        status(
            "customer_rated_dish",
            rating::add(self.pool(), cust_id, dish_id, rating).await,
        )
    }

    pub async fn customer_deleted_rating_on_dish(&self, cust_id: i64, dish_id: i64) -> ReturnValue {
        status(
            "customer_deleted_rating_on_dish",
            rating::remove(self.pool(), cust_id, dish_id).await,
        )
    }

    /// `(dish_id, rating)` pairs by dish id
    pub async fn get_all_customer_ratings(&self, cust_id: i64) -> Vec<(i64, i64)> {
        listing(
            "get_all_customer_ratings",
            rating::find_by_customer(self.pool(), cust_id).await,
        )
    }

    // ========== Analytics ==========

    pub async fn get_order_total_price(&self, order_id: i64) -> Option<f64> {
        lookup(
            "get_order_total_price",
            spending::order_total_price(self.pool(), order_id).await,
        )
    }

    pub async fn get_customers_spent_max_avg_amount_money(&self) -> Vec<i64> {
        listing(
            "get_customers_spent_max_avg_amount_money",
            spending::top_average_spenders(self.pool()).await,
        )
    }

    pub async fn get_most_purchased_dish_among_anonymous_order(&self) -> Option<Dish> {
        lookup(
            "get_most_purchased_dish_among_anonymous_order",
            popularity::most_purchased_anonymous_dish(self.pool()).await,
        )
    }

    pub async fn did_customer_order_top_rated_dishes(&self, cust_id: i64) -> bool {
        rating_stats::ordered_top_rated(self.pool(), cust_id)
            .await
            .unwrap_or_else(|err| {
                failure("did_customer_order_top_rated_dishes", err);
                false
            })
    }

    pub async fn get_top_rated_dishes(&self) -> Vec<i64> {
        listing(
            "get_top_rated_dishes",
            rating_stats::top_rated_dishes(self.pool(), RANKED_DISHES).await,
        )
        .into_iter()
        .map(|r| r.dish_id)
        .collect()
    }

    pub async fn customers_rated_but_not_ordered(&self, dish_id: i64) -> Vec<i64> {
        listing(
            "customers_rated_but_not_ordered",
            rating_stats::rated_but_not_ordered(self.pool(), dish_id).await,
        )
    }

    /// Customers who rated one of the five lowest rated dishes below neutral
    /// and never ordered it
    pub async fn get_customers_rated_but_not_ordered(&self) -> Vec<i64> {
        listing(
            "get_customers_rated_but_not_ordered",
            rating_stats::low_raters_without_order(self.pool()).await,
        )
    }

    pub async fn get_non_worth_price_increase(&self) -> Vec<i64> {
        listing(
            "get_non_worth_price_increase",
            profit::non_worth_price_increase(self.pool()).await,
        )
    }

    /// `(month, running profit)`, December first
    pub async fn get_cumulative_profit_per_month(&self, year: i32) -> Vec<(u32, f64)> {
        listing(
            "get_cumulative_profit_per_month",
            profit::cumulative_profit_per_month(self.pool(), year).await,
        )
    }

    pub async fn get_potential_dish_recommendations(&self, cust_id: i64) -> Vec<i64> {
        listing(
            "get_potential_dish_recommendations",
            recommendation::potential_dish_recommendations(self.pool(), cust_id).await,
        )
    }
}
