//! Shared fixtures for the store integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use diner_store::{Config, Restaurant, ReturnValue};
use shared::models::{CustomerCreate, DishCreate, OrderCreate};

/// Fresh in-memory store with the schema in place
pub async fn store() -> Restaurant {
    diner_store::init_logger();
    Restaurant::open(&Config::in_memory()).await.unwrap()
}

pub fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(18, 30, 0)
        .unwrap()
}

pub fn customer(cust_id: i64) -> CustomerCreate {
    CustomerCreate::new(cust_id, format!("Customer {cust_id}"), 25 + cust_id, "0501234567")
}

pub fn order(order_id: i64, delivery_fee: f64) -> OrderCreate {
    OrderCreate::new(order_id, at(2024, 5, 1), delivery_fee, "Hanassi 12, Haifa")
}

pub fn dish(dish_id: i64, price: f64) -> DishCreate {
    DishCreate::new(dish_id, format!("Dish {dish_id}"), price, true)
}

pub async fn add_customers(store: &Restaurant, ids: impl IntoIterator<Item = i64>) {
    for id in ids {
        assert_eq!(store.add_customer(&customer(id)).await, ReturnValue::Ok);
    }
}

pub async fn add_dishes(store: &Restaurant, dishes: &[(i64, f64)]) {
    for &(id, price) in dishes {
        assert_eq!(store.add_dish(&dish(id, price)).await, ReturnValue::Ok);
    }
}

pub async fn add_orders(store: &Restaurant, orders: &[(i64, f64)]) {
    for &(id, fee) in orders {
        assert_eq!(store.add_order(&order(id, fee)).await, ReturnValue::Ok);
    }
}
