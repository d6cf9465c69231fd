//! Order Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Order entity
///
/// `date` is stored at whole-second precision, `delivery_fee` in whole cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i64,
    pub date: NaiveDateTime,
    pub delivery_fee: f64,
    pub delivery_address: String,
}

/// Create order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderCreate {
    pub order_id: Option<i64>,
    pub date: Option<NaiveDateTime>,
    pub delivery_fee: Option<f64>,
    pub delivery_address: Option<String>,
}

impl OrderCreate {
    pub fn new(
        order_id: i64,
        date: NaiveDateTime,
        delivery_fee: f64,
        delivery_address: impl Into<String>,
    ) -> Self {
        Self {
            order_id: Some(order_id),
            date: Some(date),
            delivery_fee: Some(delivery_fee),
            delivery_address: Some(delivery_address.into()),
        }
    }
}

/// Line item of an order (订单明细)
///
/// `price` is the dish price captured when the item was attached; later
/// price changes on the dish do not touch it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDish {
    pub dish_id: i64,
    pub amount: i64,
    pub price: f64,
}

impl OrderDish {
    pub fn new(dish_id: i64, amount: i64, price: f64) -> Self {
        Self {
            dish_id,
            amount,
            price,
        }
    }
}
