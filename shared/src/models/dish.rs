//! Dish Model

use serde::{Deserialize, Serialize};

/// Dish entity (菜品)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub dish_id: i64,
    pub name: String,
    pub price: f64,
    /// Inactive dishes cannot be added to orders or re-priced
    pub is_active: bool,
}

/// Create dish payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DishCreate {
    pub dish_id: Option<i64>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub is_active: Option<bool>,
}

impl DishCreate {
    pub fn new(dish_id: i64, name: impl Into<String>, price: f64, is_active: bool) -> Self {
        Self {
            dish_id: Some(dish_id),
            name: Some(name.into()),
            price: Some(price),
            is_active: Some(is_active),
        }
    }
}
