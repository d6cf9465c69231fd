//! Rating Model

use serde::{Deserialize, Serialize};

/// Lowest accepted rating
pub const MIN_RATING: i64 = 1;
/// Highest accepted rating
pub const MAX_RATING: i64 = 5;
/// Average used for dishes nobody has rated yet
pub const NEUTRAL_RATING: f64 = 3.0;
/// Ratings at or above this value count as "liked" for recommendations
pub const LIKED_RATING: i64 = 4;

/// A customer's rating of a dish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Rating {
    pub cust_id: i64,
    pub dish_id: i64,
    pub rating: i64,
}

impl Rating {
    pub fn is_liked(&self) -> bool {
        self.rating >= LIKED_RATING
    }
}

/// Average rating of a dish (unrated dishes carry [`NEUTRAL_RATING`])
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DishRating {
    pub dish_id: i64,
    pub avg_rating: f64,
}
