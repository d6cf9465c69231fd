//! Analytics Module
//!
//! Read-only aggregate queries over the derived views. Ties are always
//! reported in full or broken by ascending id.

pub mod popularity;
pub mod profit;
pub mod rating;
pub mod recommendation;
pub mod spending;

/// How many dishes count as "top rated" / "lowest rated"
pub const RANKED_DISHES: i64 = 5;
