//! Taste-similarity recommendations
//!
//! Two customers are similar when both liked (rated at least 4) the same
//! dish. Similarity is closed transitively: a customer liking the same dish
//! as a similar customer is similar too. The closure is computed in memory
//! over the liked ratings.

use crate::db::repository::{RepoResult, rating};
use shared::models::Rating;
use sqlx::SqlitePool;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Bipartite adjacency between customers and the dishes they liked
#[derive(Debug, Default)]
pub struct TasteGraph {
    dishes_by_customer: HashMap<i64, Vec<i64>>,
    customers_by_dish: HashMap<i64, Vec<i64>>,
}

impl TasteGraph {
    /// Build from ratings; only liked ones become edges
    pub fn from_ratings<'a>(ratings: impl IntoIterator<Item = &'a Rating>) -> Self {
        let mut graph = Self::default();
        for r in ratings.into_iter().filter(|r| r.is_liked()) {
            graph
                .dishes_by_customer
                .entry(r.cust_id)
                .or_default()
                .push(r.dish_id);
            graph
                .customers_by_dish
                .entry(r.dish_id)
                .or_default()
                .push(r.cust_id);
        }
        graph
    }

    /// Every customer reachable from `start` through shared liked dishes,
    /// `start` excluded.
    ///
    /// Expands one frontier at a time until a round adds nobody new.
    pub fn similar_customers(&self, start: i64) -> BTreeSet<i64> {
        let mut reached = HashSet::from([start]);
        let mut frontier = vec![start];

        while !frontier.is_empty() {
            let mut next = Vec::new();
            for cust in &frontier {
                let liked = self.dishes_by_customer.get(cust).into_iter().flatten();
                for dish in liked {
                    for other in self.customers_by_dish.get(dish).into_iter().flatten() {
                        if reached.insert(*other) {
                            next.push(*other);
                        }
                    }
                }
            }
            frontier = next;
        }

        reached.remove(&start);
        reached.into_iter().collect()
    }
}

/// Dishes liked by customers similar to `cust_id` that `cust_id` never
/// ordered, ascending
pub async fn potential_dish_recommendations(pool: &SqlitePool, cust_id: i64) -> RepoResult<Vec<i64>> {
    let liked = rating::find_liked(pool).await?;
    let similar = TasteGraph::from_ratings(&liked).similar_customers(cust_id);
    if similar.is_empty() {
        return Ok(Vec::new());
    }

    let ordered: HashSet<i64> = sqlx::query_scalar::<_, i64>(
        "SELECT dish_id FROM customer_ordered_dish WHERE cust_id = ?",
    )
    .bind(cust_id)
    .fetch_all(pool)
    .await?
    .into_iter()
    .collect();

    let dishes: BTreeSet<i64> = liked
        .iter()
        .filter(|r| similar.contains(&r.cust_id))
        .map(|r| r.dish_id)
        .filter(|dish_id| !ordered.contains(dish_id))
        .collect();
    Ok(dishes.into_iter().collect())
}
