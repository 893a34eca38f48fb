use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate figures over the whole collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CollectionStats {
    pub total: usize,
    pub completed: usize,
    pub watching: usize,
    pub want_to_watch: usize,
    /// Sum of runtimes in minutes; unknown runtimes count as 0
    pub total_runtime: u64,
    /// Mean of positive ratings, rounded to one decimal
    pub average_rating: f64,
    /// Number of ratings behind `average_rating`
    pub rating_count: usize,
    pub genre_breakdown: BTreeMap<String, usize>,
    pub year_breakdown: BTreeMap<i32, usize>,
}
