use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::Recommendation;

/// Number of recommendations returned per slate
pub const TOP_N: usize = 3;

/// Ranking order: confidence descending, then odds descending
pub fn compare(a: &Recommendation, b: &Recommendation) -> Ordering {
    b.confidence
        .total_cmp(&a.confidence)
        .then_with(|| b.odds.cmp(&a.odds))
}

/// Order recommendations and keep the best `limit`, one per player.
///
/// The sort is stable, so full ties keep their input order.
pub fn rank(mut recommendations: Vec<Recommendation>, limit: usize) -> Vec<Recommendation> {
    recommendations.sort_by(compare);

    let mut seen = HashSet::new();
    recommendations
        .into_iter()
        .filter(|r| seen.insert(r.player.clone()))
        .take(limit)
        .collect()
}
