//! Ranking policy
//!
//! Ordering is a stable two-key sort: users first, then prefix matches.
//! Records that tie on both keys keep their fan-out order, so the sort
//! must stay stable.

use crate::value_objects::{ResultType, SearchResult};

/// Sort results in place by the ranking policy
pub fn rank(results: &mut [SearchResult]) {
    results.sort_by_key(|r| (r.result_type != ResultType::User, !r.is_prefix_match));
}

/// Rank `results` and keep at most `limit`
pub fn rank_and_truncate(mut results: Vec<SearchResult>, limit: usize) -> Vec<SearchResult> {
    rank(&mut results);
    results.truncate(limit);
    results
}
