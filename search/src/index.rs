//! Derived views built once at load time.

use feed_core::{FeedRecord, User};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Record store plus the orderings queries read from.
///
/// Every view holds positions into `records`, which keeps arrival order.
pub(crate) struct Views {
    pub(crate) records: Vec<FeedRecord>,
    /// Per-user positions sorted by timestamp, ties in arrival order.
    pub(crate) timelines: HashMap<User, Vec<usize>>,
    /// All positions sorted by ascending id.
    pub(crate) by_id: Vec<usize>,
    /// All positions sorted by descending upvotes, ties in arrival order.
    pub(crate) by_upvotes: Vec<usize>,
}

impl Views {
    pub(crate) fn build(records: Vec<FeedRecord>) -> Self {
        let mut timelines: HashMap<User, Vec<usize>> = HashMap::new();
        for (pos, record) in records.iter().enumerate() {
            timelines.entry(record.user.clone()).or_default().push(pos);
        }

        // `sort_by_key` is stable: equal keys keep the order they were pushed in.
        for timeline in timelines.values_mut() {
            timeline.sort_by_key(|&pos| records[pos].timestamp);
        }

        let mut by_id: Vec<usize> = (0..records.len()).collect();
        by_id.sort_by_key(|&pos| records[pos].id);

        let mut by_upvotes: Vec<usize> = (0..records.len()).collect();
        by_upvotes.sort_by_key(|&pos| Reverse(records[pos].upvotes));

        log::debug!(
            "indexed {} records across {} users",
            records.len(),
            timelines.len()
        );

        Self {
            records,
            timelines,
            by_id,
            by_upvotes,
        }
    }
}
