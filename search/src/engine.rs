//! Feed index with timeline, ranking and content queries.

use crate::config::{EmptyPattern, SearchConfig};
use crate::index::Views;
use crate::matcher::BoyerMoore;
use crate::ranking::{Exhausted, UpvoteRanking};
use crate::results::Posts;
use feed_core::{FeedRecord, Timestamp};
use std::collections::HashMap;

/// Immutable index over a batch of feed records.
///
/// Every query except [`FeedIndex::next_highest_upvote`] is a pure read. The
/// ranking cursor is shared by all callers of one index.
pub struct FeedIndex {
    records: Vec<FeedRecord>,
    timelines: HashMap<feed_core::User, Vec<usize>>,
    by_id: Vec<usize>,
    ranking: UpvoteRanking,
    config: SearchConfig,
}

/// Create operations.
impl FeedIndex {
    /// Builds an index over `records` with the default search config.
    pub fn new(records: impl IntoIterator<Item = FeedRecord>) -> Self {
        Self::with_config(records, SearchConfig::default())
    }

    pub fn with_config(
        records: impl IntoIterator<Item = FeedRecord>,
        config: SearchConfig,
    ) -> Self {
        let Views {
            records,
            timelines,
            by_id,
            by_upvotes,
        } = Views::build(records.into_iter().collect());

        Self {
            records,
            timelines,
            by_id,
            ranking: UpvoteRanking::new(by_upvotes),
            config,
        }
    }

    /// Builds an index from a fallible record source.
    ///
    /// The first error from `source` aborts the build and is returned as is.
    pub fn try_from_source<E>(
        source: impl IntoIterator<Item = Result<FeedRecord, E>>,
    ) -> Result<Self, E> {
        Self::try_from_source_with_config(source, SearchConfig::default())
    }

    pub fn try_from_source_with_config<E>(
        source: impl IntoIterator<Item = Result<FeedRecord, E>>,
        config: SearchConfig,
    ) -> Result<Self, E> {
        let records = source.into_iter().collect::<Result<Vec<_>, E>>()?;
        Ok(Self::with_config(records, config))
    }
}

/// Lookup operations.
impl FeedIndex {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record with the given id.
    pub fn get(&self, id: u64) -> Option<&FeedRecord> {
        self.by_id
            .binary_search_by_key(&id, |&pos| self.records[pos].id)
            .ok()
            .map(|i| &self.records[self.by_id[i]])
    }

    /// Iterates over every user with at least one record, in no particular order.
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.timelines.keys().map(|user| user.as_str())
    }
}

/// Timeline operations.
impl FeedIndex {
    /// Returns `user`'s records with `start <= timestamp <= end`, oldest first.
    ///
    /// An omitted bound is unbounded on that side. Unknown users and
    /// `start > end` both yield an empty result.
    pub fn posts_between(
        &self,
        user: &str,
        start: Option<Timestamp>,
        end: Option<Timestamp>,
    ) -> Posts<'_> {
        let Some(timeline) = self.timelines.get(user) else {
            return Posts::empty(&self.records);
        };

        let lower = match start {
            Some(start) => self.first_at_or_after(timeline, start),
            None => 0,
        };
        let upper = match end {
            Some(end) => self.last_at_or_before(timeline, end),
            None => timeline.len().checked_sub(1),
        };

        match upper {
            Some(upper) if lower <= upper => {
                Posts::borrowed(&self.records, &timeline[lower..=upper])
            }
            _ => Posts::empty(&self.records),
        }
    }

    /// Returns `user`'s earliest record at or after `search_time`.
    pub fn post_after(&self, user: &str, search_time: Timestamp) -> Option<&FeedRecord> {
        self.posts_between(user, Some(search_time), None).first()
    }

    /// Index of the first entry whose timestamp is `>= bound`, or `timeline.len()`.
    fn first_at_or_after(&self, timeline: &[usize], bound: Timestamp) -> usize {
        timeline.partition_point(|&pos| self.records[pos].timestamp < bound)
    }

    /// Index of the last entry whose timestamp is `<= bound`.
    fn last_at_or_before(&self, timeline: &[usize], bound: Timestamp) -> Option<usize> {
        timeline
            .partition_point(|&pos| self.records[pos].timestamp <= bound)
            .checked_sub(1)
    }
}

/// Ranking operations.
impl FeedIndex {
    /// Returns the record with the next highest upvote count.
    ///
    /// The n-th call returns the record with the n-th highest count. Records
    /// with equal counts come back in the order they were loaded. Once every
    /// record has been returned, each further call yields [`Exhausted`].
    pub fn next_highest_upvote(&self) -> Result<&FeedRecord, Exhausted> {
        let pos = self.ranking.advance()?;
        Ok(&self.records[pos])
    }

    /// Number of records `next_highest_upvote` has yet to return.
    pub fn remaining_upvotes(&self) -> usize {
        self.ranking.remaining()
    }
}

/// Search operations.
impl FeedIndex {
    /// Returns every record whose content contains `pattern`, ordered by id.
    ///
    /// Matching is exact and case-sensitive. An empty pattern follows
    /// [`SearchConfig::empty_pattern`].
    pub fn posts_containing(&self, pattern: &str) -> Posts<'_> {
        let matcher = BoyerMoore::new(pattern);
        if matcher.is_empty() {
            return match self.config.empty_pattern {
                EmptyPattern::MatchNothing => Posts::empty(&self.records),
                EmptyPattern::MatchAll => Posts::borrowed(&self.records, &self.by_id),
            };
        }

        let positions: Vec<usize> = self
            .by_id
            .iter()
            .copied()
            .filter(|&pos| matcher.is_match(&self.records[pos].content))
            .collect();

        log::trace!(
            "pattern {:?} matched {} of {} records",
            pattern,
            positions.len(),
            self.records.len()
        );

        Posts::owned(&self.records, positions)
    }
}
