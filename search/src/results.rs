//! Query result types.

use feed_core::FeedRecord;
use std::borrow::Cow;

/// Ordered records returned by a query.
///
/// Borrows from the `FeedIndex`. Range queries borrow a slice of a timeline
/// directly; content search owns the positions it matched.
#[derive(Debug, Clone)]
pub struct Posts<'a> {
    records: &'a [FeedRecord],
    positions: Cow<'a, [usize]>,
}

impl<'a> Posts<'a> {
    pub(crate) fn empty(records: &'a [FeedRecord]) -> Self {
        Self {
            records,
            positions: Cow::Borrowed(&[]),
        }
    }

    pub(crate) fn borrowed(records: &'a [FeedRecord], positions: &'a [usize]) -> Self {
        Self {
            records,
            positions: Cow::Borrowed(positions),
        }
    }

    pub(crate) fn owned(records: &'a [FeedRecord], positions: Vec<usize>) -> Self {
        Self {
            records,
            positions: Cow::Owned(positions),
        }
    }

    /// Iterates over the records in result order.
    pub fn iter(&self) -> impl Iterator<Item = &'a FeedRecord> + '_ {
        let records = self.records;
        self.positions.iter().map(move |&pos| &records[pos])
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn first(&self) -> Option<&'a FeedRecord> {
        self.get(0)
    }

    pub fn get(&self, index: usize) -> Option<&'a FeedRecord> {
        self.positions.get(index).map(|&pos| &self.records[pos])
    }

    /// Ids of the records in result order.
    pub fn ids(&self) -> Vec<u64> {
        self.iter().map(|record| record.id).collect()
    }

    pub fn to_vec(&self) -> Vec<&'a FeedRecord> {
        self.iter().collect()
    }
}
