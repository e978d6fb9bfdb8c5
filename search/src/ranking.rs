//! Pull-based enumeration of records by descending upvotes.

use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

/// Every record has already been returned by the ranking cursor.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("all {total} records have already been returned")]
pub struct Exhausted {
    pub total: usize,
}

/// Fixed ranking order plus a cursor that only moves forward.
///
/// The cursor is shared by everyone holding the index, so two callers never
/// receive the same record.
pub(crate) struct UpvoteRanking {
    order: Vec<usize>,
    cursor: AtomicUsize,
}

impl UpvoteRanking {
    pub(crate) fn new(order: Vec<usize>) -> Self {
        Self {
            order,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Returns the next position in ranking order and advances the cursor.
    pub(crate) fn advance(&self) -> Result<usize, Exhausted> {
        let total = self.order.len();
        self.cursor
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |cursor| {
                (cursor < total).then_some(cursor + 1)
            })
            .map(|cursor| self.order[cursor])
            .map_err(|_| Exhausted { total })
    }

    pub(crate) fn remaining(&self) -> usize {
        self.order.len() - self.cursor.load(Ordering::Acquire)
    }
}
