use crate::types::User;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Point in time a record was posted at.
pub type Timestamp = NaiveDateTime;

/// A single post in the feed. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedRecord {
    /// Unique across the feed.
    pub id: u64,
    pub user: User,
    pub timestamp: Timestamp,
    pub upvotes: i64,
    pub content: String,
}

impl FeedRecord {
    pub fn new(
        id: u64,
        user: User,
        timestamp: Timestamp,
        upvotes: i64,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            user,
            timestamp,
            upvotes,
            content: content.into(),
        }
    }
}
