//! Read-only query engine over a loaded feed.
//!
//! # Design
//!
//! - Records are stored once, in arrival order. Every view holds positions
//!   into that store:
//!   - per-user timelines sorted by timestamp (stable, so equal timestamps
//!     keep arrival order)
//!   - all records sorted by id
//!   - all records sorted by upvotes, highest first (stable)
//! - Views are built when the index is constructed and never change.
//! - The only mutable state is the upvote cursor, an atomic counter shared by
//!   every caller of one index.
//!
//! # Queries
//!
//! - `posts_between()`, `post_after()`: inclusive timestamp bounds per user
//! - `next_highest_upvote()`: pull-based ranking, `Exhausted` once drained
//! - `posts_containing()`: case-sensitive substring search, ordered by id

mod config;
mod engine;
mod index;
mod matcher;
mod ranking;
mod results;

pub use config::{EmptyPattern, SearchConfig};
pub use engine::FeedIndex;
pub use matcher::BoyerMoore;
pub use ranking::Exhausted;
pub use results::Posts;
