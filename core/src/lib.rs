//! Feed record model shared by the index and its front-ends.
//!
//! - [`types`]: the immutable [`FeedRecord`] and its validated [`User`] identifier.
//! - [`source`]: newline-delimited JSON record source.
//! - [`types::config`]: TOML configuration for loading and searching.

mod error;
pub mod source;
pub mod types;

pub use error::{Error, Result};
pub use source::{JsonLinesSource, SourceError};
pub use types::{FeedRecord, Timestamp, User, UserError};
