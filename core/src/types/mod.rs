pub mod config;
pub use config::{ConfigError, EmptyPattern, FeedConfig, SearchSection, SourceConfig};

pub(crate) mod user;
pub use user::{User, UserError};

pub(crate) mod record;
pub use record::{FeedRecord, Timestamp};
