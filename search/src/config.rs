use feed_core::types::FeedConfig;

pub use feed_core::types::EmptyPattern;

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchConfig {
    /// Result of `posts_containing("")`.
    pub empty_pattern: EmptyPattern,
}

impl From<&FeedConfig> for SearchConfig {
    fn from(config: &FeedConfig) -> Self {
        Self {
            empty_pattern: config.search.empty_pattern,
        }
    }
}
