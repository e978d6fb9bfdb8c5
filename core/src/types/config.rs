use crate::source::format_timestamp;
use crate::types::Timestamp;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Feed configuration, persisted as feed.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub search: SearchSection,
}

impl FeedConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> PathBuf {
        dir.join("feed.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.source.timestamp_format.trim().is_empty() {
            errors.push("timestamp_format must not be empty".to_string());
        } else if !is_valid_format(&self.source.timestamp_format) {
            errors.push(format!(
                "timestamp_format is not a valid strftime format: {}",
                self.source.timestamp_format
            ));
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        let format = &self.source.timestamp_format;
        Self {
            source: SourceConfig {
                timestamp_format: if format.trim().is_empty() || !is_valid_format(format) {
                    defaults.source.timestamp_format
                } else {
                    format.clone()
                },
            },
            search: self.search.clone(),
        }
    }
}

// Records are written back out with the same format, so it must both parse
// and format a naive timestamp.
fn is_valid_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
        && format_timestamp(&Timestamp::default(), format).is_ok()
}

/// Settings for reading records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// chrono format string for record timestamps.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
        }
    }
}

fn default_timestamp_format() -> String {
    "%d/%m/%Y %H:%M:%S".to_string()
}

/// Settings for content search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSection {
    #[serde(default)]
    pub empty_pattern: EmptyPattern,
}

/// What a content search with an empty pattern returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyPattern {
    #[default]
    MatchNothing,
    MatchAll,
}

impl fmt::Display for EmptyPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyPattern::MatchNothing => write!(f, "match_nothing"),
            EmptyPattern::MatchAll => write!(f, "match_all"),
        }
    }
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
