//! Newline-delimited JSON record source.
//!
//! Each non-blank line holds one object:
//!
//! ```text
//! {"id":6,"user":"tom","timestamp":"03/01/2019 12:30:00","upvotes":4,"content":"no thanks"}
//! ```
//!
//! Timestamps are parsed with [`SourceConfig::timestamp_format`]. The source
//! yields records in file order; it makes no ordering promise beyond that.

use crate::types::{FeedRecord, SourceConfig, Timestamp, User};
use serde::Deserialize;
use std::fmt::{self, Write};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: read failed: {source}")]
    Read { line: usize, source: io::Error },

    #[error("line {line}: malformed record: {source}")]
    Malformed {
        line: usize,
        source: serde_json::Error,
    },

    #[error("line {line}: invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        line: usize,
        value: String,
        source: chrono::ParseError,
    },

    #[error("line {line}: user must not be empty")]
    InvalidUser { line: usize },
}

#[derive(Deserialize)]
struct RawRecord {
    id: u64,
    user: String,
    timestamp: String,
    upvotes: i64,
    content: String,
}

/// Iterator of records read from newline-delimited JSON.
pub struct JsonLinesSource<R> {
    lines: Lines<R>,
    line: usize,
    timestamp_format: String,
}

impl JsonLinesSource<BufReader<File>> {
    pub fn open(path: &Path, config: &SourceConfig) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        log::debug!("reading records from {}", path.display());
        Ok(Self::new(BufReader::new(file), config))
    }
}

impl<R: BufRead> JsonLinesSource<R> {
    pub fn new(reader: R, config: &SourceConfig) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            timestamp_format: config.timestamp_format.clone(),
        }
    }

    fn parse(&self, text: &str) -> Result<FeedRecord, SourceError> {
        let line = self.line;
        let raw: RawRecord =
            serde_json::from_str(text).map_err(|source| SourceError::Malformed { line, source })?;

        let timestamp = parse_timestamp(&raw.timestamp, &self.timestamp_format).map_err(
            |source| SourceError::InvalidTimestamp {
                line,
                value: raw.timestamp.clone(),
                source,
            },
        )?;
        let user = User::try_new(raw.user).map_err(|_| SourceError::InvalidUser { line })?;

        Ok(FeedRecord::new(
            raw.id,
            user,
            timestamp,
            raw.upvotes,
            raw.content,
        ))
    }
}

impl<R: BufRead> Iterator for JsonLinesSource<R> {
    type Item = Result<FeedRecord, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let read = self.lines.next()?;
            self.line += 1;
            let text = match read {
                Ok(text) => text,
                Err(source) => {
                    return Some(Err(SourceError::Read {
                        line: self.line,
                        source,
                    }));
                }
            };

            if text.trim().is_empty() {
                log::trace!("skipping blank line {}", self.line);
                continue;
            }

            return Some(self.parse(&text));
        }
    }
}

/// Parses a timestamp using a chrono format string.
pub fn parse_timestamp(value: &str, format: &str) -> Result<Timestamp, chrono::ParseError> {
    Timestamp::parse_from_str(value.trim(), format)
}

/// Formats a timestamp using a chrono format string.
///
/// Fails when the format asks for something a naive timestamp lacks, such as
/// a UTC offset (`%z`).
pub fn format_timestamp(timestamp: &Timestamp, format: &str) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write!(out, "{}", timestamp.format(format))?;
    Ok(out)
}

#[cfg(test)]
mod tests;
