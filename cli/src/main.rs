use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use feed_core::source::{format_timestamp, parse_timestamp};
use feed_core::types::FeedConfig;
use feed_core::{FeedRecord, JsonLinesSource, Timestamp};
use feed_search::{FeedIndex, SearchConfig};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "feed", about = "Query a feed of posts loaded from newline-delimited JSON")]
struct Args {
    /// Path to the feed file (one JSON record per line)
    #[arg(long)]
    feed: PathBuf,
    /// Path to a feed.toml config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Emit JSON (NDJSON)
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Posts by a user between two times, both inclusive
    Between {
        user: String,
        /// Earliest time to include; unbounded when omitted
        #[arg(long)]
        start: Option<String>,
        /// Latest time to include; unbounded when omitted
        #[arg(long)]
        end: Option<String>,
    },
    /// First post by a user at or after a time
    After { user: String, time: String },
    /// Posts with the most upvotes, highest first
    Top {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Posts whose content contains the pattern (case-sensitive)
    Contains { pattern: String },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(args.config.as_deref()).context("failed to read config")?;
    let format = config.source.timestamp_format.as_str();

    let source = JsonLinesSource::open(&args.feed, &config.source)
        .with_context(|| format!("failed to open {}", args.feed.display()))?;
    let index = FeedIndex::try_from_source_with_config(source, SearchConfig::from(&config))
        .with_context(|| format!("failed to load {}", args.feed.display()))?;
    log::info!("loaded {} records from {}", index.len(), args.feed.display());

    let records: Vec<&FeedRecord> = match &args.command {
        Command::Between { user, start, end } => {
            let start = start.as_deref().map(|s| parse_time(s, format)).transpose()?;
            let end = end.as_deref().map(|s| parse_time(s, format)).transpose()?;
            index.posts_between(user, start, end).to_vec()
        }
        Command::After { user, time } => {
            let time = parse_time(time, format)?;
            index.post_after(user, time).into_iter().collect()
        }
        Command::Top { count } => {
            let mut top = Vec::with_capacity((*count).min(index.len()));
            for _ in 0..*count {
                match index.next_highest_upvote() {
                    Ok(record) => top.push(record),
                    Err(e) => {
                        log::info!("{e}");
                        break;
                    }
                }
            }
            top
        }
        Command::Contains { pattern } => {
            if pattern.is_empty() {
                log::warn!(
                    "empty pattern, applying empty_pattern = {}",
                    config.search.empty_pattern
                );
            }
            index.posts_containing(pattern).to_vec()
        }
    };

    print_records(&records, args.json, format)
}

fn load_config(path: Option<&Path>) -> feed_core::Result<FeedConfig> {
    let Some(path) = path else {
        return Ok(FeedConfig::default());
    };

    let config = FeedConfig::load(path)?;
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(config);
    }
    for error in &errors {
        log::warn!("{}: {}", path.display(), error);
    }
    Ok(config.with_defaults_for_invalid())
}

fn parse_time(value: &str, format: &str) -> Result<Timestamp> {
    parse_timestamp(value, format)
        .with_context(|| format!("invalid time {value:?}, expected format {format:?}"))
}

fn print_records(records: &[&FeedRecord], json: bool, format: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    for record in records {
        writeln!(out, "{}", render_record(record, json, format)?)?;
    }
    Ok(())
}

/// Renders one output line. JSON lines use the feed file shape, so the output
/// can be loaded back as a feed with the same config.
fn render_record(record: &FeedRecord, json: bool, format: &str) -> Result<String> {
    let timestamp = format_timestamp(&record.timestamp, format)
        .map_err(|_| anyhow!("cannot format timestamp with {format:?}"))?;

    if json {
        let line = serde_json::json!({
            "id": record.id,
            "user": record.user.as_str(),
            "timestamp": timestamp,
            "upvotes": record.upvotes,
            "content": record.content,
        });
        return Ok(line.to_string());
    }

    Ok(format!(
        "{}\t{}\t{}\t{}\t{}",
        record.id, record.user, timestamp, record.upvotes, record.content
    ))
}
