//! Single entry point shared by the CLI and any service wrapper.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::assemble::flatten_feed;
use crate::config::FlattenConfig;
use crate::gtfs_rt::FeedMessage;
use crate::parser::decode_payload;
use crate::record::FlatRecord;
use crate::summary::FeedSummary;

/// The outcome of converting one feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub summary: FeedSummary,
    pub records: Vec<FlatRecord>,
}

impl Conversion {
    /// `true` when no entity produced a record; callers should treat this as
    /// "nothing to export".
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Flattens an already decoded feed.
pub fn convert_feed(feed: &FeedMessage, config: &FlattenConfig) -> Conversion {
    let summary = FeedSummary::from_feed(feed);
    debug!(
        version = %summary.version,
        entity_count = summary.entity_count,
        unrecognized = summary.unrecognized,
        "Flattening feed"
    );

    let records = flatten_feed(feed, config);
    if records.is_empty() {
        info!("No entities were processed");
    } else {
        info!(records = records.len(), "Feed flattened");
    }

    Conversion { summary, records }
}

/// Decodes raw (optionally gzip-compressed) feed bytes and flattens them.
///
/// # Errors
///
/// Returns an error only when the bytes cannot be decoded.
pub fn convert_bytes(bytes: &[u8], config: &FlattenConfig) -> Result<Conversion> {
    let feed = decode_payload(bytes)?;
    Ok(convert_feed(&feed, config))
}
