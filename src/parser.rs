//! Protobuf parser for GTFS Realtime feeds.

use std::io::Read;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use prost::Message;
use tracing::debug;

use crate::gtfs_rt::FeedMessage;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Decodes a protobuf-encoded GTFS-RT [`FeedMessage`] from raw bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid protobuf for a `FeedMessage`.
pub fn parse_feed(bytes: &[u8]) -> Result<FeedMessage> {
    Ok(FeedMessage::decode(bytes)?)
}

/// Like [`parse_feed`], but inflates gzip-compressed snapshots first.
///
/// # Errors
///
/// Returns an error if a gzip stream is corrupt or the (inflated) bytes are
/// not a valid `FeedMessage`.
pub fn decode_payload(bytes: &[u8]) -> Result<FeedMessage> {
    if !bytes.starts_with(&GZIP_MAGIC) {
        return parse_feed(bytes);
    }

    let mut inflated = Vec::new();
    GzDecoder::new(bytes)
        .read_to_end(&mut inflated)
        .context("failed to inflate gzip feed")?;
    debug!(
        compressed = bytes.len(),
        inflated = inflated.len(),
        "Inflated gzip feed"
    );
    parse_feed(&inflated)
}
