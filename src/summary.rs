use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::classify::{Classified, classify};
use crate::gtfs_rt::FeedMessage;

/// Header info and per-kind entity counts for a decoded feed.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FeedSummary {
    pub version: String,
    pub timestamp: Option<String>,
    pub entity_count: usize,

    // entity types
    pub trip_updates: usize,
    pub vehicle_positions: usize,
    pub alerts: usize,
    pub unrecognized: usize,
}

impl FeedSummary {
    pub fn from_feed(feed: &FeedMessage) -> Self {
        let mut s = FeedSummary {
            version: feed.header.gtfs_realtime_version.clone(),
            timestamp: feed.header.timestamp.and_then(format_timestamp),
            entity_count: feed.entity.len(),
            ..Default::default()
        };

        for e in &feed.entity {
            match classify(e) {
                Classified::TripUpdate(_) => s.trip_updates += 1,
                Classified::VehiclePosition(_) => s.vehicle_positions += 1,
                Classified::Alert(_) => s.alerts += 1,
                Classified::Unrecognized => s.unrecognized += 1,
            }
        }

        s
    }

    /// Number of entities that produce a record.
    pub fn recognized(&self) -> usize {
        self.trip_updates + self.vehicle_positions + self.alerts
    }
}

/// Formats epoch seconds as RFC 3339 in UTC; out-of-range values give `None`.
fn format_timestamp(secs: u64) -> Option<String> {
    let secs = i64::try_from(secs).ok()?;
    DateTime::<Utc>::from_timestamp(secs, 0).map(|t| t.to_rfc3339())
}
