//! Turning a whole feed into an ordered list of flat records.

use tracing::debug;

use crate::classify::{Classified, classify};
use crate::config::FlattenConfig;
use crate::extract::{extract_alert, extract_trip_update, extract_vehicle_position};
use crate::gtfs_rt::{FeedEntity, FeedMessage};
use crate::record::FlatRecord;

/// Flattens one entity, or returns `None` when it carries no payload we know.
pub fn flatten_entity(entity: &FeedEntity, config: &FlattenConfig) -> Option<FlatRecord> {
    let id = entity.id.as_str();
    match classify(entity) {
        Classified::TripUpdate(tu) => Some(FlatRecord::TripUpdate(extract_trip_update(id, tu))),
        Classified::VehiclePosition(vp) => Some(FlatRecord::VehiclePosition(
            extract_vehicle_position(id, vp),
        )),
        Classified::Alert(alert) => Some(FlatRecord::Alert(extract_alert(id, alert, config))),
        Classified::Unrecognized => {
            debug!(entity_id = id, "Skipping entity without a known payload");
            None
        }
    }
}

/// Collects records and orders them by `EntityID`.
///
/// The sort is stable and compares ids byte-wise, so it is case-sensitive and
/// entities sharing an id keep their feed order.
pub fn assemble<I>(records: I) -> Vec<FlatRecord>
where
    I: IntoIterator<Item = Option<FlatRecord>>,
{
    let mut records: Vec<FlatRecord> = records.into_iter().flatten().collect();
    records.sort_by(|a, b| a.entity_id().cmp(b.entity_id()));
    records
}

/// Flattens every entity of `feed`. An empty result means there is nothing to
/// export; it is not an error.
pub fn flatten_feed(feed: &FeedMessage, config: &FlattenConfig) -> Vec<FlatRecord> {
    assemble(feed.entity.iter().map(|e| flatten_entity(e, config)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gtfs_rt::{Alert, FeedHeader, TripUpdate, VehiclePosition};

    fn trip_update(id: &str) -> FeedEntity {
        FeedEntity {
            id: id.to_string(),
            trip_update: Some(TripUpdate::default()),
            ..Default::default()
        }
    }

    fn vehicle(id: &str) -> FeedEntity {
        FeedEntity {
            id: id.to_string(),
            vehicle: Some(VehiclePosition::default()),
            ..Default::default()
        }
    }

    fn alert(id: &str) -> FeedEntity {
        FeedEntity {
            id: id.to_string(),
            alert: Some(Alert::default()),
            ..Default::default()
        }
    }

    fn feed(entity: Vec<FeedEntity>) -> FeedMessage {
        FeedMessage {
            header: FeedHeader {
                gtfs_realtime_version: "2.0".to_string(),
                ..Default::default()
            },
            entity,
        }
    }

    fn ids(records: &[FlatRecord]) -> Vec<&str> {
        records.iter().map(FlatRecord::entity_id).collect()
    }

    #[test]
    fn test_empty_feed_yields_no_records() {
        let records = flatten_feed(&feed(vec![]), &FlattenConfig::default());
        assert!(records.is_empty());
    }

    #[test]
    fn test_unrecognized_entities_are_dropped() {
        let empty = FeedEntity {
            id: "ghost".to_string(),
            ..Default::default()
        };
        let records = flatten_feed(
            &feed(vec![empty, trip_update("tu1")]),
            &FlattenConfig::default(),
        );
        assert_eq!(ids(&records), vec!["tu1"]);
    }

    #[test]
    fn test_records_sorted_case_sensitively_by_id() {
        let records = flatten_feed(
            &feed(vec![alert("b"), vehicle("a"), trip_update("B"), alert("10"), vehicle("2")]),
            &FlattenConfig::default(),
        );
        assert_eq!(ids(&records), vec!["10", "2", "B", "a", "b"]);
    }

    #[test]
    fn test_sort_is_stable_for_duplicate_ids() {
        let records = flatten_feed(
            &feed(vec![alert("x"), trip_update("x"), vehicle("x")]),
            &FlattenConfig::default(),
        );
        let kinds: Vec<_> = records.iter().map(FlatRecord::kind).collect();
        assert_eq!(
            kinds,
            vec![
                crate::classify::EntityKind::Alert,
                crate::classify::EntityKind::TripUpdate,
                crate::classify::EntityKind::VehiclePosition,
            ]
        );
    }

    #[test]
    fn test_assemble_skips_none() {
        let records = assemble(vec![None, flatten_entity(&alert("a"), &FlattenConfig::default()), None]);
        assert_eq!(ids(&records), vec!["a"]);
    }
}
