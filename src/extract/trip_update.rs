use super::{ITEM_SEPARATOR, cell};
use crate::gtfs_rt::TripUpdate;
use crate::gtfs_rt::trip_update::StopTimeUpdate;
use crate::names::schedule_relationship_name;
use crate::record::TripUpdateRecord;

/// Flattens a trip update into a [`TripUpdateRecord`].
pub fn extract_trip_update(entity_id: &str, trip_update: &TripUpdate) -> TripUpdateRecord {
    let trip = &trip_update.trip;

    TripUpdateRecord {
        entity_id: entity_id.to_string(),
        trip_id: cell(trip.trip_id.as_deref()),
        route_id: cell(trip.route_id.as_deref()),
        schedule_relationship: schedule_relationship_name(trip.schedule_relationship)
            .to_string(),
        stop_updates: trip_update
            .stop_time_update
            .iter()
            .map(render_stop_time_update)
            .collect::<Vec<_>>()
            .join(ITEM_SEPARATOR),
        timestamp: cell(trip_update.timestamp),
    }
}

/// `stop_id:arrival-departure`, each part empty when absent.
fn render_stop_time_update(update: &StopTimeUpdate) -> String {
    let arrival = update.arrival.as_ref().and_then(|e| e.time);
    let departure = update.departure.as_ref().and_then(|e| e.time);
    format!(
        "{}:{}-{}",
        cell(update.stop_id.as_deref()),
        cell(arrival),
        cell(departure)
    )
}
