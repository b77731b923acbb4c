use super::cell;
use crate::gtfs_rt::VehiclePosition;
use crate::names::vehicle_stop_status_name;
use crate::record::VehiclePositionRecord;

/// Flattens a vehicle position into a [`VehiclePositionRecord`].
///
/// Descriptor sub-fields are only filled when both the descriptor and the
/// sub-field are present. Latitude and longitude come as a pair with the
/// position block; bearing and speed are optional within it.
pub fn extract_vehicle_position(
    entity_id: &str,
    vehicle: &VehiclePosition,
) -> VehiclePositionRecord {
    let trip = vehicle.trip.as_ref();
    let descriptor = vehicle.vehicle.as_ref();
    let position = vehicle.position.as_ref();

    VehiclePositionRecord {
        entity_id: entity_id.to_string(),
        trip_id: cell(trip.and_then(|t| t.trip_id.as_deref())),
        route_id: cell(trip.and_then(|t| t.route_id.as_deref())),
        vehicle_id: cell(descriptor.and_then(|d| d.id.as_deref())),
        vehicle_label: cell(descriptor.and_then(|d| d.label.as_deref())),
        latitude: cell(position.map(|p| p.latitude)),
        longitude: cell(position.map(|p| p.longitude)),
        bearing: cell(position.and_then(|p| p.bearing)),
        speed: cell(position.and_then(|p| p.speed)),
        current_stop: cell(vehicle.stop_id.as_deref()),
        current_status: cell(vehicle_stop_status_name(vehicle.current_status)),
        timestamp: cell(vehicle.timestamp),
    }
}
