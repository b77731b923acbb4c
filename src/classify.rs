//! Sorting feed entities into the three payload kinds we flatten.

use serde::Serialize;

use crate::gtfs_rt::{Alert, FeedEntity, TripUpdate, VehiclePosition};

/// The kind of payload an entity carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    TripUpdate,
    VehiclePosition,
    Alert,
}

impl EntityKind {
    /// Short label used in file names and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::TripUpdate => "trip_update",
            EntityKind::VehiclePosition => "vehicle_position",
            EntityKind::Alert => "alert",
        }
    }
}

/// An entity paired with a borrow of the payload it was classified by.
#[derive(Debug, Clone, Copy)]
pub enum Classified<'a> {
    TripUpdate(&'a TripUpdate),
    VehiclePosition(&'a VehiclePosition),
    Alert(&'a Alert),
    Unrecognized,
}

impl Classified<'_> {
    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            Classified::TripUpdate(_) => Some(EntityKind::TripUpdate),
            Classified::VehiclePosition(_) => Some(EntityKind::VehiclePosition),
            Classified::Alert(_) => Some(EntityKind::Alert),
            Classified::Unrecognized => None,
        }
    }
}

/// Picks the payload an entity carries.
///
/// The wire schema keeps the three payloads as separate optional fields, so a
/// malformed entity could carry more than one. Exactly one branch is taken,
/// checked in the order trip update, vehicle position, alert.
pub fn classify(entity: &FeedEntity) -> Classified<'_> {
    if let Some(trip_update) = &entity.trip_update {
        Classified::TripUpdate(trip_update)
    } else if let Some(vehicle) = &entity.vehicle {
        Classified::VehiclePosition(vehicle)
    } else if let Some(alert) = &entity.alert {
        Classified::Alert(alert)
    } else {
        Classified::Unrecognized
    }
}
