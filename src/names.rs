//! Enum-to-name resolution for the GTFS-RT enums that end up in records.
//!
//! Names come from the generated `as_str_name()` tables, so they always match
//! the canonical names in `proto/gtfs-realtime.proto`. A raw value the schema
//! does not define is treated like an unset field, the same way a proto2
//! decoder files it away as an unknown field.

use crate::gtfs_rt::alert::{Cause, Effect};
use crate::gtfs_rt::trip_descriptor::ScheduleRelationship;
use crate::gtfs_rt::vehicle_position::VehicleStopStatus;

/// Feed-level default for a trip without an explicit schedule relationship.
pub const DEFAULT_SCHEDULE_RELATIONSHIP: &str = "SCHEDULED";

/// Returns the name of a trip schedule relationship, or `"SCHEDULED"` when
/// the field is absent.
pub fn schedule_relationship_name(raw: Option<i32>) -> &'static str {
    raw.and_then(|v| ScheduleRelationship::try_from(v).ok())
        .map(|v| v.as_str_name())
        .unwrap_or(DEFAULT_SCHEDULE_RELATIONSHIP)
}

/// Returns the name of a vehicle stop status, or `None` when absent.
pub fn vehicle_stop_status_name(raw: Option<i32>) -> Option<&'static str> {
    raw.and_then(|v| VehicleStopStatus::try_from(v).ok())
        .map(|v| v.as_str_name())
}

/// Returns the name of an alert cause; unset means `UNKNOWN_CAUSE`.
pub fn cause_name(raw: Option<i32>) -> &'static str {
    raw.and_then(|v| Cause::try_from(v).ok())
        .unwrap_or(Cause::UnknownCause)
        .as_str_name()
}

/// Returns the name of an alert effect; unset means `UNKNOWN_EFFECT`.
pub fn effect_name(raw: Option<i32>) -> &'static str {
    raw.and_then(|v| Effect::try_from(v).ok())
        .unwrap_or(Effect::UnknownEffect)
        .as_str_name()
}
