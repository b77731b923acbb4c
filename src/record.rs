//! Flat, all-string records produced from feed entities.
//!
//! Every column is a `String`; an empty string means the field was absent in
//! the feed. Each entity kind has its own fixed column set.

use serde::Serialize;

use crate::classify::EntityKind;

pub const TRIP_UPDATE_COLUMNS: &[&str] = &[
    "EntityID",
    "TripID",
    "RouteID",
    "ScheduleRelationship",
    "StopUpdates",
    "Timestamp",
];

pub const VEHICLE_POSITION_COLUMNS: &[&str] = &[
    "EntityID",
    "TripID",
    "RouteID",
    "VehicleID",
    "VehicleLabel",
    "Latitude",
    "Longitude",
    "Bearing",
    "Speed",
    "CurrentStop",
    "CurrentStatus",
    "Timestamp",
];

pub const ALERT_COLUMNS: &[&str] = &[
    "EntityID",
    "ActivePeriods",
    "InformedEntities",
    "Cause",
    "Effect",
    "HeaderText",
    "DescriptionText",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TripUpdateRecord {
    #[serde(rename = "EntityID")]
    pub entity_id: String,
    #[serde(rename = "TripID")]
    pub trip_id: String,
    #[serde(rename = "RouteID")]
    pub route_id: String,
    #[serde(rename = "ScheduleRelationship")]
    pub schedule_relationship: String,
    #[serde(rename = "StopUpdates")]
    pub stop_updates: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VehiclePositionRecord {
    #[serde(rename = "EntityID")]
    pub entity_id: String,
    #[serde(rename = "TripID")]
    pub trip_id: String,
    #[serde(rename = "RouteID")]
    pub route_id: String,
    #[serde(rename = "VehicleID")]
    pub vehicle_id: String,
    #[serde(rename = "VehicleLabel")]
    pub vehicle_label: String,
    #[serde(rename = "Latitude")]
    pub latitude: String,
    #[serde(rename = "Longitude")]
    pub longitude: String,
    #[serde(rename = "Bearing")]
    pub bearing: String,
    #[serde(rename = "Speed")]
    pub speed: String,
    #[serde(rename = "CurrentStop")]
    pub current_stop: String,
    #[serde(rename = "CurrentStatus")]
    pub current_status: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlertRecord {
    #[serde(rename = "EntityID")]
    pub entity_id: String,
    #[serde(rename = "ActivePeriods")]
    pub active_periods: String,
    #[serde(rename = "InformedEntities")]
    pub informed_entities: String,
    #[serde(rename = "Cause")]
    pub cause: String,
    #[serde(rename = "Effect")]
    pub effect: String,
    #[serde(rename = "HeaderText")]
    pub header_text: String,
    #[serde(rename = "DescriptionText")]
    pub description_text: String,
}

/// One flattened entity.
///
/// Serializes untagged, so a JSON export is a plain object keyed by column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FlatRecord {
    TripUpdate(TripUpdateRecord),
    VehiclePosition(VehiclePositionRecord),
    Alert(AlertRecord),
}

impl FlatRecord {
    pub fn kind(&self) -> EntityKind {
        match self {
            FlatRecord::TripUpdate(_) => EntityKind::TripUpdate,
            FlatRecord::VehiclePosition(_) => EntityKind::VehiclePosition,
            FlatRecord::Alert(_) => EntityKind::Alert,
        }
    }

    pub fn entity_id(&self) -> &str {
        match self {
            FlatRecord::TripUpdate(r) => &r.entity_id,
            FlatRecord::VehiclePosition(r) => &r.entity_id,
            FlatRecord::Alert(r) => &r.entity_id,
        }
    }

    /// The fixed column set for this record's kind.
    pub fn columns(&self) -> &'static [&'static str] {
        columns_for(self.kind())
    }

    /// Cell values in the same order as [`FlatRecord::columns`].
    pub fn values(&self) -> Vec<&str> {
        match self {
            FlatRecord::TripUpdate(r) => vec![
                r.entity_id.as_str(),
                r.trip_id.as_str(),
                r.route_id.as_str(),
                r.schedule_relationship.as_str(),
                r.stop_updates.as_str(),
                r.timestamp.as_str(),
            ],
            FlatRecord::VehiclePosition(r) => vec![
                r.entity_id.as_str(),
                r.trip_id.as_str(),
                r.route_id.as_str(),
                r.vehicle_id.as_str(),
                r.vehicle_label.as_str(),
                r.latitude.as_str(),
                r.longitude.as_str(),
                r.bearing.as_str(),
                r.speed.as_str(),
                r.current_stop.as_str(),
                r.current_status.as_str(),
                r.timestamp.as_str(),
            ],
            FlatRecord::Alert(r) => vec![
                r.entity_id.as_str(),
                r.active_periods.as_str(),
                r.informed_entities.as_str(),
                r.cause.as_str(),
                r.effect.as_str(),
                r.header_text.as_str(),
                r.description_text.as_str(),
            ],
        }
    }

    /// Looks up a cell by column name. `None` means the column does not
    /// belong to this kind, which is different from an empty cell.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns()
            .iter()
            .position(|c| *c == column)
            .map(|i| self.values()[i])
    }
}

pub fn columns_for(kind: EntityKind) -> &'static [&'static str] {
    match kind {
        EntityKind::TripUpdate => TRIP_UPDATE_COLUMNS,
        EntityKind::VehiclePosition => VEHICLE_POSITION_COLUMNS,
        EntityKind::Alert => ALERT_COLUMNS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_line_up_with_columns() {
        let records = [
            FlatRecord::TripUpdate(TripUpdateRecord::default()),
            FlatRecord::VehiclePosition(VehiclePositionRecord::default()),
            FlatRecord::Alert(AlertRecord::default()),
        ];
        for r in &records {
            assert_eq!(r.columns().len(), r.values().len());
        }
    }

    #[test]
    fn test_get_by_column() {
        let record = FlatRecord::Alert(AlertRecord {
            entity_id: "a1".to_string(),
            cause: "STRIKE".to_string(),
            ..Default::default()
        });
        assert_eq!(record.get("EntityID"), Some("a1"));
        assert_eq!(record.get("Cause"), Some("STRIKE"));
        assert_eq!(record.get("HeaderText"), Some(""));
        assert_eq!(record.get("Latitude"), None);
    }

    #[test]
    fn test_json_keys_follow_column_names() {
        let record = FlatRecord::TripUpdate(TripUpdateRecord {
            entity_id: "tu1".to_string(),
            ..Default::default()
        });
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        for column in TRIP_UPDATE_COLUMNS {
            assert!(keys.contains(column), "missing {column}");
        }
        assert_eq!(object["EntityID"], "tu1");
    }
}
