//! Per-kind flattening of feed payloads into [`FlatRecord`](crate::record::FlatRecord)s.
//!
//! Absent optional fields always become an empty string; extractors never
//! invent placeholder values like `0` or `N/A`.

mod alert;
mod text;
mod trip_update;
mod vehicle_position;

pub use alert::extract_alert;
pub use trip_update::extract_trip_update;
pub use vehicle_position::extract_vehicle_position;

use std::fmt::Display;

/// Separator between repeated items inside one cell.
pub const ITEM_SEPARATOR: &str = "; ";

/// Renders an optional value, or an empty string when it is absent.
pub(crate) fn cell<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
