use super::text::select_text;
use super::{ITEM_SEPARATOR, cell};
use crate::config::FlattenConfig;
use crate::gtfs_rt::{Alert, EntitySelector, TimeRange};
use crate::names::{cause_name, effect_name};
use crate::record::AlertRecord;

/// Separator between the populated fields of one informed entity.
const FIELD_SEPARATOR: &str = " | ";

/// Flattens an alert into an [`AlertRecord`], picking header and description
/// text in `config.preferred_language`.
pub fn extract_alert(entity_id: &str, alert: &Alert, config: &FlattenConfig) -> AlertRecord {
    let language = config.preferred_language.as_str();

    AlertRecord {
        entity_id: entity_id.to_string(),
        active_periods: alert
            .active_period
            .iter()
            .map(render_active_period)
            .collect::<Vec<_>>()
            .join(ITEM_SEPARATOR),
        informed_entities: alert
            .informed_entity
            .iter()
            .map(render_informed_entity)
            .collect::<Vec<_>>()
            .join(ITEM_SEPARATOR),
        cause: cause_name(alert.cause).to_string(),
        effect: effect_name(alert.effect).to_string(),
        header_text: select_text(alert.header_text.as_ref(), language),
        description_text: select_text(alert.description_text.as_ref(), language),
    }
}

fn render_active_period(period: &TimeRange) -> String {
    format!("{}-{}", cell(period.start), cell(period.end))
}

/// `key=value` for each populated field only, joined with `" | "`.
fn render_informed_entity(selector: &EntitySelector) -> String {
    [
        ("route_id", &selector.route_id),
        ("stop_id", &selector.stop_id),
        ("agency_id", &selector.agency_id),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.as_ref().map(|v| format!("{key}={v}")))
    .collect::<Vec<_>>()
    .join(FIELD_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gtfs_rt::TranslatedString;
    use crate::gtfs_rt::translated_string::Translation;

    fn translated(pairs: &[(&str, &str)]) -> Option<TranslatedString> {
        Some(TranslatedString {
            translation: pairs
                .iter()
                .map(|(lang, text)| Translation {
                    text: text.to_string(),
                    language: Some(lang.to_string()),
                })
                .collect(),
        })
    }

    fn selector(route: Option<&str>, stop: Option<&str>, agency: Option<&str>) -> EntitySelector {
        EntitySelector {
            route_id: route.map(str::to_string),
            stop_id: stop.map(str::to_string),
            agency_id: agency.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_alert_scenario() {
        let alert = Alert {
            active_period: vec![TimeRange {
                start: Some(100),
                end: Some(200),
            }],
            informed_entity: vec![selector(Some("R1"), None, None)],
            cause: Some(1),
            effect: Some(1),
            header_text: translated(&[("en", "Hi"), ("he", "Shalom")]),
            description_text: translated(&[("en", "Details")]),
            ..Default::default()
        };

        let record = extract_alert("a1", &alert, &FlattenConfig::default());
        assert_eq!(
            record,
            AlertRecord {
                entity_id: "a1".to_string(),
                active_periods: "100-200".to_string(),
                informed_entities: "route_id=R1".to_string(),
                cause: "UNKNOWN_CAUSE".to_string(),
                effect: "NO_SERVICE".to_string(),
                header_text: "Shalom".to_string(),
                description_text: "Details".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_alert_uses_enum_defaults() {
        let record = extract_alert("a0", &Alert::default(), &FlattenConfig::default());
        assert_eq!(record.active_periods, "");
        assert_eq!(record.informed_entities, "");
        assert_eq!(record.cause, "UNKNOWN_CAUSE");
        assert_eq!(record.effect, "UNKNOWN_EFFECT");
        assert_eq!(record.header_text, "");
        assert_eq!(record.description_text, "");
    }

    #[test]
    fn test_open_ended_active_periods() {
        let alert = Alert {
            active_period: vec![
                TimeRange {
                    start: Some(100),
                    end: None,
                },
                TimeRange {
                    start: None,
                    end: Some(500),
                },
            ],
            ..Default::default()
        };

        let record = extract_alert("a2", &alert, &FlattenConfig::default());
        assert_eq!(record.active_periods, "100-; -500");
    }

    #[test]
    fn test_informed_entities_omit_missing_keys() {
        let alert = Alert {
            informed_entity: vec![
                selector(Some("R1"), Some("S1"), Some("AG")),
                selector(None, Some("S2"), None),
                selector(None, None, None),
                selector(None, None, Some("AG")),
            ],
            ..Default::default()
        };

        let record = extract_alert("a3", &alert, &FlattenConfig::default());
        assert_eq!(
            record.informed_entities,
            "route_id=R1 | stop_id=S1 | agency_id=AG; stop_id=S2; ; agency_id=AG"
        );
    }

    #[test]
    fn test_text_selection_follows_config() {
        let alert = Alert {
            header_text: translated(&[("he", "Shalom"), ("en", "Hi")]),
            ..Default::default()
        };

        let record = extract_alert("a4", &alert, &FlattenConfig::with_language("en"));
        assert_eq!(record.header_text, "Hi");
    }
}
