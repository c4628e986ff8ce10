use crate::shared::lenient::{f64_or_zero, label_or_empty};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label the backend uses for the precomputed per-property summary row.
pub const TOTAL_LABEL: &str = "TOTAL";

/// Is this label the reserved summary-row marker?
pub fn is_total_label(label: &str) -> bool {
    label.trim().eq_ignore_ascii_case(TOTAL_LABEL)
}

/// Occupancy report produced by the processing backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OccupancyResult {
    #[serde(default)]
    pub general_stats: GeneralStats,
    /// Rows per property name, one row per nationality plus a `TOTAL` row
    #[serde(default)]
    pub by_property: BTreeMap<String, Vec<NationalityRow>>,
}

impl OccupancyResult {
    /// Property names in display order
    pub fn properties(&self) -> Vec<String> {
        self.by_property.keys().cloned().collect()
    }

    /// Precomputed summary row for a property, if the backend sent one
    pub fn total_row(&self, property: &str) -> Option<&NationalityRow> {
        self.by_property
            .get(property)?
            .iter()
            .find(|row| is_total_label(&row.nationality))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralStats {
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub total_guests: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub total_nights: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub total_reservations: f64,
}

/// One nationality line of a property sheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NationalityRow {
    #[serde(default, deserialize_with = "label_or_empty")]
    pub nationality: String,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub total_nights: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub unique_guests: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub person_nights: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub total_people: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "general_stats": {"total_guests": 42, "total_nights": 120, "total_reservations": 17},
        "by_property": {
            "Angra": [
                {"nationality": "France", "unique_guests": 3, "total_people": 4, "total_nights": 10, "person_nights": 30},
                {"nationality": "TOTAL", "unique_guests": 3, "total_people": 4, "total_nights": 10, "person_nights": 30},
                {"nationality": "", "unique_guests": "", "total_people": "", "total_nights": "", "person_nights": ""}
            ],
            "Fuzeta": []
        }
    }"#;

    #[test]
    fn test_parse_occupancy_with_blank_separator_row() {
        let result: OccupancyResult = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(result.general_stats.total_guests, 42.0);
        assert_eq!(result.properties(), vec!["Angra".to_string(), "Fuzeta".to_string()]);

        let angra = &result.by_property["Angra"];
        assert_eq!(angra.len(), 3);
        assert_eq!(angra[2], NationalityRow::default());
    }

    #[test]
    fn test_total_row_lookup() {
        let result: OccupancyResult = serde_json::from_str(SAMPLE).unwrap();
        let total = result.total_row("Angra").unwrap();
        assert_eq!(total.total_nights, 10.0);
        assert!(result.total_row("Fuzeta").is_none());
        assert!(result.total_row("Unknown").is_none());
    }

    #[test]
    fn test_is_total_label() {
        assert!(is_total_label("TOTAL"));
        assert!(is_total_label(" total "));
        assert!(!is_total_label("Totally Portugal"));
        assert!(!is_total_label(""));
    }
}
