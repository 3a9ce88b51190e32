//! Sighting record types.
//!
//! Serialized key names are fixed by the map front-end: the mixed-case keys
//! (`Latitude`, `SpecimenNumber`, ...) come from the upstream USGS export and
//! the two snake_case exceptions (`sighting_id`, `record_type`) from the
//! original store schema. Renames here are load-bearing, not style.

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A single observation record with the full field set as stored.
///
/// Descriptive fields are nullable in the store; the date is kept as separate
/// integer components, never combined into a date type.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Sighting {
    pub sighting_id: i32,
    #[serde(rename = "SpecimenNumber")]
    pub specimen_number: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "State")]
    pub state: Option<String>,
    #[serde(rename = "Locality")]
    pub locality: Option<String>,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Source")]
    pub source: Option<String>,
    #[serde(rename = "Accuracy")]
    pub accuracy: Option<String>,
    #[serde(rename = "DrainageName")]
    pub drainage_name: Option<String>,
    #[serde(rename = "HUC8Number")]
    pub huc8_number: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<i32>,
    #[serde(rename = "Month")]
    pub month: Option<i32>,
    #[serde(rename = "Day")]
    pub day: Option<i32>,
    #[serde(rename = "Status")]
    pub status: Option<String>,
    #[serde(rename = "Comments")]
    pub comments: Option<String>,
    pub record_type: Option<String>,
}

/// Marker projection returned by the full-list query: one representative per
/// distinct (latitude, longitude, year, month, day) group.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct SightingSummary {
    pub sighting_id: i32,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

/// A coordinate group annotated with its great-circle distance (nautical
/// miles, 2-decimal) from a caller-supplied reference point. Derived per
/// query, never persisted.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NearestSighting {
    pub sighting_id: i32,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    pub distance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sighting() -> Sighting {
        Sighting {
            sighting_id: 7,
            specimen_number: Some("23310".into()),
            country: Some("USA".into()),
            state: Some("FL".into()),
            locality: Some("Atlantic Ocean, off Palm Beach".into()),
            latitude: 26.7,
            longitude: -80.02,
            source: Some("REEF".into()),
            accuracy: Some("Accurate".into()),
            drainage_name: Some("Florida Southeast Coast".into()),
            huc8_number: Some("03090206".into()),
            year: Some(2010),
            month: Some(6),
            day: Some(14),
            status: Some("established".into()),
            comments: Some("speared on reef ledge".into()),
            record_type: Some("verified".into()),
        }
    }

    #[test]
    fn detail_wire_keys_match_front_end_contract() {
        let value = serde_json::to_value(sample_sighting()).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        let mut expected = vec![
            "sighting_id",
            "SpecimenNumber",
            "Country",
            "State",
            "Locality",
            "Latitude",
            "Longitude",
            "Source",
            "Accuracy",
            "DrainageName",
            "HUC8Number",
            "Year",
            "Month",
            "Day",
            "Status",
            "Comments",
            "record_type",
        ];
        expected.sort_unstable();
        assert_eq!(keys, expected);
    }

    #[test]
    fn summary_wire_keys_match_front_end_contract() {
        let summary = SightingSummary {
            sighting_id: 1,
            latitude: 27.0,
            longitude: -80.0,
        };
        let value = serde_json::to_value(summary).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"sighting_id": 1, "Latitude": 27.0, "Longitude": -80.0})
        );
    }

    #[test]
    fn nearest_wire_keys_include_lowercase_distance() {
        let nearest = NearestSighting {
            sighting_id: 3,
            latitude: 26.5,
            longitude: -79.9,
            distance: 12.34,
        };
        let value = serde_json::to_value(nearest).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "sighting_id": 3,
                "Latitude": 26.5,
                "Longitude": -79.9,
                "distance": 12.34
            })
        );
    }
}
