//! Track records as delivered by the REST layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::TrackError;

/// Read-only track record.
///
/// Every field is kept as raw JSON: the location fields come in several shapes and
/// a malformed one must not stop the rest of the record from being read. Unknown
/// fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Preferred start anchor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_location: Option<Value>,
    /// Generic location, used as start anchor when `startLocation` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_location: Option<Value>,
    /// Recorded route: `[{lat, lng}, ...]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<Value>,
    /// Recorded coordinates: `[[lng, lat], ...]` or location objects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Value>,
    /// Display fallback when nothing can be put on a map
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<Value>,
}

impl Track {
    /// Read a track from JSON text.
    ///
    /// Fails only when the text is not JSON or not a JSON object.
    ///
    /// ```rust
    /// use track_viewport::Track;
    ///
    /// let track = Track::from_json(r#"{"location": {"lat": 41.9, "lng": 12.5}, "likes": 3}"#).unwrap();
    /// assert!(track.location.is_some());
    /// assert!(Track::from_json("[1, 2]").is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, TrackError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Read a track from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, TrackError> {
        let kind = match value {
            Value::Object(_) => return Ok(serde_json::from_value(value)?),
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
        };
        Err(TrackError::NotAnObject(kind))
    }

    /// Raw start anchor: `startLocation`, or `location` when the former is absent.
    pub fn start_anchor(&self) -> Option<&Value> {
        self.start_location.as_ref().or(self.location.as_ref())
    }

    /// Raw end anchor.
    pub fn end_anchor(&self) -> Option<&Value> {
        self.end_location.as_ref()
    }

    /// City label, if present and not blank.
    pub fn city(&self) -> Option<&str> {
        self.city
            .as_ref()
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_reads_camel_case_fields() {
        let track = Track::from_json(
            r#"{
                "startLocation": {"type": "Point", "coordinates": [9.0, 45.0]},
                "endLocation": {"lat": 45.1, "lng": 9.2},
                "route": [{"lat": 45.0, "lng": 9.0}],
                "city": "Milano",
                "title": "Morning ride"
            }"#,
        )
        .unwrap();

        assert_eq!(
            track.start_location,
            Some(json!({"type": "Point", "coordinates": [9.0, 45.0]}))
        );
        assert_eq!(track.end_location, Some(json!({"lat": 45.1, "lng": 9.2})));
        assert!(track.route.is_some());
        assert!(track.coordinates.is_none());
        assert_eq!(track.city(), Some("Milano"));
    }

    #[test]
    fn test_malformed_fields_still_read() {
        let track = Track::from_json(r#"{"startLocation": 7, "route": "n/a", "city": 12}"#).unwrap();
        assert_eq!(track.start_location, Some(json!(7)));
        assert_eq!(track.route, Some(json!("n/a")));
        assert_eq!(track.city(), None);
    }

    #[test]
    fn test_null_fields_are_absent() {
        let track = Track::from_json(r#"{"startLocation": null, "location": {"lat": 1, "lng": 2}}"#).unwrap();
        assert!(track.start_location.is_none());
        assert_eq!(track.start_anchor(), Some(&json!({"lat": 1, "lng": 2})));
    }

    #[test]
    fn test_start_anchor_prefers_start_location() {
        let track = Track {
            start_location: Some(json!("garbage")),
            location: Some(json!({"lat": 1.0, "lng": 2.0})),
            ..Track::default()
        };
        // A present but malformed startLocation is not replaced by location
        assert_eq!(track.start_anchor(), Some(&json!("garbage")));
    }

    #[test]
    fn test_blank_city_is_absent() {
        let track = Track { city: Some(json!("   ")), ..Track::default() };
        assert_eq!(track.city(), None);

        let track = Track { city: Some(json!("  Roma ")), ..Track::default() };
        assert_eq!(track.city(), Some("Roma"));
    }

    #[test]
    fn test_rejects_non_objects() {
        assert!(matches!(Track::from_json("[]"), Err(TrackError::NotAnObject("an array"))));
        assert!(matches!(Track::from_json("null"), Err(TrackError::NotAnObject("null"))));
        assert!(matches!(Track::from_json("{not json"), Err(TrackError::Json(_))));
    }
}
