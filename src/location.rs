//! Location extraction.
//!
//! Resolves a single location-like JSON value into a [`GeoPoint`]. The REST layer
//! delivers locations in several shapes:
//!
//! - GeoJSON: `{"type": "Point", "coordinates": [lng, lat]}` (longitude first)
//! - Loose objects: `{"latitude"|"lat": .., "longitude"|"lng"|"long": ..}`
//! - Bare coordinate pairs inside trajectories: `[lng, lat]`
//!
//! Nothing here fails. Input that cannot be read as a location yields `None`.

use log::debug;
use serde_json::{Map, Value};
use crate::GeoPoint;

/// Latitude keys in priority order.
const LATITUDE_KEYS: [&str; 2] = ["latitude", "lat"];
/// Longitude keys in priority order.
const LONGITUDE_KEYS: [&str; 3] = ["longitude", "lng", "long"];

/// Resolve a location-like value to a point.
///
/// First match wins:
/// 1. GeoJSON `Point` with at least two coordinates: axes are swapped from
///    `[lng, lat]` into latitude/longitude. Unreadable coordinates give `None`; the
///    object's other keys are not consulted.
/// 2. Any other object: `latitude`/`lat` and `longitude`/`lng`/`long`, first present
///    key wins. A missing axis defaults to `0.0`.
/// 3. Anything else (null, numbers, strings, arrays): `None`.
///
/// Points outside the valid coordinate range are rejected.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use track_viewport::{extract_point, GeoPoint};
///
/// let geojson = json!({ "type": "Point", "coordinates": [12.5, 41.9] });
/// assert_eq!(extract_point(&geojson), Some(GeoPoint::new(41.9, 12.5)));
///
/// let loose = json!({ "lat": 41.9, "lng": 12.5 });
/// assert_eq!(extract_point(&loose), Some(GeoPoint::new(41.9, 12.5)));
///
/// assert_eq!(extract_point(&json!(null)), None);
/// ```
pub fn extract_point(raw: &Value) -> Option<GeoPoint> {
    let object = raw.as_object()?;
    let point = match geojson_coordinates(object) {
        Some(coordinates) => lng_lat(coordinates)?,
        None => loose_point(object),
    };
    checked(point)
}

/// Resolve a bare `[lng, lat]` pair (GeoJSON axis order).
///
/// Extra elements (altitude, timestamps) are ignored.
///
/// ```rust
/// use serde_json::json;
/// use track_viewport::{extract_pair, GeoPoint};
///
/// assert_eq!(extract_pair(&json!([9.0, 45.0])), Some(GeoPoint::new(45.0, 9.0)));
/// assert_eq!(extract_pair(&json!([9.0])), None);
/// ```
pub fn extract_pair(raw: &Value) -> Option<GeoPoint> {
    lng_lat(raw.as_array()?).and_then(checked)
}

/// Resolve one entry of a `coordinates` trajectory: arrays are read as `[lng, lat]`
/// pairs, objects go through [`extract_point`].
pub fn extract_entry(raw: &Value) -> Option<GeoPoint> {
    match raw {
        Value::Array(_) => extract_pair(raw),
        Value::Object(_) => extract_point(raw),
        _ => None,
    }
}

/// Resolve one entry of a recorded `route`. Route entries are `{lat, lng}` records:
/// only those two keys are read, with no GeoJSON axis swap. A missing key reads as `0.0`.
pub(crate) fn extract_route_entry(raw: &Value) -> Option<GeoPoint> {
    let object = raw.as_object()?;
    checked(GeoPoint::new(
        object.get("lat").and_then(coordinate).unwrap_or(0.0),
        object.get("lng").and_then(coordinate).unwrap_or(0.0),
    ))
}

/// Coordinates of a GeoJSON `Point` holding at least two entries. Such an object is
/// resolved from these coordinates alone, never from its other keys.
fn geojson_coordinates(object: &Map<String, Value>) -> Option<&[Value]> {
    if object.get("type")?.as_str()? != "Point" {
        return None;
    }
    object
        .get("coordinates")?
        .as_array()
        .map(Vec::as_slice)
        .filter(|coordinates| coordinates.len() >= 2)
}

/// Read `[lng, lat, ..]` into a point.
fn lng_lat(coordinates: &[Value]) -> Option<GeoPoint> {
    match coordinates {
        [lng, lat, ..] => Some(GeoPoint::new(coordinate(lat)?, coordinate(lng)?)),
        _ => None,
    }
}

fn loose_point(object: &Map<String, Value>) -> GeoPoint {
    GeoPoint::new(
        first_coordinate(object, &LATITUDE_KEYS).unwrap_or(0.0),
        first_coordinate(object, &LONGITUDE_KEYS).unwrap_or(0.0),
    )
}

fn first_coordinate(object: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| object.get(*key).and_then(coordinate))
}

/// Read a coordinate from a JSON number or a numeric string.
fn coordinate(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|c| c.is_finite())
}

fn checked(point: GeoPoint) -> Option<GeoPoint> {
    if point.is_valid() {
        Some(point)
    } else {
        debug!(
            "[LocationExtractor] Dropping out-of-range point ({}, {})",
            point.latitude, point.longitude
        );
        None
    }
}
