//! # Path Synthesis
//!
//! Produces the ordered point sequence drawn as a track's route line.
//!
//! ## Algorithm
//! First satisfied rule wins:
//! 1. Recorded `route` (`[{lat, lng}, ...]`, 2+ entries): taken verbatim
//! 2. Recorded `coordinates` (`[[lng, lat], ...]` or location objects, 2+ entries):
//!    resolved entry by entry, unreadable entries dropped
//! 3. Anchors: start and end give `[start, offset midpoint, end]`; a start alone gives a
//!    small closed loop around it; nothing gives an empty path
//!
//! Rule 3 is a rendering fallback for tracks that never captured a trajectory. It makes
//! no claim about where the activity actually went.

use log::debug;
use serde::{Deserialize, Serialize};
use crate::geo_utils::{closed_loop, midpoint, offset};
use crate::location::{extract_entry, extract_point, extract_route_entry};
use crate::{GeoPoint, Track};

/// Which rule produced a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum PathSource {
    /// Recorded `route` field
    Route,
    /// Recorded `coordinates` field
    Coordinates,
    /// Synthesized between start and end anchors
    StartEnd,
    /// Synthesized loop around the start anchor
    StartLoop,
    /// Nothing usable
    #[default]
    Empty,
}

impl PathSource {
    /// True when the path comes from recorded trajectory data.
    pub fn is_recorded(&self) -> bool {
        matches!(self, PathSource::Route | PathSource::Coordinates)
    }
}

/// Configuration for anchor-based synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct SynthesisConfig {
    /// Latitude offset added to the start/end midpoint so the line renders curved.
    /// Default: 0.002 degrees (~200m)
    pub midpoint_lat_offset: f64,

    /// Radius of the loop drawn around a lone start anchor.
    /// Default: 0.001 degrees (~100m)
    pub loop_radius: f64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            midpoint_lat_offset: 0.002,
            loop_radius: 0.001,
        }
    }
}

/// Build the path for a track.
///
/// # Example
/// ```
/// use serde_json::json;
/// use track_viewport::{synthesize_path, SynthesisConfig, Track};
///
/// let track = Track {
///     start_location: Some(json!({ "lat": 45.0, "lng": 9.0 })),
///     ..Track::default()
/// };
///
/// let path = synthesize_path(&track, &SynthesisConfig::default());
/// assert_eq!(path.len(), 6);
/// assert_eq!(path.first(), path.last());
/// ```
pub fn synthesize_path(track: &Track, config: &SynthesisConfig) -> Vec<GeoPoint> {
    synthesize_path_with_source(track, config).0
}

/// Build the path for a track and report which rule produced it.
pub fn synthesize_path_with_source(
    track: &Track,
    config: &SynthesisConfig,
) -> (Vec<GeoPoint>, PathSource) {
    if let Some(points) = recorded_route(track) {
        return (points, PathSource::Route);
    }

    if let Some(points) = recorded_coordinates(track) {
        return (points, PathSource::Coordinates);
    }

    let start = track.start_anchor().and_then(extract_point);
    let end = track.end_anchor().and_then(extract_point);

    match (start, end) {
        (Some(start), Some(end)) => {
            let bend = offset(&midpoint(&start, &end), config.midpoint_lat_offset, 0.0);
            (vec![start, bend, end], PathSource::StartEnd)
        }
        (Some(start), None) => (closed_loop(&start, config.loop_radius), PathSource::StartLoop),
        _ => (Vec::new(), PathSource::Empty),
    }
}

/// Rule 1: `route` entries are `{lat, lng}` records, mapped in order.
fn recorded_route(track: &Track) -> Option<Vec<GeoPoint>> {
    let entries = track.route.as_ref()?.as_array()?;
    if entries.len() < 2 {
        return None;
    }

    let points: Vec<GeoPoint> = entries.iter().filter_map(extract_route_entry).collect();
    if points.len() < 2 {
        debug!(
            "[PathSynthesizer] Route has {} entries but only {} readable points, skipping",
            entries.len(),
            points.len()
        );
        return None;
    }
    Some(points)
}

/// Rule 2: `coordinates` entries are GeoJSON-order pairs or location objects.
fn recorded_coordinates(track: &Track) -> Option<Vec<GeoPoint>> {
    let entries = track.coordinates.as_ref()?.as_array()?;
    if entries.len() < 2 {
        return None;
    }

    let points: Vec<GeoPoint> = entries.iter().filter_map(extract_entry).collect();
    if points.is_empty() {
        debug!(
            "[PathSynthesizer] No readable points among {} coordinates, using anchors",
            entries.len()
        );
        return None;
    }
    Some(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn anchors_track() -> Track {
        Track {
            start_location: Some(json!({ "type": "Point", "coordinates": [9.0, 45.0] })),
            end_location: Some(json!({ "lat": 45.1, "lng": 9.2 })),
            ..Track::default()
        }
    }

    #[test]
    fn test_route_taken_verbatim() {
        let track = Track {
            route: Some(json!([{ "lat": 41.9, "lng": 12.5 }, { "lat": 41.91, "lng": 12.51 }])),
            coordinates: Some(json!([[0.0, 0.0], [1.0, 1.0]])),
            ..anchors_track()
        };

        let (path, source) = synthesize_path_with_source(&track, &SynthesisConfig::default());
        assert_eq!(source, PathSource::Route);
        assert_eq!(path, vec![GeoPoint::new(41.9, 12.5), GeoPoint::new(41.91, 12.51)]);
    }

    #[test]
    fn test_route_ignores_latitude_longitude_keys() {
        let track = Track {
            route: Some(json!([
                { "lat": 41.9, "lng": 12.5, "latitude": 10.0, "longitude": 20.0 },
                { "lat": 41.91, "lng": 12.51 }
            ])),
            ..Track::default()
        };

        let (path, source) = synthesize_path_with_source(&track, &SynthesisConfig::default());
        assert_eq!(source, PathSource::Route);
        assert_eq!(path, vec![GeoPoint::new(41.9, 12.5), GeoPoint::new(41.91, 12.51)]);
    }

    #[test]
    fn test_single_entry_route_is_ignored() {
        let track = Track {
            route: Some(json!([{ "lat": 41.9, "lng": 12.5 }])),
            ..anchors_track()
        };
        let (_, source) = synthesize_path_with_source(&track, &SynthesisConfig::default());
        assert_eq!(source, PathSource::StartEnd);
    }

    #[test]
    fn test_unreadable_route_falls_through() {
        let track = Track {
            route: Some(json!(["a", "b", { "lat": 41.9, "lng": 12.5 }])),
            coordinates: Some(json!([[12.5, 41.9], [12.51, 41.91]])),
            ..Track::default()
        };
        let (path, source) = synthesize_path_with_source(&track, &SynthesisConfig::default());
        assert_eq!(source, PathSource::Coordinates);
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_coordinates_swap_pairs_and_read_objects() {
        let track = Track {
            coordinates: Some(json!([
                [12.5, 41.9],
                { "lat": 41.91, "lng": 12.51 },
                { "type": "Point", "coordinates": [12.52, 41.92] }
            ])),
            ..Track::default()
        };

        let (path, source) = synthesize_path_with_source(&track, &SynthesisConfig::default());
        assert_eq!(source, PathSource::Coordinates);
        assert_eq!(
            path,
            vec![
                GeoPoint::new(41.9, 12.5),
                GeoPoint::new(41.91, 12.51),
                GeoPoint::new(41.92, 12.52),
            ]
        );
    }

    #[test]
    fn test_coordinates_drop_unreadable_entries() {
        let track = Track {
            coordinates: Some(json!([[12.5, 41.9], null, "x", [12.5], [12.6, 41.8]])),
            ..Track::default()
        };
        let path = synthesize_path(&track, &SynthesisConfig::default());
        assert_eq!(path, vec![GeoPoint::new(41.9, 12.5), GeoPoint::new(41.8, 12.6)]);
    }

    #[test]
    fn test_coordinates_single_survivor_is_kept() {
        let track = Track {
            coordinates: Some(json!([[12.5, 41.9], null])),
            ..anchors_track()
        };
        let (path, source) = synthesize_path_with_source(&track, &SynthesisConfig::default());
        assert_eq!(source, PathSource::Coordinates);
        assert_eq!(path, vec![GeoPoint::new(41.9, 12.5)]);
    }

    #[test]
    fn test_coordinates_with_no_survivors_use_anchors() {
        let track = Track {
            coordinates: Some(json!([null, "x"])),
            ..anchors_track()
        };
        let (path, source) = synthesize_path_with_source(&track, &SynthesisConfig::default());
        assert_eq!(source, PathSource::StartEnd);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_start_end_curve() {
        let (path, source) = synthesize_path_with_source(&anchors_track(), &SynthesisConfig::default());

        assert_eq!(source, PathSource::StartEnd);
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], GeoPoint::new(45.0, 9.0));
        assert_eq!(path[2], GeoPoint::new(45.1, 9.2));
        assert!(approx_eq(path[1].latitude, 45.05 + 0.002, 1e-9));
        assert!(approx_eq(path[1].longitude, 9.1, 1e-9));
    }

    #[test]
    fn test_location_used_when_start_location_absent() {
        let track = Track {
            location: Some(json!({ "latitude": 45.0, "longitude": 9.0 })),
            ..Track::default()
        };
        let (path, source) = synthesize_path_with_source(&track, &SynthesisConfig::default());
        assert_eq!(source, PathSource::StartLoop);
        assert_eq!(path[0], GeoPoint::new(45.0, 9.0));
    }

    #[test]
    fn test_start_only_loop() {
        let start = GeoPoint::new(45.0, 9.0);
        let track = Track {
            start_location: Some(json!({ "lat": 45.0, "lng": 9.0 })),
            end_location: Some(json!(null)),
            ..Track::default()
        };

        let (path, source) = synthesize_path_with_source(&track, &SynthesisConfig::default());
        assert_eq!(source, PathSource::StartLoop);
        assert_eq!(path.len(), 6);
        assert_eq!(path[0], start);
        assert_eq!(path[5], start);
        assert!(approx_eq(path[1].latitude, 45.001, 1e-9));
        assert!(approx_eq(path[2].longitude, 9.001, 1e-9));
        assert!(approx_eq(path[3].latitude, 44.999, 1e-9));
        assert!(approx_eq(path[4].longitude, 8.999, 1e-9));
    }

    #[test]
    fn test_end_only_is_empty() {
        let track = Track {
            end_location: Some(json!({ "lat": 45.1, "lng": 9.2 })),
            ..Track::default()
        };
        let (path, source) = synthesize_path_with_source(&track, &SynthesisConfig::default());
        assert!(path.is_empty());
        assert_eq!(source, PathSource::Empty);
    }

    #[test]
    fn test_nothing_is_empty() {
        let (path, source) = synthesize_path_with_source(&Track::default(), &SynthesisConfig::default());
        assert!(path.is_empty());
        assert_eq!(source, PathSource::Empty);
    }

    #[test]
    fn test_custom_config() {
        let config = SynthesisConfig { midpoint_lat_offset: 0.0, loop_radius: 0.01 };
        let path = synthesize_path(&anchors_track(), &config);
        assert!(approx_eq(path[1].latitude, 45.05, 1e-9));
    }

    #[test]
    fn test_deterministic() {
        let track = anchors_track();
        let config = SynthesisConfig::default();
        assert_eq!(synthesize_path(&track, &config), synthesize_path(&track, &config));
    }

    #[test]
    fn test_is_recorded() {
        assert!(PathSource::Route.is_recorded());
        assert!(PathSource::Coordinates.is_recorded());
        assert!(!PathSource::StartEnd.is_recorded());
        assert!(!PathSource::Empty.is_recorded());
    }
}
