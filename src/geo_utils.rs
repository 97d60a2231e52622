//! # Geographic Utilities
//!
//! Small coordinate helpers shared by path synthesis and viewport fitting.
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`midpoint`] | Arithmetic midpoint of two points |
//! | [`offset`] | Shift a point by degree deltas, staying inside valid ranges |
//! | [`closed_loop`] | Cardinal loop around a point, closed back at the start |
//! | [`to_line_string`] | Convert a path into a `geo::LineString` |
//!
//! ## Coordinate System
//!
//! All functions work on WGS84 degrees and treat them as planar. The offsets used here
//! are a few hundred meters at most, where the flat approximation is invisible on a map.

use geo::LineString;
use crate::GeoPoint;

/// Arithmetic midpoint of two points.
///
/// # Example
///
/// ```rust
/// use track_viewport::{GeoPoint, geo_utils};
///
/// let mid = geo_utils::midpoint(&GeoPoint::new(45.0, 9.0), &GeoPoint::new(45.2, 9.4));
/// assert!((mid.latitude - 45.1).abs() < 1e-9);
/// assert!((mid.longitude - 9.2).abs() < 1e-9);
/// ```
#[inline]
pub fn midpoint(a: &GeoPoint, b: &GeoPoint) -> GeoPoint {
    GeoPoint::new(
        (a.latitude + b.latitude) / 2.0,
        (a.longitude + b.longitude) / 2.0,
    )
}

/// Shift a point by `d_lat`/`d_lng` degrees.
///
/// The result is clamped to latitude [-90, 90] and longitude [-180, 180] so that a
/// synthesized point next to a pole or the antimeridian stays a valid [`GeoPoint`].
#[inline]
pub fn offset(point: &GeoPoint, d_lat: f64, d_lng: f64) -> GeoPoint {
    GeoPoint::new(
        (point.latitude + d_lat).max(-90.0).min(90.0),
        (point.longitude + d_lng).max(-180.0).min(180.0),
    )
}

/// Build a closed 6-point loop of `radius` degrees around `center`.
///
/// Visits north, east, south and west of the center and closes back on it:
/// `[c, c+(r,0), c+(0,r), c-(r,0), c-(0,r), c]`.
///
/// # Example
///
/// ```rust
/// use track_viewport::{GeoPoint, geo_utils};
///
/// let start = GeoPoint::new(45.0, 9.0);
/// let ring = geo_utils::closed_loop(&start, 0.001);
/// assert_eq!(ring.len(), 6);
/// assert_eq!(ring[0], start);
/// assert_eq!(ring[5], start);
/// ```
pub fn closed_loop(center: &GeoPoint, radius: f64) -> Vec<GeoPoint> {
    vec![
        *center,
        offset(center, radius, 0.0),
        offset(center, 0.0, radius),
        offset(center, -radius, 0.0),
        offset(center, 0.0, -radius),
        *center,
    ]
}

/// Convert a path into a `geo::LineString` (x = longitude, y = latitude).
pub fn to_line_string(path: &[GeoPoint]) -> LineString<f64> {
    path.iter().map(|p| geo::Coord::from(*p)).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
