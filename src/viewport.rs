//! # Viewport Fitting
//!
//! Computes the map camera (center + latitude/longitude span) that frames a path.
//!
//! For a non-empty path the center is the middle of the bounding box and each span is
//! the box extent plus 15% padding, clamped to `[0.005, 0.1]` degrees. A zero extent
//! (one distinct point) uses `0.01` before clamping. An empty path with a fallback point
//! gets a fixed `0.01` close-up.

use serde::{Deserialize, Serialize};
use crate::{Bounds, GeoPoint};

/// Map camera: center plus visible span on each axis, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct Viewport {
    pub center: GeoPoint,
    pub latitude_span: f64,
    pub longitude_span: f64,
}

impl Viewport {
    /// Region covered by the viewport, for surfaces that take corner coordinates.
    pub fn bounds(&self) -> Bounds {
        let half_lat = self.latitude_span / 2.0;
        let half_lng = self.longitude_span / 2.0;
        Bounds {
            min_lat: self.center.latitude - half_lat,
            max_lat: self.center.latitude + half_lat,
            min_lng: self.center.longitude - half_lng,
            max_lng: self.center.longitude + half_lng,
        }
    }
}

/// Configuration for viewport fitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct ViewportConfig {
    /// Multiplier applied to the bounding box extent.
    /// Default: 1.15 (15% padding)
    pub padding_factor: f64,

    /// Span used when the padded extent is zero (all points identical).
    /// Default: 0.01 degrees
    pub degenerate_span: f64,

    /// Smallest span allowed (closest zoom). Default: 0.005 degrees
    pub min_span: f64,

    /// Largest span allowed (widest zoom). Default: 0.1 degrees
    pub max_span: f64,

    /// Span used for both axes when only a fallback point is known.
    /// Not clamped. Default: 0.01 degrees
    pub single_point_span: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            padding_factor: 1.15,
            degenerate_span: 0.01,
            min_span: 0.005,
            max_span: 0.1,
            single_point_span: 0.01,
        }
    }
}

impl ViewportConfig {
    fn span(&self, extent: f64) -> f64 {
        let padded = extent * self.padding_factor;
        let raw = if padded == 0.0 { self.degenerate_span } else { padded };
        // max/min rather than clamp: clamp panics on a misordered config
        raw.max(self.min_span).min(self.max_span)
    }
}

/// Fit a viewport around `path`, or around `single_point_fallback` when the path is empty.
///
/// Returns `None` when there is nothing to frame; callers show a placeholder instead.
///
/// # Example
/// ```
/// use track_viewport::{fit_viewport, GeoPoint, ViewportConfig};
///
/// let path = vec![GeoPoint::new(45.0, 9.0), GeoPoint::new(45.1, 9.2)];
/// let viewport = fit_viewport(&path, None, &ViewportConfig::default()).unwrap();
///
/// assert!((viewport.center.latitude - 45.05).abs() < 1e-9);
/// assert!((viewport.center.longitude - 9.1).abs() < 1e-9);
/// assert_eq!(viewport.latitude_span, 0.1);
/// assert_eq!(viewport.longitude_span, 0.1);
///
/// assert!(fit_viewport(&[], None, &ViewportConfig::default()).is_none());
/// ```
pub fn fit_viewport(
    path: &[GeoPoint],
    single_point_fallback: Option<GeoPoint>,
    config: &ViewportConfig,
) -> Option<Viewport> {
    if let Some(bounds) = Bounds::from_points(path) {
        return Some(Viewport {
            center: bounds.center(),
            latitude_span: config.span(bounds.lat_extent()),
            longitude_span: config.span(bounds.lng_extent()),
        });
    }

    single_point_fallback.map(|center| Viewport {
        center,
        latitude_span: config.single_point_span,
        longitude_span: config.single_point_span,
    })
}
