//! # Track Viewport
//!
//! Normalizes the location fields of activity tracks and frames them on a map.
//!
//! This library provides:
//! - Location extraction from GeoJSON points, loose `{lat, lng}` objects and coordinate pairs
//! - Path synthesis from recorded trajectories, or from start/end anchors when none was recorded
//! - Viewport fitting (center + latitude/longitude span) with padding and zoom clamps
//!
//! ## Features
//!
//! - **`parallel`** - Enable parallel batch framing with rayon
//! - **`ffi`** - Enable FFI bindings for mobile platforms (iOS/Android)
//! - **`full`** - Enable all features
//!
//! ## Quick Start
//!
//! ```rust
//! use track_viewport::{frame_track, FrameConfig, PathSource, Track};
//!
//! let track = Track::from_json(r#"{
//!     "startLocation": { "type": "Point", "coordinates": [9.0, 45.0] },
//!     "endLocation": { "lat": 45.1, "lng": 9.2 },
//!     "city": "Milano"
//! }"#).unwrap();
//!
//! let frame = frame_track(&track, &FrameConfig::default());
//! assert_eq!(frame.source, PathSource::StartEnd);
//! assert_eq!(frame.path.len(), 3);
//!
//! let viewport = frame.viewport.unwrap();
//! println!("Center: {:.4}, {:.4}", viewport.center.latitude, viewport.center.longitude);
//! ```

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::TrackError;

pub mod geo_utils;

// Raw location field normalization
pub mod location;
pub use location::{extract_entry, extract_pair, extract_point};

pub mod track;
pub use track::Track;

// Path synthesis from trajectories or anchors
pub mod path;
pub use path::{synthesize_path, synthesize_path_with_source, PathSource, SynthesisConfig};

pub mod viewport;
pub use viewport::{fit_viewport, Viewport, ViewportConfig};

// Full pipeline for map surfaces
pub mod frame;
#[cfg(feature = "parallel")]
pub use frame::frame_tracks_parallel;
pub use frame::{frame_track, frame_tracks, FrameConfig, TrackFrame};

#[cfg(feature = "ffi")]
uniffi::setup_scaffolding!();

/// Initialize logging for Android (only used in FFI)
#[cfg(all(feature = "ffi", target_os = "android"))]
fn init_logging() {
    use android_logger::Config;
    use log::LevelFilter;

    android_logger::init_once(
        Config::default()
            .with_max_level(LevelFilter::Debug)
            .with_tag("TrackViewportRust")
    );
}

#[cfg(all(feature = "ffi", not(target_os = "android")))]
fn init_logging() {
    // No-op on non-Android platforms
}

// ============================================================================
// Core Types
// ============================================================================

/// A geographic coordinate with latitude and longitude in degrees.
///
/// # Example
/// ```
/// use track_viewport::GeoPoint;
/// let point = GeoPoint::new(41.9028, 12.4964); // Rome
/// assert!(point.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new point.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Check if the point has valid coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

// geo uses x = longitude, y = latitude
impl From<GeoPoint> for geo::Coord {
    fn from(p: GeoPoint) -> Self {
        geo::Coord { x: p.longitude, y: p.latitude }
    }
}

impl From<geo::Coord> for GeoPoint {
    fn from(c: geo::Coord) -> Self {
        GeoPoint::new(c.y, c.x)
    }
}

impl From<GeoPoint> for geo::Point {
    fn from(p: GeoPoint) -> Self {
        geo::Point::new(p.longitude, p.latitude)
    }
}

impl From<geo::Point> for GeoPoint {
    fn from(p: geo::Point) -> Self {
        GeoPoint::new(p.y(), p.x())
    }
}

/// Extent of a path, the box a [`Viewport`] is fitted around.
///
/// A path of one distinct point gives a zero-size box; the viewport fitter
/// substitutes its degenerate span for that case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Smallest box holding every point of `path`, or `None` when there is nothing to frame.
    pub fn from_points(path: &[GeoPoint]) -> Option<Self> {
        let (first, rest) = path.split_first()?;
        let seed = Self {
            min_lat: first.latitude,
            max_lat: first.latitude,
            min_lng: first.longitude,
            max_lng: first.longitude,
        };
        Some(rest.iter().fold(seed, |b, p| Self {
            min_lat: b.min_lat.min(p.latitude),
            max_lat: b.max_lat.max(p.latitude),
            min_lng: b.min_lng.min(p.longitude),
            max_lng: b.max_lng.max(p.longitude),
        }))
    }

    /// Camera center for this box.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }

    /// Unpadded latitude span in degrees.
    pub fn lat_extent(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Unpadded longitude span in degrees.
    pub fn lng_extent(&self) -> f64 {
        self.max_lng - self.min_lng
    }
}

// ============================================================================
// FFI Exports (only when feature enabled)
// ============================================================================

#[cfg(feature = "ffi")]
mod ffi {
    use super::*;
    use log::{debug, info, warn};

    fn parse_track(track_json: &str) -> Track {
        match Track::from_json(track_json) {
            Ok(track) => track,
            Err(e) => {
                warn!("[TrackViewportRust] Unreadable track record, framing as empty: {}", e);
                Track::default()
            }
        }
    }

    /// Frame a single track delivered as the REST layer's JSON.
    ///
    /// Never fails: unreadable JSON produces an empty frame so the caller shows its placeholder.
    #[uniffi::export]
    pub fn frame_track_json(track_json: String, config: FrameConfig) -> TrackFrame {
        init_logging();
        let track = parse_track(&track_json);
        let frame = frame_track(&track, &config);
        debug!(
            "[TrackViewportRust] frame_track_json: {} points ({:?}), viewport: {}",
            frame.path.len(),
            frame.source,
            frame.viewport.is_some()
        );
        frame
    }

    /// Frame a batch of tracks (e.g. every visible feed item). Output order matches input order.
    #[uniffi::export]
    pub fn frame_tracks_json(tracks_json: Vec<String>, config: FrameConfig) -> Vec<TrackFrame> {
        init_logging();
        info!("[TrackViewportRust] frame_tracks_json called with {} tracks", tracks_json.len());

        let start = std::time::Instant::now();
        let tracks: Vec<Track> = tracks_json.iter().map(|json| parse_track(json)).collect();
        let frames = frame_tracks_parallel(&tracks, &config);

        info!(
            "[TrackViewportRust] Framed {} tracks in {:?}",
            frames.len(),
            start.elapsed()
        );
        frames
    }

    /// Resolve a single location-like JSON value to a point.
    #[uniffi::export]
    pub fn extract_point_json(raw_json: String) -> Option<GeoPoint> {
        init_logging();
        match serde_json::from_str::<serde_json::Value>(&raw_json) {
            Ok(raw) => extract_point(&raw),
            Err(e) => {
                warn!("[TrackViewportRust] Unreadable location JSON: {}", e);
                None
            }
        }
    }

    /// Fit a viewport around an already-normalized path.
    #[uniffi::export]
    pub fn ffi_fit_viewport(
        path: Vec<GeoPoint>,
        fallback: Option<GeoPoint>,
        config: ViewportConfig,
    ) -> Option<Viewport> {
        init_logging();
        fit_viewport(&path, fallback, &config)
    }

    /// Get default framing configuration.
    #[uniffi::export]
    pub fn default_frame_config() -> FrameConfig {
        FrameConfig::default()
    }
}

// ============================================================================
// Tests
// ============================================================================
