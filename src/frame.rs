//! Track framing: the full pipeline from a raw track to what a map surface draws.

use log::debug;
use serde::{Deserialize, Serialize};
use crate::location::extract_point;
use crate::path::{synthesize_path_with_source, PathSource, SynthesisConfig};
use crate::viewport::{fit_viewport, Viewport, ViewportConfig};
use crate::{GeoPoint, Track};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Configuration for the whole pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct FrameConfig {
    pub synthesis: SynthesisConfig,
    pub viewport: ViewportConfig,
}

/// Render-ready output for one track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct TrackFrame {
    /// Route line in draw order
    pub path: Vec<GeoPoint>,
    /// Rule that produced `path`
    pub source: PathSource,
    /// Camera framing the path; `None` means show `placeholder`
    pub viewport: Option<Viewport>,
    /// Start marker
    pub start: Option<GeoPoint>,
    /// End marker
    pub end: Option<GeoPoint>,
    /// City label shown instead of a map, set only when `viewport` is `None`
    pub placeholder: Option<String>,
}

impl TrackFrame {
    /// True when there is something to put on a map.
    pub fn has_map(&self) -> bool {
        self.viewport.is_some()
    }
}

/// Run the full pipeline for one track.
///
/// Markers come from the start/end anchors; a recorded path supplies them from its
/// first and last points when anchors are missing. When the path is empty, the start
/// anchor (or else the end anchor) is framed as a close-up.
///
/// # Example
/// ```
/// use serde_json::json;
/// use track_viewport::{frame_track, FrameConfig, PathSource, Track};
///
/// let track = Track {
///     route: Some(json!([{ "lat": 41.9, "lng": 12.5 }, { "lat": 41.91, "lng": 12.51 }])),
///     ..Track::default()
/// };
///
/// let frame = frame_track(&track, &FrameConfig::default());
/// assert_eq!(frame.source, PathSource::Route);
/// assert!(frame.has_map());
/// assert_eq!(frame.start, frame.path.first().copied());
/// ```
pub fn frame_track(track: &Track, config: &FrameConfig) -> TrackFrame {
    let (path, source) = synthesize_path_with_source(track, &config.synthesis);

    let start_anchor = track.start_anchor().and_then(extract_point);
    let end_anchor = track.end_anchor().and_then(extract_point);

    let viewport = fit_viewport(&path, start_anchor.or(end_anchor), &config.viewport);

    let (start, end) = if source.is_recorded() {
        (
            start_anchor.or_else(|| path.first().copied()),
            end_anchor.or_else(|| path.last().copied()),
        )
    } else {
        (start_anchor, end_anchor)
    };

    let placeholder = match viewport {
        Some(_) => None,
        None => track.city().map(str::to_string),
    };

    debug!(
        "[TrackFrame] {} points from {:?}, viewport: {}",
        path.len(),
        source,
        viewport.is_some()
    );

    TrackFrame { path, source, viewport, start, end, placeholder }
}

/// Frame a batch of tracks sequentially. Output order matches input order.
pub fn frame_tracks(tracks: &[Track], config: &FrameConfig) -> Vec<TrackFrame> {
    tracks.iter().map(|t| frame_track(t, config)).collect()
}

/// Frame a batch of tracks using parallel processing.
///
/// Same output as [`frame_tracks`]; tracks share no state, so each is framed on
/// whichever rayon worker picks it up.
#[cfg(feature = "parallel")]
pub fn frame_tracks_parallel(tracks: &[Track], config: &FrameConfig) -> Vec<TrackFrame> {
    tracks.par_iter().map(|t| frame_track(t, config)).collect()
}
