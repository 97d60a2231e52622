use thiserror::Error;

/// Failure to read a track record from raw JSON text.
///
/// Only the outer record can fail; malformed location fields inside a
/// readable record degrade to "no point" instead.
#[derive(Error, Debug)]
pub enum TrackError {
    #[error("Invalid track JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Track record must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}
