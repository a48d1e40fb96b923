use thiserror::Error;

/// Failure to obtain or decode a GeoJSON feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("feed is not a GeoJSON FeatureCollection: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a single feature could not be turned into something drawable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("feature has no geometry")]
    MissingGeometry,

    #[error("geometry has no type")]
    UntypedGeometry,

    #[error("expected a Point geometry, found {0}")]
    NotAPoint(String),

    #[error("point has {0} coordinate(s), need longitude and latitude")]
    TooFewCoordinates(usize),

    #[error("longitude and latitude must both be numbers")]
    InvalidCoordinates,

    #[error("feature has no numeric magnitude")]
    MissingMagnitude,

    #[error("{0} is not a line or polygon geometry")]
    UnsupportedBoundary(String),
}
