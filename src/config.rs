use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const EARTHQUAKE_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";
pub const PLATE_BOUNDARY_FEED_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Where a GeoJSON feed comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedSource {
    Http(String),
    Local(PathBuf),
}

impl FromStr for FeedSource {
    type Err = Infallible;

    /// Anything that looks like an http(s) URL is fetched, everything else is a path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(FeedSource::Http(s.to_string()))
        } else {
            Ok(FeedSource::Local(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedSource::Http(url) => write!(f, "{}", url),
            FeedSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub earthquake_feed: FeedSource,
    pub plate_boundary_feed: FeedSource,
    pub tile_provider_token: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            earthquake_feed: FeedSource::Http(EARTHQUAKE_FEED_URL.to_string()),
            plate_boundary_feed: FeedSource::Http(PLATE_BOUNDARY_FEED_URL.to_string()),
            tile_provider_token: String::new(),
            port: 8000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_source_from_str() {
        assert_eq!(
            "https://example.org/feed.geojson".parse::<FeedSource>().unwrap(),
            FeedSource::Http("https://example.org/feed.geojson".to_string())
        );
        assert_eq!(
            "http://localhost:9000/plates.json".parse::<FeedSource>().unwrap(),
            FeedSource::Http("http://localhost:9000/plates.json".to_string())
        );
        assert_eq!(
            "data/all_week.geojson".parse::<FeedSource>().unwrap(),
            FeedSource::Local(PathBuf::from("data/all_week.geojson"))
        );
    }

    #[test]
    fn test_default_points_at_public_feeds() {
        let config = Config::default();
        assert_eq!(config.earthquake_feed.to_string(), EARTHQUAKE_FEED_URL);
        assert_eq!(config.plate_boundary_feed.to_string(), PLATE_BOUNDARY_FEED_URL);
        assert!(config.tile_provider_token.is_empty());
    }
}
