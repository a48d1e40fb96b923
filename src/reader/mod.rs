use crate::config::FeedSource;
use crate::traits::FeedReader;
use std::sync::Arc;

pub mod http;
pub mod local;

pub use http::HttpFeedReader;
pub use local::LocalFeedReader;

/// Pick the reader for a configured source. HTTP readers share `client`.
pub fn open_feed(source: &FeedSource, client: &reqwest::Client) -> Arc<dyn FeedReader> {
    match source {
        FeedSource::Http(url) => Arc::new(HttpFeedReader::new(client.clone(), url.clone())),
        FeedSource::Local(path) => Arc::new(LocalFeedReader::new(path.clone())),
    }
}
