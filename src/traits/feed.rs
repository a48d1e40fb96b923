use crate::error::FeedError;
use crate::models::feed::FeatureCollection;
use async_trait::async_trait;

#[async_trait]
pub trait FeedReader: Send + Sync {
    /// Where the feed is read from, for log lines.
    fn describe(&self) -> String;
    async fn read_features(&self) -> Result<FeatureCollection, FeedError>;
}
