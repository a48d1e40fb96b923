use crate::error::FeedError;
use crate::models::feed::FeatureCollection;
use crate::traits::FeedReader;
use async_trait::async_trait;
use std::path::PathBuf;

/// A feed saved to disk, e.g. a downloaded `all_week.geojson`.
pub struct LocalFeedReader {
    path: PathBuf,
}

impl LocalFeedReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl FeedReader for LocalFeedReader {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn read_features(&self) -> Result<FeatureCollection, FeedError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FeedError::Io {
                path: self.describe(),
                source,
            })?;
        Ok(FeatureCollection::from_slice(&bytes)?)
    }
}
