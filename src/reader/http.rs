use crate::error::FeedError;
use crate::models::feed::FeatureCollection;
use crate::traits::FeedReader;
use async_trait::async_trait;

/// A feed fetched with one unauthenticated GET. No retries.
pub struct HttpFeedReader {
    client: reqwest::Client,
    url: String,
}

impl HttpFeedReader {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl FeedReader for HttpFeedReader {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn read_features(&self) -> Result<FeatureCollection, FeedError> {
        let http_err = |source: reqwest::Error| FeedError::Http {
            url: self.url.clone(),
            source,
        };

        let response = self.client.get(&self.url).send().await.map_err(http_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(http_err)?;
        Ok(FeatureCollection::from_slice(&bytes)?)
    }
}
