// client.rs
use crate::feed::{Document, FeedError};
use reqwest::blocking::Client;
use std::sync::Arc;
use std::time::Duration;

const USER_AGENT: &str = concat!("warsaw-flats-dashboard/", env!("CARGO_PKG_VERSION"));

/// Anything that can produce a fresh copy of the dataset.
pub trait DatasetSource: Send + Sync {
    fn fetch_dataset(&self) -> Result<Document, FeedError>;
}

/// Blocking HTTP loader for the published `flats.json`.
pub struct DatasetClient {
    client: Client,
    url: String,
}

impl DatasetClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        let url = url.into();
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FeedError::Fetch {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self { client, url })
    }
}

impl DatasetSource for DatasetClient {
    fn fetch_dataset(&self) -> Result<Document, FeedError> {
        tracing::debug!(url = %self.url, "fetching dataset");

        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| FeedError::Fetch {
                url: self.url.clone(),
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = resp.bytes().map_err(|e| FeedError::Fetch {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;

        serde_json::from_slice(&body).map_err(|source| FeedError::Decode {
            url: self.url.clone(),
            source: Arc::new(source),
        })
    }
}
