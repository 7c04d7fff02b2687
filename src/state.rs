use crate::config::AppConfig;
use crate::feed::{DatasetClient, DatasetSource, DatasetStore, FeedError};

/// Shared by every request handler.
pub struct AppState {
    pub config: AppConfig,
    pub store: DatasetStore,
}

impl AppState {
    /// State backed by the HTTP loader configured in `config`.
    pub fn from_config(config: AppConfig) -> Result<Self, FeedError> {
        let client = DatasetClient::new(config.data_url.clone(), config.fetch_timeout)?;
        Ok(Self::with_source(config, Box::new(client)))
    }

    pub fn with_source(config: AppConfig, source: Box<dyn DatasetSource>) -> Self {
        let store = DatasetStore::new(source, config.cache_ttl);
        Self { config, store }
    }
}
