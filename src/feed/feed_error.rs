use std::sync::Arc;
use thiserror::Error;

/// Failures while loading the upstream dataset.
///
/// Neither variant is recoverable inside a request; the web layer turns both
/// into a "data unavailable" state instead of failing the page. Cloneable so
/// one failed fetch can be handed to every request that waited on it.
#[derive(Debug, Clone, Error)]
pub enum FeedError {
    #[error("failed to fetch dataset from {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("dataset from {url} is not a valid document: {source}")]
    Decode {
        url: String,
        #[source]
        source: Arc<serde_json::Error>,
    },
}

impl FeedError {
    /// True for transport-level failures (network, status), false for bad payloads.
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::UnexpectedStatus { .. })
    }
}
