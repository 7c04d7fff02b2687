mod cache;
mod client;
mod feed_error;
mod models;

pub use cache::{DatasetStore, Snapshot};
pub use client::{DatasetClient, DatasetSource};
pub use feed_error::FeedError;
pub use models::{AreaPriceRecord, Dates, Document, LocationPriceRecord};
