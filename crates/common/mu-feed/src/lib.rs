//! Remote sources for the update poster.
//!
//! [`FeedSource`] serves the four tracker feeds, [`DeviceRegistry`] serves the
//! per-device release history used by [`RollbackClassifier`]. Both are async
//! traits so the pipeline can run against in-memory fakes.

use async_trait::async_trait;
use mu_models::{Category, RegistryRecord, UpdateEntry};

mod error;
mod http;
mod rollback;

pub use error::{Error, Result};
pub use http::HttpSource;
pub use rollback::RollbackClassifier;

#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Every entry of one category's feed, across all devices, in feed order.
    async fn fetch_feed(&self, category: Category) -> Result<Vec<UpdateEntry>>;
}

#[async_trait]
pub trait DeviceRegistry: Send + Sync {
    /// Release history for a base codename.
    ///
    /// `Ok(None)` means the document could not be parsed, which is how the
    /// registry answers for devices it has not seen yet.
    async fn release_history(&self, base_codename: &str) -> Result<Option<Vec<RegistryRecord>>>;
}
