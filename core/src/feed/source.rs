//! Feed Source Trait
//!
//! The fetch seam. Production uses [`crate::feed::HttpFeed`]; tests
//! substitute scripted sources to drive refreshes without a network.

use async_trait::async_trait;

use super::{Feed, FeedError};

/// Anything that can produce one feed snapshot.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the current user -> cards mapping.
    ///
    /// # Errors
    ///
    /// Implementation-specific; the HTTP source surfaces transport and
    /// decode failures as [`FeedError`].
    async fn fetch(&self) -> Result<Feed, FeedError>;
}
