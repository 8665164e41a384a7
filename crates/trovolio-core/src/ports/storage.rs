//! Object storage port used by the generated-site viewer.

use std::time::Duration;

use async_trait::async_trait;

use super::StorageError;

/// Port trait for the managed backend's file storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoragePort: Send + Sync {
    /// Issue a time-limited signed URL for a private object.
    async fn create_signed_url(
        &self,
        bucket: &str,
        path: &str,
        ttl: Duration,
    ) -> Result<String, StorageError>;

    /// Public URL of an object. Always succeeds; the object may still be private.
    fn public_url(&self, bucket: &str, path: &str) -> String;

    /// Fetch the body of a URL as text.
    async fn fetch_text(&self, url: &str) -> Result<String, StorageError>;
}
