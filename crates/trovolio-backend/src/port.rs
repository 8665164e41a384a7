//! Port trait implementations for `RestClient`.
//!
//! Implements the core-owned `BackendPort` and `StoragePort` traits,
//! converting internal client errors to port errors at the boundary.

use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;
use trovolio_core::{
    BackendError, BackendPort, BackendResult, Record, SelectQuery, StorageError, StoragePort,
};
use url::Url;

use crate::client::RestClient;
use crate::error::ClientError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ClientError` to core `BackendError`.
fn map_error(err: ClientError) -> BackendError {
    match err {
        ClientError::Status {
            status: 404,
            message,
            ..
        } => BackendError::NotFound { message },
        ClientError::Status {
            status, message, ..
        } => BackendError::Status { status, message },
        ClientError::Network(e) => BackendError::Network {
            message: e.to_string(),
        },
        ClientError::InvalidUrl(e) => BackendError::Configuration {
            message: e.to_string(),
        },
        ClientError::Configuration { message } => BackendError::Configuration { message },
        ClientError::JsonParse(e) => BackendError::Decode {
            message: e.to_string(),
        },
    }
}

/// Convert a download failure to `StorageError`.
fn map_fetch_error(err: ClientError, url: &str) -> StorageError {
    match err {
        ClientError::Status { status: 404, .. } => StorageError::NotFound {
            path: url.to_string(),
        },
        other => StorageError::Fetch {
            message: other.to_string(),
        },
    }
}

// ============================================================================
// Port Implementations
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> BackendPort for RestClient<B> {
    async fn select(&self, query: &SelectQuery) -> BackendResult<Vec<Record>> {
        self.select_rows(query).await.map_err(map_error)
    }

    async fn upsert(
        &self,
        collection: &str,
        record: &Record,
        conflict_key: &str,
    ) -> BackendResult<()> {
        self.upsert_row(collection, record, conflict_key)
            .await
            .map_err(map_error)
    }

    async fn update(
        &self,
        collection: &str,
        patch: &Record,
        match_key: &str,
        match_value: &str,
    ) -> BackendResult<()> {
        self.update_rows(collection, patch, match_key, match_value)
            .await
            .map_err(map_error)
    }
}

#[async_trait]
impl<B: HttpBackend + Send + Sync> StoragePort for RestClient<B> {
    async fn create_signed_url(
        &self,
        bucket: &str,
        path: &str,
        ttl: Duration,
    ) -> Result<String, StorageError> {
        self.sign_object(bucket, path, ttl)
            .await
            .map(String::from)
            .map_err(|e| StorageError::Signing {
                message: e.to_string(),
            })
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        match self.public_object_url(bucket, path) {
            Ok(url) => url.into(),
            Err(e) => {
                // Only reachable for cannot-be-a-base URLs.
                warn!(bucket = %bucket, path = %path, error = %e, "Could not build public URL");
                format!("{}/{bucket}/{path}", self.base_url.as_str().trim_end_matches('/'))
            }
        }
    }

    async fn fetch_text(&self, url: &str) -> Result<String, StorageError> {
        let parsed = Url::parse(url).map_err(|e| StorageError::Fetch {
            message: format!("invalid URL '{url}': {e}"),
        })?;
        self.download_text(&parsed)
            .await
            .map_err(|e| map_fetch_error(e, url))
    }
}
