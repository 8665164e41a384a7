//! Client for the managed backend's REST and storage surfaces.

mod rest;
mod storage;

use url::Url;

use crate::config::BackendClientConfig;
use crate::error::ClientResult;
use crate::http::{HttpBackend, ReqwestBackend};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default client using the reqwest HTTP backend.
pub type DefaultRestClient = RestClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the managed backend.
///
/// Generic over the HTTP backend so it can be driven by canned responses
/// in tests. Production code uses [`DefaultRestClient`] through the core
/// `BackendPort` and `StoragePort` traits.
pub struct RestClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) base_url: Url,
}

impl DefaultRestClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &BackendClientConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self { backend, base_url })
    }
}

impl<B: HttpBackend> RestClient<B> {
    /// Create a client over a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(base_url: Url, backend: B) -> Self {
        Self { backend, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
