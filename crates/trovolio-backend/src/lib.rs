//! REST and storage adapter for the Trovolio managed backend.
//!
//! Implements the `trovolio-core` [`BackendPort`](trovolio_core::BackendPort)
//! and [`StoragePort`](trovolio_core::StoragePort) traits over the
//! backend's `/rest/v1` and `/storage/v1` surfaces.
//!
//! ```no_run
//! use std::sync::Arc;
//! use trovolio_backend::{BackendClientConfig, DefaultRestClient};
//! use trovolio_core::BackendPort;
//!
//! let config = BackendClientConfig::new()
//!     .with_base_url("https://project.example.co")
//!     .with_api_key("anon-key");
//! let client: Arc<dyn BackendPort> = Arc::new(DefaultRestClient::new(&config)?);
//! # Ok::<(), trovolio_backend::ClientError>(())
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultRestClient is used through the port traits, not its generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultRestClient;

// Configuration
pub use config::{BackendClientConfig, DEFAULT_BASE_URL};

// Errors surfaced by client construction
pub use error::ClientError;

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
