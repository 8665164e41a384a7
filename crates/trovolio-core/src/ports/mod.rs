//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core expects from infrastructure.
//! They contain no transport details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` types in any signature
//! - The backend handle is injected, never imported as a global
//! - Every error carries a human-readable message

pub mod backend;
pub mod diagnostics;
pub mod storage;

use thiserror::Error;

pub use backend::BackendPort;
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, NoopSink, TracingSink};
pub use storage::StoragePort;
#[cfg(test)]
pub use storage::MockStoragePort;

/// Errors from backend query and mutation calls.
///
/// Transport-specific failures (HTTP, JSON) are mapped to these by adapters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    /// The request never produced a response.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network failure
        message: String,
    },

    /// The backend answered with a non-success status.
    #[error("Backend request failed with status {status}: {message}")]
    Status {
        /// HTTP-style status code
        status: u16,
        /// Message reported by the backend
        message: String,
    },

    /// The collection or row does not exist.
    #[error("Not found: {message}")]
    NotFound {
        /// What was missing
        message: String,
    },

    /// The response could not be decoded into the expected shape.
    #[error("Invalid response: {message}")]
    Decode {
        /// What was invalid
        message: String,
    },

    /// The client is misconfigured (bad URL, missing key).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

impl BackendError {
    /// The human-readable message, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Network { message }
            | Self::Status { message, .. }
            | Self::NotFound { message }
            | Self::Decode { message }
            | Self::Configuration { message } => message,
        }
    }
}

/// Result type alias for backend port operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors from storage port operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// The object does not exist at the given path.
    #[error("Object not found: {path}")]
    NotFound {
        /// Storage path that was requested
        path: String,
    },

    /// A signed URL could not be issued.
    #[error("Failed to sign URL: {message}")]
    Signing {
        /// Reason reported by the storage service
        message: String,
    },

    /// Fetching object content failed.
    #[error("Failed to fetch object: {message}")]
    Fetch {
        /// Description of the failure
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_message_strips_prefix() {
        let err = BackendError::Status {
            status: 401,
            message: "JWT expired".to_string(),
        };
        assert_eq!(err.message(), "JWT expired");
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::NotFound {
            path: "u1/site-builder/s1/index.html".to_string(),
        };
        assert!(err.to_string().contains("u1/site-builder/s1/index.html"));
    }
}
