//! Semantic error types for dashboard operations.
//!
//! These errors are domain-focused. Adapters (the CLI, a web shell) map
//! `DashboardError` to their own exit codes or responses.

use std::fmt;

use trovolio_core::{QrError, SettingsError, SiteError, StorageError};

/// Semantic errors for dashboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// Entity not found.
    NotFound {
        /// Type of entity (e.g., "integration", "site").
        entity: &'static str,
        /// Identifier that was not found.
        id: String,
    },

    /// Request validation failed.
    ValidationFailed(String),

    /// The managed backend could not be reached or refused the call.
    Unavailable(String),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
            Self::Unavailable(msg) => write!(f, "service unavailable: {msg}"),
        }
    }
}

impl std::error::Error for DashboardError {}

// ============================================================================
// Conversions from core errors
// ============================================================================

impl From<QrError> for DashboardError {
    fn from(err: QrError) -> Self {
        Self::ValidationFailed(err.to_string())
    }
}

impl From<SettingsError> for DashboardError {
    fn from(err: SettingsError) -> Self {
        Self::ValidationFailed(err.to_string())
    }
}

impl From<SiteError> for DashboardError {
    fn from(err: SiteError) -> Self {
        match err {
            SiteError::InvalidSegment { .. } => Self::ValidationFailed(err.to_string()),
            SiteError::Storage(StorageError::NotFound { path }) => Self::NotFound {
                entity: "site",
                id: path,
            },
            SiteError::Storage(e) => Self::Unavailable(e.to_string()),
        }
    }
}
