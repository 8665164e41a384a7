//! Settings domain types and validation.
//!
//! This module contains the dashboard settings shared by all adapters.
//! These are pure domain types with no infrastructure dependencies.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::qr::DEFAULT_QR_ENDPOINT;

/// Default row cap for collection queries.
pub const DEFAULT_FETCH_LIMIT: u32 = 12;

/// Default period of the highlight rotation.
pub const DEFAULT_ROTATION_PERIOD_MS: u64 = 4000;

/// Shortest rotation period accepted.
pub const MIN_ROTATION_PERIOD_MS: u64 = 250;

/// Default lifetime of signed storage URLs.
pub const DEFAULT_SIGNED_URL_TTL_SECS: u64 = 3600;

/// Longest signed URL lifetime accepted (7 days).
pub const MAX_SIGNED_URL_TTL_SECS: u64 = 604_800;

/// Default storage bucket holding generated sites.
pub const DEFAULT_SITES_BUCKET: &str = "generated-sites";

/// Dashboard settings.
///
/// All fields are optional to support partial updates and graceful defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Row cap for collection queries (1-100).
    pub fetch_limit: Option<u32>,

    /// Highlight rotation period in milliseconds.
    pub rotation_period_ms: Option<u64>,

    /// Restore local state when an item action fails to persist.
    pub rollback_on_failure: Option<bool>,

    /// Show an empty list instead of fallback data when a collection is empty.
    pub distinguish_empty: Option<bool>,

    /// Lifetime of signed storage URLs in seconds.
    pub signed_url_ttl_secs: Option<u64>,

    /// Storage bucket holding generated sites.
    pub sites_bucket: Option<String>,

    /// QR image endpoint.
    pub qr_endpoint: Option<String>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            fetch_limit: Some(DEFAULT_FETCH_LIMIT),
            rotation_period_ms: Some(DEFAULT_ROTATION_PERIOD_MS),
            rollback_on_failure: Some(false),
            distinguish_empty: Some(false),
            signed_url_ttl_secs: Some(DEFAULT_SIGNED_URL_TTL_SECS),
            sites_bucket: Some(DEFAULT_SITES_BUCKET.to_string()),
            qr_endpoint: Some(DEFAULT_QR_ENDPOINT.to_string()),
        }
    }

    #[must_use]
    pub fn effective_fetch_limit(&self) -> u32 {
        self.fetch_limit.unwrap_or(DEFAULT_FETCH_LIMIT)
    }

    #[must_use]
    pub fn effective_rotation_period(&self) -> Duration {
        Duration::from_millis(
            self.rotation_period_ms
                .unwrap_or(DEFAULT_ROTATION_PERIOD_MS),
        )
    }

    #[must_use]
    pub fn effective_rollback_on_failure(&self) -> bool {
        self.rollback_on_failure.unwrap_or(false)
    }

    #[must_use]
    pub fn effective_distinguish_empty(&self) -> bool {
        self.distinguish_empty.unwrap_or(false)
    }

    #[must_use]
    pub fn effective_signed_url_ttl(&self) -> Duration {
        Duration::from_secs(
            self.signed_url_ttl_secs
                .unwrap_or(DEFAULT_SIGNED_URL_TTL_SECS),
        )
    }

    #[must_use]
    pub fn effective_sites_bucket(&self) -> &str {
        self.sites_bucket.as_deref().unwrap_or(DEFAULT_SITES_BUCKET)
    }

    #[must_use]
    pub fn effective_qr_endpoint(&self) -> &str {
        self.qr_endpoint.as_deref().unwrap_or(DEFAULT_QR_ENDPOINT)
    }
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Fetch limit must be between 1 and 100, got {0}")]
    InvalidFetchLimit(u32),

    #[error("Rotation period must be at least {MIN_ROTATION_PERIOD_MS} ms, got {0}")]
    InvalidRotationPeriod(u64),

    #[error("Signed URL lifetime must be between 1 and {MAX_SIGNED_URL_TTL_SECS} seconds, got {0}")]
    InvalidSignedUrlTtl(u64),

    #[error("Sites bucket cannot be empty")]
    EmptyBucket,

    #[error("Invalid QR endpoint '{0}'")]
    InvalidQrEndpoint(String),
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(limit) = settings.fetch_limit {
        if !(1..=100).contains(&limit) {
            return Err(SettingsError::InvalidFetchLimit(limit));
        }
    }

    if let Some(period) = settings.rotation_period_ms {
        if period < MIN_ROTATION_PERIOD_MS {
            return Err(SettingsError::InvalidRotationPeriod(period));
        }
    }

    if let Some(ttl) = settings.signed_url_ttl_secs {
        if !(1..=MAX_SIGNED_URL_TTL_SECS).contains(&ttl) {
            return Err(SettingsError::InvalidSignedUrlTtl(ttl));
        }
    }

    if settings
        .sites_bucket
        .as_ref()
        .is_some_and(|b| b.trim().is_empty())
    {
        return Err(SettingsError::EmptyBucket);
    }

    if let Some(ref endpoint) = settings.qr_endpoint {
        if Url::parse(endpoint).is_err() {
            return Err(SettingsError::InvalidQrEndpoint(endpoint.clone()));
        }
    }

    Ok(())
}
