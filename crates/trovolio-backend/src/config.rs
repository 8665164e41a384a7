//! Public configuration for the backend client.

use std::time::Duration;

/// Local development address of the managed backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:54321";

/// Configuration for the backend client.
///
/// # Example
///
/// ```
/// use trovolio_backend::BackendClientConfig;
/// use std::time::Duration;
///
/// let config = BackendClientConfig::new()
///     .with_base_url("https://project.example.co")
///     .with_api_key("anon-key")
///     .with_timeout(Duration::from_secs(20));
/// ```
#[derive(Clone)]
pub struct BackendClientConfig {
    /// Project base URL; `/rest/v1` and `/storage/v1` hang off it
    pub(crate) base_url: String,
    /// Public API key sent as `apikey`
    pub(crate) api_key: Option<String>,
    /// User access token; the API key is used as bearer when absent
    pub(crate) access_token: Option<String>,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Transport timeout. Unset means the request waits for the backend.
    pub(crate) timeout: Option<Duration>,
}

impl Default for BackendClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            access_token: None,
            user_agent: concat!("trovolio-backend/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

impl std::fmt::Debug for BackendClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl BackendClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the project base URL.
    ///
    /// Defaults to `http://localhost:54321`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the user access token sent as `Authorization: Bearer`.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set an optional access token.
    #[must_use]
    pub fn with_optional_access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a transport timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bearer credential: the access token, or the API key without one.
    pub(crate) fn bearer(&self) -> Option<&str> {
        self.access_token.as_deref().or(self.api_key.as_deref())
    }
}
