//! HTTP backend abstraction for the REST and storage surfaces.
//!
//! A small trait sits between the client and `reqwest` so client logic can
//! be exercised against canned responses. Every call is a single attempt;
//! failures are reported, never retried.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::BackendClientConfig;
use crate::error::{ClientError, ClientResult, error_message_from_body};

/// Write verbs used against the REST surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMethod {
    Post,
    Patch,
}

/// Trait for HTTP backends.
///
/// This is an implementation detail; external code goes through the core
/// `BackendPort` and `StoragePort` traits.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET a URL and deserialize the JSON body.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ClientResult<T>;

    /// GET a URL and return the body as text.
    async fn get_text(&self, url: &Url) -> ClientResult<String>;

    /// POST a JSON body and deserialize the JSON response.
    async fn post_json<T: DeserializeOwned + Send>(&self, url: &Url, body: &Value)
    -> ClientResult<T>;

    /// Send a JSON body and discard the response.
    ///
    /// `prefer` is forwarded as the `Prefer` header.
    async fn write(
        &self,
        method: WriteMethod,
        url: &Url,
        body: &Value,
        prefer: Option<&'static str>,
    ) -> ClientResult<()>;
}

/// Production HTTP backend using reqwest.
///
/// Credentials are attached as default headers: `apikey` plus
/// `Authorization: Bearer` with the access token, or the API key when no
/// user is signed in.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(config: &BackendClientConfig) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        if let Some(ref key) = config.api_key {
            headers.insert("apikey", sensitive_header(key)?);
        }
        if let Some(bearer) = config.bearer() {
            headers.insert(AUTHORIZATION, sensitive_header(&format!("Bearer {bearer}"))?);
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| ClientError::Configuration {
            message: e.to_string(),
        })?;

        Ok(Self { client })
    }

    /// Turn a non-success response into a `Status` error carrying the body's message.
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), url = %url, "Backend returned error status");

        Err(ClientError::Status {
            status: status.as_u16(),
            url,
            message: error_message_from_body(&body),
        })
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> ClientResult<reqwest::Response> {
        let response = request.send().await?;
        Self::check_status(response).await
    }
}

fn sensitive_header(value: &str) -> ClientResult<HeaderValue> {
    let mut header = HeaderValue::from_str(value).map_err(|e| ClientError::Configuration {
        message: format!("credential is not a valid header value: {e}"),
    })?;
    header.set_sensitive(true);
    Ok(header)
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ClientResult<T> {
        let response = self.send(self.client.get(url.as_str())).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_text(&self, url: &Url) -> ClientResult<String> {
        let response = self.send(self.client.get(url.as_str())).await?;
        Ok(response.text().await?)
    }

    async fn post_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        body: &Value,
    ) -> ClientResult<T> {
        let response = self
            .send(self.client.post(url.as_str()).json(body))
            .await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn write(
        &self,
        method: WriteMethod,
        url: &Url,
        body: &Value,
        prefer: Option<&'static str>,
    ) -> ClientResult<()> {
        let mut request = match method {
            WriteMethod::Post => self.client.post(url.as_str()),
            WriteMethod::Patch => self.client.patch(url.as_str()),
        }
        .json(body);
        if let Some(prefer) = prefer {
            request = request.header("Prefer", prefer);
        }

        self.send(request).await?;
        Ok(())
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
