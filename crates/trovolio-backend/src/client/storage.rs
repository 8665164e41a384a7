//! Object access against `/storage/v1`.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tracing::debug;
use url::Url;

use super::RestClient;
use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::url::{build_public_url, build_sign_url, resolve_signed_url};

#[derive(Debug, Deserialize)]
struct SignedUrlResponse {
    #[serde(rename = "signedURL", alias = "signedUrl")]
    signed_url: String,
}

impl<B: HttpBackend> RestClient<B> {
    /// Issue a signed URL valid for `ttl` (whole seconds, at least one).
    pub async fn sign_object(&self, bucket: &str, path: &str, ttl: Duration) -> ClientResult<Url> {
        let url = build_sign_url(&self.base_url, bucket, path)?;
        let expires_in = ttl.as_secs().max(1);
        debug!(bucket = %bucket, path = %path, expires_in, "Signing object URL");

        let response: SignedUrlResponse = self
            .backend
            .post_json(&url, &json!({ "expiresIn": expires_in }))
            .await?;
        resolve_signed_url(&self.base_url, &response.signed_url)
    }

    /// Public URL of an object.
    pub fn public_object_url(&self, bucket: &str, path: &str) -> ClientResult<Url> {
        build_public_url(&self.base_url, bucket, path)
    }

    /// Download a URL as text.
    pub async fn download_text(&self, url: &Url) -> ClientResult<String> {
        debug!(url = %url, "Downloading object");
        self.backend.get_text(url).await
    }
}
