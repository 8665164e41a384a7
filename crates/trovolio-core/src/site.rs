//! Generated-site retrieval.
//!
//! Generated sites live in object storage at `owner/tool/id/index.html`.
//! The HTML is fetched through a signed URL (falling back to the public
//! URL) and only ever rendered inside a sandboxed iframe via `srcdoc`,
//! never spliced into the host page.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::ports::{Diagnostic, DiagnosticSink, StorageError, StoragePort};

/// Entry document of every generated site.
pub const SITE_ENTRY_FILE: &str = "index.html";

/// Tool segment used when none is given.
pub const DEFAULT_SITE_TOOL: &str = "website-builder";

/// Sandbox flags for the viewer iframe. `allow-same-origin` is deliberately
/// absent so the document cannot reach the host page.
pub const IFRAME_SANDBOX: &str = "allow-scripts allow-forms allow-popups";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SiteError {
    #[error("Invalid {field} '{segment}': must be non-empty and contain no '/'")]
    InvalidSegment {
        field: &'static str,
        segment: String,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Identifies one generated site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSiteRef {
    pub owner_id: String,
    pub tool: String,
    pub site_id: String,
}

impl GeneratedSiteRef {
    pub fn new(
        owner_id: impl Into<String>,
        tool: impl Into<String>,
        site_id: impl Into<String>,
    ) -> Self {
        Self {
            owner_id: owner_id.into(),
            tool: tool.into(),
            site_id: site_id.into(),
        }
    }

    /// Storage path of the entry document: `owner/tool/id/index.html`.
    pub fn storage_path(&self) -> Result<String, SiteError> {
        let owner = check_segment("owner id", &self.owner_id)?;
        let tool = check_segment("tool", &self.tool)?;
        let site = check_segment("site id", &self.site_id)?;
        Ok(format!("{owner}/{tool}/{site}/{SITE_ENTRY_FILE}"))
    }
}

fn check_segment<'a>(field: &'static str, segment: &'a str) -> Result<&'a str, SiteError> {
    let trimmed = segment.trim();
    if trimmed.is_empty() || trimmed.contains('/') || trimmed == "." || trimmed == ".." {
        return Err(SiteError::InvalidSegment {
            field,
            segment: segment.to_string(),
        });
    }
    Ok(trimmed)
}

/// Fetched site HTML that can only be rendered in isolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsolatedDocument {
    html: String,
    source_url: String,
    signed: bool,
}

impl IsolatedDocument {
    /// Raw HTML, for saving to disk. Never inline this into a page.
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Whether the content came through a signed URL.
    pub const fn is_signed(&self) -> bool {
        self.signed
    }

    /// Sandboxed iframe markup embedding the document through `srcdoc`.
    pub fn to_iframe(&self, title: &str) -> String {
        format!(
            r#"<iframe title="{}" sandbox="{IFRAME_SANDBOX}" referrerpolicy="no-referrer" srcdoc="{}"></iframe>"#,
            escape_attribute(title),
            escape_attribute(&self.html),
        )
    }
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Resolves and fetches generated sites from storage.
#[derive(Clone)]
pub struct SiteResolver {
    storage: Arc<dyn StoragePort>,
    sink: Arc<dyn DiagnosticSink>,
    bucket: String,
    ttl: Duration,
}

impl SiteResolver {
    pub fn new(
        storage: Arc<dyn StoragePort>,
        sink: Arc<dyn DiagnosticSink>,
        bucket: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            storage,
            sink,
            bucket: bucket.into(),
            ttl,
        }
    }

    /// Fetch a site's entry document.
    pub async fn load(&self, site: &GeneratedSiteRef) -> Result<IsolatedDocument, SiteError> {
        let path = site.storage_path()?;

        let (url, signed) = match self
            .storage
            .create_signed_url(&self.bucket, &path, self.ttl)
            .await
        {
            Ok(url) => (url, true),
            Err(e) => {
                warn!(path = %path, error = %e, "Signing failed, falling back to public URL");
                self.sink
                    .report(Diagnostic::signed_url_fallback(&path, e.to_string()));
                (self.storage.public_url(&self.bucket, &path), false)
            }
        };

        debug!(path = %path, signed, "Fetching generated site");
        let html = self.storage.fetch_text(&url).await?;

        Ok(IsolatedDocument {
            html,
            source_url: url,
            signed,
        })
    }
}
