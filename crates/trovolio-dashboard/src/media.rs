//! QR generator and generated-site viewer operations.

use tracing::{debug, info};
use trovolio_core::{GeneratedSiteRef, IsolatedDocument, QrRequest};
use url::Url;

use crate::deps::DashboardDeps;
use crate::error::DashboardError;

/// Media operations handler.
pub struct MediaOps<'a> {
    deps: &'a DashboardDeps,
}

impl<'a> MediaOps<'a> {
    pub const fn new(deps: &'a DashboardDeps) -> Self {
        Self { deps }
    }

    /// Image URL for a QR request against the configured endpoint.
    pub fn qr_url(&self, request: &QrRequest) -> Result<Url, DashboardError> {
        let url = request.to_url(self.deps.settings.effective_qr_endpoint())?;
        debug!(size = request.size(), format = %request.format(), "Composed QR URL");
        Ok(url)
    }

    /// Fetch a generated site for sandboxed display.
    pub async fn site(&self, site: &GeneratedSiteRef) -> Result<IsolatedDocument, DashboardError> {
        let document = self.deps.site_resolver().load(site).await?;
        info!(
            owner = %site.owner_id,
            site = %site.site_id,
            signed = document.is_signed(),
            bytes = document.html().len(),
            "Loaded generated site"
        );
        Ok(document)
    }
}
