//! Dashboard - the unified dashboard facade.
//!
//! Every surface (the CLI today) goes through this type. Each list method
//! returns a fresh, unmounted view session; the caller mounts it, reads it
//! and tears it down.

use std::sync::Arc;

use trovolio_core::{
    ActionDispatcher, GeneratedSiteRef, IsolatedDocument, QrRequest, Settings,
};
use url::Url;

use crate::collections;
use crate::deps::DashboardDeps;
use crate::error::DashboardError;
use crate::highlights::HighlightsView;
use crate::integrations::IntegrationsView;
use crate::media::MediaOps;
use crate::samples;
use crate::types::{KnowledgeEntry, MonthlyReport, ToolEntry};
use crate::view::CollectionView;

/// Unified dashboard facade.
///
/// # Construction
///
/// ```ignore
/// let deps = DashboardDeps::new(backend, storage, sink, settings)?;
/// let dashboard = Dashboard::new(deps);
/// ```
pub struct Dashboard {
    deps: DashboardDeps,
}

impl Dashboard {
    pub const fn new(deps: DashboardDeps) -> Self {
        Self { deps }
    }

    pub const fn settings(&self) -> &Settings {
        self.deps.settings()
    }

    const fn media_ops(&self) -> MediaOps<'_> {
        MediaOps::new(&self.deps)
    }

    // =========================================================================
    // Lists
    // =========================================================================

    /// Knowledge Library, newest first, capped at the fetch limit.
    pub fn knowledge_library(&self) -> CollectionView<KnowledgeEntry> {
        let spec = collections::knowledge_spec(self.settings().effective_fetch_limit());
        CollectionView::new(self.deps.loader(), spec)
    }

    /// Monthly Reports, newest period first, capped at the fetch limit.
    pub fn monthly_reports(&self) -> CollectionView<MonthlyReport> {
        let spec = collections::reports_spec(self.settings().effective_fetch_limit());
        CollectionView::new(self.deps.loader(), spec)
    }

    /// Tools catalog, alphabetical.
    pub fn tools_catalog(&self) -> CollectionView<ToolEntry> {
        CollectionView::new(self.deps.loader(), collections::tools_spec())
    }

    /// Integrations with connect/disconnect and sync actions.
    pub fn integrations(&self) -> IntegrationsView {
        let view = CollectionView::new(self.deps.loader(), collections::integrations_spec());
        let dispatcher = ActionDispatcher::new(
            Arc::clone(&self.deps.backend),
            Arc::clone(&self.deps.sink),
            self.deps.dispatch_config(),
        );
        IntegrationsView::new(view, dispatcher)
    }

    // =========================================================================
    // Tools
    // =========================================================================

    pub fn qr_url(&self, request: &QrRequest) -> Result<Url, DashboardError> {
        self.media_ops().qr_url(request)
    }

    pub async fn site(&self, site: &GeneratedSiteRef) -> Result<IsolatedDocument, DashboardError> {
        self.media_ops().site(site).await
    }

    // =========================================================================
    // Landing
    // =========================================================================

    /// Start the "Why Choose Us" rotation. Must be called within a Tokio runtime.
    pub fn highlights(&self) -> HighlightsView {
        HighlightsView::start(
            samples::highlights(),
            self.settings().effective_rotation_period(),
        )
    }
}
