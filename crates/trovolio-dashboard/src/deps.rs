//! Dependency injection for `Dashboard`.
//!
//! All dependencies are injected as trait objects so adapters and tests
//! choose the concrete backend.

use std::sync::Arc;

use trovolio_core::{
    BackendPort, CollectionLoader, DiagnosticSink, DispatchConfig, Settings, SiteResolver,
    StoragePort, validate_settings,
};

use crate::error::DashboardError;

/// Dependencies required to construct a `Dashboard`.
///
/// Fields are private to enforce construction via `DashboardDeps::new()`,
/// which validates the settings once up front.
pub struct DashboardDeps {
    /// Backend query and mutation API.
    pub(crate) backend: Arc<dyn BackendPort>,
    /// File storage holding generated sites.
    pub(crate) storage: Arc<dyn StoragePort>,
    /// Where load and action failures are reported.
    pub(crate) sink: Arc<dyn DiagnosticSink>,
    pub(crate) settings: Settings,
}

impl DashboardDeps {
    pub fn new(
        backend: Arc<dyn BackendPort>,
        storage: Arc<dyn StoragePort>,
        sink: Arc<dyn DiagnosticSink>,
        settings: Settings,
    ) -> Result<Self, DashboardError> {
        validate_settings(&settings)?;
        Ok(Self {
            backend,
            storage,
            sink,
            settings,
        })
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// A loader honouring the `distinguish_empty` setting.
    pub fn loader(&self) -> CollectionLoader {
        CollectionLoader::new(Arc::clone(&self.backend), Arc::clone(&self.sink))
            .with_distinguish_empty(self.settings.effective_distinguish_empty())
    }

    pub fn dispatch_config(&self) -> DispatchConfig {
        DispatchConfig {
            rollback_on_failure: self.settings.effective_rollback_on_failure(),
        }
    }

    pub fn site_resolver(&self) -> SiteResolver {
        SiteResolver::new(
            Arc::clone(&self.storage),
            Arc::clone(&self.sink),
            self.settings.effective_sites_bucket(),
            self.settings.effective_signed_url_ttl(),
        )
    }
}
