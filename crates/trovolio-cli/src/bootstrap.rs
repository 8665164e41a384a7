//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - REST client for the managed backend (via trovolio-backend)
//! - Diagnostic sink (tracing)
//! - Dashboard facade (via trovolio-dashboard)
//!
//! Command handlers receive the composed `CliContext` and delegate to the
//! dashboard.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use trovolio_backend::{BackendClientConfig, DefaultRestClient};
use trovolio_core::{BackendPort, Settings, StoragePort, TracingSink};
use trovolio_dashboard::{Dashboard, DashboardDeps};

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub backend: BackendClientConfig,
    pub settings: Settings,
    /// Append load failure reasons to list notices
    pub verbose: bool,
}

impl CliConfig {
    /// Build the configuration from parsed arguments and environment.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut backend = BackendClientConfig::new()
            .with_optional_access_token(cli.access_token.clone())
            .with_user_agent(concat!("trovolio-cli/", env!("CARGO_PKG_VERSION")));
        if let Some(url) = &cli.backend_url {
            backend = backend.with_base_url(url.clone());
        }
        if let Some(key) = &cli.api_key {
            backend = backend.with_api_key(key.clone());
        }
        if let Some(secs) = cli.timeout_secs {
            backend = backend.with_timeout(Duration::from_secs(secs));
        }

        let mut settings = Settings::with_defaults();
        if cli.fetch_limit.is_some() {
            settings.fetch_limit = cli.fetch_limit;
        }
        settings.rollback_on_failure = Some(cli.rollback_on_failure);

        Self {
            backend,
            settings,
            verbose: cli.verbose,
        }
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    pub dashboard: Dashboard,
    pub verbose: bool,
}

impl CliContext {
    pub const fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub const fn verbose(&self) -> bool {
        self.verbose
    }
}

/// Wire the REST client, sink and dashboard together.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    debug!(base_url = %config.backend.base_url(), "Bootstrapping dashboard");

    let client = Arc::new(
        DefaultRestClient::new(&config.backend).map_err(|e| CliError::Config(e.to_string()))?,
    );
    let backend: Arc<dyn BackendPort> = client.clone();
    let storage: Arc<dyn StoragePort> = client;

    let deps = DashboardDeps::new(backend, storage, Arc::new(TracingSink), config.settings)?;
    Ok(CliContext {
        dashboard: Dashboard::new(deps),
        verbose: config.verbose,
    })
}
