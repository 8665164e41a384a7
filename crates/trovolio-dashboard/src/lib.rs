//! Platform-agnostic dashboard facade for Trovolio.
//!
//! This crate provides `Dashboard`, the orchestration layer every surface
//! delegates to: Knowledge Library, Monthly Reports, Integrations, Tools
//! catalog, QR generator, generated-site viewer and the "Why Choose Us"
//! rotation.
//!
//! # Architecture
//!
//! ```text
//! Adapters:          trovolio-cli
//!                         ↓
//! Facade:          trovolio-dashboard
//!                      Dashboard
//!                         ↓
//! Core:             trovolio-core
//! ```
//!
//! # Rules
//!
//! 1. **No adapter dependencies** - no HTTP client, no terminal code
//! 2. **Pure orchestration** - all deps injected via `DashboardDeps`
//! 3. **Semantic errors** - returns `DashboardError`, adapters map it

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use tokio_test as _;

mod backend;
mod collections;
mod deps;
mod error;
mod highlights;
mod integrations;
mod media;
mod view;

pub mod samples;
pub mod types;

// Primary exports
pub use backend::Dashboard;
pub use deps::DashboardDeps;
pub use error::DashboardError;

// Views and actions
pub use highlights::HighlightsView;
pub use integrations::{IntegrationsView, SyncNow, ToggleConnection};
pub use view::CollectionView;

pub use collections::{
    INTEGRATIONS_COLLECTION, KNOWLEDGE_COLLECTION, REPORTS_COLLECTION, TOOLS_COLLECTION,
};
