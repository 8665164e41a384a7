//! Core domain types and data-loading primitives for the Trovolio dashboard.
//!
//! Every dashboard view repeats the same interaction: fetch a named
//! collection from the managed backend, fall back to static samples when
//! the fetch fails or comes back empty, then filter the result on the
//! client. This crate holds that contract and the ports it runs against.
//!
//! # Architecture
//!
//! ```text
//! Adapters:    trovolio-backend (REST)     test fakes
//!                        ↓                     ↓
//! Ports:       BackendPort · StoragePort · DiagnosticSink
//!                        ↓
//! Core:        CollectionLoader → CollectionStore → FilteredView
//!              ActionDispatcher ↗
//! ```
//!
//! The backend handle is always injected; nothing in this crate reaches
//! for a process-wide client.

#![deny(unused_crate_dependencies)]

pub mod dispatcher;
pub mod domain;
pub mod filter;
pub mod loader;
pub mod ports;
pub mod qr;
pub mod settings;
pub mod site;
pub mod timer;

// Re-export commonly used types for convenience
pub use dispatcher::{ActionDispatcher, ActionOutcome, ActionStatus, DispatchConfig, ItemAction};
pub use domain::{
    CollectionItem, EqFilter, Identified, Mutation, OrderBy, Record, Searchable, SelectQuery,
    SortDirection,
};
pub use filter::{ALL_CATEGORIES, CategoryFilter, FilterState, FilteredView, categories, filter_items};
pub use loader::{
    CollectionLoader, CollectionSpec, CollectionStore, FallbackReason, LoadState, StoreSnapshot,
    ViewScope,
};
pub use ports::{
    BackendError, BackendPort, BackendResult, Diagnostic, DiagnosticKind, DiagnosticSink,
    NoopSink, StorageError, StoragePort, TracingSink,
};
pub use qr::{QrError, QrFormat, QrRequest};
pub use settings::{Settings, SettingsError, validate_settings};
pub use site::{GeneratedSiteRef, IsolatedDocument, SiteError, SiteResolver};
pub use timer::{RotationHandle, RotationTimer};

// Silence unused dev-dependency warnings for crates only used by some tests
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
