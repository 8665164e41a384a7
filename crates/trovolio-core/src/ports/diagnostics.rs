//! Observability sink for failures that are never shown to the end user.
//!
//! A failed collection load degrades to fallback content, so the only
//! trace of it is what reaches this sink.

use tracing::warn;

/// What kind of failure a diagnostic describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A collection fetch failed and fallback data was shown.
    LoadFailed,
    /// A per-item mutation failed to persist.
    ActionFailed,
    /// Signing a storage URL failed and the public URL was used instead.
    SignedUrlFallback,
}

/// A single diagnostic record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Collection name, item id or storage path the failure concerns.
    pub subject: String,
    pub message: String,
}

impl Diagnostic {
    pub fn load_failed(collection: &str, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::LoadFailed,
            subject: collection.to_string(),
            message: message.into(),
        }
    }

    pub fn action_failed(item_id: &str, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::ActionFailed,
            subject: item_id.to_string(),
            message: message.into(),
        }
    }

    pub fn signed_url_fallback(path: &str, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::SignedUrlFallback,
            subject: path.to_string(),
            message: message.into(),
        }
    }
}

/// Trait for reporting diagnostics.
///
/// # Implementations
///
/// - `TracingSink` - forwards to `tracing` at warn level
/// - `NoopSink` - for tests that don't care about diagnostics
pub trait DiagnosticSink: Send + Sync {
    /// Report a diagnostic. Must not block.
    fn report(&self, diagnostic: Diagnostic);
}

/// Sink that logs every diagnostic through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        warn!(
            kind = ?diagnostic.kind,
            subject = %diagnostic.subject,
            "{}",
            diagnostic.message
        );
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn report(&self, _diagnostic: Diagnostic) {}
}
