//! Remote collection loader.
//!
//! Issues one query for a named collection and produces exactly one terminal
//! state. Failures and empty results both degrade to static fallback data;
//! the reason is kept in the state so callers can tell them apart.

mod scope;
mod state;
mod store;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::{Record, SelectQuery};
use crate::ports::{BackendError, BackendPort, BackendResult, Diagnostic, DiagnosticSink};

pub use scope::ViewScope;
pub use state::{FallbackReason, LoadState};
pub use store::{CollectionStore, StoreSnapshot};

/// What to load and what to show if loading yields nothing usable.
#[derive(Debug, Clone)]
pub struct CollectionSpec<T> {
    pub query: SelectQuery,
    pub fallback: Vec<T>,
}

impl<T> CollectionSpec<T> {
    pub const fn new(query: SelectQuery, fallback: Vec<T>) -> Self {
        Self { query, fallback }
    }

    pub fn collection(&self) -> &str {
        &self.query.collection
    }
}

/// Loads collections through an injected backend.
#[derive(Clone)]
pub struct CollectionLoader {
    backend: Arc<dyn BackendPort>,
    sink: Arc<dyn DiagnosticSink>,
    distinguish_empty: bool,
}

impl CollectionLoader {
    /// Create a loader. Empty results collapse to fallback data by default.
    pub fn new(backend: Arc<dyn BackendPort>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            backend,
            sink,
            distinguish_empty: false,
        }
    }

    /// When set, an empty remote result yields `Ready(vec![])` instead of
    /// falling back.
    #[must_use]
    pub const fn with_distinguish_empty(mut self, distinguish: bool) -> Self {
        self.distinguish_empty = distinguish;
        self
    }

    /// Fetch once and compute the terminal state.
    ///
    /// Errors are reported to the diagnostic sink, never returned.
    pub async fn fetch<T>(&self, spec: &CollectionSpec<T>) -> LoadState<T>
    where
        T: DeserializeOwned + Clone,
    {
        let collection = spec.collection();
        debug!(collection = %collection, "Loading collection");

        let result = self
            .backend
            .select(&spec.query)
            .await
            .and_then(decode_records::<T>);

        match result {
            Ok(items) if !items.is_empty() => {
                debug!(collection = %collection, count = items.len(), "Collection loaded");
                LoadState::Ready(items)
            }
            Ok(_) if self.distinguish_empty => {
                debug!(collection = %collection, "Collection is empty");
                LoadState::Ready(Vec::new())
            }
            Ok(_) => {
                debug!(collection = %collection, "Collection is empty, using fallback data");
                LoadState::Failed {
                    reason: FallbackReason::Empty,
                    fallback: spec.fallback.clone(),
                }
            }
            Err(e) => {
                self.sink
                    .report(Diagnostic::load_failed(collection, e.to_string()));
                LoadState::Failed {
                    reason: FallbackReason::Error {
                        message: e.message().to_string(),
                    },
                    fallback: spec.fallback.clone(),
                }
            }
        }
    }

    /// Load into `store` on a background task owned by `scope`.
    ///
    /// The store moves to `Loading` immediately. The terminal state is only
    /// applied while the scope is still active; a result settling after
    /// teardown is dropped. Returns whether the result was applied.
    pub fn spawn<T>(
        &self,
        spec: CollectionSpec<T>,
        store: &CollectionStore<T>,
        scope: &ViewScope,
    ) -> JoinHandle<bool>
    where
        T: DeserializeOwned + Clone + Send + Sync + 'static,
    {
        let token = scope.token();
        if token.is_cancelled() {
            return tokio::spawn(async { false });
        }

        store.set(LoadState::Loading);

        let loader = self.clone();
        let store = store.clone();
        tokio::spawn(async move {
            let outcome = tokio::select! {
                biased;
                () = token.cancelled() => None,
                state = loader.fetch(&spec) => Some(state),
            };

            let applied = outcome.is_some_and(|state| store.set_unless_cancelled(state, &token));
            if !applied {
                debug!(
                    collection = %spec.collection(),
                    "View torn down before load settled, discarding result"
                );
            }
            applied
        })
    }
}

/// Decode raw rows into typed items. Any bad row fails the whole load.
fn decode_records<T: DeserializeOwned>(records: Vec<Record>) -> BackendResult<Vec<T>> {
    records
        .into_iter()
        .map(|record| {
            serde_json::from_value(serde_json::Value::Object(record)).map_err(|e| {
                BackendError::Decode {
                    message: e.to_string(),
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CollectionItem, OrderBy};
    use crate::ports::NoopSink;
    use async_trait::async_trait;
    use serde_json::json;

    struct StaticBackend(BackendResult<Vec<Record>>);

    #[async_trait]
    impl BackendPort for StaticBackend {
        async fn select(&self, _query: &SelectQuery) -> BackendResult<Vec<Record>> {
            self.0.clone()
        }

        async fn upsert(&self, _: &str, _: &Record, _: &str) -> BackendResult<()> {
            Ok(())
        }

        async fn update(&self, _: &str, _: &Record, _: &str, _: &str) -> BackendResult<()> {
            Ok(())
        }
    }

    fn record(value: serde_json::Value) -> Record {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn spec() -> CollectionSpec<CollectionItem> {
        CollectionSpec::new(
            SelectQuery::new("tools", OrderBy::asc("name")),
            vec![CollectionItem::new("sample")],
        )
    }

    fn loader(result: BackendResult<Vec<Record>>) -> CollectionLoader {
        CollectionLoader::new(Arc::new(StaticBackend(result)), Arc::new(NoopSink))
    }

    #[tokio::test]
    async fn test_decode_failure_counts_as_error() {
        let state = loader(Ok(vec![record(json!({"id": [1, 2]}))]))
            .fetch(&spec())
            .await;

        assert!(matches!(
            state.fallback_reason(),
            Some(FallbackReason::Error { .. })
        ));
        assert_eq!(state.visible_items()[0].id, "sample");
    }

    #[tokio::test]
    async fn test_distinguish_empty_yields_empty_ready() {
        let state = loader(Ok(Vec::new()))
            .with_distinguish_empty(true)
            .fetch(&spec())
            .await;
        assert_eq!(state, LoadState::Ready(Vec::new()));
    }

    #[tokio::test]
    async fn test_spawn_on_torn_down_scope_leaves_store_idle() {
        let store = CollectionStore::new();
        let scope = ViewScope::new();
        scope.teardown();

        let applied = loader(Ok(Vec::new()))
            .spawn(spec(), &store, &scope)
            .await
            .unwrap();

        assert!(!applied);
        assert_eq!(store.state(), LoadState::Idle);
        assert_eq!(store.revision(), 0);
    }
}
