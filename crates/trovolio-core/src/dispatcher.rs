//! Per-item action dispatcher.
//!
//! Toggle and sync style actions update local state optimistically, then
//! persist through the backend. A per-item guard keeps a second dispatch
//! for the same id from issuing another remote call while one is pending.
//!
//! On a failed write the optimistic change stays in place unless
//! [`DispatchConfig::rollback_on_failure`] is set, so local and remote
//! state may diverge until the next reload.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::domain::{Identified, Mutation};
use crate::loader::CollectionStore;
use crate::ports::{BackendPort, Diagnostic, DiagnosticSink};

/// Transient per-item status, used to disable controls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActionStatus {
    #[default]
    Idle,
    Saving,
    Error(String),
}

/// Result of a single dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Persisted; local timestamps set to `completed_at`.
    Completed { completed_at: DateTime<Utc> },
    /// Persisting failed.
    Failed { message: String, rolled_back: bool },
    /// Another action for this item is still pending. Nothing was sent.
    Busy,
    /// No visible item has this id.
    NotFound,
}

/// Dispatcher behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Restore the pre-action item when persisting fails.
    pub rollback_on_failure: bool,
}

/// An optimistic, persistable change to one item.
pub trait ItemAction<T>: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Apply the change locally, assuming success.
    fn apply(&self, item: &mut T);

    /// The write that persists the already-applied change.
    fn mutation(&self, item: &T) -> Mutation;

    /// Called after the write succeeds, e.g. to stamp `last_synced`.
    fn on_success(&self, item: &mut T, completed_at: DateTime<Utc>) {
        let _ = (item, completed_at);
    }
}

type StatusMap = Arc<Mutex<HashMap<String, ActionStatus>>>;

/// RAII guard holding an item's `Saving` marker.
///
/// The final status is written on drop, so every exit path clears
/// `Saving`, including a caller dropping the dispatch future.
struct SavingGuard {
    id: String,
    statuses: StatusMap,
    finished: ActionStatus,
}

impl SavingGuard {
    fn acquire(statuses: &StatusMap, id: &str) -> Option<Self> {
        let mut map = statuses.lock().unwrap_or_else(PoisonError::into_inner);
        if map.get(id) == Some(&ActionStatus::Saving) {
            return None;
        }
        map.insert(id.to_string(), ActionStatus::Saving);
        Some(Self {
            id: id.to_string(),
            statuses: Arc::clone(statuses),
            finished: ActionStatus::Idle,
        })
    }

    fn finish(mut self, status: ActionStatus) {
        self.finished = status;
    }
}

impl Drop for SavingGuard {
    fn drop(&mut self) {
        let status = std::mem::take(&mut self.finished);
        self.statuses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(self.id.clone(), status);
    }
}

/// Dispatches item actions against an injected backend.
#[derive(Clone)]
pub struct ActionDispatcher {
    backend: Arc<dyn BackendPort>,
    sink: Arc<dyn DiagnosticSink>,
    config: DispatchConfig,
    statuses: StatusMap,
}

impl ActionDispatcher {
    pub fn new(
        backend: Arc<dyn BackendPort>,
        sink: Arc<dyn DiagnosticSink>,
        config: DispatchConfig,
    ) -> Self {
        Self {
            backend,
            sink,
            config,
            statuses: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub const fn config(&self) -> DispatchConfig {
        self.config
    }

    /// Current status for an item.
    pub fn status(&self, id: &str) -> ActionStatus {
        self.statuses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .unwrap_or_default()
    }

    /// True while a dispatch for `id` is in flight.
    pub fn is_pending(&self, id: &str) -> bool {
        self.status(id) == ActionStatus::Saving
    }

    /// Apply `action` to the item `id` in `store` and persist it.
    pub async fn perform<T, A>(&self, store: &CollectionStore<T>, id: &str, action: &A) -> ActionOutcome
    where
        T: Identified + Clone + Send + Sync,
        A: ItemAction<T> + ?Sized,
    {
        let Some(guard) = SavingGuard::acquire(&self.statuses, id) else {
            debug!(item_id = %id, action = action.name(), "Action already pending, ignoring");
            return ActionOutcome::Busy;
        };

        let Some(previous) = store.item(id) else {
            guard.finish(ActionStatus::Idle);
            return ActionOutcome::NotFound;
        };

        let mut optimistic = previous.clone();
        action.apply(&mut optimistic);
        let mutation = action.mutation(&optimistic);
        store.replace_item(optimistic);

        debug!(
            item_id = %id,
            action = action.name(),
            collection = %mutation.collection(),
            "Persisting item action"
        );

        match self.backend.execute(&mutation).await {
            Ok(()) => {
                let completed_at = Utc::now();
                store.modify_item(id, |item| action.on_success(item, completed_at));
                guard.finish(ActionStatus::Idle);
                ActionOutcome::Completed { completed_at }
            }
            Err(e) => {
                let message = e.message().to_string();
                warn!(item_id = %id, action = action.name(), error = %e, "Item action failed");
                self.sink.report(Diagnostic::action_failed(id, e.to_string()));

                let rolled_back = self.config.rollback_on_failure && store.replace_item(previous);
                guard.finish(ActionStatus::Error(message.clone()));
                ActionOutcome::Failed {
                    message,
                    rolled_back,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CollectionItem, Record, SelectQuery};
    use crate::loader::LoadState;
    use crate::ports::{BackendError, BackendResult, NoopSink};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FlakyBackend {
        fail: bool,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl BackendPort for FlakyBackend {
        async fn select(&self, _query: &SelectQuery) -> BackendResult<Vec<Record>> {
            Ok(Vec::new())
        }

        async fn upsert(&self, _: &str, _: &Record, _: &str) -> BackendResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(BackendError::Status {
                    status: 500,
                    message: "upsert rejected".to_string(),
                })
            } else {
                Ok(())
            }
        }

        async fn update(&self, _: &str, _: &Record, _: &str, _: &str) -> BackendResult<()> {
            Ok(())
        }
    }

    struct Toggle;

    impl ItemAction<CollectionItem> for Toggle {
        fn name(&self) -> &'static str {
            "toggle"
        }

        fn apply(&self, item: &mut CollectionItem) {
            let on = item.fields.get("enabled").and_then(serde_json::Value::as_bool) == Some(true);
            item.fields.insert("enabled".into(), (!on).into());
        }

        fn mutation(&self, item: &CollectionItem) -> Mutation {
            Mutation::Upsert {
                collection: "integrations".into(),
                record: item.fields.clone(),
                conflict_key: "id".into(),
            }
        }

        fn on_success(&self, item: &mut CollectionItem, completed_at: DateTime<Utc>) {
            item.fields
                .insert("last_synced".into(), completed_at.to_rfc3339().into());
        }
    }

    fn store() -> CollectionStore<CollectionItem> {
        let store = CollectionStore::new();
        store.set(LoadState::Ready(vec![
            CollectionItem::new("slack").with_field("enabled", false),
        ]));
        store
    }

    fn enabled(store: &CollectionStore<CollectionItem>) -> bool {
        store.item("slack").unwrap().fields["enabled"] == true
    }

    fn dispatcher(fail: bool, rollback: bool) -> (ActionDispatcher, Arc<FlakyBackend>) {
        let backend = Arc::new(FlakyBackend {
            fail,
            calls: AtomicUsize::new(0),
        });
        let dispatcher = ActionDispatcher::new(
            backend.clone(),
            Arc::new(NoopSink),
            DispatchConfig {
                rollback_on_failure: rollback,
            },
        );
        (dispatcher, backend)
    }

    #[tokio::test]
    async fn test_success_sets_timestamp_and_clears_status() {
        let (dispatcher, backend) = dispatcher(false, false);
        let store = store();

        let outcome = dispatcher.perform(&store, "slack", &Toggle).await;

        assert!(matches!(outcome, ActionOutcome::Completed { .. }));
        assert!(enabled(&store));
        assert!(store.item("slack").unwrap().fields.contains_key("last_synced"));
        assert_eq!(dispatcher.status("slack"), ActionStatus::Idle);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_keeps_optimistic_state_by_default() {
        let (dispatcher, _) = dispatcher(true, false);
        let store = store();

        let outcome = dispatcher.perform(&store, "slack", &Toggle).await;

        assert_eq!(
            outcome,
            ActionOutcome::Failed {
                message: "upsert rejected".to_string(),
                rolled_back: false,
            }
        );
        assert!(enabled(&store), "optimistic update is not rolled back");
        assert_eq!(
            dispatcher.status("slack"),
            ActionStatus::Error("upsert rejected".to_string())
        );
    }

    #[tokio::test]
    async fn test_failure_rolls_back_when_configured() {
        let (dispatcher, _) = dispatcher(true, true);
        let store = store();

        let outcome = dispatcher.perform(&store, "slack", &Toggle).await;

        assert!(matches!(
            outcome,
            ActionOutcome::Failed {
                rolled_back: true,
                ..
            }
        ));
        assert!(!enabled(&store));
    }

    #[tokio::test]
    async fn test_error_status_allows_retry() {
        let (dispatcher, backend) = dispatcher(true, false);
        let store = store();

        dispatcher.perform(&store, "slack", &Toggle).await;
        dispatcher.perform(&store, "slack", &Toggle).await;

        assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unknown_item() {
        let (dispatcher, backend) = dispatcher(false, false);
        let outcome = dispatcher.perform(&store(), "github", &Toggle).await;

        assert_eq!(outcome, ActionOutcome::NotFound);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
        assert_eq!(dispatcher.status("github"), ActionStatus::Idle);
    }
}
