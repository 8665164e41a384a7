//! End-to-end tests for the load, filter and dispatch contract.
//!
//! These drive the public API against in-process backends whose calls can
//! be held open, so ordering between teardown, settlement and repeated
//! dispatches is deterministic.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::{Notify, Semaphore, oneshot};

use trovolio_core::{
    ActionDispatcher, ActionOutcome, ActionStatus, BackendError, BackendPort, BackendResult,
    CollectionItem, CollectionLoader, CollectionSpec, CollectionStore, DispatchConfig,
    FallbackReason, FilterState, FilteredView, ItemAction, LoadState, Mutation, NoopSink, OrderBy,
    Record, SelectQuery, ViewScope,
};

type PendingSelect = oneshot::Receiver<BackendResult<Vec<Record>>>;

/// Backend whose select and write calls block until the test releases them.
struct HeldBackend {
    pending_select: Mutex<Option<PendingSelect>>,
    write_entered: Notify,
    write_release: Semaphore,
    writes: AtomicUsize,
}

impl HeldBackend {
    fn new() -> Self {
        Self {
            pending_select: Mutex::new(None),
            write_entered: Notify::new(),
            write_release: Semaphore::new(0),
            writes: AtomicUsize::new(0),
        }
    }

    fn with_pending_select(rx: PendingSelect) -> Self {
        Self {
            pending_select: Mutex::new(Some(rx)),
            ..Self::new()
        }
    }
}

#[async_trait]
impl BackendPort for HeldBackend {
    async fn select(&self, _query: &SelectQuery) -> BackendResult<Vec<Record>> {
        let rx = self.pending_select.lock().unwrap().take();
        match rx {
            Some(rx) => rx.await.unwrap_or_else(|_| {
                Err(BackendError::Network {
                    message: "sender dropped".to_string(),
                })
            }),
            None => Ok(Vec::new()),
        }
    }

    async fn upsert(&self, _: &str, _: &Record, _: &str) -> BackendResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.write_entered.notify_one();
        let _permit = self.write_release.acquire().await;
        Ok(())
    }

    async fn update(&self, _: &str, _: &Record, _: &str, _: &str) -> BackendResult<()> {
        Ok(())
    }
}

struct Enable;

impl ItemAction<CollectionItem> for Enable {
    fn name(&self) -> &'static str {
        "enable"
    }

    fn apply(&self, item: &mut CollectionItem) {
        item.fields.insert("enabled".into(), json!(true));
    }

    fn mutation(&self, item: &CollectionItem) -> Mutation {
        let mut record = item.fields.clone();
        record.insert("id".into(), json!(item.id));
        Mutation::Upsert {
            collection: "integrations".into(),
            record,
            conflict_key: "id".into(),
        }
    }
}

fn article(id: &str, title: &str, description: &str, category: &str) -> CollectionItem {
    CollectionItem::new(id)
        .with_field("title", title)
        .with_field("description", description)
        .with_field("category", category)
}

fn row(id: &str, title: &str) -> Record {
    json!({ "id": id, "title": title, "description": "", "category": "Guides" })
        .as_object()
        .cloned()
        .unwrap()
}

fn articles_spec(fallback: Vec<CollectionItem>) -> CollectionSpec<CollectionItem> {
    CollectionSpec::new(
        SelectQuery::new("knowledge_articles", OrderBy::desc("created_at")),
        fallback,
    )
}

#[tokio::test]
async fn test_late_result_after_teardown_is_discarded() {
    let (tx, rx) = oneshot::channel();
    let backend = Arc::new(HeldBackend::with_pending_select(rx));
    let loader = CollectionLoader::new(backend, Arc::new(NoopSink));
    let store = CollectionStore::new();
    let scope = ViewScope::new();

    let handle = loader.spawn(articles_spec(Vec::new()), &store, &scope);
    assert!(store.state().is_loading());
    let revision = store.revision();

    scope.teardown();
    let _ = tx.send(Ok(vec![row("1", "Late")]));

    assert!(!handle.await.unwrap());
    assert_eq!(store.revision(), revision);
    assert!(store.state().is_loading());
}

#[tokio::test]
async fn test_load_after_teardown_never_starts() {
    let loader = CollectionLoader::new(Arc::new(HeldBackend::new()), Arc::new(NoopSink));
    let store: CollectionStore<CollectionItem> = CollectionStore::new();
    let scope = ViewScope::new();
    scope.teardown();

    let applied = loader
        .spawn(articles_spec(Vec::new()), &store, &scope)
        .await
        .unwrap();

    assert!(!applied);
    assert_eq!(store.revision(), 0);
    assert_eq!(store.state(), LoadState::Idle);
}

#[tokio::test]
async fn test_failed_load_shows_filterable_fallback() {
    let (tx, rx) = oneshot::channel();
    let backend = Arc::new(HeldBackend::with_pending_select(rx));
    let loader = CollectionLoader::new(backend, Arc::new(NoopSink));
    let store = CollectionStore::new();
    let scope = ViewScope::new();

    let fallback = vec![
        article("1", "Optimize Images", "Shrink image payloads", "Guides"),
        article("2", "Team Billing", "Invoices and seats", "Billing"),
        article("3", "Image Alt Text", "Accessible images", "Accessibility"),
    ];
    let handle = loader.spawn(articles_spec(fallback), &store, &scope);
    let _ = tx.send(Err(BackendError::Network {
        message: "offline".to_string(),
    }));
    assert!(handle.await.unwrap());

    let snapshot = store.snapshot();
    assert!(matches!(
        snapshot.state.fallback_reason(),
        Some(FallbackReason::Error { .. })
    ));

    let mut view = FilteredView::new();
    let guides = view.get(&snapshot, &FilterState::new("IMAGE", "Guides")).to_vec();
    assert_eq!(guides.len(), 1);
    assert_eq!(guides[0].id, "1");

    let all = view.get(&snapshot, &FilterState::new("image", "All")).to_vec();
    let ids: Vec<_> = all.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["1", "3"]);
}

#[tokio::test]
async fn test_pending_action_blocks_second_dispatch() {
    let backend = Arc::new(HeldBackend::new());
    let dispatcher = ActionDispatcher::new(
        backend.clone(),
        Arc::new(NoopSink),
        DispatchConfig::default(),
    );
    let store = CollectionStore::new();
    store.set(LoadState::Ready(vec![
        CollectionItem::new("slack").with_field("enabled", false),
    ]));

    let first = tokio::spawn({
        let dispatcher = dispatcher.clone();
        let store = store.clone();
        async move { dispatcher.perform(&store, "slack", &Enable).await }
    });

    backend.write_entered.notified().await;
    assert!(dispatcher.is_pending("slack"));
    assert_eq!(
        store.item("slack").unwrap().fields["enabled"],
        json!(true),
        "optimistic change is visible before the write settles"
    );

    let second = dispatcher.perform(&store, "slack", &Enable).await;
    assert_eq!(second, ActionOutcome::Busy);
    assert_eq!(backend.writes.load(Ordering::SeqCst), 1);

    backend.write_release.add_permits(1);
    let first = first.await.unwrap();

    assert!(matches!(first, ActionOutcome::Completed { .. }));
    assert_eq!(dispatcher.status("slack"), ActionStatus::Idle);
    assert_eq!(backend.writes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_actions_on_different_items_run_concurrently() {
    let backend = Arc::new(HeldBackend::new());
    let dispatcher = ActionDispatcher::new(
        backend.clone(),
        Arc::new(NoopSink),
        DispatchConfig::default(),
    );
    let store = CollectionStore::new();
    store.set(LoadState::Ready(vec![
        CollectionItem::new("slack"),
        CollectionItem::new("github"),
    ]));

    let spawn = |id: &'static str| {
        let dispatcher = dispatcher.clone();
        let store = store.clone();
        tokio::spawn(async move { dispatcher.perform(&store, id, &Enable).await })
    };
    let slack = spawn("slack");
    backend.write_entered.notified().await;
    let github = spawn("github");
    backend.write_entered.notified().await;

    assert!(dispatcher.is_pending("slack"));
    assert!(dispatcher.is_pending("github"));

    backend.write_release.add_permits(2);
    assert!(matches!(slack.await.unwrap(), ActionOutcome::Completed { .. }));
    assert!(matches!(github.await.unwrap(), ActionOutcome::Completed { .. }));
    assert_eq!(backend.writes.load(Ordering::SeqCst), 2);
}
