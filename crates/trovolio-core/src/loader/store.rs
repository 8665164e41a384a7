//! Per-view state cell shared by the loader and the action dispatcher.
//!
//! The loader writes terminal states here; the dispatcher patches items in
//! place. Readers subscribe through a `watch` channel and use the revision
//! counter to decide whether derived views need recomputing.

use std::sync::Arc;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::state::LoadState;
use crate::domain::Identified;

/// A state value plus a counter bumped on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSnapshot<T> {
    pub revision: u64,
    pub state: LoadState<T>,
}

/// Observable load state for one view session.
///
/// Cloning shares the same underlying cell.
#[derive(Debug)]
pub struct CollectionStore<T> {
    tx: Arc<watch::Sender<StoreSnapshot<T>>>,
}

impl<T> Clone for CollectionStore<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T> Default for CollectionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CollectionStore<T> {
    /// Create a store in the `Idle` state.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(StoreSnapshot {
            revision: 0,
            state: LoadState::Idle,
        });
        Self { tx: Arc::new(tx) }
    }

    /// Current revision.
    pub fn revision(&self) -> u64 {
        self.tx.borrow().revision
    }

    /// Replace the whole state.
    pub fn set(&self, state: LoadState<T>) {
        self.tx.send_modify(|snapshot| {
            snapshot.revision += 1;
            snapshot.state = state;
        });
    }

    /// Replace the whole state unless `token` is cancelled.
    ///
    /// The check runs while the cell is locked, so a cancel observed by the
    /// caller is never followed by a write.
    pub fn set_unless_cancelled(&self, state: LoadState<T>, token: &CancellationToken) -> bool {
        self.tx.send_if_modified(|snapshot| {
            if token.is_cancelled() {
                return false;
            }
            snapshot.revision += 1;
            snapshot.state = state;
            true
        })
    }

    /// Subscribe to changes.
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot<T>> {
        self.tx.subscribe()
    }
}

impl<T: Clone> CollectionStore<T> {
    /// Clone of the current state.
    pub fn state(&self) -> LoadState<T> {
        self.tx.borrow().state.clone()
    }

    /// Clone of the current snapshot.
    pub fn snapshot(&self) -> StoreSnapshot<T> {
        self.tx.borrow().clone()
    }

    /// Wait until the state is terminal and return it.
    ///
    /// Never resolves for a store that is never loaded.
    pub async fn settled(&self) -> LoadState<T> {
        let mut rx = self.subscribe();
        let result = rx.wait_for(|snapshot| snapshot.state.is_settled()).await;
        match result {
            Ok(snapshot) => snapshot.state.clone(),
            // The sender lives in `self`, so the channel cannot close here.
            Err(_) => self.state(),
        }
    }
}

impl<T: Identified + Clone> CollectionStore<T> {
    /// Clone of the visible item with the given id.
    pub fn item(&self, id: &str) -> Option<T> {
        self.tx
            .borrow()
            .state
            .visible_items()
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    /// Apply `f` to the visible item with the given id.
    ///
    /// Returns false (and notifies nobody) when the id is unknown.
    pub fn modify_item(&self, id: &str, f: impl FnOnce(&mut T)) -> bool {
        self.tx.send_if_modified(|snapshot| {
            let Some(items) = snapshot.state.visible_items_mut() else {
                return false;
            };
            let Some(item) = items.iter_mut().find(|item| item.id() == id) else {
                return false;
            };
            f(item);
            snapshot.revision += 1;
            true
        })
    }

    /// Replace the visible item that shares `item`'s id.
    pub fn replace_item(&self, item: T) -> bool {
        let id = item.id().to_string();
        self.modify_item(&id, move |slot| *slot = item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CollectionItem;

    fn ready_store() -> CollectionStore<CollectionItem> {
        let store = CollectionStore::new();
        store.set(LoadState::Ready(vec![
            CollectionItem::new("a").with_field("title", "Alpha"),
            CollectionItem::new("b").with_field("title", "Beta"),
        ]));
        store
    }

    #[test]
    fn test_set_bumps_revision() {
        let store: CollectionStore<CollectionItem> = CollectionStore::new();
        assert_eq!(store.revision(), 0);
        store.set(LoadState::Loading);
        assert_eq!(store.revision(), 1);
        assert!(store.state().is_loading());
    }

    #[test]
    fn test_set_unless_cancelled() {
        let store: CollectionStore<CollectionItem> = CollectionStore::new();
        let token = CancellationToken::new();
        store.set(LoadState::Loading);

        assert!(store.set_unless_cancelled(LoadState::Ready(Vec::new()), &token));
        assert_eq!(store.revision(), 2);

        token.cancel();
        let before = store.snapshot();
        assert!(!store.set_unless_cancelled(LoadState::Loading, &token));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_modify_item() {
        let store = ready_store();
        let before = store.revision();

        assert!(store.modify_item("b", |item| {
            item.fields.insert("title".into(), "Beta 2".into());
        }));
        assert_eq!(store.revision(), before + 1);
        assert_eq!(store.item("b").unwrap().field_str("title"), Some("Beta 2"));
    }

    #[test]
    fn test_modify_unknown_item_is_noop() {
        let store = ready_store();
        let before = store.revision();
        assert!(!store.modify_item("zzz", |_| unreachable!()));
        assert_eq!(store.revision(), before);
    }

    #[test]
    fn test_replace_item_in_loading_state_is_noop() {
        let store: CollectionStore<CollectionItem> = CollectionStore::new();
        store.set(LoadState::Loading);
        assert!(!store.replace_item(CollectionItem::new("a")));
    }

    #[tokio::test]
    async fn test_settled_waits_for_terminal_state() {
        let store: CollectionStore<CollectionItem> = CollectionStore::new();
        store.set(LoadState::Loading);

        let writer = store.clone();
        tokio::spawn(async move {
            writer.set(LoadState::Ready(vec![CollectionItem::new("x")]));
        });

        let state = store.settled().await;
        assert_eq!(state.visible_items().len(), 1);
    }
}
