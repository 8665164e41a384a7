//! A mounted list view: load, filter, tear down.

use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;
use tracing::debug;
use trovolio_core::{
    CategoryFilter, CollectionLoader, CollectionSpec, CollectionStore, FilterState, FilteredView,
    Identified, LoadState, Searchable, ViewScope, categories,
};

/// One view session over a backend collection.
///
/// Owns its load state, filter state and scope. Nothing here is shared
/// with other views; dropping the view tears it down.
pub struct CollectionView<T> {
    loader: CollectionLoader,
    spec: CollectionSpec<T>,
    store: CollectionStore<T>,
    scope: ViewScope,
    filter: FilterState,
    filtered: FilteredView<T>,
    pending: Option<JoinHandle<bool>>,
}

impl<T> CollectionView<T>
where
    T: Identified + Searchable + DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn new(loader: CollectionLoader, spec: CollectionSpec<T>) -> Self {
        Self {
            loader,
            spec,
            store: CollectionStore::new(),
            scope: ViewScope::new(),
            filter: FilterState::default(),
            filtered: FilteredView::new(),
            pending: None,
        }
    }

    /// Start loading. Calling again reloads; the last load to settle wins.
    pub fn mount(&mut self) {
        debug!(collection = %self.spec.collection(), "Mounting view");
        let handle = self.loader.spawn(self.spec.clone(), &self.store, &self.scope);
        self.pending = Some(handle);
    }

    /// Wait for the most recent load to finish and return the state.
    ///
    /// Returns immediately after teardown or when nothing was mounted.
    pub async fn wait_settled(&mut self) -> LoadState<T> {
        if let Some(handle) = self.pending.take() {
            if let Err(e) = handle.await {
                debug!(collection = %self.spec.collection(), error = %e, "Load task ended abnormally");
            }
        }
        self.store.state()
    }

    /// Stop the view. A load still in flight is discarded when it settles.
    pub fn teardown(&self) {
        self.scope.teardown();
    }

    pub fn is_mounted(&self) -> bool {
        self.scope.is_active()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    /// Select a category tab. `"All"` clears the filter.
    pub fn set_category(&mut self, label: &str) {
        self.filter.category = CategoryFilter::from_label(label);
    }

    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Items passing the current filter, memoised per revision and filter.
    pub fn filtered(&mut self) -> &[T] {
        let snapshot = self.store.snapshot();
        self.filtered.get(&snapshot, &self.filter)
    }

    /// Category tabs for the visible items.
    pub fn categories(&self) -> Vec<String> {
        categories(self.store.state().visible_items())
    }

    pub fn state(&self) -> LoadState<T> {
        self.store.state()
    }

    /// Shared handle to this view's state cell.
    pub const fn store(&self) -> &CollectionStore<T> {
        &self.store
    }

    /// How many times the filter actually recomputed.
    pub const fn filter_computations(&self) -> usize {
        self.filtered.computations()
    }
}
