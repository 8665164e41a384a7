//! Backend query port.

use async_trait::async_trait;

use super::BackendResult;
use crate::domain::{Mutation, Record, SelectQuery};

/// Port trait for the managed backend's query API.
///
/// One process-wide connection typically sits behind this trait; it is
/// shared by reference-counting and injected into the loader and the
/// dispatcher. Concurrency control for writes is entirely the backend's.
///
/// # Design
///
/// - One attempt per call; no retry or backoff
/// - Rows are returned in backend order (already sorted server-side)
#[async_trait]
pub trait BackendPort: Send + Sync {
    /// Read rows from a collection.
    async fn select(&self, query: &SelectQuery) -> BackendResult<Vec<Record>>;

    /// Insert or merge a record, resolving conflicts on `conflict_key`.
    async fn upsert(&self, collection: &str, record: &Record, conflict_key: &str)
    -> BackendResult<()>;

    /// Patch the rows where `match_key == match_value`.
    async fn update(
        &self,
        collection: &str,
        patch: &Record,
        match_key: &str,
        match_value: &str,
    ) -> BackendResult<()>;

    /// Run a [`Mutation`] through the matching call.
    async fn execute(&self, mutation: &Mutation) -> BackendResult<()> {
        match mutation {
            Mutation::Upsert {
                collection,
                record,
                conflict_key,
            } => self.upsert(collection, record, conflict_key).await,
            Mutation::Update {
                collection,
                patch,
                match_key,
                match_value,
            } => self.update(collection, patch, match_key, match_value).await,
        }
    }
}
