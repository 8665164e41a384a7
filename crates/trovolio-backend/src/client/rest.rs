//! Row reads and writes against `/rest/v1`.

use serde_json::Value;
use tracing::debug;
use trovolio_core::{Record, SelectQuery};

use super::RestClient;
use crate::error::ClientResult;
use crate::http::{HttpBackend, WriteMethod};
use crate::url::{
    PREFER_MERGE_DUPLICATES, PREFER_RETURN_MINIMAL, build_select_url, build_update_url,
    build_upsert_url,
};

impl<B: HttpBackend> RestClient<B> {
    /// Read rows in backend order.
    pub async fn select_rows(&self, query: &SelectQuery) -> ClientResult<Vec<Record>> {
        let url = build_select_url(&self.base_url, query)?;
        debug!(collection = %query.collection, "Selecting rows");
        self.backend.get_json(&url).await
    }

    /// Insert or merge one row, resolving conflicts on `conflict_key`.
    pub async fn upsert_row(
        &self,
        collection: &str,
        record: &Record,
        conflict_key: &str,
    ) -> ClientResult<()> {
        let url = build_upsert_url(&self.base_url, collection, conflict_key)?;
        debug!(collection = %collection, conflict_key = %conflict_key, "Upserting row");
        self.backend
            .write(
                WriteMethod::Post,
                &url,
                &Value::Object(record.clone()),
                Some(PREFER_MERGE_DUPLICATES),
            )
            .await
    }

    /// Patch every row where `match_key == match_value`.
    pub async fn update_rows(
        &self,
        collection: &str,
        patch: &Record,
        match_key: &str,
        match_value: &str,
    ) -> ClientResult<()> {
        let url = build_update_url(&self.base_url, collection, match_key, match_value)?;
        debug!(collection = %collection, match_key = %match_key, "Updating rows");
        self.backend
            .write(
                WriteMethod::Patch,
                &url,
                &Value::Object(patch.clone()),
                Some(PREFER_RETURN_MINIMAL),
            )
            .await
    }
}
