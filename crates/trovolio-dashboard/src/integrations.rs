//! Integrations settings: connect, disconnect and sync.
//!
//! Both actions run through the item dispatcher, so the list updates at
//! once and a second click on the same integration is ignored while the
//! first write is pending.

use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use tracing::info;
use trovolio_core::{ActionDispatcher, ActionOutcome, ActionStatus, ItemAction, Mutation, Record};

use crate::collections::INTEGRATIONS_COLLECTION;
use crate::error::DashboardError;
use crate::types::Integration;
use crate::view::CollectionView;

fn record(pairs: impl IntoIterator<Item = (&'static str, Value)>) -> Record {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Flip the connection state. Persisted as an upsert keyed on `id`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleConnection;

impl ItemAction<Integration> for ToggleConnection {
    fn name(&self) -> &'static str {
        "toggle_connection"
    }

    fn apply(&self, item: &mut Integration) {
        item.enabled = !item.enabled;
    }

    fn mutation(&self, item: &Integration) -> Mutation {
        Mutation::Upsert {
            collection: INTEGRATIONS_COLLECTION.to_string(),
            record: record([
                ("id", json!(item.id)),
                ("name", json!(item.name)),
                ("enabled", json!(item.enabled)),
            ]),
            conflict_key: "id".to_string(),
        }
    }

    fn on_success(&self, item: &mut Integration, completed_at: DateTime<Utc>) {
        item.updated_at = Some(completed_at);
    }
}

/// Mark the integration as synced now. Persisted as an update matched on `id`.
#[derive(Debug, Clone, Copy)]
pub struct SyncNow {
    requested_at: DateTime<Utc>,
}

impl SyncNow {
    pub fn new() -> Self {
        Self {
            requested_at: Utc::now(),
        }
    }

    pub const fn at(requested_at: DateTime<Utc>) -> Self {
        Self { requested_at }
    }
}

impl Default for SyncNow {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemAction<Integration> for SyncNow {
    fn name(&self) -> &'static str {
        "sync_now"
    }

    fn apply(&self, item: &mut Integration) {
        item.last_synced_at = Some(self.requested_at);
    }

    fn mutation(&self, item: &Integration) -> Mutation {
        Mutation::Update {
            collection: INTEGRATIONS_COLLECTION.to_string(),
            patch: record([("last_synced_at", json!(self.requested_at.to_rfc3339()))]),
            match_key: "id".to_string(),
            match_value: item.id.clone(),
        }
    }

    fn on_success(&self, item: &mut Integration, completed_at: DateTime<Utc>) {
        item.last_synced_at = Some(completed_at);
    }
}

/// The Integrations list plus its action dispatcher.
pub struct IntegrationsView {
    view: CollectionView<Integration>,
    dispatcher: ActionDispatcher,
}

impl IntegrationsView {
    pub(crate) const fn new(view: CollectionView<Integration>, dispatcher: ActionDispatcher) -> Self {
        Self { view, dispatcher }
    }

    pub const fn view(&self) -> &CollectionView<Integration> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut CollectionView<Integration> {
        &mut self.view
    }

    /// Connect or disconnect an integration.
    pub async fn toggle(&self, id: &str) -> Result<ActionOutcome, DashboardError> {
        let outcome = self
            .dispatcher
            .perform(self.view.store(), id, &ToggleConnection)
            .await;
        finish(id, "toggle", outcome)
    }

    /// Sync a connected integration.
    pub async fn sync(&self, id: &str) -> Result<ActionOutcome, DashboardError> {
        match self.view.store().item(id) {
            None => return Err(not_found(id)),
            Some(integration) if !integration.enabled => {
                return Err(DashboardError::ValidationFailed(format!(
                    "{} is not connected",
                    integration.name
                )));
            }
            Some(_) => {}
        }

        let outcome = self
            .dispatcher
            .perform(self.view.store(), id, &SyncNow::new())
            .await;
        finish(id, "sync", outcome)
    }

    /// Pending or failed state for an integration's controls.
    pub fn status(&self, id: &str) -> ActionStatus {
        self.dispatcher.status(id)
    }
}

fn finish(id: &str, action: &str, outcome: ActionOutcome) -> Result<ActionOutcome, DashboardError> {
    match outcome {
        ActionOutcome::NotFound => Err(not_found(id)),
        ActionOutcome::Completed { .. } => {
            info!(integration = %id, action, "Integration updated");
            Ok(outcome)
        }
        other => Ok(other),
    }
}

fn not_found(id: &str) -> DashboardError {
    DashboardError::NotFound {
        entity: "integration",
        id: id.to_string(),
    }
}
