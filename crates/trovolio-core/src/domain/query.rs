//! Query and mutation descriptions handed to the backend port.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A raw backend row: column name to JSON value.
pub type Record = Map<String, Value>;

/// Sort direction for the single order-by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// Wire form used by the REST surface (`asc` / `desc`).
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Exactly one ordering column per query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: String,
    pub direction: SortDirection,
}

impl OrderBy {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Column equality filter applied server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EqFilter {
    pub column: String,
    pub value: String,
}

/// A read against one named collection.
///
/// `limit` is a hard cap, not a page size; there is no cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectQuery {
    /// Collection (table) name.
    pub collection: String,
    /// Column projection. Empty means every column.
    pub columns: Vec<String>,
    /// The single ordering column.
    pub order: OrderBy,
    /// Equality filters, all of which must hold.
    pub filters: Vec<EqFilter>,
    /// Optional row cap.
    pub limit: Option<u32>,
}

impl SelectQuery {
    /// Create a query selecting every column of `collection`.
    pub fn new(collection: impl Into<String>, order: OrderBy) -> Self {
        Self {
            collection: collection.into(),
            columns: Vec::new(),
            order,
            filters: Vec::new(),
            limit: None,
        }
    }

    /// Restrict the projection to the given columns.
    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Add an equality filter.
    #[must_use]
    pub fn with_filter(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(EqFilter {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    /// Cap the number of rows returned.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Comma-separated projection, `*` when no columns were named.
    pub fn projection(&self) -> String {
        if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(",")
        }
    }
}

/// A write issued by the action dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mutation {
    /// Insert or merge `record`, resolving conflicts on `conflict_key`.
    Upsert {
        collection: String,
        record: Record,
        conflict_key: String,
    },
    /// Patch rows where `match_key == match_value`.
    Update {
        collection: String,
        patch: Record,
        match_key: String,
        match_value: String,
    },
}

impl Mutation {
    /// Collection the mutation targets.
    pub fn collection(&self) -> &str {
        match self {
            Self::Upsert { collection, .. } | Self::Update { collection, .. } => collection,
        }
    }
}
