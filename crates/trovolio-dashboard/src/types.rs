//! Dashboard record types.
//!
//! Each type is decoded from the same wire shape the backend returns for
//! its collection. Missing optional columns decode to defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use trovolio_core::domain::{id_from_any, null_as_default};
use trovolio_core::{Identified, Searchable};

// ============================================================================
// Knowledge Library
// ============================================================================

/// An article in the Knowledge Library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Category tab (e.g., "Guides")
    pub category: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// External link to the full article
    pub url: Option<String>,
    /// Estimated reading time
    pub read_minutes: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Monthly Reports
// ============================================================================

/// A monthly performance report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Reporting month as `YYYY-MM`
    #[serde(default, deserialize_with = "null_as_default")]
    pub period: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    /// Service the report covers (e.g., "SEO", "Hosting")
    pub category: Option<String>,
    pub visits: Option<u64>,
    pub leads: Option<u64>,
    /// Conversion rate in percent
    pub conversion_rate: Option<f64>,
    /// Download link for the full PDF
    pub report_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Integrations
// ============================================================================

/// A third-party integration the customer can connect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integration {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub category: Option<String>,
    /// Whether the integration is connected
    #[serde(default, deserialize_with = "null_as_default")]
    pub enabled: bool,
    pub last_synced_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Integration {
    /// Display label for the connection state.
    pub const fn status_label(&self) -> &'static str {
        if self.enabled { "connected" } else { "disconnected" }
    }
}

// ============================================================================
// Tools Catalog
// ============================================================================

/// A tool offered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolEntry {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub category: Option<String>,
    /// Where the tool opens
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_new: bool,
}

// ============================================================================
// Why Choose Us
// ============================================================================

/// One rotating "Why Choose Us" highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub description: String,
    /// Headline figure, e.g. "98%"
    pub stat: Option<String>,
}

// ============================================================================
// Trait impls
// ============================================================================

macro_rules! impl_record {
    ($ty:ty, $title:ident, $description:ident) => {
        impl Identified for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        }

        impl Searchable for $ty {
            fn title(&self) -> &str {
                &self.$title
            }

            fn description(&self) -> &str {
                &self.$description
            }

            fn category(&self) -> Option<&str> {
                self.category.as_deref()
            }
        }
    };
}

impl_record!(KnowledgeEntry, title, description);
impl_record!(MonthlyReport, title, summary);
impl_record!(Integration, name, description);
impl_record!(ToolEntry, name, description);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_knowledge_entry_decodes_sparse_row() {
        let entry: KnowledgeEntry = serde_json::from_value(json!({
            "id": 7,
            "title": "Optimize Images",
            "category": "Guides",
            "created_at": "2026-03-01T10:00:00+00:00"
        }))
        .unwrap();

        assert_eq!(entry.id, "7");
        assert_eq!(entry.description, "");
        assert!(entry.tags.is_empty());
        assert!(entry.created_at.is_some());
        assert_eq!(Searchable::category(&entry), Some("Guides"));
    }

    #[test]
    fn test_null_columns_decode_to_defaults() {
        let entry: KnowledgeEntry = serde_json::from_value(json!({
            "id": "a",
            "title": "Live",
            "description": null,
            "tags": null
        }))
        .unwrap();
        assert_eq!(entry.description, "");
        assert!(entry.tags.is_empty());

        let integration: Integration = serde_json::from_value(json!({
            "id": "slack",
            "name": null,
            "enabled": null
        }))
        .unwrap();
        assert_eq!(integration.name, "");
        assert!(!integration.enabled);
    }

    #[test]
    fn test_integration_searches_name() {
        let integration: Integration = serde_json::from_value(json!({
            "id": "slack",
            "name": "Slack",
            "description": "Team notifications"
        }))
        .unwrap();

        assert!(!integration.enabled);
        assert_eq!(integration.status_label(), "disconnected");
        assert_eq!(Searchable::title(&integration), "Slack");
    }

    #[test]
    fn test_report_uses_summary_for_search() {
        let report: MonthlyReport = serde_json::from_value(json!({
            "id": "r1",
            "title": "September",
            "period": "2026-09",
            "summary": "Traffic up 12%"
        }))
        .unwrap();

        assert_eq!(Searchable::description(&report), "Traffic up 12%");
        assert_eq!(Searchable::category(&report), None);
    }
}
