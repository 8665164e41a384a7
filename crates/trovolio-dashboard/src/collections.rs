//! Collection queries behind each dashboard list.

use trovolio_core::{CollectionSpec, OrderBy, SelectQuery};

use crate::samples;
use crate::types::{Integration, KnowledgeEntry, MonthlyReport, ToolEntry};

pub const KNOWLEDGE_COLLECTION: &str = "knowledge_articles";
pub const REPORTS_COLLECTION: &str = "reports";
pub const INTEGRATIONS_COLLECTION: &str = "integrations";
pub const TOOLS_COLLECTION: &str = "tools";

pub fn knowledge_spec(limit: u32) -> CollectionSpec<KnowledgeEntry> {
    let query = SelectQuery::new(KNOWLEDGE_COLLECTION, OrderBy::desc("created_at"))
        .with_columns([
            "id",
            "title",
            "description",
            "category",
            "tags",
            "url",
            "read_minutes",
            "created_at",
        ])
        .with_limit(limit);
    CollectionSpec::new(query, samples::knowledge_entries())
}

pub fn reports_spec(limit: u32) -> CollectionSpec<MonthlyReport> {
    let query = SelectQuery::new(REPORTS_COLLECTION, OrderBy::desc("period")).with_limit(limit);
    CollectionSpec::new(query, samples::monthly_reports())
}

pub fn integrations_spec() -> CollectionSpec<Integration> {
    let query = SelectQuery::new(INTEGRATIONS_COLLECTION, OrderBy::asc("name")).with_columns([
        "id",
        "name",
        "description",
        "category",
        "enabled",
        "last_synced_at",
        "updated_at",
    ]);
    CollectionSpec::new(query, samples::integrations())
}

pub fn tools_spec() -> CollectionSpec<ToolEntry> {
    let query = SelectQuery::new(TOOLS_COLLECTION, OrderBy::asc("name"));
    CollectionSpec::new(query, samples::tools())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trovolio_core::SortDirection;

    #[test]
    fn test_knowledge_query() {
        let spec = knowledge_spec(12);
        assert_eq!(spec.collection(), "knowledge_articles");
        assert_eq!(spec.query.order.field, "created_at");
        assert_eq!(spec.query.order.direction, SortDirection::Desc);
        assert_eq!(spec.query.limit, Some(12));
        assert_eq!(spec.fallback.len(), 6);
    }

    #[test]
    fn test_reports_and_tools_order() {
        assert_eq!(reports_spec(3).query.order, OrderBy::desc("period"));
        assert_eq!(tools_spec().query.order, OrderBy::asc("name"));
        assert_eq!(tools_spec().query.limit, None);
    }
}
