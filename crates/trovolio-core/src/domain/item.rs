//! Collection items and the traits the loader, filter and dispatcher rely on.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Anything with a stable identity across reloads.
pub trait Identified {
    /// Unique identifier of the record.
    fn id(&self) -> &str;
}

/// Fields consulted by client-side search and category tabs.
pub trait Searchable {
    /// Display title. Empty string when the record has none.
    fn title(&self) -> &str;

    /// Longer description. Empty string when the record has none.
    fn description(&self) -> &str;

    /// Category used for the equality filter, if any.
    fn category(&self) -> Option<&str>;
}

/// An opaque record from a backend collection.
///
/// Only `id` is interpreted; every other column lands in `fields` as-is
/// (strings, numbers, timestamps, tag lists, nested objects).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionItem {
    /// Unique identifier, stable across reloads.
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    /// All remaining columns.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl CollectionItem {
    /// Create an item with no fields.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Builder-style field setter.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Read a string field.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Read a string-list field (e.g. tags). Non-string entries are skipped.
    pub fn field_strings(&self, name: &str) -> Vec<&str> {
        self.fields
            .get(name)
            .and_then(Value::as_array)
            .map(|values| values.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

impl Identified for CollectionItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for CollectionItem {
    fn title(&self) -> &str {
        self.field_str("title").unwrap_or("")
    }

    fn description(&self) -> &str {
        self.field_str("description").unwrap_or("")
    }

    fn category(&self) -> Option<&str> {
        self.field_str("category")
    }
}

/// Accept either a string or a numeric identifier from the wire.
///
/// Backend tables mix UUID and integer primary keys.
pub fn id_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected string or numeric id, got {other}"
        ))),
    }
}

/// Decode `null` the same as a missing key.
///
/// Pair with `#[serde(default)]` on non-optional fields backed by nullable
/// columns.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_string_id_and_fields() {
        let item: CollectionItem = serde_json::from_value(json!({
            "id": "a1",
            "title": "Getting Started Guide",
            "category": "Guides",
            "tags": ["intro", "setup", 3]
        }))
        .unwrap();

        assert_eq!(item.id(), "a1");
        assert_eq!(item.title(), "Getting Started Guide");
        assert_eq!(item.category(), Some("Guides"));
        assert_eq!(item.description(), "");
        assert_eq!(item.field_strings("tags"), vec!["intro", "setup"]);
    }

    #[test]
    fn test_deserialize_numeric_id() {
        let item: CollectionItem = serde_json::from_value(json!({"id": 42})).unwrap();
        assert_eq!(item.id, "42");
        assert!(item.fields.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_object_id() {
        let result: Result<CollectionItem, _> = serde_json::from_value(json!({"id": {"x": 1}}));
        assert!(result.is_err());
    }

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "null_as_default")]
        title: String,
        #[serde(default, deserialize_with = "null_as_default")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "null_as_default")]
        enabled: bool,
    }

    #[test]
    fn test_null_columns_decode_as_defaults() {
        let row: Row =
            serde_json::from_value(json!({"title": null, "tags": null, "enabled": null})).unwrap();
        assert_eq!(row.title, "");
        assert!(row.tags.is_empty());
        assert!(!row.enabled);

        let row: Row = serde_json::from_value(json!({})).unwrap();
        assert_eq!(row.title, "");

        let row: Row =
            serde_json::from_value(json!({"title": "Live", "tags": ["a"], "enabled": true})).unwrap();
        assert_eq!(row.title, "Live");
        assert_eq!(row.tags, vec!["a"]);
        assert!(row.enabled);
    }

    #[test]
    fn test_builder_fields() {
        let item = CollectionItem::new("x")
            .with_field("title", "Hosting")
            .with_field("views", 12);
        assert_eq!(item.title(), "Hosting");
        assert_eq!(item.fields["views"], 12);
    }
}
