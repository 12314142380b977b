//! Content metadata from front matter.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Author, JsonMap};

/// Metadata attached to a content item.
///
/// # Standard Fields
///
/// | Field     | Type          | Description                           |
/// |-----------|---------------|---------------------------------------|
/// | `title`   | `String`      | Item title (mandatory by default)     |
/// | `summary` | `String`      | Brief description                     |
/// | `date`    | `String`      | Publication date (parsed downstream)  |
/// | `author`  | `Author`      | Single author                         |
/// | `authors` | `Vec<Author>` | Multiple authors                      |
/// | `lang`    | `String`      | Language code, overrides site default |
/// | `tags`    | `Vec<String>` | Categorization tags                   |
///
/// # Custom Fields (`extra`)
///
/// Any additional front-matter fields are captured in `extra` as raw JSON
/// and participate in mandatory-property checks by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentMetadata {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub date: Option<String>,
    pub author: Option<Author>,
    #[serde(default)]
    pub authors: Vec<Author>,
    pub lang: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Additional user-defined fields (raw JSON).
    #[serde(flatten, default)]
    pub extra: JsonMap,
}

impl ContentMetadata {
    /// Whether the named field is present with a non-empty value.
    ///
    /// Standard fields are checked against their typed slots; anything
    /// else falls through to the `extra` map.
    pub fn has_nonempty(&self, field: &str) -> bool {
        match field {
            "title" => nonempty_str(self.title.as_deref()),
            "summary" => nonempty_str(self.summary.as_deref()),
            "date" => nonempty_str(self.date.as_deref()),
            "lang" => nonempty_str(self.lang.as_deref()),
            "author" | "authors" => self.author.is_some() || !self.authors.is_empty(),
            "tags" => !self.tags.is_empty(),
            _ => self.extra.get(field).is_some_and(nonempty_value),
        }
    }
}

fn nonempty_str(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}

fn nonempty_value(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metadata_default_is_empty() {
        let meta = ContentMetadata::default();
        assert!(meta.title.is_none());
        assert!(meta.author.is_none());
        assert!(meta.authors.is_empty());
        assert!(meta.extra.is_empty());
        assert!(!meta.has_nonempty("title"));
    }

    #[test]
    fn test_metadata_deserialize() {
        let json = r#"{"title": "Hello", "lang": "en", "tags": ["rust", "web"]}"#;
        let meta: ContentMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert_eq!(meta.lang.as_deref(), Some("en"));
        assert_eq!(meta.tags, vec!["rust", "web"]);
    }

    #[test]
    fn test_metadata_extra_fields() {
        let json = r#"{"title": "Test", "category": "misc", "weight": 42}"#;
        let meta: ContentMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(
            meta.extra.get("category").and_then(|v| v.as_str()),
            Some("misc")
        );
        assert!(meta.has_nonempty("category"));
        assert!(meta.has_nonempty("weight"));
        assert!(!meta.has_nonempty("missing"));
    }

    #[test]
    fn test_has_nonempty_rejects_blank_values() {
        let meta: ContentMetadata =
            serde_json::from_str(r#"{"title": "   ", "note": ""}"#).unwrap();
        assert!(!meta.has_nonempty("title"));
        assert!(!meta.has_nonempty("note"));
    }

    #[test]
    fn test_has_nonempty_author_fields() {
        let meta: ContentMetadata = serde_json::from_str(r#"{"author": "Tom"}"#).unwrap();
        assert!(meta.has_nonempty("author"));
        assert!(meta.has_nonempty("authors"));

        let meta: ContentMetadata =
            serde_json::from_str(r#"{"authors": ["Tom", "Jeff"]}"#).unwrap();
        assert!(meta.has_nonempty("author"));
    }

    #[test]
    fn test_nonempty_value_kinds() {
        assert!(!nonempty_value(&json!(null)));
        assert!(!nonempty_value(&json!("")));
        assert!(!nonempty_value(&json!([])));
        assert!(nonempty_value(&json!(0)));
        assert!(nonempty_value(&json!(false)));
        assert!(nonempty_value(&json!(["x"])));
    }
}
