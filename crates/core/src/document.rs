//! Per-document presentation decisions
//!
//! CSS classes derived from a document's display type field, and whether a
//! document is bookmarked.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::CatalogConfig;

fn non_alphanumeric() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"))
}

/// Make a value safe for use inside a CSS class name ("Book / Map" -> "book-map")
pub fn parameterize(value: &str) -> String {
    non_alphanumeric()
        .replace_all(&value.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

/// Display type field for a view, falling back to the index default
pub fn display_type_field<'a>(config: &'a CatalogConfig, view: Option<&str>) -> Option<&'a str> {
    view.and_then(|key| config.view(key))
        .and_then(|v| v.display_type_field.as_deref())
        .or(config.index.display_type_field.as_deref())
}

/// CSS classes for a document, one per display type value
///
/// The field may hold a single string or an array of strings. Missing or
/// empty fields produce an empty string.
pub fn render_document_class(document: &Value, field: &str, prefix: &str) -> String {
    let values: Vec<&str> = match document.get(field) {
        Some(Value::String(s)) => vec![s.as_str()],
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    };

    values
        .into_iter()
        .map(parameterize)
        .filter(|v| !v.is_empty())
        .map(|v| format!("{prefix}{v}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Document classes using the configured field and prefix for a view
pub fn document_class(config: &CatalogConfig, document: &Value, view: Option<&str>) -> String {
    match display_type_field(config, view) {
        Some(field) => render_document_class(document, field, &config.index.document_class_prefix),
        None => String::new(),
    }
}

pub fn is_bookmarked<S: AsRef<str>>(document_id: &str, bookmarks: &[S]) -> bool {
    bookmarks.iter().any(|b| b.as_ref() == document_id)
}

/// Bookmark toggle state for one document
///
/// An explicit `checked` value wins over looking the document up in the
/// user's bookmarks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkState {
    pub document_id: String,
    pub checked: Option<bool>,
}

impl BookmarkState {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            checked: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn bookmarked<S: AsRef<str>>(&self, bookmarks: &[S]) -> bool {
        self.checked
            .unwrap_or_else(|| is_bookmarked(&self.document_id, bookmarks))
    }
}
