//! Facet filter descriptions for page titles
//!
//! Turns the active facet filters of a search into text such as
//! `"foobar / Format: Book and Map"`.

use serde::{Deserialize, Serialize};

use crate::config::CatalogConfig;

/// A facet label together with its selected values, in selection order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSelection {
    pub label: String,
    pub values: Vec<String>,
}

impl FacetSelection {
    pub fn new(label: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// Describe one facet selection
///
/// Only the number of values decides the shape; two values keep input order.
pub fn format_facet_title(selection: &FacetSelection) -> String {
    let label = &selection.label;

    match selection.values.as_slice() {
        [value] => format!("{label}: {value}"),
        [first, second] => format!("{label}: {first} and {second}"),
        values => format!("{label}: {} selected", values.len()),
    }
}

/// Join the query term and every facet description with `" / "`
///
/// A blank query term is skipped. Input order is kept and nothing is
/// deduplicated.
pub fn format_page_title_filters(
    selections: &[FacetSelection],
    base_query_term: Option<&str>,
) -> String {
    base_query_term
        .filter(|q| !q.trim().is_empty())
        .map(str::to_string)
        .into_iter()
        .chain(selections.iter().map(format_facet_title))
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Turn a field key into a readable label ("pub_date" -> "Pub date")
pub fn humanize_field(key: &str) -> String {
    let key = key.strip_suffix("_id").unwrap_or(key);
    let spaced = key.replace('_', " ");
    let trimmed = spaced.trim();

    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Configured label for a facet field, or the humanized key
pub fn facet_label(config: &CatalogConfig, key: &str) -> String {
    config
        .facet_label(key)
        .map(str::to_string)
        .unwrap_or_else(|| humanize_field(key))
}

/// Group `(field, value)` filter pairs into selections
///
/// Fields appear in first-seen order and values in the order given.
pub fn selections_from_params(
    config: &CatalogConfig,
    params: &[(String, String)],
) -> Vec<FacetSelection> {
    let mut grouped: Vec<(&str, Vec<String>)> = Vec::new();

    for (key, value) in params {
        match grouped.iter_mut().find(|(k, _)| *k == key.as_str()) {
            Some((_, values)) => values.push(value.clone()),
            None => grouped.push((key.as_str(), vec![value.clone()])),
        }
    }

    grouped
        .into_iter()
        .map(|(key, values)| FacetSelection::new(facet_label(config, key), values))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(values: &[&str]) -> FacetSelection {
        FacetSelection::new("Format", values.iter().map(|v| v.to_string()).collect())
    }

    // ============================================================================
    // format_facet_title tests
    // ============================================================================

    #[test]
    fn test_format_facet_title_single_value() {
        assert_eq!(format_facet_title(&selection(&["Book"])), "Format: Book");
    }

    #[test]
    fn test_format_facet_title_two_values() {
        assert_eq!(
            format_facet_title(&selection(&["Book", "Map"])),
            "Format: Book and Map"
        );
    }

    #[test]
    fn test_format_facet_title_two_values_keeps_input_order() {
        assert_eq!(
            format_facet_title(&selection(&["Map", "Book"])),
            "Format: Map and Book"
        );
    }

    #[test]
    fn test_format_facet_title_many_values() {
        assert_eq!(
            format_facet_title(&selection(&["Book", "Map", "CD"])),
            "Format: 3 selected"
        );
    }

    // ============================================================================
    // format_page_title_filters tests
    // ============================================================================

    #[test]
    fn test_page_title_with_query_and_facet() {
        let title = format_page_title_filters(&[selection(&["Book"])], Some("foobar"));
        assert_eq!(title, "foobar / Format: Book");
    }

    #[test]
    fn test_page_title_without_query() {
        let selections = vec![
            selection(&["Book"]),
            FacetSelection::new("Language", vec!["English".to_string()]),
        ];
        assert_eq!(
            format_page_title_filters(&selections, None),
            "Format: Book / Language: English"
        );
    }

    #[test]
    fn test_page_title_blank_query_is_skipped() {
        assert_eq!(
            format_page_title_filters(&[selection(&["Book"])], Some("  ")),
            "Format: Book"
        );
    }

    #[test]
    fn test_page_title_keeps_duplicates() {
        let selections = vec![selection(&["Book"]), selection(&["Book"])];
        assert_eq!(
            format_page_title_filters(&selections, Some("q")),
            "q / Format: Book / Format: Book"
        );
    }

    #[test]
    fn test_page_title_empty() {
        assert_eq!(format_page_title_filters(&[], None), "");
    }

    // ============================================================================
    // label tests
    // ============================================================================

    #[test]
    fn test_humanize_field() {
        assert_eq!(humanize_field("foo"), "Foo");
        assert_eq!(humanize_field("pub_date"), "Pub date");
        assert_eq!(humanize_field("author_id"), "Author");
        assert_eq!(humanize_field("FORMAT"), "Format");
        assert_eq!(humanize_field(""), "");
    }

    #[test]
    fn test_facet_label_prefers_config() {
        let config = CatalogConfig::from_toml("[facets.format]\nlabel = \"Material\"").unwrap();
        assert_eq!(facet_label(&config, "format"), "Material");
        assert_eq!(facet_label(&config, "language"), "Language");
    }

    #[test]
    fn test_selections_from_params_groups_in_first_seen_order() {
        let params = vec![
            ("format".to_string(), "Book".to_string()),
            ("language".to_string(), "English".to_string()),
            ("format".to_string(), "Map".to_string()),
        ];

        let selections = selections_from_params(&CatalogConfig::default(), &params);

        assert_eq!(
            selections,
            vec![
                FacetSelection::new("Format", vec!["Book".to_string(), "Map".to_string()]),
                FacetSelection::new("Language", vec!["English".to_string()]),
            ]
        );
    }
}
