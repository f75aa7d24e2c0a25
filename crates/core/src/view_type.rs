//! View type switcher buttons
//!
//! Each configured view (list, gallery, ...) gets a button that carries its
//! icon name, label and a link back to the current search with the view
//! swapped in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::CatalogConfig;
use crate::facets::humanize_field;

pub const DEFAULT_BUTTON_CLASSES: &str = "btn btn-outline-secondary btn-icon";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub key: String,
    pub icon: Option<String>,
    pub display_label: Option<String>,
    pub display_type_field: Option<String>,
}

impl ViewConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewTypeButton {
    pub view: ViewConfig,
    pub selected: bool,
    pub classes: String,
}

impl ViewTypeButton {
    pub fn new(view: ViewConfig, selected: bool) -> Self {
        Self {
            view,
            selected,
            classes: DEFAULT_BUTTON_CLASSES.to_string(),
        }
    }

    /// Explicit icon, or an icon named after the view
    pub fn icon_name(&self) -> &str {
        self.view.icon.as_deref().unwrap_or(&self.view.key)
    }

    pub fn label(&self) -> String {
        self.view
            .display_label
            .clone()
            .unwrap_or_else(|| humanize_field(&self.view.key))
    }

    /// Link to the current search rendered with this view
    pub fn url(&self, base: &str, search_state: &BTreeMap<String, String>) -> String {
        let mut params = search_state.clone();
        params.insert("view".to_string(), self.view.key.clone());
        format!("{base}?{}", to_query(&params))
    }
}

/// Percent-encoded query string, keys in sorted order
pub fn to_query(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// One button per configured view, marking the current one
pub fn view_type_buttons(config: &CatalogConfig, current: Option<&str>) -> Vec<ViewTypeButton> {
    config
        .views
        .values()
        .map(|view| {
            let selected = current == Some(view.key.as_str());
            ViewTypeButton::new(view.clone(), selected)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_name_defaults_to_key() {
        let button = ViewTypeButton::new(ViewConfig::new("gallery"), false);
        assert_eq!(button.icon_name(), "gallery");
    }

    #[test]
    fn test_icon_name_prefers_configured_icon() {
        let view = ViewConfig {
            icon: Some("grid".to_string()),
            ..ViewConfig::new("gallery")
        };
        assert_eq!(ViewTypeButton::new(view, false).icon_name(), "grid");
    }

    #[test]
    fn test_label() {
        let view = ViewConfig {
            display_label: Some("Masonry wall".to_string()),
            ..ViewConfig::new("masonry")
        };
        assert_eq!(ViewTypeButton::new(view, false).label(), "Masonry wall");
        assert_eq!(
            ViewTypeButton::new(ViewConfig::new("list"), false).label(),
            "List"
        );
    }

    #[test]
    fn test_url_merges_view_into_search_state() {
        let mut state = BTreeMap::new();
        state.insert("q".to_string(), "war and peace".to_string());
        state.insert("view".to_string(), "list".to_string());

        let button = ViewTypeButton::new(ViewConfig::new("gallery"), false);

        assert_eq!(
            button.url("/catalog", &state),
            "/catalog?q=war%20and%20peace&view=gallery"
        );
    }

    #[test]
    fn test_default_classes() {
        let button = ViewTypeButton::new(ViewConfig::new("list"), true);
        assert_eq!(button.classes, "btn btn-outline-secondary btn-icon");
        assert!(button.selected);
    }

    #[test]
    fn test_view_type_buttons_marks_current() {
        let config =
            CatalogConfig::from_toml("[views.list]\n\n[views.gallery]\nicon = \"grid\"\n").unwrap();

        let buttons = view_type_buttons(&config, Some("list"));

        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].view.key, "gallery");
        assert!(!buttons[0].selected);
        assert_eq!(buttons[1].view.key, "list");
        assert!(buttons[1].selected);
    }
}
