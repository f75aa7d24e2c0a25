//! Search bar presentation decisions

use serde::{Deserialize, Serialize};

pub const DEFAULT_SEARCH_BAR_PARTIAL: &str = "catalog/search_form";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchBarConfig {
    pub autocomplete_enabled: bool,
    pub autocomplete_path: Option<String>,
    pub enable_search_bar_autofocus: bool,
    pub advanced_search_enabled: bool,
    /// Template the search form is drawn with
    pub partial: String,
}

impl Default for SearchBarConfig {
    fn default() -> Self {
        Self {
            autocomplete_enabled: false,
            autocomplete_path: None,
            enable_search_bar_autofocus: false,
            advanced_search_enabled: false,
            partial: DEFAULT_SEARCH_BAR_PARTIAL.to_string(),
        }
    }
}

/// The request a search bar is drawn for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub catalog_controller: bool,
    pub action_name: String,
    pub has_search_parameters: bool,
}

/// Resolved search bar flags for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBarState {
    pub autocomplete_enabled: bool,
    pub autofocus: bool,
    pub advanced_search_enabled: bool,
    pub autocomplete_path: Option<String>,
    pub partial: String,
}

/// Autocomplete needs both the switch and a non-blank suggest path
pub fn autocomplete_enabled(config: &SearchBarConfig) -> bool {
    config.autocomplete_enabled
        && config
            .autocomplete_path
            .as_deref()
            .is_some_and(|p| !p.trim().is_empty())
}

/// Focus the search box on an unfiltered catalog index page
pub fn autofocus(config: &SearchBarConfig, request: &SearchRequest) -> bool {
    config.enable_search_bar_autofocus
        && request.catalog_controller
        && request.action_name == "index"
        && !request.has_search_parameters
}

pub fn advanced_search_enabled(config: &SearchBarConfig) -> bool {
    config.advanced_search_enabled
}

pub fn search_bar_state(config: &SearchBarConfig, request: &SearchRequest) -> SearchBarState {
    let autocomplete = autocomplete_enabled(config);

    SearchBarState {
        autocomplete_enabled: autocomplete,
        autofocus: autofocus(config, request),
        advanced_search_enabled: advanced_search_enabled(config),
        autocomplete_path: config.autocomplete_path.clone().filter(|_| autocomplete),
        partial: config.partial.clone(),
    }
}
