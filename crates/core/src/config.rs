//! Catalog configuration
//!
//! A plain value describing how the catalog is presented: facet labels, view
//! types, the display type field and search bar behavior. The shell reads the
//! TOML text from disk; parsing and lookups here are pure.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::pagination::{EntryName, NumberFormat};
use crate::search_bar::SearchBarConfig;
use crate::view_type::ViewConfig;

/// Error type for configuration parsing
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

pub const DEFAULT_DOCUMENT_CLASS_PREFIX: &str = "blacklight-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Document field whose values become CSS classes
    pub display_type_field: Option<String>,
    pub document_class_prefix: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            display_type_field: None,
            document_class_prefix: DEFAULT_DOCUMENT_CLASS_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacetFieldConfig {
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub delimiter: String,
    pub entry_name: Option<String>,
    pub entry_name_plural: Option<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            delimiter: NumberFormat::default().delimiter,
            entry_name: None,
            entry_name_plural: None,
        }
    }
}

impl FormatConfig {
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat {
            delimiter: self.delimiter.clone(),
        }
    }

    /// Configured entry name, if any, inferring the plural when omitted
    pub fn entry_name(&self) -> Option<EntryName> {
        let singular = self.entry_name.as_deref()?;
        Some(match self.entry_name_plural.as_deref() {
            Some(plural) => EntryName::with_plural(singular, plural),
            None => EntryName::new(singular),
        })
    }
}

/// Top-level catalog configuration
///
/// ```toml
/// [index]
/// display_type_field = "format"
///
/// [facets.format]
/// label = "Format"
///
/// [views.list]
/// display_label = "List"
///
/// [search_bar]
/// autocomplete_enabled = true
/// autocomplete_path = "suggest"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub index: IndexConfig,
    pub facets: BTreeMap<String, FacetFieldConfig>,
    pub views: BTreeMap<String, ViewConfig>,
    pub search_bar: SearchBarConfig,
    pub format: FormatConfig,
}

impl CatalogConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let mut config: CatalogConfig = toml::from_str(text)?;

        // The table key is the view key unless one was spelled out
        for (key, view) in config.views.iter_mut() {
            if view.key.is_empty() {
                view.key = key.clone();
            }
        }

        Ok(config)
    }

    pub fn view(&self, key: &str) -> Option<&ViewConfig> {
        self.views.get(key)
    }

    pub fn facet_label(&self, key: &str) -> Option<&str> {
        self.facets.get(key).and_then(|f| f.label.as_deref())
    }
}
