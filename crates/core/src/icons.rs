//! Icon lookup and SVG decoration
//!
//! Icons are resolved through an [`IconRegistry`]: a mapping from icon name to
//! inline SVG with an explicit fallback [`IconSource`] for names that are not
//! registered. Nothing is cached; every lookup goes to the registry or the
//! fallback.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Error type for icon resolution
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IconError {
    #[error("Icon not found: {0}")]
    NotFound(String),
}

const SEARCH_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" fill="currentColor" aria-hidden="true" width="24" height="24" viewBox="0 0 24 24"><path fill="none" d="M0 0h24v24H0V0z"/><path d="M15.5 14h-.79l-.28-.27C15.41 12.59 16 11.11 16 9.5 16 5.91 13.09 3 9.5 3S3 5.91 3 9.5 5.91 16 9.5 16c1.61 0 3.09-.59 4.23-1.57l.27.28v.79l5 4.99L20.49 19l-4.99-5zm-6 0C7.01 14 5 11.99 5 9.5S7.01 5 9.5 5 14 7.01 14 9.5 11.99 14 9.5 14z"/></svg>"#;

const LIST_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" fill="currentColor" aria-hidden="true" width="24" height="24" viewBox="0 0 24 24"><path d="M3 13h2v-2H3v2zm0 4h2v-2H3v2zm0-8h2V7H3v2zm4 4h14v-2H7v2zm0 4h14v-2H7v2zM7 7v2h14V7H7z"/><path d="M0 0h24v24H0z" fill="none"/></svg>"#;

const BOOKMARK_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" fill="currentColor" aria-hidden="true" width="24" height="24" viewBox="0 0 24 24"><path d="M17 3H7c-1.1 0-1.99.9-1.99 2L5 21l7-3 7 3V5c0-1.1-.9-2-2-2z"/><path d="M0 0h24v24H0z" fill="none"/></svg>"#;

const REMOVE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" fill="currentColor" aria-hidden="true" width="24" height="24" viewBox="0 0 24 24"><path d="M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z"/><path d="M0 0h24v24H0z" fill="none"/></svg>"#;

fn svg_open_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<svg\b[^>]*>").expect("valid regex"))
}

/// Turn an icon name into a title ("left_arrow" -> "Left Arrow")
pub fn titleize(name: &str) -> String {
    name.split(['_', '-', ' '])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// HTML attributes applied to a rendered icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconOptions {
    pub class: String,
    #[serde(rename = "aria-hidden", skip_serializing_if = "Option::is_none")]
    pub aria_hidden: Option<bool>,
}

/// A named icon and how it should be presented
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub name: String,
    pub classes: Option<String>,
    pub aria_hidden: bool,
    /// Whether to emit a `<title>` element
    pub label: bool,
    pub label_context: Option<String>,
}

impl Icon {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classes: None,
            aria_hidden: false,
            label: true,
            label_context: None,
        }
    }

    pub fn classes(mut self, classes: impl Into<String>) -> Self {
        self.classes = Some(classes.into());
        self
    }

    pub fn aria_hidden(mut self, aria_hidden: bool) -> Self {
        self.aria_hidden = aria_hidden;
        self
    }

    pub fn label(mut self, label: bool) -> Self {
        self.label = label;
        self
    }

    pub fn label_context(mut self, context: impl Into<String>) -> Self {
        self.label_context = Some(context.into());
        self
    }

    pub fn options(&self) -> IconOptions {
        let mut class = format!("blacklight-icons blacklight-icon-{}", self.name);
        if let Some(extra) = self.classes.as_deref().filter(|c| !c.is_empty()) {
            class.push(' ');
            class.push_str(extra);
        }

        IconOptions {
            class,
            aria_hidden: self.aria_hidden.then_some(true),
        }
    }

    /// Asset path the fallback source is asked for
    pub fn path(&self) -> String {
        format!("blacklight/{}.svg", self.name)
    }

    pub fn title(&self) -> String {
        titleize(&self.name)
    }

    /// Add `role="img"` and, when labelled, a `<title>` to the root element
    pub fn decorate(&self, svg: &str) -> String {
        let title = if self.label {
            let id = match self.label_context.as_deref() {
                Some(context) => format!("bl-icon-{}-{}", self.name, context),
                None => format!("bl-icon-{}", self.name),
            };
            format!(
                "<title id=\"{}\">{}</title>",
                html_escape::encode_double_quoted_attribute(&id),
                html_escape::encode_text(&self.title())
            )
        } else {
            String::new()
        };

        svg_open_tag()
            .replacen(svg, 1, |caps: &regex::Captures| {
                let tag = &caps[0];
                let tag = tag.strip_suffix('>').unwrap_or(tag);
                format!("{tag} role=\"img\">{title}")
            })
            .into_owned()
    }
}

/// Where unregistered icons are looked up
pub trait IconSource {
    fn find(&self, path: &str) -> Option<String>;
}

/// Fallback that never finds anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSource;

impl IconSource for NoSource {
    fn find(&self, _path: &str) -> Option<String> {
        None
    }
}

/// In-memory asset source keyed by asset path
#[derive(Debug, Clone, Default)]
pub struct MapSource(pub BTreeMap<String, String>);

impl IconSource for MapSource {
    fn find(&self, path: &str) -> Option<String> {
        self.0.get(path).cloned()
    }
}

/// Icon name to SVG mapping with an explicit fallback source
pub struct IconRegistry {
    icons: BTreeMap<String, String>,
    fallback: Box<dyn IconSource + Send + Sync>,
}

impl Default for IconRegistry {
    fn default() -> Self {
        Self::with_builtins(Box::new(NoSource))
    }
}

impl IconRegistry {
    /// Empty registry that only consults `fallback`
    pub fn new(fallback: Box<dyn IconSource + Send + Sync>) -> Self {
        Self {
            icons: BTreeMap::new(),
            fallback,
        }
    }

    /// Registry preloaded with the built-in icons
    pub fn with_builtins(fallback: Box<dyn IconSource + Send + Sync>) -> Self {
        let mut registry = Self::new(fallback);
        registry.register("search", SEARCH_SVG);
        registry.register("list", LIST_SVG);
        registry.register("bookmark", BOOKMARK_SVG);
        registry.register("remove", REMOVE_SVG);
        registry
    }

    pub fn register(&mut self, name: impl Into<String>, svg: impl Into<String>) {
        self.icons.insert(name.into(), svg.into());
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }

    /// Raw SVG for an icon, registered entries first
    pub fn source(&self, icon: &Icon) -> Result<String, IconError> {
        if let Some(svg) = self.icons.get(&icon.name) {
            return Ok(svg.clone());
        }

        self.fallback
            .find(&icon.path())
            .ok_or_else(|| IconError::NotFound(icon.path()))
    }

    /// Decorated SVG ready to inline
    pub fn render(&self, icon: &Icon) -> Result<String, IconError> {
        self.source(icon).map(|svg| icon.decorate(&svg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SVG: &str = r#"<svg width="24" height="24"><path d="M0 0"/></svg>"#;

    fn registry_with_test_asset() -> IconRegistry {
        let mut assets = BTreeMap::new();
        assets.insert("blacklight/test.svg".to_string(), TEST_SVG.to_string());
        IconRegistry::with_builtins(Box::new(MapSource(assets)))
    }

    // ============================================================================
    // options and path tests
    // ============================================================================

    #[test]
    fn test_options_with_classes_and_aria_hidden() {
        let icon = Icon::new("test").classes("awesome").aria_hidden(true);
        let options = icon.options();
        assert_eq!(options.class, "blacklight-icons blacklight-icon-test awesome");
        assert_eq!(options.aria_hidden, Some(true));
    }

    #[test]
    fn test_options_default() {
        let options = Icon::new("view").options();
        assert_eq!(options.class, "blacklight-icons blacklight-icon-view");
        assert_eq!(options.aria_hidden, None);
    }

    #[test]
    fn test_path() {
        assert_eq!(Icon::new("test").path(), "blacklight/test.svg");
    }

    #[test]
    fn test_titleize() {
        assert_eq!(titleize("test"), "Test");
        assert_eq!(titleize("left_arrow"), "Left Arrow");
    }

    // ============================================================================
    // decoration tests
    // ============================================================================

    #[test]
    fn test_decorate_adds_role_and_title() {
        let svg = Icon::new("test").decorate(TEST_SVG);
        assert!(svg.starts_with(r#"<svg width="24" height="24" role="img">"#));
        assert!(svg.contains(r#"<title id="bl-icon-test">Test</title>"#));
    }

    #[test]
    fn test_decorate_without_label() {
        let svg = Icon::new("test").label(false).decorate(TEST_SVG);
        assert!(svg.contains(r#"role="img""#));
        assert!(!svg.contains("<title"));
    }

    #[test]
    fn test_decorate_with_label_context() {
        let svg = Icon::new("test").label_context("foo").decorate(TEST_SVG);
        assert!(svg.contains(r#"<title id="bl-icon-test-foo">Test</title>"#));
    }

    // ============================================================================
    // registry tests
    // ============================================================================

    #[test]
    fn test_registry_prefers_registered_icon() {
        let registry = registry_with_test_asset();
        let svg = registry.render(&Icon::new("list")).unwrap();
        assert!(svg.contains("M3 13h2v-2H3v2z"));
        assert!(svg.contains("<title id=\"bl-icon-list\">List</title>"));
    }

    #[test]
    fn test_registry_falls_back_to_source() {
        let registry = registry_with_test_asset();
        let svg = registry.source(&Icon::new("test")).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_registry_missing_icon() {
        let registry = registry_with_test_asset();
        assert_eq!(
            registry.render(&Icon::new("yolo")),
            Err(IconError::NotFound("blacklight/yolo.svg".to_string()))
        );
    }

    #[test]
    fn test_registry_builtin_names() {
        let registry = IconRegistry::default();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["bookmark", "list", "remove", "search"]);
    }
}
