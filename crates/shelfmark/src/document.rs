use crate::prelude::{println, *};
use shelfmark_core::config::CatalogConfig;
use shelfmark_core::document::{display_type_field, render_document_class, BookmarkState};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, clap::Args, Clone)]
pub struct DocClassOptions {
    /// Document as inline JSON
    #[arg(value_name = "JSON", required_unless_present = "file")]
    pub document: Option<String>,

    /// Read the document JSON from a file
    #[arg(long, conflicts_with = "document")]
    pub file: Option<PathBuf>,

    /// View type whose display type field applies
    #[arg(long)]
    pub view: Option<String>,

    /// Display type field, overriding the configuration
    #[arg(long)]
    pub field: Option<String>,

    /// CSS class prefix, overriding the configuration
    #[arg(long)]
    pub prefix: Option<String>,
}

fn parse_document(text: &str) -> Result<serde_json::Value> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| Error::InvalidDocument(e.to_string()))?;

    if !value.is_object() {
        return Err(Error::InvalidDocument("expected a JSON object".to_string()).into());
    }

    Ok(value)
}

fn document_classes(
    options: &DocClassOptions,
    catalog: &CatalogConfig,
    document: &serde_json::Value,
) -> String {
    let field = options
        .field
        .as_deref()
        .or_else(|| display_type_field(catalog, options.view.as_deref()));
    let prefix = options
        .prefix
        .as_deref()
        .unwrap_or(&catalog.index.document_class_prefix);

    match field {
        Some(field) => render_document_class(document, field, prefix),
        None => {
            log::debug!("No display type field configured");
            String::new()
        }
    }
}

pub fn run_doc_class(options: DocClassOptions, catalog: &CatalogConfig) -> Result<()> {
    let text = match (&options.document, &options.file) {
        (_, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read document {}", path.display()))?,
        (Some(json), None) => json.clone(),
        (None, None) => return Err(eyre!("A document or --file is required")),
    };

    let document = parse_document(&text)?;
    println!("{}", document_classes(&options, catalog, &document));

    Ok(())
}

#[derive(Debug, clap::Args, Clone)]
pub struct BookmarkedOptions {
    /// Document identifier
    pub id: String,

    /// Identifier of a bookmarked document (repeatable)
    #[arg(short, long = "bookmark", value_name = "ID")]
    pub bookmarks: Vec<String>,

    /// Force the checked state regardless of bookmarks
    #[arg(long)]
    pub checked: Option<bool>,
}

pub fn run_bookmarked(options: BookmarkedOptions) -> Result<()> {
    let state = BookmarkState {
        document_id: options.id,
        checked: options.checked,
    };

    println!("{}", state.bookmarked(options.bookmarks.as_slice()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> DocClassOptions {
        DocClassOptions {
            document: None,
            file: None,
            view: None,
            field: None,
            prefix: None,
        }
    }

    #[test]
    fn test_parse_document_rejects_non_objects() {
        assert!(parse_document("[1, 2]").is_err());
        assert!(parse_document("not json").is_err());
        assert!(parse_document(r#"{"type": "book"}"#).is_ok());
    }

    #[test]
    fn test_document_classes_from_config() {
        let catalog =
            CatalogConfig::from_toml("[index]\ndisplay_type_field = \"type\"\n").unwrap();
        let document = parse_document(r#"{"type": ["book", "mss"]}"#).unwrap();

        assert_eq!(
            document_classes(&options(), &catalog, &document),
            "blacklight-book blacklight-mss"
        );
    }

    #[test]
    fn test_document_classes_overrides() {
        let document = parse_document(r#"{"format": "Map"}"#).unwrap();
        let opts = DocClassOptions {
            field: Some("format".to_string()),
            prefix: Some("doc-".to_string()),
            ..options()
        };

        assert_eq!(
            document_classes(&opts, &CatalogConfig::default(), &document),
            "doc-map"
        );
    }

    #[test]
    fn test_document_classes_without_field() {
        let document = parse_document(r#"{"type": "book"}"#).unwrap();
        assert_eq!(
            document_classes(&options(), &CatalogConfig::default(), &document),
            ""
        );
    }
}
