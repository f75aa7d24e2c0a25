use crate::prelude::{eprintln, println, *};
use shelfmark_core::config::CatalogConfig;
use shelfmark_core::facets::{
    facet_label, format_facet_title, format_page_title_filters, selections_from_params,
    FacetSelection,
};

#[derive(Debug, clap::Args, Clone)]
pub struct FacetTitleOptions {
    /// Facet field key; its label comes from the configuration
    #[arg(short, long, required_unless_present = "label")]
    pub field: Option<String>,

    /// Display label, overriding the configured one
    #[arg(short, long)]
    pub label: Option<String>,

    /// Selected values, in selection order
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,
}

impl FacetTitleOptions {
    fn selection(&self, catalog: &CatalogConfig) -> FacetSelection {
        let label = match (&self.label, &self.field) {
            (Some(label), _) => label.clone(),
            (None, Some(field)) => facet_label(catalog, field),
            (None, None) => String::new(),
        };

        FacetSelection::new(label, self.values.clone())
    }
}

pub fn run_facet_title(options: FacetTitleOptions, catalog: &CatalogConfig) -> Result<()> {
    println!("{}", format_facet_title(&options.selection(catalog)));
    Ok(())
}

#[derive(Debug, clap::Args, Clone)]
pub struct PageTitleOptions {
    /// Query term the user searched for
    #[arg(short, long)]
    pub query: Option<String>,

    /// Active facet filter as field=value (repeatable)
    #[arg(short, long = "filter", value_name = "FIELD=VALUE")]
    pub filters: Vec<String>,
}

impl PageTitleOptions {
    fn selections(&self, catalog: &CatalogConfig) -> Result<Vec<FacetSelection>> {
        let params = self
            .filters
            .iter()
            .map(|f| parse_key_value(f))
            .collect::<Result<Vec<_>>>()?;

        Ok(selections_from_params(catalog, &params))
    }
}

pub fn run_page_title(
    options: PageTitleOptions,
    catalog: &CatalogConfig,
    global: crate::Global,
) -> Result<()> {
    let selections = options.selections(catalog)?;

    if global.verbose {
        eprintln!("{} facet filter(s)", selections.len());
    }

    println!(
        "{}",
        format_page_title_filters(&selections, options.query.as_deref())
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_title_label_from_field() {
        let catalog = CatalogConfig::from_toml("[facets.format]\nlabel = \"Material\"\n").unwrap();
        let options = FacetTitleOptions {
            field: Some("format".to_string()),
            label: None,
            values: vec!["Book".to_string()],
        };
        assert_eq!(
            format_facet_title(&options.selection(&catalog)),
            "Material: Book"
        );
    }

    #[test]
    fn test_facet_title_explicit_label_wins() {
        let options = FacetTitleOptions {
            field: Some("format".to_string()),
            label: Some("Kind".to_string()),
            values: vec!["Book".to_string(), "Map".to_string()],
        };
        assert_eq!(
            format_facet_title(&options.selection(&CatalogConfig::default())),
            "Kind: Book and Map"
        );
    }

    #[test]
    fn test_page_title_selections() {
        let options = PageTitleOptions {
            query: Some("foobar".to_string()),
            filters: vec!["format=Book".to_string()],
        };
        let selections = options.selections(&CatalogConfig::default()).unwrap();
        assert_eq!(
            format_page_title_filters(&selections, options.query.as_deref()),
            "foobar / Format: Book"
        );
    }

    #[test]
    fn test_page_title_rejects_malformed_filter() {
        let options = PageTitleOptions {
            query: None,
            filters: vec!["format".to_string()],
        };
        assert!(options.selections(&CatalogConfig::default()).is_err());
    }
}
