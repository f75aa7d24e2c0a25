use crate::prelude::{println, *};
use colored::Colorize;
use shelfmark_core::config::CatalogConfig;
use shelfmark_core::search_bar::{search_bar_state, SearchRequest};
use shelfmark_core::view_type::{view_type_buttons, ViewTypeButton};
use std::collections::BTreeMap;

#[derive(Debug, clap::Args, Clone)]
pub struct ViewsOptions {
    /// Key of the view currently shown
    #[arg(short, long)]
    pub current: Option<String>,

    /// Path the view switch links point to
    #[arg(long, default_value = "/catalog")]
    pub base: String,

    /// Current search parameter as key=value (repeatable)
    #[arg(short, long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, serde::Serialize)]
struct ViewOutput {
    key: String,
    label: String,
    icon: String,
    selected: bool,
    classes: String,
    url: String,
}

fn view_output(button: &ViewTypeButton, base: &str, state: &BTreeMap<String, String>) -> ViewOutput {
    ViewOutput {
        key: button.view.key.clone(),
        label: button.label(),
        icon: button.icon_name().to_string(),
        selected: button.selected,
        classes: button.classes.clone(),
        url: button.url(base, state),
    }
}

pub fn run_views(options: ViewsOptions, catalog: &CatalogConfig) -> Result<()> {
    let state = options
        .params
        .iter()
        .map(|p| parse_key_value(p))
        .collect::<Result<BTreeMap<_, _>>>()?;

    let outputs: Vec<ViewOutput> = view_type_buttons(catalog, options.current.as_deref())
        .iter()
        .map(|button| view_output(button, &options.base, &state))
        .collect();

    if options.json {
        let json = serde_json::to_string_pretty(&outputs)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    if outputs.is_empty() {
        println!("{}", "No views configured.".yellow());
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["KEY", "LABEL", "ICON", "URL"]);
    for view in &outputs {
        let key = if view.selected {
            format!("{} *", view.key).green().bold().to_string()
        } else {
            view.key.clone()
        };
        table.add_row(prettytable::row![key, view.label, view.icon, view.url]);
    }
    table.printstd();

    Ok(())
}

#[derive(Debug, clap::Args, Clone)]
pub struct SearchBarOptions {
    /// Controller action being rendered
    #[arg(long, default_value = "index")]
    pub action: String,

    /// The page is not served by the catalog controller
    #[arg(long)]
    pub not_catalog: bool,

    /// The request already carries a query or filters
    #[arg(long)]
    pub has_search_parameters: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_search_bar(options: SearchBarOptions, catalog: &CatalogConfig) -> Result<()> {
    let request = SearchRequest {
        catalog_controller: !options.not_catalog,
        action_name: options.action.clone(),
        has_search_parameters: options.has_search_parameters,
    };

    let state = search_bar_state(&catalog.search_bar, &request);

    if options.json {
        let json = serde_json::to_string_pretty(&state)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["partial", state.partial]);
    table.add_row(prettytable::row!["autocomplete", state.autocomplete_enabled]);
    table.add_row(prettytable::row![
        "autocomplete path",
        state.autocomplete_path.as_deref().unwrap_or("-")
    ]);
    table.add_row(prettytable::row!["autofocus", state.autofocus]);
    table.add_row(prettytable::row!["advanced search", state.advanced_search_enabled]);
    table.printstd();

    Ok(())
}
