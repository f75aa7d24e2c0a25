use crate::prelude::*;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod document;
mod entries;
mod error;
mod icon;
mod prelude;
mod title;
mod views;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Format result summaries, page titles, icons and view switchers for a library catalog"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Catalog configuration file (TOML)
    #[clap(long, env = "SHELFMARK_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Whether to display additional information.
    #[clap(long, env = "SHELFMARK_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Summarize a page of results ("11 - 20 of 47")
    Entries(crate::entries::EntriesOptions),

    /// Print the 1-based position of documents on a page
    Counter(crate::entries::CounterOptions),

    /// Describe the selected values of one facet
    FacetTitle(crate::title::FacetTitleOptions),

    /// Build the page title for a query and its facet filters
    PageTitle(crate::title::PageTitleOptions),

    /// Derive CSS classes for a document from its display type field
    DocClass(crate::document::DocClassOptions),

    /// Check whether a document is bookmarked
    Bookmarked(crate::document::BookmarkedOptions),

    /// Render an icon as inline SVG
    Icon(crate::icon::IconOptions),

    /// List the configured view type buttons
    Views(crate::views::ViewsOptions),

    /// Show the search bar flags for a request
    SearchBar(crate::views::SearchBarOptions),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    let catalog = crate::config::load(app.global.config.as_deref())?;
    log::debug!("Dispatching {:?}", app.command);

    match app.command {
        SubCommands::Entries(options) => crate::entries::run(options, &catalog, app.global),
        SubCommands::Counter(options) => crate::entries::run_counter(options, app.global),
        SubCommands::FacetTitle(options) => crate::title::run_facet_title(options, &catalog),
        SubCommands::PageTitle(options) => {
            crate::title::run_page_title(options, &catalog, app.global)
        }
        SubCommands::DocClass(options) => crate::document::run_doc_class(options, &catalog),
        SubCommands::Bookmarked(options) => crate::document::run_bookmarked(options),
        SubCommands::Icon(options) => crate::icon::run(options, app.global),
        SubCommands::Views(options) => crate::views::run_views(options, &catalog),
        SubCommands::SearchBar(options) => crate::views::run_search_bar(options, &catalog),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
