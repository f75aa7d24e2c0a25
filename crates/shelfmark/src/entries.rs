use crate::prelude::{eprintln, println, *};
use serde::Serialize;
use shelfmark_core::config::CatalogConfig;
use shelfmark_core::pagination::{
    document_counter_with_offset, summarize_range, EntryName, PageWindow, RangeSummary,
    ResponseWindow,
};

#[derive(Debug, clap::Args, Clone)]
pub struct EntriesOptions {
    /// Total number of results
    #[arg(short, long)]
    pub total: usize,

    /// Zero-based offset of the first result on the page
    #[arg(short, long, conflicts_with = "page")]
    pub start: Option<usize>,

    /// Page number (1-indexed)
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Number of results per page
    #[arg(long, env = "SHELFMARK_PER_PAGE", default_value = "10")]
    pub per_page: usize,

    /// Singular noun for one result (e.g. "book")
    #[arg(long)]
    pub entry_name: Option<String>,

    /// Plural noun, inferred from the singular when omitted
    #[arg(long, requires = "entry_name")]
    pub entry_name_plural: Option<String>,

    /// Wrap counts in <strong> tags
    #[arg(long)]
    pub html: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct EntriesOutput {
    window: PageWindow,
    summary: RangeSummary,
    text: String,
    html: String,
}

impl EntriesOptions {
    fn window(&self) -> PageWindow {
        match self.page {
            Some(page) => PageWindow::from_page(page, self.per_page, self.total),
            None => PageWindow::new(self.start.unwrap_or(0), self.per_page, self.total),
        }
    }

    /// Command line entry name, then the configured one, then "entry"
    fn entry_name(&self, catalog: &CatalogConfig) -> EntryName {
        match (&self.entry_name, &self.entry_name_plural) {
            (Some(singular), Some(plural)) => EntryName::with_plural(singular, plural),
            (Some(singular), None) => EntryName::new(singular),
            _ => catalog.format.entry_name().unwrap_or_default(),
        }
    }
}

pub fn run(options: EntriesOptions, catalog: &CatalogConfig, global: crate::Global) -> Result<()> {
    let window = options.window();
    let entry_name = options.entry_name(catalog);

    if global.verbose {
        eprintln!(
            "start={} per_page={} total={}",
            window.start_offset, window.page_size, window.total_count
        );
    }

    let summary = summarize_range(&window, &entry_name, &catalog.format.number_format())
        .map_err(|e| Error::InvalidArgument(e.to_string()))?;

    if options.json {
        let output = EntriesOutput {
            window,
            text: summary.to_text(),
            html: summary.to_html(),
            summary,
        };
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else if options.html {
        println!("{}", summary.to_html());
    } else {
        println!("{}", summary);
    }

    Ok(())
}

#[derive(Debug, clap::Args, Clone)]
pub struct CounterOptions {
    /// Zero-based offset of the first result on the page
    #[arg(short, long, default_value = "0")]
    pub start: usize,

    /// The response groups results, so documents have no global position
    #[arg(long)]
    pub grouped: bool,

    /// Zero-based positions of documents within the page
    #[arg(value_name = "INDEX", required = true)]
    pub indices: Vec<usize>,
}

pub fn run_counter(options: CounterOptions, global: crate::Global) -> Result<()> {
    let response = ResponseWindow {
        start: options.start,
        grouped: options.grouped,
    };

    if global.verbose && response.grouped {
        eprintln!("Grouped response: counters are not available");
    }

    for index in &options.indices {
        match document_counter_with_offset(&response, *index) {
            Some(counter) => println!("{}", counter),
            None => println!("-"),
        }
    }

    Ok(())
}
