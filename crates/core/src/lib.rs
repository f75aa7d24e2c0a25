//! Core library for shelfmark
//!
//! This crate implements the **Functional Core** of shelfmark, following the
//! Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`shelfmark_core`** (this crate): pure formatting and presentation
//!   decisions with zero I/O
//! - **`shelfmark`**: configuration loading, argument parsing and output (the
//!   Imperative Shell)
//!
//! Every function here is deterministic: the same input always produces the
//! same output, nothing is cached and no state is shared, so calls are safe
//! from any number of threads.
//!
//! # Module Organization
//!
//! - [`pagination`]: "1 - 10 of 15" result range summaries and document counters
//! - [`facets`]: facet filter descriptions for page titles
//! - [`document`]: display type CSS classes and bookmark state
//! - [`icons`]: icon registry with an explicit fallback, SVG decoration
//! - [`search_bar`]: autocomplete, autofocus and advanced search flags
//! - [`view_type`]: view switcher buttons
//! - [`config`]: the catalog configuration value
//!
//! # Example Usage
//!
//! ```rust
//! use shelfmark_core::facets::{format_page_title_filters, FacetSelection};
//! use shelfmark_core::pagination::{format_range, PageWindow};
//!
//! let summary = format_range(&PageWindow::new(10, 10, 47), "book", "books").unwrap();
//! assert_eq!(summary, "11 - 20 of 47");
//!
//! let format = FacetSelection::new("Format", vec!["Book".into(), "Map".into()]);
//! let title = format_page_title_filters(&[format], Some("whales"));
//! assert_eq!(title, "whales / Format: Book and Map");
//! ```

pub mod config;
pub mod document;
pub mod facets;
pub mod icons;
pub mod pagination;
pub mod search_bar;
pub mod view_type;
