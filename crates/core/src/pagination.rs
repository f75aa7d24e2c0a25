//! Pagination summary formatting
//!
//! Pure functions that turn a result window (zero-based offset, page size and
//! total count) into the human-readable "1 - 10 of 15" style summaries shown
//! above a result list. Both a plain-text and an emphasized HTML rendering are
//! produced from the same [`RangeSummary`] segments.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error type for pagination formatting
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// The contiguous slice of a result set currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub start_offset: usize,
    pub page_size: usize,
    pub total_count: usize,
}

impl PageWindow {
    pub fn new(start_offset: usize, page_size: usize, total_count: usize) -> Self {
        Self {
            start_offset,
            page_size,
            total_count,
        }
    }

    /// Build a window from a 1-indexed page number
    ///
    /// Page 0 is treated as page 1.
    pub fn from_page(page: usize, per_page: usize, total_count: usize) -> Self {
        Self::new(
            page.saturating_sub(1).saturating_mul(per_page),
            per_page,
            total_count,
        )
    }

    /// 1-based index of the first entry in the window
    pub fn first_index(&self) -> usize {
        self.start_offset.saturating_add(1)
    }

    /// 1-based index of the last entry in the window
    pub fn last_index(&self) -> usize {
        self.start_offset
            .saturating_add(self.page_size)
            .min(self.total_count)
    }

    fn validate(&self) -> Result<(), PaginationError> {
        if self.page_size == 0 {
            return Err(PaginationError::InvalidArgument(
                "page size must be greater than zero".to_string(),
            ));
        }

        // An empty result set only has offset 0; otherwise the offset must
        // point at an existing entry
        if self.start_offset > self.total_count
            || (self.total_count > 0 && self.start_offset == self.total_count)
        {
            return Err(PaginationError::InvalidArgument(format!(
                "start offset {} is beyond the last entry of {}",
                self.start_offset, self.total_count
            )));
        }

        Ok(())
    }
}

/// Singular and plural noun describing one unit of a result set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryName {
    pub singular: String,
    pub plural: String,
}

impl EntryName {
    /// Create an entry name, inferring the plural form
    pub fn new(singular: impl Into<String>) -> Self {
        let singular = singular.into();
        let plural = pluralize(&singular);
        Self { singular, plural }
    }

    pub fn with_plural(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }
}

impl Default for EntryName {
    fn default() -> Self {
        Self::with_plural("entry", "entries")
    }
}

/// Pluralize an English noun with the common suffix rules
///
/// Handles "entry" -> "entries", "box" -> "boxes", "book" -> "books".
/// Irregular nouns should be supplied explicitly via [`EntryName::with_plural`].
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();
    let shouting = word.chars().last().is_some_and(char::is_uppercase);
    let suffix = |s: &str| if shouting { s.to_uppercase() } else { s.to_string() };

    if let Some(stem) = word.strip_suffix(['y', 'Y']) {
        let before_y = stem.chars().last();
        if before_y.is_some_and(|c| !"aeiouAEIOU".contains(c)) {
            return format!("{stem}{}", suffix("ies"));
        }
    }

    if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|ending| lower.ends_with(ending))
    {
        return format!("{word}{}", suffix("es"));
    }

    format!("{word}{}", suffix("s"))
}

/// Digit grouping used when printing counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub delimiter: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
        }
    }
}

/// Format a count with a thousands delimiter (1001 -> "1,001")
pub fn format_delimited(value: usize, number_format: &NumberFormat) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut result = String::with_capacity(len + (len / 3) * number_format.delimiter.len());

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            result.push_str(&number_format.delimiter);
        }
        result.push(ch);
    }

    result
}

/// Logical segments of a range summary
///
/// Counts are already delimited; emphasis markup is left to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RangeSummary {
    Empty {
        plural: String,
    },
    Single {
        singular: String,
    },
    Range {
        first: String,
        last: String,
        total: String,
    },
}

impl RangeSummary {
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Render with every count wrapped in `<strong>`
    ///
    /// Entry names and counts are escaped; counts carry the configured
    /// delimiter, which is arbitrary text.
    pub fn to_html(&self) -> String {
        match self {
            RangeSummary::Empty { plural } => {
                format!("No {} found", html_escape::encode_text(plural))
            }
            RangeSummary::Single { singular } => format!(
                "<strong>1</strong> {} found",
                html_escape::encode_text(singular)
            ),
            RangeSummary::Range { first, last, total } => format!(
                "<strong>{}</strong> - <strong>{}</strong> of <strong>{}</strong>",
                html_escape::encode_text(first),
                html_escape::encode_text(last),
                html_escape::encode_text(total)
            ),
        }
    }
}

impl fmt::Display for RangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeSummary::Empty { plural } => write!(f, "No {plural} found"),
            RangeSummary::Single { singular } => write!(f, "1 {singular} found"),
            RangeSummary::Range { first, last, total } => {
                write!(f, "{first} - {last} of {total}")
            }
        }
    }
}

/// Compute the summary segments for a window
pub fn summarize_range(
    window: &PageWindow,
    entry_name: &EntryName,
    number_format: &NumberFormat,
) -> Result<RangeSummary, PaginationError> {
    window.validate()?;

    let summary = match window.total_count {
        0 => RangeSummary::Empty {
            plural: entry_name.plural.clone(),
        },
        1 => RangeSummary::Single {
            singular: entry_name.singular.clone(),
        },
        total => RangeSummary::Range {
            first: format_delimited(window.first_index(), number_format),
            last: format_delimited(window.last_index(), number_format),
            total: format_delimited(total, number_format),
        },
    };

    Ok(summary)
}

/// Format a window as a plain-text summary with the default delimiter
///
/// - `"No widgets found"` when the result set is empty
/// - `"1 widget found"` for a single result
/// - `"11 - 20 of 47"` otherwise
pub fn format_range(
    window: &PageWindow,
    entry_name: &str,
    entry_name_plural: &str,
) -> Result<String, PaginationError> {
    let entry_name = EntryName::with_plural(entry_name, entry_name_plural);
    summarize_range(window, &entry_name, &NumberFormat::default()).map(|s| s.to_text())
}

/// Format a window as an HTML summary with emphasized counts
///
/// Falls back to "entry"/"entries" when no entry name is supplied.
pub fn page_entries_info(
    window: &PageWindow,
    entry_name: Option<&EntryName>,
    number_format: &NumberFormat,
) -> Result<String, PaginationError> {
    let default_name = EntryName::default();
    let entry_name = entry_name.unwrap_or(&default_name);
    summarize_range(window, entry_name, number_format).map(|s| s.to_html())
}

/// Response metadata needed to number documents in a result list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResponseWindow {
    pub start: usize,
    pub grouped: bool,
}

/// 1-based position of the document at `index` within the full result set
///
/// Grouped responses have no meaningful global position and yield `None`.
pub fn document_counter_with_offset(response: &ResponseWindow, index: usize) -> Option<usize> {
    if response.grouped {
        None
    } else {
        Some(index + 1 + response.start)
    }
}
