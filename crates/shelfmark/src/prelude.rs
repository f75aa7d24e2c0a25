pub use crate::error::Error;

pub use anstream::eprintln;
pub use anstream::println;
pub use color_eyre::eyre::{eyre, Context, Result};

pub fn new_table() -> prettytable::Table {
    let mut table = prettytable::Table::new();

    let format = prettytable::format::FormatBuilder::new()
        .padding(1, 1)
        .build();

    table.set_format(format);

    table
}

/// Split a `key=value` argument
pub fn parse_key_value(input: &str) -> Result<(String, String)> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| Error::InvalidArgument(format!("expected key=value, got '{input}'")))?;

    if key.trim().is_empty() {
        return Err(Error::InvalidArgument(format!("missing key in '{input}'")).into());
    }

    Ok((key.trim().to_string(), value.to_string()))
}
