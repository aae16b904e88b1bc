//! Output formatting utilities

use crate::domain::field::{MAX_TEXT_LEN, MIN_TEXT_LEN};
use crate::domain::{Entry, EntryField};
use crate::error::Result;
use crate::infrastructure::OutputFormat;

/// Render an entry as JSON
pub fn format_entry(entry: &Entry, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(entry)?,
        OutputFormat::Compact => serde_json::to_string(entry)?,
    };
    Ok(rendered)
}

/// Describe each text field with its bounds and an example
pub fn format_field_list() -> String {
    let mut output = String::new();
    for field in EntryField::ALL {
        output.push_str(&format!(
            "{:<10} {}-{} chars  {}\n",
            field.name(),
            MIN_TEXT_LEN,
            MAX_TEXT_LEN,
            field.description()
        ));
        output.push_str(&format!("{:<10} e.g. {}\n", "", field.example()));
    }
    output
}
