//! CLI presentation: text and json formatters per command.

use crate::error::{ApiError, StoreError};
use crate::path::NormalizedPath;
use crate::resolve::Lookup;
use crate::store::{Entry, EntryKind};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Shown in place of a description when nothing applies.
pub const NOT_FOUND_MESSAGE: &str = "no description found";

/// `<path>: <description>`, or the not-found message.
pub fn format_lookup(lookup: &Lookup, color: bool) -> String {
    let path = paint_path(&lookup.display_path, color);
    match lookup.resolution.description() {
        Some(description) => format!("{}: {}", path, description),
        None => format!("{}: {}", path, NOT_FOUND_MESSAGE),
    }
}

pub fn format_added(path: &NormalizedPath, kind: EntryKind, replaced: bool, color: bool) -> String {
    let path = paint_path(path.as_str(), color);
    let verb = if replaced { "Updated" } else { "Added" };
    match kind {
        EntryKind::Direct => format!("{} description for {}", verb, path),
        EntryKind::Pattern => format!("{} pattern for children of {}", verb, path),
    }
}

pub fn format_entries_text(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No descriptions stored.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Path", "Kind", "Description"]);
    for entry in entries {
        table.add_row(vec![
            entry.path.clone(),
            entry.kind.to_string(),
            entry.description.clone(),
        ]);
    }
    table.to_string()
}

pub fn format_entries_json(entries: &[Entry]) -> Result<String, ApiError> {
    serde_json::to_string_pretty(entries)
        .map_err(|e| ApiError::StoreError(StoreError::Serialize(e)))
}

fn paint_path(path: &str, color: bool) -> String {
    if color {
        path.green().to_string()
    } else {
        path.to_string()
    }
}
