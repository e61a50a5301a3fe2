//! Quoted comma-separated export of entries.
//!
//! Every cell is wrapped in double quotes with embedded quotes doubled, so
//! commas, quotes and line breaks inside a field never break the row
//! structure. Rows are joined by `\n` with no trailing newline.

use crate::drill_engine::models::Entry;

/// Suggested file name for the host's save dialog.
pub const EXPORT_FILE_NAME: &str = "phrasal_idioms_export.csv";
pub const EXPORT_MIME_TYPE: &str = "text/csv";

pub const EXPORT_HEADER: [&str; 5] = ["Type", "Phrase", "Meaning", "Example", "Level"];

/// Serialise `entries` under the fixed five-column header.
pub fn to_delimited_text(entries: &[Entry]) -> String {
    let mut rows = Vec::with_capacity(entries.len() + 1);
    rows.push(join_row(EXPORT_HEADER));
    for e in entries {
        rows.push(join_row([
            e.category.as_str(),
            e.phrase.as_str(),
            e.meaning.as_str(),
            e.example.as_str(),
            e.level.as_str(),
        ]));
    }
    rows.join("\n")
}

/// Export the last picks if there are any, otherwise the filtered view.
pub fn export_selection(picked: &[Entry], filtered: &[Entry]) -> String {
    if picked.is_empty() {
        to_delimited_text(filtered)
    } else {
        to_delimited_text(picked)
    }
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

fn join_row(cells: [&str; 5]) -> String {
    cells.iter().map(|c| quote(c)).collect::<Vec<_>>().join(",")
}
