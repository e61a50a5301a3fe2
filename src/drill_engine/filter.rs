//! Search and categorical filtering over a list of entries.

use crate::drill_engine::models::{Entry, FilterQuery, LevelFilter, TypeFilter};

impl FilterQuery {
    /// True when `entry` passes the category, level and text predicates.
    pub fn matches(&self, entry: &Entry) -> bool {
        let needle = normalize_query(&self.query);
        passes(entry, &needle, &self.category, &self.level)
    }
}

/// Keep the entries that pass every active filter, in their original order.
///
/// The query is trimmed and compared case-insensitively against the phrase,
/// meaning and example. An empty query matches everything.
pub fn filter(
    entries: &[Entry],
    query: &str,
    category: &TypeFilter,
    level: &LevelFilter,
) -> Vec<Entry> {
    let needle = normalize_query(query);
    entries
        .iter()
        .filter(|e| passes(e, &needle, category, level))
        .cloned()
        .collect()
}

/// [`filter`] driven by a [`FilterQuery`].
pub fn apply(entries: &[Entry], fq: &FilterQuery) -> Vec<Entry> {
    filter(entries, &fq.query, &fq.category, &fq.level)
}

fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

fn passes(entry: &Entry, needle: &str, category: &TypeFilter, level: &LevelFilter) -> bool {
    if !category.accepts(&entry.category) || !level.accepts(&entry.level) {
        return false;
    }
    if needle.is_empty() {
        return true;
    }
    [&entry.phrase, &entry.meaning, &entry.example]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
