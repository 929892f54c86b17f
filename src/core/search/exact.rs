//! Exact word lookup.
//!
//! A companion to fuzzy search: lists, per field, the words of every
//! value that shares at least one whole word with the query.

use crate::core::catalog::RecordStore;
use std::collections::{BTreeMap, BTreeSet};

/// Lower-cased whitespace tokens with surrounding punctuation removed
fn words(text: &str) -> BTreeSet<String> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Words of every field value sharing a word with `query`, grouped by
/// field. Fields without a hit are absent from the map.
pub fn exact_matches(
    query: &str,
    store: &RecordStore,
    fields: &[&str],
) -> BTreeMap<String, BTreeSet<String>> {
    let query_words = words(query);
    let mut matches: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    if query_words.is_empty() {
        return matches;
    }

    for field in fields {
        for value in store.column(field) {
            let value_words = words(value);
            if !query_words.is_disjoint(&value_words) {
                matches
                    .entry(field.to_string())
                    .or_default()
                    .extend(value_words);
            }
        }
    }

    matches
}
