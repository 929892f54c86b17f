//! Fuzzy field matching.
//!
//! Similarity is token-order-insensitive: both strings are
//! normalized (lower-cased, punctuation folded to spaces), split into
//! token sets, and compared through their shared and leftover tokens
//! with a Levenshtein-based ratio. A query word that appears verbatim
//! in a comma-separated vocabulary list therefore scores 100.

use std::collections::BTreeSet;

/// A field value that scored above the match threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMatch<'v> {
    /// Position of the value in the candidate sequence
    pub index: usize,
    /// The candidate value as given
    pub value: &'v str,
    /// Similarity in [0, 100]
    pub score: u32,
}

/// Lower-case and fold every non-alphanumeric character to a space,
/// collapsing runs of whitespace.
pub fn normalize(s: &str) -> String {
    let folded: String = s
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_lowercase().next().unwrap_or(c)
            } else {
                ' '
            }
        })
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Edit-distance similarity of two already-normalized strings, in [0, 100].
///
/// Either side empty scores 0.
pub fn ratio(a: &str, b: &str) -> u32 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    (strsim::normalized_levenshtein(a, b) * 100.0).round() as u32
}

/// Token-set similarity of two raw strings, in [0, 100].
///
/// Compares the sorted intersection of the token sets against each
/// side's intersection-plus-remainder, and the two remainders against
/// each other, keeping the best of the three.
pub fn token_set_ratio(a: &str, b: &str) -> u32 {
    let a = normalize(a);
    let b = normalize(b);
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let tokens_a: BTreeSet<&str> = a.split(' ').collect();
    let tokens_b: BTreeSet<&str> = b.split(' ').collect();

    let sect = join(tokens_a.intersection(&tokens_b));
    let diff_ab = join(tokens_a.difference(&tokens_b));
    let diff_ba = join(tokens_b.difference(&tokens_a));

    let combined_ab = join_nonempty(&sect, &diff_ab);
    let combined_ba = join_nonempty(&sect, &diff_ba);

    ratio(&sect, &combined_ab)
        .max(ratio(&sect, &combined_ba))
        .max(ratio(&combined_ab, &combined_ba))
}

fn join<'s, 't: 's>(tokens: impl Iterator<Item = &'s &'t str>) -> String {
    tokens.copied().collect::<Vec<_>>().join(" ")
}

fn join_nonempty(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (_, true) => head.to_string(),
        _ => format!("{head} {tail}"),
    }
}

/// Fuzzy-match `term` against every candidate value.
///
/// Returns up to `limit` matches scoring strictly above `threshold`,
/// best first. Equal scores keep candidate order. Values that
/// normalize to the empty string are never scored.
pub fn match_field<'v>(
    term: &str,
    values: &[&'v str],
    threshold: u32,
    limit: usize,
) -> Vec<FieldMatch<'v>> {
    if normalize(term).is_empty() || values.is_empty() {
        return Vec::new();
    }

    let scored = values
        .iter()
        .enumerate()
        .filter(|(_, value)| !normalize(value).is_empty())
        .map(|(index, value)| FieldMatch {
            index,
            value: *value,
            score: token_set_ratio(term, value),
        })
        .collect();

    select_matches(scored, threshold, limit)
}

/// Keep scores strictly above `threshold`, stable-sort best first and
/// truncate to `limit`.
pub fn select_matches(
    scored: Vec<FieldMatch<'_>>,
    threshold: u32,
    limit: usize,
) -> Vec<FieldMatch<'_>> {
    let mut kept: Vec<FieldMatch<'_>> = scored
        .into_iter()
        .filter(|m| m.score > threshold)
        .collect();
    kept.sort_by(|a, b| b.score.cmp(&a.score));
    kept.truncate(limit);
    kept
}
