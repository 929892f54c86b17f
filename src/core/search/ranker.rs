//! Result deduplication and top-K selection.

use crate::core::types::ScoredResult;
use std::collections::HashMap;

/// Default number of results returned by a search
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Deduplicate, sort and truncate scored results.
///
/// - A (record, field) pair appears at most once; the higher-scoring
///   occurrence survives and keeps the position of the first one.
/// - Sorting is descending by weighted score and stable, so equal
///   scores keep insertion order.
/// - At most `limit` results come back; fewer candidates are returned
///   as-is, never padded.
pub fn rank<'a>(candidates: Vec<ScoredResult<'a>>, limit: usize) -> Vec<ScoredResult<'a>> {
    let mut seen: HashMap<(usize, &'a str), usize> = HashMap::with_capacity(candidates.len());
    let mut unique: Vec<ScoredResult<'a>> = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let key = (candidate.record_index, candidate.field);
        match seen.get(&key) {
            Some(&slot) => {
                if candidate.score > unique[slot].score {
                    unique[slot] = candidate;
                }
            }
            None => {
                seen.insert(key, unique.len());
                unique.push(candidate);
            }
        }
    }

    unique.sort_by(|a, b| b.score.total_cmp(&a.score));
    unique.truncate(limit);
    unique
}
