//! Ranking and weighting tests
//!
//! Exercises the public ranking pieces directly:
//! - Field-class multipliers and their ordering
//! - Strict threshold boundary in field matching
//! - Top-K bound and deduplication in the ranker

use curricula::core::search::{match_field, rank, Scorer, DEFAULT_RESULT_LIMIT};
use curricula::core::types::{CurriculumRecord, ScoredResult};
use std::collections::BTreeMap;

fn record() -> CurriculumRecord {
    CurriculumRecord {
        level: "2".to_string(),
        unit_number: "1".to_string(),
        unit_name: "Seasons".to_string(),
        part_number: None,
        fields: BTreeMap::new(),
    }
}

fn scored<'a>(record: &'a CurriculumRecord, index: usize, field: &'a str, score: f64) -> ScoredResult<'a> {
    ScoredResult {
        record_index: index,
        record,
        field,
        snippet: "",
        term: "q".to_string(),
        raw_score: 0,
        score,
        theme: None,
    }
}

#[test]
fn test_score_monotonicity_by_field_class() {
    let scorer = Scorer::default();
    for raw in 71..=100 {
        let vocabulary = scorer.score(raw, "Vocabulary Words");
        let skill = scorer.score(raw, "Reading Skill");
        let generic = scorer.score(raw, "Unit Name");
        assert!(vocabulary > skill && skill > generic, "raw={raw}");
    }
}

#[test]
fn test_threshold_boundary_is_strict() {
    // "planets" scores 86 against "planet"
    let values = ["planet"];
    assert!(match_field("planets", &values, 86, 5).is_empty());
    assert_eq!(match_field("planets", &values, 85, 5)[0].score, 86);
}

#[test]
fn test_top_k_bound() {
    let r = record();
    for n in [0usize, 1, 4, 5, 6, 40] {
        let candidates: Vec<ScoredResult<'_>> =
            (0..n).map(|i| scored(&r, i, "Vocabulary Words", 100.0 - i as f64)).collect();
        let ranked = rank(candidates, DEFAULT_RESULT_LIMIT);
        assert_eq!(ranked.len(), n.min(DEFAULT_RESULT_LIMIT));
    }
}

#[test]
fn test_distinct_count_bounds_results() {
    // Twelve candidates over three (record, field) pairs
    let r = record();
    let candidates: Vec<ScoredResult<'_>> = (0..12)
        .map(|i| scored(&r, i % 3, "Vocabulary Words", i as f64))
        .collect();
    let ranked = rank(candidates, DEFAULT_RESULT_LIMIT);

    assert_eq!(ranked.len(), 3);
    let scores: Vec<f64> = ranked.iter().map(|x| x.score).collect();
    assert_eq!(scores, vec![11.0, 10.0, 9.0]);
}
