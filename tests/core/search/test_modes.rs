//! Search mode tests
//!
//! Covers how the mode selects eligible fields and labels results:
//! - Topic / Concept field restriction
//! - Theme labelling with unit-name fallback
//! - Directive queries never matching the unit name
//! - Mode inference from query prefixes

use crate::common::{create_test_engine, field_names};
use curricula::core::catalog::{FieldClass, RecordStore};
use curricula::core::search::SearchEngine;
use curricula::core::types::{
    CurriculumRecord, SearchMode, SearchRequest, UNIT_NAME_FIELD,
};
use std::collections::BTreeMap;
use std::sync::Arc;

#[test]
fn test_topic_mode_matches_vocabulary_only() {
    let engine = create_test_engine();
    let response = engine
        .search(&SearchRequest::new("seed").with_mode(SearchMode::Topic))
        .unwrap();

    assert!(!response.results.is_empty());
    for field in field_names(&response) {
        assert_eq!(FieldClass::of(field), FieldClass::Vocabulary, "{field}");
    }
}

#[test]
fn test_concept_mode_matches_skills_only() {
    let engine = create_test_engine();
    let response = engine
        .search(&SearchRequest::new("compare and contrast").with_mode(SearchMode::Concept))
        .unwrap();

    assert_eq!(response.results[0].record.unit_name, "Weather Watchers");
    assert_eq!(response.results[0].score, 120.0);
    for field in field_names(&response) {
        assert_eq!(FieldClass::of(field), FieldClass::Skill, "{field}");
    }
}

#[test]
fn test_directive_query_never_matches_unit_name() {
    let engine = create_test_engine();
    let query = "Students will analyze character development";

    let inferred = engine.search(&SearchRequest::new(query)).unwrap();
    assert_eq!(inferred.mode, SearchMode::LearningObjective);
    assert!(!field_names(&inferred).contains(&UNIT_NAME_FIELD));

    // Theme mode normally matches unit names, and this query shares both
    // words of "Character Development", but directives exclude the title
    let themed = engine
        .search(&SearchRequest::new(query).with_mode(SearchMode::Theme))
        .unwrap();
    assert!(!field_names(&themed).contains(&UNIT_NAME_FIELD));
}

#[test]
fn test_directive_behind_theme_prefix_skips_unit_name() {
    let engine = create_test_engine();
    let response = engine
        .search(&SearchRequest::new(
            "theme is students will analyze character development",
        ))
        .unwrap();

    assert_eq!(response.mode, SearchMode::Theme);
    assert!(!field_names(&response).contains(&UNIT_NAME_FIELD));
}

#[test]
fn test_directive_query_matches_skills() {
    let engine = create_test_engine();
    let response = engine
        .search(&SearchRequest::new("Students will analyze how characters change"))
        .unwrap();

    let top = &response.results[0];
    assert_eq!(top.record.unit_name, "Character Development");
    assert_eq!(top.field, "Reading Skill");
    assert_eq!(top.score, 120.0);
}

#[test]
fn test_theme_mode_matches_unit_name() {
    let engine = create_test_engine();
    let response = engine
        .search(&SearchRequest::new("Character Development").with_mode(SearchMode::Theme))
        .unwrap();

    assert_eq!(response.results[0].field, UNIT_NAME_FIELD);
    assert_eq!(response.results[0].score, 100.0);
}

#[test]
fn test_theme_mode_labels_results() {
    let engine = create_test_engine();
    let response = engine
        .search(&SearchRequest::new("theme is evaporation"))
        .unwrap();

    assert_eq!(response.mode, SearchMode::Theme);
    assert_eq!(response.query, "evaporation");
    let top = &response.results[0];
    assert_eq!(top.record.unit_name, "Water Cycle");
    assert_eq!(top.theme.as_deref(), Some("Water Cycle"));
    assert!(response.results.iter().all(|r| r.theme.is_some()));
}

#[test]
fn test_theme_falls_back_to_unit_name() {
    // No topic lists "trait", "motive" or "dialogue"
    let engine = create_test_engine();
    let response = engine
        .search(&SearchRequest::new("dialogue").with_mode(SearchMode::Theme))
        .unwrap();

    let top = &response.results[0];
    assert_eq!(top.record.unit_name, "Character Development");
    assert_eq!(top.theme.as_deref(), Some("Character Development"));
}

#[test]
fn test_other_modes_leave_theme_empty() {
    let engine = create_test_engine();
    for mode in [SearchMode::Topic, SearchMode::LearningObjective] {
        let response = engine
            .search(&SearchRequest::new("evaporation").with_mode(mode))
            .unwrap();
        assert!(response.results.iter().all(|r| r.theme.is_none()));
    }
}

#[test]
fn test_explicit_mode_overrides_prefix() {
    let engine = create_test_engine();
    let response = engine
        .search(&SearchRequest::new("theme is seed").with_mode(SearchMode::Topic))
        .unwrap();

    assert_eq!(response.mode, SearchMode::Topic);
    assert_eq!(response.query, "seed");
    assert!(response.results.iter().all(|r| r.theme.is_none()));
}

#[test]
fn test_vocabulary_outranks_unit_name_at_equal_similarity() {
    let mut fields = BTreeMap::new();
    fields.insert("Vocabulary Words".to_string(), "rain".to_string());
    let store = RecordStore::new(vec![CurriculumRecord {
        level: "1".to_string(),
        unit_number: "1".to_string(),
        unit_name: "Rain".to_string(),
        part_number: None,
        fields,
    }]);
    let engine = SearchEngine::with_defaults(Arc::new(store));

    let response = engine
        .search(&SearchRequest::new("rain").with_mode(SearchMode::Theme))
        .unwrap();

    assert_eq!(
        field_names(&response),
        vec!["Vocabulary Words", UNIT_NAME_FIELD]
    );
    assert_eq!(response.results[0].raw_score, response.results[1].raw_score);
    assert!(response.results[0].score > response.results[1].score);
}
