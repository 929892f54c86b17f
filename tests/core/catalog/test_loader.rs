//! Catalog loader tests
//!
//! Tests JSON catalog loading:
//! - Identity columns and typed cells
//! - Missing files and malformed documents
//! - Store metadata (source, schema, vocabulary words)

use crate::common::{create_test_store, CatalogFile};
use curricula::core::catalog::{FieldClass, RecordStore};
use curricula::core::types::UNIT_NAME_FIELD;
use curricula::CurriculaError;

#[test]
fn test_load_fixture_file() {
    let file = CatalogFile::standard();
    let store = RecordStore::from_json_file(file.path()).unwrap();

    assert_eq!(store.len(), 6);
    assert_eq!(store.source(), Some(file.path()));
}

#[test]
fn test_identity_columns() {
    let store = create_test_store();
    let water = &store.records()[0];
    assert_eq!(water.level, "3");
    assert_eq!(water.unit_number, "2");
    assert_eq!(water.unit_name, "Water Cycle");
    assert_eq!(water.part_number, None);
    assert!(!water.fields.contains_key("Unit Name"));

    let plants = &store.records()[2];
    assert_eq!(plants.part_number.as_deref(), Some("1"));

    let kindergarten = &store.records()[4];
    assert_eq!(kindergarten.level, "K");
}

#[test]
fn test_schema_is_union_of_fields() {
    let store = create_test_store();
    assert_eq!(
        store.schema(),
        &[
            "Grammar Skill",
            "Reading Skill",
            "Thinking Map Skill",
            "Vocabulary Words"
        ]
    );
    assert!(store.has_field(UNIT_NAME_FIELD));
}

#[test]
fn test_missing_fields_read_empty() {
    let store = create_test_store();
    let grammar = store.column("Grammar Skill");
    assert_eq!(grammar.len(), store.len());
    assert_eq!(grammar.iter().filter(|v| !v.is_empty()).count(), 1);
    assert_eq!(store.records()[0].field("Grammar Skill"), "");
}

#[test]
fn test_vocabulary_words() {
    let store = create_test_store();
    assert_eq!(
        store.records()[2].vocabulary_words(),
        vec!["seed", "root", "stem", "leaf"]
    );
}

#[test]
fn test_info_summary() {
    let store = create_test_store();
    let info = store.info();

    assert_eq!(info.records, 6);
    assert_eq!(info.source, None);
    let thinking = info
        .fields
        .iter()
        .find(|f| f.name == "Thinking Map Skill")
        .unwrap();
    assert_eq!(thinking.class, FieldClass::Skill);
    assert_eq!(thinking.populated, 1);
}

#[test]
fn test_missing_file_is_not_found() {
    let err = RecordStore::from_json_file("/nonexistent/catalog.json").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_non_array_document_is_malformed() {
    let file = CatalogFile::with_contents(r#"{"Level": 1}"#);
    let err = RecordStore::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, CurriculaError::MalformedRecord { row: 0, .. }));
}

#[test]
fn test_non_object_row_is_malformed() {
    let err = RecordStore::from_json_str(r#"[{"Level": 1}, "oops"]"#).unwrap_err();
    assert!(matches!(err, CurriculaError::MalformedRecord { row: 2, .. }));
}

#[test]
fn test_invalid_json_is_serde_error() {
    let err = RecordStore::from_json_str("[{").unwrap_err();
    assert!(matches!(err, CurriculaError::SerdeError(_)));
}
