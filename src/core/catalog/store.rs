//! Immutable in-memory record store.

use crate::core::catalog::FieldClass;
use crate::core::types::{CurriculumRecord, UNIT_NAME_FIELD};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Read-only snapshot of the curriculum catalog
///
/// Records are created once at load time and never mutated; a reload
/// builds a new store. All search state borrows from here for the
/// duration of one call.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<CurriculumRecord>,
    schema: Vec<String>,
    source: Option<PathBuf>,
    loaded_at: DateTime<Utc>,
}

/// Summary of a loaded catalog
#[derive(Debug, Clone, Serialize)]
pub struct CatalogInfo {
    pub records: usize,
    pub fields: Vec<FieldSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub loaded_at: DateTime<Utc>,
}

/// One schema column and its class
#[derive(Debug, Clone, Serialize)]
pub struct FieldSummary {
    pub name: String,
    pub class: FieldClass,
    /// Records with a non-empty value for this field
    pub populated: usize,
}

impl RecordStore {
    /// Build a store from already-parsed records.
    ///
    /// The schema is the sorted union of field names across records.
    pub fn new(records: Vec<CurriculumRecord>) -> Self {
        let schema: BTreeSet<&String> = records.iter().flat_map(|r| r.fields.keys()).collect();
        let schema = schema.into_iter().cloned().collect();

        Self {
            records,
            schema,
            source: None,
            loaded_at: Utc::now(),
        }
    }

    /// Record the file the store was loaded from
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    pub fn records(&self) -> &[CurriculumRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&CurriculumRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Field names known at load time, sorted
    pub fn schema(&self) -> &[String] {
        &self.schema
    }

    /// Every field a search can target: the unit name, then the schema
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(UNIT_NAME_FIELD).chain(self.schema.iter().map(String::as_str))
    }

    /// Whether `name` is a searchable field
    pub fn has_field(&self, name: &str) -> bool {
        name == UNIT_NAME_FIELD || self.schema.iter().any(|f| f == name)
    }

    /// Values of one field across all records, in record order.
    /// Missing values read as the empty string.
    pub fn column(&self, field: &str) -> Vec<&str> {
        self.records.iter().map(|r| r.field(field)).collect()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Summarize the catalog for display
    pub fn info(&self) -> CatalogInfo {
        let fields = self
            .searchable_fields()
            .map(|name| FieldSummary {
                name: name.to_string(),
                class: FieldClass::of(name),
                populated: self
                    .records
                    .iter()
                    .filter(|r| !r.field(name).is_empty())
                    .count(),
            })
            .collect();

        CatalogInfo {
            records: self.records.len(),
            fields,
            source: self.source.as_ref().map(|p| p.display().to_string()),
            loaded_at: self.loaded_at,
        }
    }
}
