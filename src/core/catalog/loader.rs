//! JSON catalog loader.
//!
//! Reads a JSON array of flat row objects, the shape a spreadsheet
//! export produces:
//!
//! ```json
//! [
//!   {"Level": 3, "Unit": 2, "Unit Name": "Water Cycle", "Part": null,
//!    "Vocabulary Words": "evaporation, condensation",
//!    "Reading Skill": "Students will identify cause and effect"}
//! ]
//! ```
//!
//! `Level`, `Unit`, `Unit Name` and `Part` (case-insensitive) become the
//! record identity; every other column becomes a field. Cells are
//! trimmed and null cells read as the empty string.

use crate::core::catalog::RecordStore;
use crate::core::error::{CurriculaError, Result};
use crate::core::types::CurriculumRecord;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

impl RecordStore {
    /// Load a catalog from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CurriculaError::CatalogNotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;
        let store = Self::from_json_str(&contents)?.with_source(path);

        tracing::info!(
            "Loaded {} record(s) with {} field(s) from {:?}",
            store.len(),
            store.schema().len(),
            path
        );

        Ok(store)
    }

    /// Parse a catalog from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: Value = serde_json::from_str(json)?;
        let rows = doc.as_array().ok_or_else(|| CurriculaError::MalformedRecord {
            row: 0,
            message: "catalog must be a JSON array of row objects".to_string(),
        })?;

        let records = rows
            .iter()
            .enumerate()
            .map(|(i, row)| parse_row(i + 1, row))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(records))
    }
}

/// Convert one row object into a record (`row` is 1-based)
fn parse_row(row: usize, value: &Value) -> Result<CurriculumRecord> {
    let object = value
        .as_object()
        .ok_or_else(|| CurriculaError::MalformedRecord {
            row,
            message: format!("expected an object, found {}", type_name(value)),
        })?;

    let mut record = CurriculumRecord {
        level: String::new(),
        unit_number: String::new(),
        unit_name: String::new(),
        part_number: None,
        fields: BTreeMap::new(),
    };

    for (column, cell) in object {
        let column = column.trim();
        let text = cell_text(cell).ok_or_else(|| CurriculaError::MalformedRecord {
            row,
            message: format!("column '{column}' holds a nested object"),
        })?;

        match column.to_lowercase().as_str() {
            "level" | "grade" => record.level = text,
            "unit" | "unit number" | "unit_number" => record.unit_number = text,
            "unit name" | "unit_name" => record.unit_name = text,
            "part" | "part number" | "part_number" => {
                record.part_number = (!text.is_empty()).then_some(text);
            }
            _ => {
                record.fields.insert(column.to_string(), text);
            }
        }
    }

    Ok(record)
}

/// Normalize a cell to trimmed text. Arrays are joined as a word list;
/// nested objects have no textual form.
fn cell_text(cell: &Value) -> Option<String> {
    let text = match cell {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .map(cell_text)
            .collect::<Option<Vec<_>>>()?
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => return None,
    };
    Some(text)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
