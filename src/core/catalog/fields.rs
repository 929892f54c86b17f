//! Field-class detection from catalog column names.

use serde::Serialize;

/// Category of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldClass {
    /// Delimited word lists ("Vocabulary Words", "Science Vocabulary")
    Vocabulary,
    /// Skill sentences ("Reading Skill", "Thinking Map Skill")
    Skill,
    /// Everything else, including the unit name
    Other,
}

impl FieldClass {
    /// Classify a field by name. Vocabulary takes precedence over
    /// skill when a name mentions both.
    pub fn of(field_name: &str) -> Self {
        let lower = field_name.to_lowercase();
        if lower.contains("vocabulary") {
            FieldClass::Vocabulary
        } else if lower.contains("skill") {
            FieldClass::Skill
        } else {
            FieldClass::Other
        }
    }

    pub fn is_vocabulary(&self) -> bool {
        *self == FieldClass::Vocabulary
    }

    pub fn is_skill(&self) -> bool {
        *self == FieldClass::Skill
    }
}
