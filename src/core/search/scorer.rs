//! Field-class weighting of raw similarity scores.
//!
//! Vocabulary and skill matches carry more teaching relevance than a
//! hit on identifying metadata such as the unit title, so raw
//! similarity is scaled by the class of the matched field. Weighted
//! scores are not clamped; values above 100 only affect ordering.

use crate::core::catalog::FieldClass;
use crate::core::config::ScoringConfig;

/// Applies field-class multipliers to raw similarity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scorer {
    vocabulary_weight: f64,
    skill_weight: f64,
    default_weight: f64,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}

impl Scorer {
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            vocabulary_weight: config.vocabulary_weight,
            skill_weight: config.skill_weight,
            default_weight: config.default_weight,
        }
    }

    /// Multiplier for a field class
    pub fn weight(&self, class: FieldClass) -> f64 {
        match class {
            FieldClass::Vocabulary => self.vocabulary_weight,
            FieldClass::Skill => self.skill_weight,
            FieldClass::Other => self.default_weight,
        }
    }

    /// Weighted relevance of a raw score on the named field
    pub fn score(&self, raw_score: u32, field_name: &str) -> f64 {
        f64::from(raw_score) * self.weight(FieldClass::of(field_name))
    }
}
