//! Core data types for the curricula search engine.
//!
//! This module defines the data structures shared across the
//! search pipeline: curriculum records, search modes, match
//! candidates, scored results, requests and responses.

use crate::core::error::CurriculaError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Name of the pseudo-field that exposes a record's unit name to matching
pub const UNIT_NAME_FIELD: &str = "Unit Name";

/// One row of the curriculum catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurriculumRecord {
    /// Grade level indicator (ordinal or categorical)
    pub level: String,

    /// Unit identifier
    pub unit_number: String,

    /// Free-text unit title
    pub unit_name: String,

    /// Optional sub-unit ordinal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_number: Option<String>,

    /// Field name -> content. Vocabulary fields hold delimited word
    /// lists, skill fields hold a sentence or short phrase.
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl CurriculumRecord {
    /// Read a field, treating anything absent as the empty string.
    ///
    /// [`UNIT_NAME_FIELD`] resolves to the unit name so the title can be
    /// matched like any other field.
    pub fn field(&self, name: &str) -> &str {
        if name == UNIT_NAME_FIELD {
            return &self.unit_name;
        }
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    /// All words listed in vocabulary-class fields, in field order.
    ///
    /// Lists are split on `,` and `;`; entries are trimmed and empty
    /// entries dropped.
    pub fn vocabulary_words(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(name, _)| crate::core::catalog::FieldClass::of(name).is_vocabulary())
            .flat_map(|(_, value)| split_word_list(value))
            .collect()
    }
}

/// Split a delimited vocabulary list into trimmed, non-empty words
pub fn split_word_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split([',', ';'])
        .map(str::trim)
        .filter(|w| !w.is_empty())
}

/// Search intent, controlling field eligibility and result labelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// Free-text topic, matched against vocabulary lists
    Topic,
    /// Concept or skill, matched against skill fields
    Concept,
    /// Theme lookup, results labelled with a curated topic
    Theme,
    /// Learning-objective sentence ("Students will ...")
    #[serde(
        rename = "objective",
        alias = "learning-objective",
        alias = "learning_objective"
    )]
    LearningObjective,
}

impl SearchMode {
    /// All modes in declaration order
    pub const ALL: [SearchMode; 4] = [
        SearchMode::Topic,
        SearchMode::Concept,
        SearchMode::Theme,
        SearchMode::LearningObjective,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Topic => "topic",
            SearchMode::Concept => "concept",
            SearchMode::Theme => "theme",
            SearchMode::LearningObjective => "objective",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = CurriculaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "topic" => Ok(SearchMode::Topic),
            "concept" => Ok(SearchMode::Concept),
            "theme" => Ok(SearchMode::Theme),
            "objective" | "learning-objective" | "learning_objective" => {
                Ok(SearchMode::LearningObjective)
            }
            _ => Err(CurriculaError::UnrecognizedMode(s.to_string())),
        }
    }
}

/// A fuzzy hit of one search term against one record field
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCandidate<'a> {
    /// Position of the record in the store
    pub record_index: usize,
    /// Matched field name
    pub field: &'a str,
    /// Field content that matched
    pub snippet: &'a str,
    /// Similarity in [0, 100]
    pub raw_score: u32,
}

/// A ranked search result referencing its source record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult<'a> {
    #[serde(skip)]
    pub record_index: usize,

    /// Source record (owned by the record store)
    pub record: &'a CurriculumRecord,

    /// Field that produced the match
    pub field: &'a str,

    /// Matched field content
    pub snippet: &'a str,

    /// Search term (query or expansion) that produced the match
    pub term: String,

    /// Unweighted similarity in [0, 100]
    pub raw_score: u32,

    /// Weighted relevance; may exceed 100
    pub score: f64,

    /// Theme label (theme mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// Search request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query or learning-objective sentence
    pub query: String,

    /// Explicit mode; inferred from the query prefix when absent
    #[serde(default)]
    pub mode: Option<SearchMode>,

    /// Restrict matching to these fields (empty = no restriction)
    #[serde(default)]
    pub fields: Vec<String>,

    /// Number of results (defaults to the configured result limit)
    #[serde(default)]
    pub limit: Option<usize>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Search response
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse<'a> {
    /// Normalized query text
    pub query: String,

    /// Mode the search ran in
    pub mode: SearchMode,

    /// Every term probed: the query first, then its expansions
    pub terms: Vec<String>,

    /// Ranked results
    pub results: Vec<ScoredResult<'a>>,

    /// Number of results
    pub count: usize,

    /// Search duration in milliseconds
    pub duration_ms: u64,
}
