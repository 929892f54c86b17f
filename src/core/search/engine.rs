//! Search orchestration.
//!
//! This module provides the SearchEngine, which ties query
//! normalization, expansion, fuzzy field matching, weighting, ranking
//! and theme labelling into one synchronous call over a shared
//! read-only record store.

use crate::core::catalog::{FieldClass, RecordStore};
use crate::core::config::{Config, SearchConfig, ThresholdStage};
use crate::core::error::{CurriculaError, Result};
use crate::core::search::expand::TermExpander;
use crate::core::search::matcher::{match_field, normalize};
use crate::core::search::query::normalize_query;
use crate::core::search::ranker::rank;
use crate::core::search::scorer::Scorer;
use crate::core::theme::ThemeClassifier;
use crate::core::types::{
    CurriculumRecord, MatchCandidate, ScoredResult, SearchMode, SearchRequest, SearchResponse,
    UNIT_NAME_FIELD,
};
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use std::time::Instant;

/// Minimum similarity for a field-name suggestion
const SUGGESTION_CUTOFF: f64 = 0.6;

/// Curriculum relevance search service
pub struct SearchEngine {
    store: Arc<RecordStore>,
    expander: TermExpander,
    scorer: Scorer,
    classifier: ThemeClassifier,
    settings: SearchConfig,
}

impl SearchEngine {
    /// Create a search engine over `store` using `config`
    pub fn new(store: Arc<RecordStore>, config: &Config) -> Self {
        Self {
            store,
            expander: TermExpander::new(&config.expansion),
            scorer: Scorer::from_config(&config.scoring),
            classifier: ThemeClassifier::new(&config.themes),
            settings: config.search.clone(),
        }
    }

    /// Create a search engine with default configuration
    pub fn with_defaults(store: Arc<RecordStore>) -> Self {
        Self::new(store, &Config::default())
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn settings(&self) -> &SearchConfig {
        &self.settings
    }

    /// Execute a search request.
    ///
    /// An empty query, or one that matches nothing above the
    /// threshold, yields an empty result list. Errors are reserved for
    /// caller mistakes: an over-long query or an unknown field name.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResponse<'_>> {
        let start = Instant::now();

        let normalized = normalize_query(&request.query);
        let mode = normalized.resolve_mode(request.mode, self.settings.default_mode);

        if normalized.text.chars().count() > self.settings.max_query_length {
            return Err(CurriculaError::InvalidQuery(format!(
                "Query exceeds {} characters",
                self.settings.max_query_length
            )));
        }

        // Field names are validated even when the query is empty
        let fields = self.resolve_fields(mode, &request.fields, normalized.directive)?;

        if normalized.is_empty() {
            return Ok(SearchResponse {
                query: normalized.text,
                mode,
                terms: Vec::new(),
                results: Vec::new(),
                count: 0,
                duration_ms: start.elapsed().as_millis() as u64,
            });
        }

        let terms = self.search_terms(&normalized.text);
        let limit = request
            .limit
            .unwrap_or(self.settings.result_limit)
            .min(self.settings.max_results);

        let candidates = self.collect_candidates(&terms, &fields);
        let candidate_count = candidates.len();

        let mut results = rank(candidates, limit);
        if mode == SearchMode::Theme {
            for result in &mut results {
                result.theme = Some(self.classify(result.record));
            }
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(
            "Search '{}' mode={} terms={} fields={} candidates={} results={} in {}ms",
            normalized.text,
            mode,
            terms.len(),
            fields.len(),
            candidate_count,
            results.len(),
            duration_ms
        );

        let count = results.len();
        Ok(SearchResponse {
            query: normalized.text,
            mode,
            terms,
            results,
            count,
            duration_ms,
        })
    }

    /// Fields eligible for matching in `mode`.
    ///
    /// A non-empty `requested` list narrows the mode's fields; naming a
    /// field the catalog does not have is an error. The unit name is
    /// never eligible for learning objectives or directive queries.
    pub fn resolve_fields(
        &self,
        mode: SearchMode,
        requested: &[String],
        directive: bool,
    ) -> Result<Vec<&str>> {
        for field in requested {
            if !self.store.has_field(field) {
                return Err(self.invalid_field(field));
            }
        }

        let exclude_unit_name = directive || mode == SearchMode::LearningObjective;

        let fields = self
            .store
            .searchable_fields()
            .filter(|field| Self::eligible(mode, field))
            .filter(|field| !(exclude_unit_name && *field == UNIT_NAME_FIELD))
            .filter(|field| requested.is_empty() || requested.iter().any(|r| r == field))
            .collect();

        Ok(fields)
    }

    fn eligible(mode: SearchMode, field: &str) -> bool {
        let class = FieldClass::of(field);
        match mode {
            SearchMode::Topic => class.is_vocabulary(),
            SearchMode::Concept => class.is_skill(),
            SearchMode::Theme => class.is_vocabulary() || field == UNIT_NAME_FIELD,
            SearchMode::LearningObjective => true,
        }
    }

    fn invalid_field(&self, field: &str) -> CurriculaError {
        let valid_fields: Vec<String> = self.store.searchable_fields().map(String::from).collect();
        let wanted = field.to_lowercase();

        let suggestion = valid_fields
            .iter()
            .map(|name| (name, strsim::normalized_levenshtein(&wanted, &name.to_lowercase())))
            .filter(|(_, similarity)| *similarity >= SUGGESTION_CUTOFF)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(name, _)| name.clone());

        CurriculaError::InvalidField {
            field: field.to_string(),
            valid_fields,
            suggestion,
        }
    }

    /// The query followed by its expansions, without repeats.
    ///
    /// Terms that normalize to the same text would probe every field
    /// identically, so only the first of them is kept.
    fn search_terms(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        std::iter::once(text.to_string())
            .chain(self.expander.expand(text))
            .filter(|term| {
                let key = normalize(term);
                !key.is_empty() && seen.insert(key)
            })
            .collect()
    }

    /// Probe every (term, field) pair and weight the surviving matches
    fn collect_candidates<'a>(&'a self, terms: &[String], fields: &[&'a str]) -> Vec<ScoredResult<'a>> {
        let records = self.store.records();
        let columns: Vec<(&'a str, Vec<&'a str>)> = fields
            .iter()
            .map(|field| (*field, self.store.column(field)))
            .collect();

        let threshold = self.settings.threshold;
        let per_field_limit = self.settings.per_field_limit;
        let (raw_threshold, probe_limit) = match self.settings.threshold_stage {
            ThresholdStage::Raw => (threshold, per_field_limit),
            ThresholdStage::Weighted => (0, usize::MAX),
        };

        let mut candidates = Vec::new();
        for term in terms {
            for (field, values) in &columns {
                let field: &'a str = *field;
                let matches = match_field(term, values, raw_threshold, probe_limit);

                let weighted = matches
                    .into_iter()
                    .map(|m| MatchCandidate {
                        record_index: m.index,
                        field,
                        snippet: m.value,
                        raw_score: m.score,
                    })
                    .map(|candidate| {
                        let score = self.scorer.score(candidate.raw_score, candidate.field);
                        (candidate, score)
                    })
                    .filter(|(_, score)| match self.settings.threshold_stage {
                        ThresholdStage::Raw => true,
                        ThresholdStage::Weighted => *score > f64::from(threshold),
                    })
                    .take(per_field_limit);

                for (candidate, score) in weighted {
                    candidates.push(ScoredResult {
                        record_index: candidate.record_index,
                        record: &records[candidate.record_index],
                        field: candidate.field,
                        snippet: candidate.snippet,
                        term: term.clone(),
                        raw_score: candidate.raw_score,
                        score,
                        theme: None,
                    });
                }
            }
        }

        candidates
    }

    /// Related terms for `term`
    pub fn expand(&self, term: &str) -> BTreeSet<String> {
        self.expander.expand(term)
    }

    /// Theme label for a record, falling back to its unit name
    pub fn classify(&self, record: &CurriculumRecord) -> String {
        self.classifier
            .classify(record.vocabulary_words())
            .map(str::to_string)
            .unwrap_or_else(|| record.unit_name.clone())
    }

    pub fn classifier(&self) -> &ThemeClassifier {
        &self.classifier
    }
}
