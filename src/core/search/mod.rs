//! Fuzzy relevance search over the curriculum catalog.
//!
//! # Pipeline
//!
//! - **query**: prefix sniffing into a [`crate::core::types::SearchMode`]
//! - **expand**: related terms from synonym and topic tables
//! - **matcher**: token-set similarity of a term against field values
//! - **scorer**: field-class weighting of raw similarity
//! - **ranker**: deduplication and top-K selection
//! - **engine**: the orchestrator tying the stages together
//! - **exact**: whole-word lookup shown alongside fuzzy results

mod engine;
mod exact;
mod expand;
pub mod matcher;
mod query;
mod ranker;
mod scorer;

pub use engine::SearchEngine;
pub use exact::exact_matches;
pub use expand::TermExpander;
pub use matcher::{match_field, token_set_ratio, FieldMatch};
pub use query::{normalize_query, NormalizedQuery};
pub use ranker::{rank, DEFAULT_RESULT_LIMIT};
pub use scorer::Scorer;
