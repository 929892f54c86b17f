//! Curricula - Curriculum Relevance Search
//!
//! Fuzzy, field-weighted search over a curriculum catalog: given a
//! topic, concept, theme or learning objective, find the units whose
//! vocabulary and skills relate to it.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (presentation-agnostic)
//!   - config, error, types, xdg
//!   - catalog (record store, JSON loader)
//!   - search (expansion, matching, scoring, ranking)
//!   - theme (topic map, classifier)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - commands, output formatting
//!
//! # Key Features
//!
//! - Token-set fuzzy matching, insensitive to word order
//! - Vocabulary and skill fields weighted above metadata
//! - Query expansion from built-in and configured synonyms
//! - Deterministic first-match theme labelling

// Core domain logic (presentation-agnostic)
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::catalog::RecordStore;
pub use crate::core::config::Config;
pub use crate::core::error::{CurriculaError, Result};
pub use crate::core::search::SearchEngine;
pub use crate::core::services::Services;
pub use crate::core::types::*;
