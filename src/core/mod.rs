//! Core domain logic (presentation-agnostic)
//!
//! This module contains all search logic that is independent of how
//! results are rendered.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **catalog**: Record store and JSON loader
//! - **search**: Expansion, fuzzy matching, scoring and ranking
//! - **theme**: Curated topic map and classifier
//! - **services**: Unified service container

pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod services;
pub mod theme;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{CurriculaError, Result};
pub use services::Services;
