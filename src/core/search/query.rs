//! Query normalization.
//!
//! Educators type queries such as `theme is weather` or
//! `Students will compare two characters`. This module turns such
//! prefixes into an explicit [`SearchMode`] in one place, so the
//! matching code never inspects query text for intent:
//!
//! - `theme is <x>` / `theme: <x>` -> Theme, text `<x>`
//! - `concept: <x>` / `skill: <x>` -> Concept, text `<x>`
//! - `topic: <x>` -> Topic, text `<x>`
//! - `students will ...`, `learners will ...`, `SWBAT ...` ->
//!   LearningObjective with the directive flag set; the text is kept
//!   whole because the sentence itself is what gets matched.
//!
//! A directive after a mode prefix (`theme is students will ...`) keeps
//! the prefix's mode but still sets the directive flag.

use crate::core::types::SearchMode;
use once_cell::sync::Lazy;
use regex::Regex;

// Regex patterns compiled once at startup
static THEME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^theme(?:\s+is\s+|\s*:\s*)(.+)$").unwrap());

static CONCEPT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:concept|skill)s?\s*:\s*(.+)$").unwrap());

static TOPIC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^topic\s*:\s*(.+)$").unwrap());

static DIRECTIVE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:(?:students|learners)\s+will|swbat)\b").unwrap());

/// A query after prefix sniffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    /// Text to match, trimmed, with any mode prefix removed
    pub text: String,
    /// Mode implied by a recognized prefix
    pub inferred_mode: Option<SearchMode>,
    /// Query opens with a learning-objective directive; unit names
    /// are excluded from matching
    pub directive: bool,
}

impl NormalizedQuery {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Explicit mode wins, then the inferred one, then `default`
    pub fn resolve_mode(&self, explicit: Option<SearchMode>, default: SearchMode) -> SearchMode {
        explicit.or(self.inferred_mode).unwrap_or(default)
    }
}

/// Trim a raw query and extract any mode-selecting prefix.
///
/// # Examples
///
/// ```
/// use curricula::core::search::normalize_query;
/// use curricula::core::types::SearchMode;
///
/// let q = normalize_query("Theme is Weather");
/// assert_eq!(q.text, "Weather");
/// assert_eq!(q.inferred_mode, Some(SearchMode::Theme));
///
/// let q = normalize_query("Students will analyze character development");
/// assert_eq!(q.inferred_mode, Some(SearchMode::LearningObjective));
/// assert!(q.directive);
///
/// assert!(normalize_query("   ").is_empty());
/// ```
pub fn normalize_query(raw: &str) -> NormalizedQuery {
    let trimmed = raw.trim();

    let prefixed = [
        (&*THEME_PATTERN, SearchMode::Theme),
        (&*CONCEPT_PATTERN, SearchMode::Concept),
        (&*TOPIC_PATTERN, SearchMode::Topic),
    ];

    for (pattern, mode) in prefixed {
        if let Some(rest) = pattern.captures(trimmed).and_then(|c| c.get(1)) {
            let text = rest.as_str().trim();
            return NormalizedQuery {
                text: text.to_string(),
                inferred_mode: Some(mode),
                directive: DIRECTIVE_PATTERN.is_match(text),
            };
        }
    }

    let directive = DIRECTIVE_PATTERN.is_match(trimmed);
    NormalizedQuery {
        text: trimmed.to_string(),
        inferred_mode: directive.then_some(SearchMode::LearningObjective),
        directive,
    }
}
