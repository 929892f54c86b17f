//! Vocabulary-to-theme classifier.

use crate::core::config::ThemesConfig;
use crate::core::search::matcher::{normalize, ratio};
use crate::core::theme::TOPIC_MAP;
use std::collections::BTreeSet;

/// Maps a vocabulary word set to a curated topic label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeClassifier {
    fuzzy: bool,
    fuzzy_threshold: u32,
}

impl Default for ThemeClassifier {
    fn default() -> Self {
        Self::new(&ThemesConfig::default())
    }
}

impl ThemeClassifier {
    pub fn new(config: &ThemesConfig) -> Self {
        Self {
            fuzzy: config.fuzzy,
            fuzzy_threshold: config.fuzzy_threshold,
        }
    }

    /// Exact-membership classifier
    pub fn exact() -> Self {
        Self {
            fuzzy: false,
            fuzzy_threshold: 0,
        }
    }

    /// Approximate classifier: a topic matches when any word scores
    /// strictly above `threshold` against any of its keywords
    pub fn fuzzy(threshold: u32) -> Self {
        Self {
            fuzzy: true,
            fuzzy_threshold: threshold,
        }
    }

    /// Label of the first topic sharing a keyword with `words`, or
    /// `None` when no topic matches.
    pub fn classify<'w, I>(&self, words: I) -> Option<&'static str>
    where
        I: IntoIterator<Item = &'w str>,
    {
        let words: BTreeSet<String> = words
            .into_iter()
            .map(normalize)
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return None;
        }

        TOPIC_MAP
            .iter()
            .find(|(_, keywords)| self.topic_matches(&words, keywords))
            .map(|(label, _)| *label)
    }

    fn topic_matches(&self, words: &BTreeSet<String>, keywords: &[&str]) -> bool {
        if self.fuzzy {
            keywords.iter().any(|keyword| {
                words
                    .iter()
                    .any(|word| ratio(word, keyword) > self.fuzzy_threshold)
            })
        } else {
            keywords.iter().any(|keyword| words.contains(*keyword))
        }
    }
}
