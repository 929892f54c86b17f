//! Query expansion into related search terms.
//!
//! Lookups are exact on the whole lower-cased query; there is no fuzzy
//! matching at this stage. Related words come from three sources:
//!
//! - built-in synonym groups (every member maps to the others)
//! - the curated topic map (a topic label expands to its keywords)
//! - user-configured synonyms from `[expansion.synonyms]`

use crate::core::config::ExpansionConfig;
use crate::core::theme::TOPIC_MAP;
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};

/// Built-in synonym groups for common classroom vocabulary
const SYNONYM_GROUPS: &[&[&str]] = &[
    &["rain", "precipitation", "rainfall", "shower"],
    &["cloud", "vapor", "mist", "fog"],
    &["sun", "sunlight", "sunshine"],
    &["weather", "climate", "forecast"],
    &["plant", "flora", "vegetation"],
    &["animal", "creature", "fauna", "wildlife"],
    &["home", "house", "dwelling", "shelter"],
    &["family", "household", "relatives"],
    &["friend", "companion", "buddy", "pal"],
    &["feelings", "emotions", "moods"],
    &["happy", "glad", "joyful", "cheerful"],
    &["sad", "unhappy", "upset"],
    &["big", "large", "huge", "giant"],
    &["small", "little", "tiny"],
    &["fast", "quick", "rapid", "speedy"],
    &["community", "neighborhood", "town"],
    &["job", "occupation", "career", "work"],
    &["money", "currency", "coins"],
    &["food", "meal", "nutrition"],
    &["earth", "planet", "world", "globe"],
    &["space", "universe", "cosmos"],
    &["rock", "stone", "mineral"],
    &["ocean", "sea"],
    &["story", "narrative", "tale"],
    &["character", "protagonist"],
    &["main idea", "central idea", "gist"],
    &["compare", "contrast", "comparison"],
    &["cause", "reason"],
    &["effect", "result", "consequence"],
    &["sequence", "order", "steps"],
    &["predict", "prediction", "forecast"],
    &["summarize", "summary", "retell"],
    &["infer", "inference", "conclude"],
    &["noun", "nouns"],
    &["verb", "verbs", "action words"],
    &["adjective", "adjectives", "describing words"],
];

static SYNONYMS: Lazy<HashMap<&'static str, BTreeSet<&'static str>>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, BTreeSet<&'static str>> = HashMap::new();
    for group in SYNONYM_GROUPS {
        for &word in group.iter() {
            map.entry(word)
                .or_default()
                .extend(group.iter().copied().filter(|w| *w != word));
        }
    }
    map
});

/// Turns a query into its related search terms
#[derive(Debug, Clone)]
pub struct TermExpander {
    enabled: bool,
    extra: HashMap<String, Vec<String>>,
}

impl Default for TermExpander {
    fn default() -> Self {
        Self::new(&ExpansionConfig::default())
    }
}

impl TermExpander {
    pub fn new(config: &ExpansionConfig) -> Self {
        let extra = config
            .synonyms
            .iter()
            .map(|(term, related)| {
                (
                    term.trim().to_lowercase(),
                    related.iter().map(|r| r.trim().to_lowercase()).collect(),
                )
            })
            .collect();

        Self {
            enabled: config.enabled,
            extra,
        }
    }

    /// Related terms for `query`, lower-cased and sorted.
    ///
    /// The query itself is never part of the set. Unknown queries
    /// expand to the empty set.
    pub fn expand(&self, query: &str) -> BTreeSet<String> {
        let key = query.trim().to_lowercase();
        if !self.enabled || key.is_empty() {
            return BTreeSet::new();
        }

        let mut related: BTreeSet<String> = BTreeSet::new();

        if let Some(words) = SYNONYMS.get(key.as_str()) {
            related.extend(words.iter().map(|w| w.to_string()));
        }

        if let Some((_, keywords)) = TOPIC_MAP
            .iter()
            .find(|(label, _)| label.to_lowercase() == key)
        {
            related.extend(keywords.iter().map(|w| w.to_string()));
        }

        if let Some(words) = self.extra.get(&key) {
            related.extend(words.iter().filter(|w| !w.is_empty()).cloned());
        }

        related.remove(&key);
        related
    }
}
