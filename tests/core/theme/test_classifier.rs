//! Theme classifier tests
//!
//! Classification against the curated topic map:
//! - First topic in map order wins, on every call
//! - Exact vs fuzzy keyword matching
//! - Classifier built from configuration

use curricula::core::config::ThemesConfig;
use curricula::core::theme::{ThemeClassifier, TOPIC_MAP};

fn position(label: &str) -> usize {
    TOPIC_MAP.iter().position(|(l, _)| *l == label).unwrap()
}

#[test]
fn test_overlapping_topics_resolve_to_first() {
    // "cloud" belongs to Water Cycle and Weather
    assert!(position("Water Cycle") < position("Weather"));

    let classifier = ThemeClassifier::default();
    let first = classifier.classify(["cloud"]);
    assert_eq!(first, Some("Water Cycle"));
    for _ in 0..20 {
        assert_eq!(classifier.classify(["cloud"]), first);
    }
}

#[test]
fn test_input_order_does_not_matter() {
    let classifier = ThemeClassifier::default();
    assert_eq!(
        classifier.classify(["snow", "seed"]),
        classifier.classify(["seed", "snow"])
    );
    assert_eq!(classifier.classify(["seed", "snow"]), Some("Weather"));
}

#[test]
fn test_case_insensitive_words() {
    assert_eq!(
        ThemeClassifier::default().classify(["PLANET"]),
        Some("Space")
    );
}

#[test]
fn test_no_theme() {
    let classifier = ThemeClassifier::default();
    assert_eq!(classifier.classify(["trait", "motive"]), None);
    assert_eq!(classifier.classify(Vec::<&str>::new()), None);
}

#[test]
fn test_fuzzy_from_config() {
    let config = ThemesConfig {
        fuzzy: true,
        fuzzy_threshold: 80,
    };
    let classifier = ThemeClassifier::new(&config);
    assert_eq!(classifier.classify(["volcanos"]), Some("Earth and Rocks"));
    assert_eq!(ThemeClassifier::default().classify(["volcanos"]), None);
}
