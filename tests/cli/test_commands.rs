//! Tests for the catalog-free and informational CLI commands
//!
//! - expand: related terms
//! - classify: theme label for words
//! - themes: topic map listing
//! - catalog-info: catalog summary
//! - show-config: configuration dump
//! - completions: shell completion scripts

use crate::common::create_test_services;
use curricula::cli::commands::{catalog_info, classify, completions, config, expand, themes};
use curricula::cli::OutputFormat;
use curricula::core::config::Config;
use curricula::core::theme::TOPIC_MAP;
use curricula::core::xdg::XdgDirs;

#[test]
fn test_expand_known_and_unknown_terms() {
    let config = Config::default();
    for term in ["rain", "water cycle", "xylophone"] {
        for format in [OutputFormat::Human, OutputFormat::Json] {
            let args = expand::ExpandArgs {
                term: term.to_string(),
            };
            assert!(expand::execute(args, &config, format).is_ok());
        }
    }
}

#[test]
fn test_classify_exact_and_fuzzy() {
    let config = Config::default();
    let args = classify::ClassifyArgs {
        words: vec!["evaporation, runoff".to_string()],
        fuzzy: false,
        threshold: None,
    };
    assert!(classify::execute(args, &config, OutputFormat::Json).is_ok());

    let args = classify::ClassifyArgs {
        words: vec!["volcanos".to_string()],
        fuzzy: true,
        threshold: Some(80),
    };
    assert!(classify::execute(args, &config, OutputFormat::Human).is_ok());
}

#[test]
fn test_themes_listing_order() {
    let entries = themes::entries(false);
    assert_eq!(entries.len(), TOPIC_MAP.len());
    assert_eq!(entries[0].order, 1);
    assert_eq!(entries[0].label, TOPIC_MAP[0].0);
    assert!(entries[0].keywords.is_some());

    assert!(themes::entries(true).iter().all(|e| e.keywords.is_none()));

    let args = themes::ThemesArgs { labels_only: false };
    assert!(themes::execute(args, OutputFormat::Human).is_ok());
}

#[test]
fn test_catalog_info() {
    let services = create_test_services(Config::default());
    for detailed in [false, true] {
        let args = catalog_info::CatalogInfoArgs { detailed };
        assert!(catalog_info::execute(args, &services, OutputFormat::Human).is_ok());
    }
    let args = catalog_info::CatalogInfoArgs { detailed: false };
    assert!(catalog_info::execute(args, &services, OutputFormat::Json).is_ok());
}

#[test]
fn test_show_config() {
    let mut settings = Config::default();
    settings
        .expansion
        .synonyms
        .insert("habitat".to_string(), vec!["home".to_string()]);
    let xdg = XdgDirs::new();

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = config::ConfigArgs { all: true };
        assert!(config::execute(args, &settings, &xdg, format).is_ok());
    }
}

#[test]
fn test_completions_script_names_binary() {
    let mut buf: Vec<u8> = Vec::new();
    completions::write_completions(clap_complete::Shell::Bash, &mut buf);
    let script = String::from_utf8(buf).unwrap();
    assert!(script.contains("curricula"));
}
