//! Tests for the search CLI command
//!
//! Tests the search command handler with various scenarios:
//! - Valid queries with results, in both output formats
//! - Empty queries and empty results
//! - Exact word listing
//! - Caller errors (unknown mode, unknown field)

use crate::common::create_test_services;
use curricula::cli::commands::search::{execute, SearchArgs, SearchOutput};
use curricula::cli::OutputFormat;
use curricula::core::config::Config;
use curricula::core::types::{SearchMode, SearchRequest};
use curricula::CurriculaError;

fn args(query: &str) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        mode: None,
        fields: Vec::new(),
        limit: None,
        exact: false,
    }
}

/// Test search with valid query returning results
#[test]
fn test_search_valid_query_human() {
    let services = create_test_services(Config::default());
    let result = execute(args("evaporation"), &services, OutputFormat::Human);
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
}

/// Test search with valid query in JSON format
#[test]
fn test_search_valid_query_json() {
    let services = create_test_services(Config::default());
    let mut search = args("weather");
    search.mode = Some("theme".to_string());
    search.limit = Some(3);

    let result = execute(search, &services, OutputFormat::Json);
    assert!(result.is_ok(), "JSON search should succeed: {:?}", result.err());
}

/// Test search with no matches
#[test]
fn test_search_empty_results() {
    let services = create_test_services(Config::default());
    let result = execute(args("xylophone"), &services, OutputFormat::Human);
    assert!(result.is_ok(), "Search with no results should succeed");
}

/// Test empty query prints a prompt rather than failing
#[test]
fn test_search_empty_query() {
    let services = create_test_services(Config::default());
    assert!(execute(args("  "), &services, OutputFormat::Human).is_ok());
    assert!(execute(args(""), &services, OutputFormat::Json).is_ok());
}

/// Test exact word listing alongside fuzzy results
#[test]
fn test_search_exact_listing() {
    let services = create_test_services(Config::default());
    let mut search = args("rain");
    search.exact = true;
    assert!(execute(search, &services, OutputFormat::Human).is_ok());
}

/// Test unknown mode fails instead of falling back
#[test]
fn test_search_unknown_mode() {
    let services = create_test_services(Config::default());
    let mut search = args("rain");
    search.mode = Some("vibes".to_string());

    let err = execute(search, &services, OutputFormat::Human).unwrap_err();
    let err = err.downcast_ref::<CurriculaError>().unwrap();
    assert!(matches!(err, CurriculaError::UnrecognizedMode(m) if m == "vibes"));
}

/// Test unknown field is reported with a suggestion
#[test]
fn test_search_unknown_field() {
    let services = create_test_services(Config::default());
    let mut search = args("rain");
    search.fields = vec!["Vocabulary Word".to_string()];

    let err = execute(search, &services, OutputFormat::Json).unwrap_err();
    let err = err.downcast_ref::<CurriculaError>().unwrap();
    assert!(err.message().contains("did you mean 'Vocabulary Words'"));
}

/// Test display rows carry record identity and vocabulary bullets
#[test]
fn test_search_output_rows() {
    let services = create_test_services(Config::default());
    let response = services
        .engine
        .search(&SearchRequest::new("seed").with_mode(SearchMode::Topic))
        .unwrap();

    let output = SearchOutput::from_response(&response, None);
    let top = &output.results[0];
    assert_eq!(top.rank, 1);
    assert_eq!(top.unit_name, "Plants and Seeds");
    assert_eq!(top.part.as_deref(), Some("1"));
    assert_eq!(top.vocabulary, vec!["seed", "root", "stem", "leaf"]);

    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["mode"], "topic");
    assert_eq!(json["results"][0]["field"], "Vocabulary Words");
    assert!(json.get("exact").is_none());
    assert!(json["results"][0].get("theme").is_none());
}
