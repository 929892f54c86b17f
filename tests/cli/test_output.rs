//! Tests for CLI output formatting helpers
//!
//! - Score formatting
//! - Character-safe snippet truncation
//! - Relative time formatting

use chrono::{Duration, Utc};
use curricula::cli::output::{format_relative_time, format_score, truncate_snippet};

#[test]
fn test_format_score_one_decimal() {
    assert_eq!(format_score(150.0), "150.0");
    assert_eq!(format_score(106.5), "106.5");
    assert_eq!(format_score(71.0), "71.0");
}

#[test]
fn test_truncate_snippet_short_text_unchanged() {
    assert_eq!(truncate_snippet("", 10), "");
    assert_eq!(truncate_snippet("rain, snow", 10), "rain, snow");
}

#[test]
fn test_truncate_snippet_long_text() {
    let text = "evaporation, condensation, precipitation";
    let cut = truncate_snippet(text, 20);
    assert!(cut.ends_with("..."));
    assert!(cut.chars().count() <= 20);
    assert!(text.starts_with(cut.trim_end_matches("...")));
}

#[test]
fn test_truncate_snippet_multibyte() {
    let text = "café, niño, jalapeño, über";
    let cut = truncate_snippet(text, 12);
    assert!(cut.chars().count() <= 12);
}

#[test]
fn test_format_relative_time() {
    let now = Utc::now();
    assert_eq!(format_relative_time(&now), "just now");
    assert_eq!(format_relative_time(&(now - Duration::minutes(5))), "5m ago");
    assert_eq!(format_relative_time(&(now - Duration::days(2))), "2d ago");
    assert_eq!(
        format_relative_time(&(now + Duration::hours(1))),
        "in the future"
    );
}
