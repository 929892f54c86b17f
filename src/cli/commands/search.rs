//! Search command - search the curriculum catalog

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::search::{exact_matches, normalize_query};
use crate::core::services::Services;
use crate::core::types::{ScoredResult, SearchMode, SearchRequest, SearchResponse};
use clap::Args;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Longest snippet shown in human output
const SNIPPET_CHARS: usize = 100;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Topic, concept, theme or learning objective.
    /// Prefixes such as "theme is ..." or "Students will ..." select a mode.
    pub query: String,

    /// Search mode: topic, concept, theme or objective
    #[arg(long, short = 'm')]
    pub mode: Option<String>,

    /// Restrict matching to a field (repeatable)
    #[arg(long = "field", short = 'f', value_name = "FIELD")]
    pub fields: Vec<String>,

    /// Maximum number of results
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Also list whole-word matches per field
    #[arg(long)]
    pub exact: bool,
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub level: String,
    pub unit: String,
    pub unit_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part: Option<String>,
    pub field: String,
    pub snippet: String,
    pub term: String,
    pub score: f64,
    pub raw_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    pub vocabulary: Vec<String>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub query: String,
    pub mode: SearchMode,
    pub terms: Vec<String>,
    pub total_results: usize,
    pub duration_ms: u64,
    pub results: Vec<SearchResultItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<BTreeMap<String, BTreeSet<String>>>,
}

impl SearchResultItem {
    fn from_result(rank: usize, result: &ScoredResult<'_>) -> Self {
        let record = result.record;
        Self {
            rank,
            level: record.level.clone(),
            unit: record.unit_number.clone(),
            unit_name: record.unit_name.clone(),
            part: record.part_number.clone(),
            field: result.field.to_string(),
            snippet: result.snippet.to_string(),
            term: result.term.clone(),
            score: result.score,
            raw_score: result.raw_score,
            theme: result.theme.clone(),
            vocabulary: record
                .vocabulary_words()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl SearchOutput {
    /// Flatten an engine response into owned display rows
    pub fn from_response(
        response: &SearchResponse<'_>,
        exact: Option<BTreeMap<String, BTreeSet<String>>>,
    ) -> Self {
        Self {
            query: response.query.clone(),
            mode: response.mode,
            terms: response.terms.clone(),
            total_results: response.count,
            duration_ms: response.duration_ms,
            results: response
                .results
                .iter()
                .enumerate()
                .map(|(i, r)| SearchResultItem::from_result(i + 1, r))
                .collect(),
            exact,
        }
    }
}

/// Execute the search command
pub fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mode = match args.mode.as_deref() {
        Some(raw) => Some(raw.parse::<SearchMode>().inspect_err(|e| {
            tracing::warn!("{}", e.message());
        })?),
        None => None,
    };

    let mut request = SearchRequest::new(args.query.clone()).with_fields(args.fields.clone());
    request.mode = mode;
    request.limit = args.limit;

    let response = services.engine.search(&request).inspect_err(|e| {
        if e.is_bad_request() {
            tracing::warn!("{}", e.message());
        }
    })?;

    let exact = if args.exact {
        let normalized = normalize_query(&args.query);
        let fields =
            services
                .engine
                .resolve_fields(response.mode, &args.fields, normalized.directive)?;
        Some(exact_matches(&normalized.text, &services.store, &fields))
    } else {
        None
    };

    let output = SearchOutput::from_response(&response, exact);

    match format {
        OutputFormat::Human => print_human(&output),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn print_human(output: &SearchOutput) {
    if output.query.is_empty() {
        println!("Enter a topic, concept, theme or learning objective to search.");
        return;
    }

    if output.results.is_empty() {
        println!(
            "No results found for '{}' ({} mode)",
            colors::label(&output.query),
            output.mode
        );
    } else {
        println!(
            "Found {} result(s) for '{}' ({} mode):\n",
            colors::number(&output.total_results.to_string()),
            colors::label(&output.query),
            output.mode
        );

        for result in &output.results {
            let part = result
                .part
                .as_ref()
                .map(|p| format!(" part {p}"))
                .unwrap_or_default();
            println!(
                "[{}] {} {}",
                colors::rank(&result.rank.to_string()),
                colors::unit(&result.unit_name),
                colors::dim(&format!(
                    "(level {}, unit {}{part})",
                    result.level, result.unit
                ))
            );
            println!(
                "    {} {}",
                colors::field(&format!("{}:", result.field)),
                output::truncate_snippet(&result.snippet, SNIPPET_CHARS)
            );
            println!(
                "    {} {} {}",
                colors::label("score:"),
                colors::score(&output::format_score(result.score)),
                colors::dim(&format!("(raw {}, term '{}')", result.raw_score, result.term))
            );
            if let Some(theme) = &result.theme {
                println!("    {} {}", colors::label("theme:"), colors::theme(theme));
            }
            if !result.vocabulary.is_empty() {
                println!("    {}", colors::label("vocabulary:"));
                output::print_bullets(&result.vocabulary, 6);
            }
            println!();
        }
    }

    if output.terms.len() > 1 {
        println!(
            "{}",
            colors::dim(&format!("Searched terms: {}", output.terms.join(", ")))
        );
    }

    if let Some(exact) = &output.exact {
        println!();
        if exact.is_empty() {
            println!("No exact word matches.");
        } else {
            output::print_header("Exact word matches:");
            for (field, words) in exact {
                println!("  {}", colors::field(field));
                let words: Vec<&String> = words.iter().collect();
                output::print_bullets(&words, 4);
            }
        }
    }
}
