//! Expand command - show related search terms

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::search::TermExpander;
use clap::Args;
use serde::Serialize;

/// Arguments for the expand command
#[derive(Args, Debug)]
pub struct ExpandArgs {
    /// Term to expand (matched whole and case-insensitively)
    pub term: String,
}

/// Expansion response
#[derive(Debug, Serialize)]
pub struct ExpandOutput {
    pub term: String,
    pub related: Vec<String>,
}

/// Execute the expand command
pub fn execute(
    args: ExpandArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let expander = TermExpander::new(&config.expansion);
    let output = ExpandOutput {
        related: expander.expand(&args.term).into_iter().collect(),
        term: args.term,
    };

    match format {
        OutputFormat::Human => {
            if output.related.is_empty() {
                println!("No related terms for '{}'", colors::label(&output.term));
            } else {
                println!(
                    "{} related term(s) for '{}':",
                    colors::number(&output.related.len().to_string()),
                    colors::label(&output.term)
                );
                output::print_bullets(&output.related, 2);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
