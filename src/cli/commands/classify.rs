//! Classify command - label vocabulary words with a theme

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::theme::ThemeClassifier;
use clap::Args;
use serde::Serialize;

/// Arguments for the classify command
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Vocabulary words (comma-separated lists are split)
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Match keywords approximately instead of exactly
    #[arg(long)]
    pub fuzzy: bool,

    /// Similarity a word must exceed in fuzzy mode (0-100)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub threshold: Option<u32>,
}

/// Classification response
#[derive(Debug, Serialize)]
pub struct ClassifyOutput {
    pub words: Vec<String>,
    pub fuzzy: bool,
    pub theme: Option<String>,
}

/// Execute the classify command
pub fn execute(
    args: ClassifyArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let fuzzy = args.fuzzy || config.themes.fuzzy;
    let classifier = if fuzzy {
        ThemeClassifier::fuzzy(args.threshold.unwrap_or(config.themes.fuzzy_threshold))
    } else {
        ThemeClassifier::exact()
    };

    let words: Vec<String> = args
        .words
        .iter()
        .flat_map(|w| crate::core::types::split_word_list(w))
        .map(String::from)
        .collect();

    let output = ClassifyOutput {
        theme: classifier
            .classify(words.iter().map(String::as_str))
            .map(String::from),
        words,
        fuzzy,
    };

    match format {
        OutputFormat::Human => match &output.theme {
            Some(theme) => println!("{}", colors::theme(theme)),
            None => println!("{}", colors::dim("No matching theme")),
        },
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
