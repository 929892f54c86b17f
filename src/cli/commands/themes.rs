//! Themes command - list the curated topic map

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::theme::TOPIC_MAP;
use clap::Args;
use serde::Serialize;

/// Arguments for the themes command
#[derive(Args, Debug)]
pub struct ThemesArgs {
    /// Only print theme labels
    #[arg(long)]
    pub labels_only: bool,
}

/// One topic map entry
#[derive(Debug, Serialize)]
pub struct ThemeEntry {
    /// Classification order (1 = checked first)
    pub order: usize,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<&'static [&'static str]>,
}

/// Build the listing in classification order
pub fn entries(labels_only: bool) -> Vec<ThemeEntry> {
    TOPIC_MAP
        .iter()
        .enumerate()
        .map(|(i, (label, keywords))| ThemeEntry {
            order: i + 1,
            label: *label,
            keywords: (!labels_only).then_some(*keywords),
        })
        .collect()
}

/// Execute the themes command
pub fn execute(args: ThemesArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let themes = entries(args.labels_only);

    match format {
        OutputFormat::Human => {
            for theme in &themes {
                match theme.keywords {
                    Some(keywords) => println!(
                        "{:>2}. {} {}",
                        theme.order,
                        colors::theme(theme.label),
                        colors::dim(&keywords.join(", "))
                    ),
                    None => println!("{}", theme.label),
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&themes)?);
        }
    }

    Ok(())
}
