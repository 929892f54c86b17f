//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Include configured synonym overrides
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse<'a> {
    pub config_file: String,
    pub data_dir: String,
    #[serde(flatten)]
    pub config: &'a Config,
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    config: &Config,
    xdg: &XdgDirs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ConfigResponse {
        config_file: xdg.config_file().to_string_lossy().into_owned(),
        data_dir: xdg.data_dir.to_string_lossy().into_owned(),
        config,
    };

    match format {
        OutputFormat::Human => {
            let search = &config.search;
            let scoring = &config.scoring;
            println!("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  data_dir: {}", response.data_dir);
            println!("  catalog: {}", config.catalog.path.display());
            println!("  search:");
            println!("    threshold: {}", search.threshold);
            println!("    threshold_stage: {:?}", search.threshold_stage);
            println!("    per_field_limit: {}", search.per_field_limit);
            println!("    result_limit: {}", search.result_limit);
            println!("    max_results: {}", search.max_results);
            println!("    max_query_length: {}", search.max_query_length);
            println!("    default_mode: {}", search.default_mode);
            println!("  scoring:");
            println!("    vocabulary_weight: {}", scoring.vocabulary_weight);
            println!("    skill_weight: {}", scoring.skill_weight);
            println!("    default_weight: {}", scoring.default_weight);
            println!("  themes:");
            println!("    fuzzy: {}", config.themes.fuzzy);
            println!("    fuzzy_threshold: {}", config.themes.fuzzy_threshold);
            println!("  expansion:");
            println!("    enabled: {}", config.expansion.enabled);
            if args.all {
                for (term, related) in &config.expansion.synonyms {
                    println!("    {term}: {}", related.join(", "));
                }
            } else {
                println!("    synonyms: {}", config.expansion.synonyms.len());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
