//! CLI adapter for curricula
//!
//! Provides the command-line interface over the search engine. Only
//! this module knows about terminals, flags and output formats; `core/`
//! stays presentation-agnostic.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Curricula - Curriculum Relevance Search
///
/// Find curriculum units related to a topic, concept, theme or learning
/// objective. Matching is fuzzy and insensitive to word order; vocabulary
/// and skill fields weigh more than unit metadata.
#[derive(Parser, Debug)]
#[command(name = "curricula")]
#[command(version)]
#[command(about = "Curriculum relevance search", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Catalog file (overrides config and CURRICULA_CATALOG)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Log line format on stderr
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact single-line text
    Text,
    /// One JSON object per event
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the catalog
    Search(commands::SearchArgs),

    /// Show the related terms a query expands to
    Expand(commands::ExpandArgs),

    /// Label a set of vocabulary words with a theme
    Classify(commands::ClassifyArgs),

    /// List the curated topic map in classification order
    Themes(commands::ThemesArgs),

    /// Show catalog size, schema and source
    #[command(name = "catalog-info")]
    CatalogInfo(commands::CatalogInfoArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  curricula completions bash > ~/.local/share/bash-completion/completions/curricula
    ///   zsh:   curricula completions zsh > ~/.zfunc/_curricula
    ///   fish:  curricula completions fish > ~/.config/fish/completions/curricula.fish
    Completions(commands::CompletionsArgs),
}

impl Commands {
    /// Whether the command reads the catalog
    pub fn needs_catalog(&self) -> bool {
        matches!(self, Commands::Search(_) | Commands::CatalogInfo(_))
    }
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need config)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let xdg = XdgDirs::new();
    xdg.ensure_dirs_exist()?;
    xdg.log_paths();

    // Load configuration
    let mut config = Config::load_with_xdg(&xdg)?;
    if let Some(catalog) = cli.catalog {
        config.catalog.path = catalog;
    }
    config.log_config();

    if !cli.command.needs_catalog() {
        return match cli.command {
            Commands::Expand(args) => commands::expand::execute(args, &config, cli.format),
            Commands::Classify(args) => commands::classify::execute(args, &config, cli.format),
            Commands::Themes(args) => commands::themes::execute(args, cli.format),
            Commands::ShowConfig(args) => {
                commands::config::execute(args, &config, &xdg, cli.format)
            }
            _ => unreachable!(), // Catalog commands handled below
        };
    }

    // Load the catalog once for the whole command
    let services = Arc::new(Services::load(config)?);

    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format),
        Commands::CatalogInfo(args) => {
            commands::catalog_info::execute(args, &services, cli.format)
        }
        _ => unreachable!(), // Handled above
    }
}
