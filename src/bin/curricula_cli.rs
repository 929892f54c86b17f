//! Curricula CLI - Command-line interface for curriculum search
//!
//! # Examples
//!
//! ```bash
//! # Search vocabulary lists for a topic
//! curricula search "evaporation"
//!
//! # Learning-objective search (unit names are not matched)
//! curricula search "Students will compare two characters"
//!
//! # Theme search, labelling each result
//! curricula search "theme is weather" --format json
//!
//! # Show configuration
//! curricula show-config
//!
//! # Structured debug logs
//! curricula -v --log-format json search "rain"
//! ```

use clap::Parser;
use curricula::cli::output::print_error;
use curricula::cli::{run, Cli, LogFormat};
use curricula::CurriculaError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(verbose: bool, format: LogFormat) {
    let filter = if verbose {
        EnvFilter::new("curricula=debug")
    } else {
        EnvFilter::try_from_env("CURRICULA_LOG").unwrap_or_else(|_| EnvFilter::new("curricula=warn"))
    };

    // stdout carries command output
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .init(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_format);

    if let Err(e) = run(cli) {
        let message = match e.downcast_ref::<CurriculaError>() {
            Some(err) => err.message(),
            None => e.to_string(),
        };
        print_error(&message);
        std::process::exit(1);
    }
}
