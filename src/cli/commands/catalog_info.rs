//! Catalog info command - show catalog size, schema and source

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the catalog-info command
#[derive(Args, Debug)]
pub struct CatalogInfoArgs {
    /// Include per-field population counts
    #[arg(long, short = 'd')]
    pub detailed: bool,
}

/// Execute the catalog-info command
pub fn execute(
    args: CatalogInfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let info = services.store.info();

    match format {
        OutputFormat::Human => {
            output::print_header("Catalog");
            if info.records == 0 {
                output::print_warning("catalog has no records; every search will be empty");
            }
            println!(
                "  {} {}",
                colors::label("Source:"),
                info.source.as_deref().unwrap_or("(in memory)")
            );
            println!(
                "  {} {}",
                colors::label("Records:"),
                colors::number(&info.records.to_string())
            );
            println!(
                "  {} {} {}",
                colors::label("Loaded:"),
                info.loaded_at.format("%Y-%m-%d %H:%M:%S UTC"),
                colors::dim(&format!("({})", output::format_relative_time(&info.loaded_at)))
            );
            println!("  {}", colors::label("Fields:"));
            for field in &info.fields {
                let class = format!("{:?}", field.class).to_lowercase();
                if args.detailed {
                    println!(
                        "    - {} {} {}",
                        colors::field(&field.name),
                        colors::dim(&format!("[{class}]")),
                        colors::dim(&format!("{}/{} populated", field.populated, info.records))
                    );
                } else {
                    println!(
                        "    - {} {}",
                        colors::field(&field.name),
                        colors::dim(&format!("[{class}]"))
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
