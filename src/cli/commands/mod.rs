//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod catalog_info;
pub mod classify;
pub mod completions;
pub mod config;
pub mod expand;
pub mod search;
pub mod themes;

// Re-export argument types for use in mod.rs
pub use catalog_info::CatalogInfoArgs;
pub use classify::ClassifyArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use expand::ExpandArgs;
pub use search::SearchArgs;
pub use themes::ThemesArgs;
