//! Configuration management for the curricula search engine.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{CurriculaError, Result};
use crate::core::types::SearchMode;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub themes: ThemesConfig,
    #[serde(default)]
    pub expansion: ExpansionConfig,
}

/// Catalog location
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// JSON catalog file
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

/// When the similarity threshold is applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdStage {
    /// Filter on raw similarity, before field weighting
    #[default]
    Raw,
    /// Filter on the weighted score
    Weighted,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Matches must score strictly above this
    #[serde(default = "default_threshold")]
    pub threshold: u32,

    /// Matches kept per (term, field) probe
    #[serde(default = "default_per_field_limit")]
    pub per_field_limit: usize,

    /// Default number of results to return
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,

    /// Maximum results per query
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Maximum query string length
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,

    /// Mode used when neither the caller nor the query prefix picks one
    #[serde(default = "default_mode")]
    pub default_mode: SearchMode,

    #[serde(default)]
    pub threshold_stage: ThresholdStage,
}

/// Field-class multipliers
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScoringConfig {
    #[serde(default = "default_vocabulary_weight")]
    pub vocabulary_weight: f64,

    #[serde(default = "default_skill_weight")]
    pub skill_weight: f64,

    #[serde(default = "default_weight")]
    pub default_weight: f64,
}

/// Theme classification
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemesConfig {
    /// Use approximate keyword matching instead of exact membership
    #[serde(default)]
    pub fuzzy: bool,

    /// Similarity a word must exceed to match a keyword in fuzzy mode
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: u32,
}

/// Query expansion
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExpansionConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Extra related words, keyed by term
    #[serde(default)]
    pub synonyms: BTreeMap<String, Vec<String>>,
}

// Default value functions
fn default_catalog_path() -> PathBuf {
    PathBuf::from("./catalog.json")
}

fn default_threshold() -> u32 {
    70
}

fn default_per_field_limit() -> usize {
    5
}

fn default_result_limit() -> usize {
    5
}

fn default_max_results() -> usize {
    50
}

fn default_max_query_length() -> usize {
    500
}

fn default_mode() -> SearchMode {
    SearchMode::Topic
}

fn default_vocabulary_weight() -> f64 {
    1.5
}

fn default_skill_weight() -> f64 {
    1.2
}

fn default_weight() -> f64 {
    1.0
}

fn default_fuzzy_threshold() -> u32 {
    80
}

fn default_true() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            per_field_limit: default_per_field_limit(),
            result_limit: default_result_limit(),
            max_results: default_max_results(),
            max_query_length: default_max_query_length(),
            default_mode: default_mode(),
            threshold_stage: ThresholdStage::default(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            vocabulary_weight: default_vocabulary_weight(),
            skill_weight: default_skill_weight(),
            default_weight: default_weight(),
        }
    }
}

impl Default for ThemesConfig {
    fn default() -> Self {
        Self {
            fuzzy: false,
            fuzzy_threshold: default_fuzzy_threshold(),
        }
    }
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            synonyms: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CurriculaError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. CURRICULA_CONFIG env var
    /// 2. XDG config file (~/.config/curricula/config.toml)
    /// 3. ./curricula.toml in the working directory
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("CURRICULA_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("curricula.toml").exists() {
                Self::from_file("curricula.toml")?
            } else {
                Self::default()
            }
        };

        // Catalog defaults to the XDG data directory unless set explicitly
        if config.catalog.path == default_catalog_path() && !Path::new("catalog.json").exists() {
            config.catalog.path = xdg.catalog_file();
        }

        config.merge_env()?;
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) -> Result<()> {
        if let Ok(path) = env::var("CURRICULA_CATALOG") {
            self.catalog.path = PathBuf::from(path);
        }

        if let Ok(threshold) = env::var("CURRICULA_THRESHOLD") {
            if let Ok(t) = threshold.parse() {
                self.search.threshold = t;
            }
        }
        if let Ok(limit) = env::var("CURRICULA_RESULT_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.search.result_limit = l;
            }
        }
        if let Ok(max_query_len) = env::var("CURRICULA_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }
        // Unknown modes fail rather than falling back to the default
        if let Ok(mode) = env::var("CURRICULA_DEFAULT_MODE") {
            self.search.default_mode = mode.parse()?;
        }

        if let Ok(fuzzy) = env::var("CURRICULA_FUZZY_THEMES") {
            if let Ok(f) = fuzzy.parse() {
                self.themes.fuzzy = f;
            }
        }
        if let Ok(threshold) = env::var("CURRICULA_THEME_THRESHOLD") {
            if let Ok(t) = threshold.parse() {
                self.themes.fuzzy_threshold = t;
            }
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.search.threshold > 100 {
            return Err(CurriculaError::ConfigError(
                "Threshold must be between 0 and 100".to_string(),
            ));
        }

        if self.search.per_field_limit == 0 {
            return Err(CurriculaError::ConfigError(
                "Per-field limit must be non-zero".to_string(),
            ));
        }

        if self.search.result_limit == 0 {
            return Err(CurriculaError::ConfigError(
                "Result limit must be non-zero".to_string(),
            ));
        }

        if self.search.result_limit > self.search.max_results {
            return Err(CurriculaError::ConfigError(
                "Result limit cannot exceed max results".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(CurriculaError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        let weights = [
            ("vocabulary_weight", self.scoring.vocabulary_weight),
            ("skill_weight", self.scoring.skill_weight),
            ("default_weight", self.scoring.default_weight),
        ];
        for (name, weight) in weights {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(CurriculaError::ConfigError(format!(
                    "Scoring {name} must be a positive number"
                )));
            }
        }

        if self.themes.fuzzy_threshold > 100 {
            return Err(CurriculaError::ConfigError(
                "Theme fuzzy threshold must be between 0 and 100".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Catalog: {:?}", self.catalog.path);
        tracing::debug!("  Threshold: {}", self.search.threshold);
        tracing::debug!("  Threshold stage: {:?}", self.search.threshold_stage);
        tracing::debug!("  Per-field limit: {}", self.search.per_field_limit);
        tracing::debug!("  Result limit: {}", self.search.result_limit);
        tracing::debug!("  Max results: {}", self.search.max_results);
        tracing::debug!("  Default mode: {}", self.search.default_mode);
        tracing::debug!(
            "  Weights: vocabulary={} skill={} default={}",
            self.scoring.vocabulary_weight,
            self.scoring.skill_weight,
            self.scoring.default_weight
        );
        tracing::debug!(
            "  Themes: fuzzy={} threshold={}",
            self.themes.fuzzy,
            self.themes.fuzzy_threshold
        );
        tracing::debug!(
            "  Expansion: enabled={} extra synonyms={}",
            self.expansion.enabled,
            self.expansion.synonyms.len()
        );
    }
}
