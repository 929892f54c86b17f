//! Unified service container for curricula
//!
//! Provides shared access to all core services.

use crate::core::catalog::RecordStore;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::search::SearchEngine;
use std::sync::Arc;

/// Unified services container
///
/// Built once per process; every command reads through the same
/// catalog snapshot.
#[derive(Clone)]
pub struct Services {
    /// Application configuration
    pub config: Arc<Config>,

    /// Read-only catalog snapshot
    pub store: Arc<RecordStore>,

    /// Search engine over `store`
    pub engine: Arc<SearchEngine>,
}

impl Services {
    /// Create services over an already-loaded catalog
    pub fn new(config: Config, store: RecordStore) -> Self {
        let store = Arc::new(store);
        let engine = Arc::new(SearchEngine::new(Arc::clone(&store), &config));

        Self {
            config: Arc::new(config),
            store,
            engine,
        }
    }

    /// Create services, loading the catalog named by the configuration
    pub fn load(config: Config) -> Result<Self> {
        let store = RecordStore::from_json_file(&config.catalog.path)?;
        Ok(Self::new(config, store))
    }
}
