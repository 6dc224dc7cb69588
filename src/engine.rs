use crate::ancestry;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::model::{Entry, FullLocation, Level};
use crate::path;
use crate::resolve;
use crate::store::ClassificationStore;
use std::path::Path;
use tracing::info;

/// Query facade bound to one dataset version.
///
/// Immutable after construction; share it freely across threads.
#[derive(Debug, Clone)]
pub struct Engine {
    version: String,
    store: ClassificationStore,
}

impl Engine {
    /// Load the dataset for `version` (default `2020v2`), or from `dataset` when given.
    pub fn new(version: Option<&str>, dataset: Option<&Path>) -> Result<Self> {
        Self::from_config(&EngineConfig::new(version, dataset)?)
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let path = config.dataset_path();
        let store = ClassificationStore::open(&path)?;
        info!(version = %config.version, "engine ready");
        Ok(Engine { version: config.version.clone(), store })
    }

    /// Bind an already loaded store.
    pub fn with_store(version: impl Into<String>, store: ClassificationStore) -> Self {
        Engine { version: version.into(), store }
    }

    pub fn version(&self) -> &str { &self.version }

    pub fn store(&self) -> &ClassificationStore { &self.store }

    pub fn code(&self, level: Level, parent_code: &str, name: &str) -> Option<&str> {
        resolve::code_for_name(&self.store, level, parent_code, name)
    }

    pub fn location(&self, level: Level, parent_code: &str, code: &str) -> Option<&str> {
        resolve::name_for_code(&self.store, level, parent_code, code)
    }

    pub fn full_location(&self, code: &str) -> Option<FullLocation> {
        ancestry::full_location(&self.store, code)
    }

    pub fn code_from_full_location(&self, location: &FullLocation) -> Option<&str> {
        path::code_for_location(&self.store, location)
    }

    pub fn children(&self, level: Level, parent_code: &str) -> &[Entry] {
        self.store.children_of(level, parent_code)
    }
}
