use crate::error::{EhakError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};

pub const DEFAULT_VERSION: &str = "2020v2";
pub const DATA_DIR_ENV: &str = "EHAK_DATA_DIR";

/// Which dataset an engine binds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub version: String,
    /// Explicit dataset file; when unset the file is looked up by version in the data directory.
    pub dataset: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self { EngineConfig { version: DEFAULT_VERSION.to_string(), dataset: None } }
}

impl EngineConfig {
    pub fn new(version: Option<&str>, dataset: Option<&Path>) -> Result<Self> {
        let version = version.unwrap_or(DEFAULT_VERSION);
        validate_version(version)?;
        Ok(EngineConfig { version: version.to_string(), dataset: dataset.map(Path::to_path_buf) })
    }

    pub fn dataset_path(&self) -> PathBuf {
        match &self.dataset {
            Some(p) => p.clone(),
            None => default_data_dir().join(format!("{}.json", self.version)),
        }
    }
}

/// Versions look like `2020v2`; the check also keeps them from naming paths.
pub fn validate_version(version: &str) -> Result<()> {
    static RE: once_cell::sync::Lazy<Regex> = once_cell::sync::Lazy::new(|| Regex::new(r"^\d{4}v\d+$").unwrap());
    if RE.is_match(version) { Ok(()) } else { Err(EhakError::InvalidVersion(version.to_string())) }
}

pub fn default_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    let home = home::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".local").join("share").join("ehak")
}
