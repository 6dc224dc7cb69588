//! In-memory classification tree.
//!
//! The store is built once from a dataset and never mutated afterwards, so a
//! shared reference can be queried from any number of threads without locks.

use crate::error::{EhakError, Result};
use crate::model::{is_root_marker, Entry, Level, ROOT_CODE};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Children of every parent within one level, in dataset order.
pub type LevelTable = IndexMap<String, Vec<Entry>>;

/// Dataset layout: level table key to parent code to `[code, name]` pairs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub counties: LevelTable,
    #[serde(default)]
    pub cities: LevelTable,
    #[serde(default)]
    pub city_districts: LevelTable,
    #[serde(default)]
    pub parishes: LevelTable,
    #[serde(default)]
    pub villages: LevelTable,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelStats {
    pub parents: usize,
    pub entries: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ClassificationStore {
    data: Dataset,
}

impl ClassificationStore {
    pub fn new(data: Dataset) -> Self {
        let store = ClassificationStore { data };
        for (code, count) in store.duplicate_codes() {
            warn!(code = %code, count, "code occurs more than once in dataset");
        }
        store
    }

    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        Ok(Self::new(serde_json::from_reader(reader)?))
    }

    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        Ok(Self::new(serde_json::from_str(s)?))
    }

    pub fn open(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| EhakError::Io { path: path.to_path_buf(), source })?;
        let data: Dataset = serde_json::from_slice(&bytes).map_err(|source| EhakError::Parse { path: path.to_path_buf(), source })?;
        let store = Self::new(data);
        let total: usize = store.stats().values().map(|s| s.entries).sum();
        info!(path = %path.display(), entries = total, "loaded classification dataset");
        Ok(store)
    }

    /// The table for a stored level; `None` for the country root.
    pub fn table(&self, level: Level) -> Option<&LevelTable> {
        match level {
            Level::Country => None,
            Level::County => Some(&self.data.counties),
            Level::City => Some(&self.data.cities),
            Level::CityDistrict => Some(&self.data.city_districts),
            Level::Parish => Some(&self.data.parishes),
            Level::Village => Some(&self.data.villages),
        }
    }

    /// Parent code the counties are stored under: `"1"` unless the dataset uses another root spelling.
    pub fn root_code(&self) -> &str {
        if self.data.counties.contains_key(ROOT_CODE) {
            return ROOT_CODE;
        }
        self.data.counties.keys().map(String::as_str).find(|k| is_root_marker(k)).unwrap_or(ROOT_CODE)
    }

    /// Children of `parent_code` at `level`. Empty when the level or parent is unknown.
    pub fn children_of(&self, level: Level, parent_code: &str) -> &[Entry] {
        self.table(level).and_then(|t| t.get(parent_code)).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Scan every bucket of `level` for `code`, returning the bucket's parent code and the entry.
    pub fn find(&self, level: Level, code: &str) -> Option<(&str, &Entry)> {
        self.table(level)?
            .iter()
            .find_map(|(parent, entries)| entries.iter().find(|e| e.code == code).map(|e| (parent.as_str(), e)))
    }

    /// Codes that appear more than once anywhere in the tree, with their counts.
    pub fn duplicate_codes(&self) -> Vec<(String, usize)> {
        let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
        for level in Level::STORED {
            for entries in self.table(level).into_iter().flat_map(|t| t.values()) {
                for e in entries { *seen.entry(e.code.as_str()).or_default() += 1; }
            }
        }
        seen.into_iter().filter(|(_, n)| *n > 1).map(|(c, n)| (c.to_string(), n)).collect()
    }

    pub fn stats(&self) -> BTreeMap<Level, LevelStats> {
        Level::STORED
            .into_iter()
            .map(|level| {
                let t = self.table(level);
                let stats = LevelStats {
                    parents: t.map(|t| t.len()).unwrap_or(0),
                    entries: t.map(|t| t.values().map(Vec::len).sum()).unwrap_or(0),
                };
                (level, stats)
            })
            .collect()
    }
}
