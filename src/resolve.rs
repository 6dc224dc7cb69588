use crate::model::Level;
use crate::store::ClassificationStore;
use tracing::debug;

/// Code of the first child of `parent_code` at `level` whose name equals `name` exactly.
/// Duplicate names under one parent resolve to the earliest entry in dataset order.
pub fn code_for_name<'a>(store: &'a ClassificationStore, level: Level, parent_code: &str, name: &str) -> Option<&'a str> {
    let hit = store.children_of(level, parent_code).iter().find(|e| e.name == name).map(|e| e.code.as_str());
    if hit.is_none() { debug!(%level, parent = parent_code, query = name, "no code for name"); }
    hit
}

/// Name of the child of `parent_code` at `level` with the given code.
pub fn name_for_code<'a>(store: &'a ClassificationStore, level: Level, parent_code: &str, code: &str) -> Option<&'a str> {
    let hit = store.children_of(level, parent_code).iter().find(|e| e.code == code).map(|e| e.name.as_str());
    if hit.is_none() { debug!(%level, parent = parent_code, code, "no name for code"); }
    hit
}
