use crate::model::{FullLocation, Level};
use crate::resolve::code_for_name;
use crate::store::ClassificationStore;
use tracing::debug;

/// Descend from the country root along the names in `location` and return the last code reached.
///
/// Blank levels are skipped. Levels are not checked for contiguity: a path that
/// skips its city or parish looks the leaf up under the county and misses.
pub fn code_for_location<'a>(store: &'a ClassificationStore, location: &FullLocation) -> Option<&'a str> {
    if location.is_empty() {
        debug!("empty location");
        return None;
    }
    if !is_contiguous(location) {
        debug!(%location, "location skips a level; lookup will likely miss");
    }
    let mut parent = store.root_code();
    for (level, name) in location.levels() {
        parent = code_for_name(store, level, parent, name)?;
    }
    Some(parent)
}

/// Whether each supplied level's parent level is also supplied.
fn is_contiguous(location: &FullLocation) -> bool {
    location.levels().all(|(level, _)| match level {
        Level::County => true,
        Level::City | Level::Parish => location.get(Level::County).is_some(),
        other => other.intermediate().is_some_and(|mid| location.get(mid).is_some()),
    })
}
