use crate::model::{FullLocation, Level};
use crate::resolve::name_for_code;
use crate::store::ClassificationStore;
use tracing::debug;

/// Rebuild the names of `code` and all its ancestors up to the county.
///
/// The tree only records parent -> children edges, so the level of `code` is
/// found by scanning the stored levels in canonical order. From there at most
/// two hops remain: an intermediate city or parish for city districts and
/// villages, then the county. Any broken link along the way yields `None`
/// rather than a partly filled location.
pub fn full_location(store: &ClassificationStore, code: &str) -> Option<FullLocation> {
    let Some((level, bucket, entry)) =
        Level::STORED.into_iter().find_map(|level| store.find(level, code).map(|(bucket, e)| (level, bucket, e)))
    else {
        debug!(code, "code not present at any level");
        return None;
    };

    let mut location = FullLocation::default().with(level, entry.name.as_str());

    // Counties live directly under the root bucket, so the county is the code itself.
    let county_code = if level == Level::County {
        code
    } else if let Some(mid) = level.intermediate() {
        let Some((county, mid_entry)) = store.find(mid, bucket) else {
            debug!(code, %mid, parent = bucket, "intermediate parent missing");
            return None;
        };
        location.set(mid, mid_entry.name.as_str());
        county
    } else {
        bucket
    };

    let county = name_for_code(store, Level::County, store.root_code(), county_code)?;
    location.set(Level::County, county);
    Some(location)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ClassificationStore {
        ClassificationStore::from_json_str(
            r#"{
                "counties": {"1": [["01", "Harjumaa"], ["0039", "Hiiu maakond"]]},
                "cities": {"01": [["0784", "Tallinn"]]},
                "city_districts": {"0784": [["0784001", "Kesklinn"]], "0999": [["0999001", "Orb"]]},
                "parishes": {"0039": [["0205", "Hiiumaa vald"]]},
                "villages": {"0205": [["1234", "Kärdla"]]}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn county_resolves_to_itself() {
        let loc = full_location(&store(), "0039").unwrap();
        assert_eq!(loc, FullLocation::default().with(Level::County, "Hiiu maakond"));
    }

    #[test]
    fn city_district_walks_through_city() {
        let loc = full_location(&store(), "0784001").unwrap();
        let want = FullLocation::default()
            .with(Level::County, "Harjumaa")
            .with(Level::City, "Tallinn")
            .with(Level::CityDistrict, "Kesklinn");
        assert_eq!(loc, want);
    }

    #[test]
    fn village_walks_through_parish() {
        let loc = full_location(&store(), "1234").unwrap();
        assert_eq!(loc.to_string(), "Hiiu maakond / Hiiumaa vald / Kärdla");
        assert_eq!(loc.city, None);
    }

    #[test]
    fn city_has_no_intermediate() {
        let loc = full_location(&store(), "0784").unwrap();
        assert_eq!(loc.to_string(), "Harjumaa / Tallinn");
    }

    #[test]
    fn unknown_code_is_none() {
        assert_eq!(full_location(&store(), "does-not-exist"), None);
    }

    #[test]
    fn orphaned_district_is_none() {
        assert_eq!(full_location(&store(), "0999001"), None);
    }
}
