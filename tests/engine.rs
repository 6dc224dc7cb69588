use ehak::{ClassificationStore, EhakError, Engine, FullLocation, Level};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn fixture_path() -> PathBuf { PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample.json") }

fn engine() -> Engine { Engine::new(None, Some(fixture_path().as_path())).unwrap() }

#[test]
fn forward_and_inverse_for_every_entry() {
    let e = engine();
    for level in Level::STORED {
        for (parent, entries) in e.store().table(level).unwrap() {
            for entry in entries {
                assert_eq!(e.code(level, parent, &entry.name), Some(entry.code.as_str()), "{} {}", level, entry.name);
                assert_eq!(e.location(level, parent, &entry.code), Some(entry.name.as_str()));
            }
        }
    }
}

#[test]
fn ancestry_round_trip_for_every_code() {
    let e = engine();
    for level in Level::STORED {
        for entries in e.store().table(level).unwrap().values() {
            for entry in entries {
                let loc = e.full_location(&entry.code).unwrap();
                assert_eq!(e.code_from_full_location(&loc), Some(entry.code.as_str()), "{}", loc);
            }
        }
    }
}

#[test]
fn tallinn_kesklinn() {
    let e = engine();
    let loc = e.full_location("0784001").unwrap();
    let want = FullLocation::default()
        .with(Level::County, "Harjumaa")
        .with(Level::City, "Tallinn")
        .with(Level::CityDistrict, "Kesklinn");
    assert_eq!(loc, want);
    assert_eq!(e.code_from_full_location(&loc), Some("0784001"));
}

#[test]
fn county_resolves_alone() {
    let e = engine();
    let loc = e.full_location("0039").unwrap();
    assert_eq!(loc, FullLocation::default().with(Level::County, "Hiiu maakond"));
    let only = FullLocation::default().with(Level::County, "Harjumaa");
    assert_eq!(e.code_from_full_location(&only), Some("01"));
}

#[test]
fn village_names_repeat_across_parishes() {
    let e = engine();
    let saue = FullLocation::default().with(Level::County, "Harjumaa").with(Level::Parish, "Saue vald").with(Level::Village, "Kohatu küla");
    let elva = FullLocation::default().with(Level::County, "Tartu maakond").with(Level::Parish, "Elva vald").with(Level::Village, "Kohatu küla");
    assert_eq!(e.code_from_full_location(&saue), Some("1001"));
    assert_eq!(e.code_from_full_location(&elva), Some("1004"));
}

#[test]
fn misses() {
    let e = engine();
    assert_eq!(e.full_location("does-not-exist"), None);
    assert_eq!(e.code(Level::City, "01", "does-not-exist"), None);
    assert_eq!(e.code_from_full_location(&FullLocation::default()), None);
    let gap = FullLocation::default().with(Level::County, "Harjumaa").with(Level::Village, "Aila küla");
    assert_eq!(e.code_from_full_location(&gap), None);
}

#[test]
fn version_binding() {
    let td = tempdir().unwrap();
    fs::copy(fixture_path(), td.path().join("2023v1.json")).unwrap();
    let e = Engine::new(Some("2023v1"), Some(td.path().join("2023v1.json").as_path())).unwrap();
    assert_eq!(e.version(), "2023v1");
    assert_eq!(engine().version(), "2020v2");
}

#[test]
fn load_failures_are_fatal() {
    let td = tempdir().unwrap();
    let missing = td.path().join("nope.json");
    assert!(matches!(Engine::new(None, Some(missing.as_path())), Err(EhakError::Io { .. })));
    let bad = td.path().join("bad.json");
    fs::write(&bad, b"{\"counties\": [1, 2]}").unwrap();
    assert!(matches!(Engine::new(None, Some(bad.as_path())), Err(EhakError::Parse { .. })));
    assert!(matches!(Engine::new(Some("latest"), None), Err(EhakError::InvalidVersion(_))));
}

#[test]
fn concurrent_readers() {
    let e = engine();
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(e.full_location("1302").unwrap().to_string(), "Hiiu maakond / Hiiumaa vald / Kõrgessaare alevik");
                }
            });
        }
    });
}

#[test]
fn est_root_alias() {
    let store = ClassificationStore::from_json_str(
        r#"{"counties": {"EST": [["0037", "Harju maakond"]]}, "cities": {"0037": [["0784", "Tallinn"]]}}"#,
    )
    .unwrap();
    let e = Engine::with_store("2020v2", store);
    let loc = e.full_location("0784").unwrap();
    assert_eq!(loc.to_string(), "Harju maakond / Tallinn");
    assert_eq!(e.code_from_full_location(&loc), Some("0784"));
}
