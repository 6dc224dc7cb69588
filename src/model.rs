use crate::error::UnknownLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parent code under which counties are stored.
pub const ROOT_CODE: &str = "1";
/// Alternative spelling of the country root seen in some dataset versions.
pub const ROOT_ALIAS: &str = "EST";

/// True when `key` is the country root rather than a real county code.
/// Numeric comparison, so `"1"` and `"01"` both count.
pub fn is_root_marker(key: &str) -> bool {
    key == ROOT_ALIAS || key.trim().parse::<u64>().map(|n| n == 1).unwrap_or(false)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level { Country, County, City, CityDistrict, Parish, Village }

impl Level {
    /// Stored levels in canonical search and descent order.
    pub const STORED: [Level; 5] = [Level::County, Level::City, Level::CityDistrict, Level::Parish, Level::Village];

    /// Key of this level's table in the dataset. `None` for the implicit country root.
    pub fn table_key(self) -> Option<&'static str> {
        match self {
            Level::Country => None,
            Level::County => Some("counties"),
            Level::City => Some("cities"),
            Level::CityDistrict => Some("city_districts"),
            Level::Parish => Some("parishes"),
            Level::Village => Some("villages"),
        }
    }

    /// The second-tier level sitting between this level and its county.
    pub fn intermediate(self) -> Option<Level> {
        match self {
            Level::CityDistrict => Some(Level::City),
            Level::Village => Some(Level::Parish),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Country => "country",
            Level::County => "county",
            Level::City => "city",
            Level::CityDistrict => "city_district",
            Level::Parish => "parish",
            Level::Village => "village",
        };
        f.write_str(s)
    }
}

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "county" | "counties" => Ok(Level::County),
            "city" | "cities" => Ok(Level::City),
            "city_district" | "city_districts" => Ok(Level::CityDistrict),
            "parish" | "parishes" => Ok(Level::Parish),
            "village" | "villages" => Ok(Level::Village),
            _ => Err(UnknownLevel(s.to_string())),
        }
    }
}

/// One child unit under a parent, stored as `[code, name]` in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Entry {
    pub code: String,
    pub name: String,
}

impl Entry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Entry { code: code.into(), name: name.into() }
    }
}

impl From<(String, String)> for Entry {
    fn from((code, name): (String, String)) -> Self { Entry { code, name } }
}

impl From<Entry> for (String, String) {
    fn from(e: Entry) -> Self { (e.code, e.name) }
}

/// Names of a unit and its ancestors, one optional field per stored level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parish: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
}

impl FullLocation {
    fn slot(&self, level: Level) -> Option<&Option<String>> {
        match level {
            Level::Country => None,
            Level::County => Some(&self.county),
            Level::City => Some(&self.city),
            Level::CityDistrict => Some(&self.city_district),
            Level::Parish => Some(&self.parish),
            Level::Village => Some(&self.village),
        }
    }

    /// Name at `level`; empty strings count as absent.
    pub fn get(&self, level: Level) -> Option<&str> {
        self.slot(level)?.as_deref().filter(|s| !s.is_empty())
    }

    /// Setting `Country` is a no-op: the root is never part of a location.
    pub fn set(&mut self, level: Level, name: impl Into<String>) {
        let slot = match level {
            Level::Country => return,
            Level::County => &mut self.county,
            Level::City => &mut self.city,
            Level::CityDistrict => &mut self.city_district,
            Level::Parish => &mut self.parish,
            Level::Village => &mut self.village,
        };
        *slot = Some(name.into());
    }

    pub fn with(mut self, level: Level, name: impl Into<String>) -> Self {
        self.set(level, name);
        self
    }

    /// Present `(level, name)` pairs in canonical order.
    pub fn levels(&self) -> impl Iterator<Item = (Level, &str)> + '_ {
        Level::STORED.into_iter().filter_map(move |l| self.get(l).map(|n| (l, n)))
    }

    pub fn is_empty(&self) -> bool { self.levels().next().is_none() }
}

impl fmt::Display for FullLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.levels().map(|(_, n)| n).collect();
        f.write_str(&names.join(" / "))
    }
}
