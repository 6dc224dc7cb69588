//! Resolve codes of the Estonian administrative classification (EHAK) to
//! location names and back.
//!
//! ```
//! use ehak::{ClassificationStore, Engine, Level};
//!
//! let store = ClassificationStore::from_json_str(r#"{
//!     "counties": {"1": [["0037", "Harju maakond"]]},
//!     "cities": {"0037": [["0784", "Tallinn"]]}
//! }"#).unwrap();
//! let engine = Engine::with_store("2020v2", store);
//!
//! let loc = engine.full_location("0784").unwrap();
//! assert_eq!(loc.to_string(), "Harju maakond / Tallinn");
//! assert_eq!(engine.code_from_full_location(&loc), Some("0784"));
//! assert_eq!(engine.code(Level::County, "1", "Harju maakond"), Some("0037"));
//! ```

pub mod ancestry;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod path;
pub mod resolve;
pub mod store;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{EhakError, Result, UnknownLevel};
pub use model::{Entry, FullLocation, Level, ROOT_ALIAS, ROOT_CODE};
pub use store::{ClassificationStore, Dataset};
