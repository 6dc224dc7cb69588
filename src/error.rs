//! Errors raised while binding an engine to a dataset.
//!
//! Queries never fail; they return `None` when nothing matches.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EhakError {
    #[error("invalid dataset version {0:?}: expected something like 2020v2")]
    InvalidVersion(String),

    #[error("cannot read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown level: {0}")]
pub struct UnknownLevel(pub String);

pub type Result<T> = std::result::Result<T, EhakError>;
