//! Model file I/O.
//!
//! The on-disk format is JSON: a predictor count plus per-tree parallel
//! arrays (see [`json::TreeRecord`]). [`read_forest`] parses a file,
//! converts it to the native [`Forest`], and validates the node graph, so
//! a malformed model fails here rather than mid-evaluation.

pub mod convert;
pub mod json;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::repr::Forest;

pub use convert::ConvertError;
pub use json::{ForestFile, TreeRecord};

/// Error type for model loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read model file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed model file: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Read and validate a forest model from a JSON file.
pub fn read_forest(path: impl AsRef<Path>) -> Result<Forest, LoadError> {
    let file = File::open(path.as_ref())?;
    let parsed: ForestFile = serde_json::from_reader(BufReader::new(file))?;
    Ok(parsed.to_forest()?)
}
