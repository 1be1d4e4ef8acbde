//! Catalog text loading
//!
//! The parser itself only ever sees a string; this module is the thin
//! filesystem seam the CLI driver goes through.

use std::fs;
use std::path::Path;

/// Error that can occur when loading a catalog text file.
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading the file
    Io(String),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::Io(err.to_string())
    }
}

/// Reads the layout-preserving catalog text from disk.
pub fn load_catalog_text<P: AsRef<Path>>(path: P) -> Result<String, LoaderError> {
    Ok(fs::read_to_string(path)?)
}
