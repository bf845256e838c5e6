//! Storage layer for Tally.
//!
//! This module provides the storage abstraction and the JSON file backend.

mod json_file;
mod traits;

use std::path::{Path, PathBuf};

pub use json_file::{JsonFileStorage, DEFAULT_LOCK_TIMEOUT};
pub use traits::StorageEngine;

/// File name of the ledger inside the user's home directory.
pub const DEFAULT_FILE_NAME: &str = ".trdb";

/// Default ledger location for a given home directory.
pub fn default_path_in(home: &Path) -> PathBuf {
    home.join(DEFAULT_FILE_NAME)
}
