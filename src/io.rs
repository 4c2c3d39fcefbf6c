//! File I/O helpers.
//!
//! Reads are synchronous: converters process items strictly sequentially,
//! and each item's bytes are acquired and released within the processing of
//! that single item.

use crate::{DocpipeError, Result};
use std::path::Path;

/// Read a file into memory.
///
/// # Errors
///
/// Returns `DocpipeError::Io` for I/O errors (these always bubble up).
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    std::fs::read(path.as_ref()).map_err(DocpipeError::Io)
}

/// Check whether a file exists.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Validate that a file exists.
///
/// # Errors
///
/// Returns `DocpipeError::Validation` if the file doesn't exist.
pub fn validate_file_exists(path: impl AsRef<Path>) -> Result<()> {
    if !file_exists(&path) {
        return Err(DocpipeError::validation(format!(
            "File does not exist: {}",
            path.as_ref().display()
        )));
    }
    Ok(())
}
