//! Directory scanning.
//!
//! Lists the entries of a single directory (no recursion) and keeps the names
//! whose extension is in a recognized set. Matching is case-insensitive and
//! uses the extension including its leading dot, so `Photo.JPG` matches
//! `.jpg`.
//!
//! Entries come back in directory-listing order. Nothing is sorted; the
//! caller processes files in exactly this order.
//!
//! A path that is missing or cannot be listed is reported as
//! [`ScanError::Unreadable`]. The pipeline turns that into a diagnostic and an
//! empty file list rather than a failure.

use crate::naming::extension_lowercase;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Could not find path: {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Filenames in `dir` whose extension case-insensitively matches one of
/// `extensions`.
///
/// Entries whose names are not valid UTF-8, or that fail to read mid-listing,
/// are skipped.
pub fn list_supported_files(dir: &Path, extensions: &[&str]) -> Result<Vec<String>, ScanError> {
    let entries = fs::read_dir(dir).map_err(|source| ScanError::Unreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    let wanted: Vec<String> = extensions.iter().map(|e| e.to_lowercase()).collect();

    Ok(entries
        .filter_map(|e| e.ok())
        .filter_map(|e| e.file_name().into_string().ok())
        .filter(|name| {
            extension_lowercase(name).is_some_and(|ext| wanted.iter().any(|w| *w == ext))
        })
        .collect())
}
