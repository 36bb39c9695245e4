//! Directory listing.
//!
//! Lists the immediate entries of the input directory. Nothing is filtered
//! and nothing is descended into: subdirectories, dot-files and stray text
//! files all come back as names, and classification decides what to do with
//! them.
//!
//! Entries are sorted by name so that discovery order (and with it the order
//! of log callbacks and of the resulting map) does not depend on the
//! filesystem.

use crate::error::CodifyError;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

/// List entry names directly inside `path`.
///
/// Names are returned as the filesystem reports them, so joining one back
/// onto `path` always reaches the entry, even when it is not valid UTF-8.
///
/// Any failure, whether opening the directory or reading one of its entries,
/// is reported as [`CodifyError::InvalidPath`]. No partial listing is returned.
pub fn scan_entries(path: &Path) -> Result<Vec<OsString>, CodifyError> {
    let invalid = |source: std::io::Error| CodifyError::InvalidPath {
        path: path.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(path)
        .map_err(invalid)?
        .map(|entry| entry.map(|e| e.file_name()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(invalid)?;

    entries.sort();
    Ok(entries)
}
