//! Shared test utilities for the codify-images test suite.
//!
//! Builds throwaway image directories and provides a couple of known
//! payloads with their expected data URIs.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = image_dir(&[("dot.png", PNG_BYTES), ("icon.svg", b"<svg/>")]);
//! let images = codify_directory_sync(tmp.path(), CodifyOptions::new()).unwrap();
//! assert_eq!(images.get("dot"), Some(PNG_DATA_URI));
//! ```

use std::path::Path;
use tempfile::TempDir;

// =========================================================================
// Known payloads
// =========================================================================

/// A PNG signature plus a few bytes. Nothing here decodes images, so the
/// content only has to round-trip.
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// `PNG_BYTES` as the engine encodes it.
pub const PNG_DATA_URI: &str = "data:image/png;base64,iVBORw0KGgo=";

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp directory holding the given `(name, contents)` files.
///
/// Tests get an isolated directory they can mutate freely; it is removed
/// when the returned guard drops.
pub fn image_dir(files: &[(&str, &[u8])]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_files(tmp.path(), files).unwrap();
    tmp
}

fn write_files(dir: &Path, files: &[(&str, &[u8])]) -> std::io::Result<()> {
    for (name, contents) in files {
        std::fs::write(dir.join(name), contents)?;
    }
    Ok(())
}
