//! Extension → MIME type classification.
//!
//! The set of supported formats is closed. Matching is case-sensitive on the
//! extension exactly as the directory listing reports it, so `photo.PNG` is
//! not an image as far as this crate is concerned.

use crate::types::ImageEntry;
use std::ffi::OsStr;
use std::path::Path;

/// MIME type used for SVG, the only vector format.
pub const SVG_MIME_TYPE: &str = "image/svg+xml";

const SUPPORTED_TYPES: &[(&str, &str)] = &[
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".png", "image/png"),
    (".gif", "image/gif"),
    (".webp", "image/webp"),
    (".svg", SVG_MIME_TYPE),
];

/// Outcome of looking up an entry name in the supported-type table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Supported {
        extension: String,
        mime_type: &'static str,
    },
    /// Carries the extension with its dot, or an empty string when the name
    /// has none.
    Unsupported { extension: String },
}

/// Return the extension of `entry_name` including the leading dot.
///
/// Dot-files such as `.hidden` have no extension; a trailing dot (`name.`)
/// yields `"."`.
pub fn extension_of(entry_name: &str) -> String {
    match Path::new(entry_name).extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy()),
        None => String::new(),
    }
}

pub fn classify(entry_name: &str) -> Classification {
    let extension = extension_of(entry_name);
    match mime_type_for(&extension) {
        Some(mime_type) => Classification::Supported {
            extension,
            mime_type,
        },
        None => Classification::Unsupported { extension },
    }
}

/// Look up the MIME type for a dotted extension.
pub fn mime_type_for(extension: &str) -> Option<&'static str> {
    SUPPORTED_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
}

/// Build the per-entry record for a supported file inside `dir`.
///
/// `file_name` is joined onto `dir` untouched; only classification looks at
/// its (lossy) text form.
pub fn image_entry(dir: &Path, file_name: &OsStr) -> Option<ImageEntry> {
    match classify(&file_name.to_string_lossy()) {
        Classification::Supported {
            extension,
            mime_type,
        } => Some(ImageEntry {
            source_path: dir.join(file_name),
            extension,
            mime_type,
            is_vector_format: mime_type == SVG_MIME_TYPE,
        }),
        Classification::Unsupported { .. } => None,
    }
}
