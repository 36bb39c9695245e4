//! Public entry points: codify a directory, blocking or deferred.
//!
//! A call runs in three steps, strictly in this order:
//!
//! 1. normalize the options (an unknown SVG mode fails here);
//! 2. list the directory (an unlistable path fails here);
//! 3. for each entry: classify, read, encode, insert, report.
//!
//! Because both validations happen before step 3, a call that is going to be
//! rejected never reads a file and never invokes the `log` observer. Any error
//! in step 3 aborts the whole call as well; the mapping built so far is
//! dropped.

use crate::classify;
use crate::encode;
use crate::error::CodifyError;
use crate::naming::derive_identifier;
use crate::options::CodifyOptions;
use crate::types::ImageMap;
use std::path::Path;
use tracing::{debug, trace};

/// Encode every supported image directly inside `path`.
///
/// `path` is expected to be resolved already; it is listed as given.
pub fn codify_directory_sync(
    path: impl AsRef<Path>,
    options: CodifyOptions<'_>,
) -> Result<ImageMap, CodifyError> {
    let path = path.as_ref();
    let mut settings = options.normalize()?;
    let entries = crate::scan::scan_entries(path)?;

    debug!(
        path = %path.display(),
        svg_mode = %settings.svg_mode,
        ignore_unsupported_types = settings.ignore_unsupported_types,
        entries = entries.len(),
        "codifying directory"
    );

    let mut images = ImageMap::new();
    for file_name in &entries {
        let name = file_name.to_string_lossy();
        let Some(entry) = classify::image_entry(path, file_name) else {
            if settings.ignore_unsupported_types {
                trace!(entry = %name, "skipping unsupported entry");
                continue;
            }
            return Err(CodifyError::UnsupportedType(classify::extension_of(&name)));
        };

        let data_uri = encode::encode(&entry, settings.svg_mode)?;
        let identifier = derive_identifier(&name);

        debug!(
            source = %entry.source_path.display(),
            identifier = %identifier,
            length = data_uri.len(),
            "encoded image"
        );

        if images.insert(identifier.clone(), data_uri).is_some() {
            debug!(identifier = %identifier, "identifier collision, later image wins");
        }
        settings.report(&entry.source_path, &identifier);
    }

    debug!(images = images.len(), "codified directory");
    Ok(images)
}

/// Deferred form of [`codify_directory_sync`].
///
/// Yields to the scheduler once, then performs the blocking call and resolves
/// with its result unchanged, error included.
pub async fn codify_directory(
    path: impl AsRef<Path>,
    options: CodifyOptions<'_>,
) -> Result<ImageMap, CodifyError> {
    tokio::task::yield_now().await;
    codify_directory_sync(path, options)
}
