//! # Codify Images
//!
//! Turns a directory of images into `identifier → data URI` pairs, ready to be
//! emitted as constants in generated source code.
//!
//! ```no_run
//! use codify_images::{CodifyOptions, SvgMode, codify_directory_sync};
//!
//! let images = codify_directory_sync(
//!     "/abs/path/to/icons",
//!     CodifyOptions::new()
//!         .svg_mode(SvgMode::Mini)
//!         .log(|path, name| println!("processed image ({} => {name})", path.display())),
//! )?;
//!
//! for (name, uri) in images.iter() {
//!     println!("export const {name} = '{uri}';");
//! }
//! # Ok::<(), codify_images::CodifyError>(())
//! ```
//!
//! # Pipeline
//!
//! ```text
//! options ─▶ normalize ─┐
//! path ───▶ scan ───────┴─▶ classify ─▶ encode ─▶ ImageMap
//!                                         └─▶ log(path, identifier)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`codify`] | Entry points: [`codify_directory_sync`] and the deferred [`codify_directory`] |
//! | [`options`] | Tolerant options input, [`SvgMode`], normalization into validated settings |
//! | [`scan`] | Lists the immediate entries of the input directory |
//! | [`classify`] | Closed, case-sensitive extension → MIME table |
//! | [`encode`] | Reads one image and builds its data URI |
//! | [`svg`] | Percent-encoding and the minified SVG data URI forms |
//! | [`naming`] | Camel-case identifier derivation from file names |
//! | [`types`] | [`ImageEntry`](types::ImageEntry) and the ordered [`ImageMap`] |
//! | [`error`] | [`CodifyError`] and its [`ErrorKind`] |
//!
//! # Design Decisions
//!
//! ## Base64 for Raster, Choice for SVG
//!
//! JPEG, PNG, GIF and WebP are binary, so they are always base64-encoded. SVG
//! is XML text and can be embedded far more compactly as (lightly) escaped
//! text, so [`SvgMode`] selects between base64, full percent-encoding and two
//! minified forms. The mode has no effect on raster images.
//!
//! ## Nothing Is Written
//!
//! The engine only builds an in-memory map. Rendering it as a module (quote
//! style, indentation, module syntax) and writing it to disk belongs to the
//! caller, as do argument parsing and console output. Progress is surfaced
//! through the optional `log` observer and through `tracing` events; no
//! subscriber is installed by this crate.
//!
//! ## All or Nothing
//!
//! A call either returns the complete map or an error. Options are validated
//! and the directory listed before the first file is read, so a rejected call
//! has no side effects beyond the listing itself.

pub mod classify;
pub mod codify;
pub mod encode;
pub mod error;
pub mod naming;
pub mod options;
pub mod scan;
pub mod svg;
pub mod types;

pub use codify::{codify_directory, codify_directory_sync};
pub use error::{CodifyError, ErrorKind};
pub use options::{CodifyOptions, SvgMode};
pub use types::ImageMap;

#[cfg(test)]
pub(crate) mod test_helpers;
