//! Codification options and their normalization.
//!
//! Options are advisory rather than a strict schema. A caller may build them
//! with the typed builder methods, or hand over whatever JSON-ish value it has
//! via [`CodifyOptions::from_value`]:
//!
//! ```json
//! {
//!   "svgMode": "mini",                // base64 | uri | mini | mini-srcset
//!   "ignoreUnsupportedTypes": false   // default true
//! }
//! ```
//!
//! - Anything that is not an object means "no options".
//! - Each missing field falls back to its own default.
//! - Unknown keys are ignored.
//! - A key that is present counts as supplied, even when its value is `null`.
//! - `ignoreUnsupportedTypes` only counts as enabled when it is literally
//!   `true`; any other supplied value (`null` included) disables it.
//! - `svgMode: ""` means the default mode; `svgMode: null` is rejected.
//!
//! The only way options can fail is an unrecognized `svgMode`, and that is
//! reported by [`CodifyOptions::normalize`] before any file is touched.

use crate::error::CodifyError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Observer invoked with `(source_path, identifier)` after each image is encoded.
pub type LogFn<'a> = Box<dyn FnMut(&Path, &str) + Send + 'a>;

/// Encoding strategy for SVG images. Raster formats ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SvgMode {
    /// `data:image/svg+xml;base64,...`
    #[default]
    Base64,
    /// Whole document percent-encoded: `data:image/svg+xml;...`
    Uri,
    /// Minified, lightly escaped: `data:image/svg+xml,...`
    Mini,
    /// As [`SvgMode::Mini`], with spaces escaped for `srcset` attributes
    MiniSrcset,
}

impl SvgMode {
    pub const ALL: [SvgMode; 4] = [
        SvgMode::Base64,
        SvgMode::Uri,
        SvgMode::Mini,
        SvgMode::MiniSrcset,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SvgMode::Base64 => "base64",
            SvgMode::Uri => "uri",
            SvgMode::Mini => "mini",
            SvgMode::MiniSrcset => "mini-srcset",
        }
    }
}

impl fmt::Display for SvgMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SvgMode {
    type Err = CodifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SvgMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| CodifyError::InvalidSvgMode(s.to_string()))
    }
}

/// Raw options as supplied by the caller, before validation.
#[derive(Default)]
pub struct CodifyOptions<'a> {
    svg_mode: Option<String>,
    ignore_unsupported_types: Option<bool>,
    log: Option<LogFn<'a>>,
}

/// Shape accepted by [`CodifyOptions::from_value`]. Field values are kept
/// untyped so that wrong types degrade instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawOptions {
    #[serde(deserialize_with = "present")]
    svg_mode: Option<Value>,
    #[serde(deserialize_with = "present")]
    ignore_unsupported_types: Option<Value>,
}

/// Keep an explicit `null` as `Some(Value::Null)`; only a missing key is `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl<'a> CodifyOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read options from a loosely-typed value.
    ///
    /// Never fails: non-objects and malformed fields fall back to defaults,
    /// except that an `svgMode` of the wrong type is carried through so that
    /// [`normalize`](Self::normalize) can reject it.
    pub fn from_value(value: &Value) -> Self {
        let raw = match value {
            Value::Object(_) => RawOptions::deserialize(value).unwrap_or_default(),
            _ => RawOptions::default(),
        };

        let svg_mode = match raw.svg_mode {
            None => None,
            Some(Value::String(s)) => Some(s),
            Some(other) => Some(other.to_string()),
        };
        let ignore_unsupported_types = raw
            .ignore_unsupported_types
            .map(|v| v == Value::Bool(true));

        Self {
            svg_mode,
            ignore_unsupported_types,
            log: None,
        }
    }

    /// Set the SVG mode by name. Accepts [`SvgMode`] or any string; unknown
    /// names are only rejected at normalization time.
    pub fn svg_mode(mut self, mode: impl ToString) -> Self {
        self.svg_mode = Some(mode.to_string());
        self
    }

    pub fn ignore_unsupported_types(mut self, ignore: bool) -> Self {
        self.ignore_unsupported_types = Some(ignore);
        self
    }

    /// Attach a progress observer, called once per encoded image in order.
    pub fn log(mut self, log: impl FnMut(&Path, &str) + Send + 'a) -> Self {
        self.log = Some(Box::new(log));
        self
    }

    /// Validate and fill in defaults.
    pub fn normalize(self) -> Result<Settings<'a>, CodifyError> {
        let svg_mode = match self.svg_mode.as_deref() {
            None | Some("") => SvgMode::default(),
            Some(name) => name.parse()?,
        };

        Ok(Settings {
            svg_mode,
            ignore_unsupported_types: self.ignore_unsupported_types.unwrap_or(true),
            log: self.log,
        })
    }
}

impl fmt::Debug for CodifyOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodifyOptions")
            .field("svg_mode", &self.svg_mode)
            .field("ignore_unsupported_types", &self.ignore_unsupported_types)
            .field("log", &self.log.is_some())
            .finish()
    }
}

/// Validated options for one codification call.
pub struct Settings<'a> {
    pub svg_mode: SvgMode,
    pub ignore_unsupported_types: bool,
    log: Option<LogFn<'a>>,
}

impl Settings<'_> {
    /// Notify the observer, if any.
    pub fn report(&mut self, source_path: &Path, identifier: &str) {
        if let Some(log) = self.log.as_mut() {
            log(source_path, identifier);
        }
    }

    pub fn has_log(&self) -> bool {
        self.log.is_some()
    }
}

impl fmt::Debug for Settings<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("svg_mode", &self.svg_mode)
            .field("ignore_unsupported_types", &self.ignore_unsupported_types)
            .field("log", &self.log.is_some())
            .finish()
    }
}
