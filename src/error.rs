//! Failure taxonomy for a codification call.
//!
//! Every variant is fatal to the call that raised it: the caller never sees a
//! partial [`ImageMap`](crate::types::ImageMap). Presentation (colors, exit
//! handling) is left to whoever drives the engine; errors only carry a
//! machine-readable [`ErrorKind`], a stable [`code`](CodifyError::code) and a
//! human-readable message.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodifyError {
    #[error("Path '{}' is not a valid path", path.display())]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("SVG mode '{0}' is not a valid mode")]
    InvalidSvgMode(String),
    #[error("Type '{0}' is not a supported image format")]
    UnsupportedType(String),
    #[error("Unable to read '{}'", path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Discriminant of [`CodifyError`] without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidPath,
    InvalidSvgMode,
    UnsupportedType,
    IoFailure,
}

impl CodifyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPath { .. } => ErrorKind::InvalidPath,
            Self::InvalidSvgMode(_) => ErrorKind::InvalidSvgMode,
            Self::UnsupportedType(_) => ErrorKind::UnsupportedType,
            Self::IoFailure { .. } => ErrorKind::IoFailure,
        }
    }

    /// Stable identifier for the failure, namespaced under `codifyImages.`.
    pub fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::InvalidPath => "codifyImages.invalidPathError",
            ErrorKind::InvalidSvgMode => "codifyImages.invalidSvgModeError",
            ErrorKind::UnsupportedType => "codifyImages.unsupportedTypeError",
            ErrorKind::IoFailure => "codifyImages.ioFailureError",
        }
    }

    /// Process exit status a command-line front end should use.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
