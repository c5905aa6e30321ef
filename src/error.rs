//! Error types for dgnrust library

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::io::AccessMode;

/// Category code reported alongside every [`DgnError`].
///
/// Callers that only care about the broad failure class can match on the
/// code and use the error's `Display` output as the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The underlying file could not be opened for the requested access.
    OpenFailed,
    /// The file was readable but is not what this library expects.
    AppDefined,
    /// Some other I/O failure.
    Io,
}

/// Main error type for dgnrust operations
#[derive(Debug, Error)]
pub enum DgnError {
    /// The file could not be opened for the requested access mode
    #[error("Unable to open `{}' for {mode} access: {source}", path.display())]
    OpenFailed {
        path: PathBuf,
        mode: AccessMode,
        #[source]
        source: io::Error,
    },

    /// Header bytes did not match any recognized signature
    #[error("File `{}' does not have expected DGN header", path.display())]
    FormatMismatch { path: PathBuf },

    /// IO error occurred while reading the header or repositioning the stream
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Scale/origin reported by the element decoder cannot be inverted
    #[error("Invalid transform: {0}")]
    InvalidTransform(String),
}

impl DgnError {
    /// The category code of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DgnError::OpenFailed { .. } => ErrorCode::OpenFailed,
            DgnError::FormatMismatch { .. } | DgnError::InvalidTransform(_) => {
                ErrorCode::AppDefined
            }
            DgnError::Io(_) => ErrorCode::Io,
        }
    }
}

/// Result type alias for dgnrust operations
pub type Result<T> = std::result::Result<T, DgnError>;
