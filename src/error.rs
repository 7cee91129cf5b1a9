use std::path::{Path, PathBuf};

use thiserror::Error;

/// Per-file validation failure, tagged with the originating path.
///
/// The `Display` output of each variant is exactly the line reported to
/// the user for that file, so callers never re-format these.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{path}: file not found.")]
    FileNotFound { path: PathBuf },

    #[error("{path}: unable to read file ({source}).")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path}: YAML parse error: {source}")]
    Syntax { path: PathBuf, source: ParseError },
}

impl ValidationError {
    /// Classify a failed read: a missing file gets its own message, every
    /// other I/O failure (permissions, directory given as a file,
    /// undecodable bytes) is reported with the underlying cause.
    pub fn from_read_error(path: PathBuf, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            ValidationError::FileNotFound { path }
        } else {
            ValidationError::Unreadable { path, source: err }
        }
    }

    /// The input path this error is tagged with.
    pub fn path(&self) -> &Path {
        match self {
            ValidationError::FileNotFound { path }
            | ValidationError::Unreadable { path, .. }
            | ValidationError::Syntax { path, .. } => path,
        }
    }

    /// Whether this is the syntax (parse) kind rather than a read failure.
    pub fn is_syntax(&self) -> bool {
        matches!(self, ValidationError::Syntax { .. })
    }
}

/// Diagnostic raised by the document-stream parser for malformed input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{details}")]
pub struct ParseError {
    details: String,
}

impl ParseError {
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            details: details.into(),
        }
    }

    pub fn details(&self) -> &str {
        &self.details
    }
}

/// Fatal startup failure, detected before any file is processed.
///
/// Distinct from the per-file kinds above: this one terminates the
/// process with its own exit code.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(
        "the YAML parser failed its startup self-check ({details}); \
         reinstall validate-yaml or rebuild it against yaml-rust2"
    )]
    ParserSelfCheck { details: String },
}

/// Result type alias defaulting to the per-file validation error.
pub type Result<T, E = ValidationError> = std::result::Result<T, E>;
