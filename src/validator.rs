//! Sequential well-formedness validation over a list of YAML files.
//!
//! The driver reads each file, parses every document it contains, and
//! folds per-file results into a [`RunOutcome`]. Files are processed in
//! the order given, each independently: one broken file never stops the
//! rest from being checked, and the same path given twice is checked
//! twice.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StartupError, ValidationError};
use crate::parser::{DocumentParser, YamlParser};

/// Status of a single file validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationStatus {
    /// Every document in the file parsed.
    Valid,
    /// The file could not be read (missing, permission, not UTF-8).
    Unreadable { message: String },
    /// The file was read but some document failed to parse.
    Invalid { message: String },
}

impl ValidationStatus {
    /// Check if the file passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationStatus::Valid)
    }

    /// Check if the file could not be read at all.
    pub fn is_unreadable(&self) -> bool {
        matches!(self, ValidationStatus::Unreadable { .. })
    }

    /// Check if the file was read but failed to parse.
    pub fn is_invalid(&self) -> bool {
        matches!(self, ValidationStatus::Invalid { .. })
    }
}

impl From<&ValidationError> for ValidationStatus {
    fn from(error: &ValidationError) -> Self {
        let message = error.to_string();
        if error.is_syntax() {
            ValidationStatus::Invalid { message }
        } else {
            ValidationStatus::Unreadable { message }
        }
    }
}

/// Result of validating a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileValidationResult {
    /// Path exactly as it was given on the command line.
    pub path: PathBuf,
    /// Validation status.
    pub status: ValidationStatus,
}

impl FileValidationResult {
    /// Create a successful validation result.
    pub fn valid(path: PathBuf) -> Self {
        Self {
            path,
            status: ValidationStatus::Valid,
        }
    }

    /// Create a failed validation result from the error that caused it.
    pub fn from_error(error: &ValidationError) -> Self {
        Self {
            path: error.path().to_path_buf(),
            status: ValidationStatus::from(error),
        }
    }

    /// The error line for this file, if it failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            ValidationStatus::Valid => None,
            ValidationStatus::Unreadable { message } | ValidationStatus::Invalid { message } => {
                Some(message)
            }
        }
    }
}

/// Aggregated results of validating a list of files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Total number of files processed.
    pub total_files: usize,
    /// Number of files whose documents all parsed.
    pub valid_files: usize,
    /// Number of files that were unreadable or failed to parse.
    pub failed_files: usize,
    /// Individual file results, in input order.
    pub file_results: Vec<FileValidationResult>,
}

impl RunOutcome {
    /// Aggregate individual file results into a summary.
    pub fn aggregate(file_results: Vec<FileValidationResult>) -> Self {
        let total_files = file_results.len();
        let valid_files = file_results
            .iter()
            .filter(|result| result.status.is_valid())
            .count();

        Self {
            total_files,
            valid_files,
            failed_files: total_files - valid_files,
            file_results,
        }
    }

    /// Check if every file validated. An empty run counts as success.
    pub fn is_success(&self) -> bool {
        self.failed_files == 0
    }

    /// Error lines for the failed files, in input order.
    pub fn error_messages(&self) -> impl Iterator<Item = &str> {
        self.file_results
            .iter()
            .filter_map(|result| result.error_message())
    }

    /// Process exit code for this outcome: 0 when every file passed,
    /// 1 when any failed.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }
}

/// Validation driver: reads files and checks that each one parses as a
/// well-formed YAML document stream.
///
/// Generic over the parser so tests can substitute a scripted one; the
/// default is the `yaml-rust2`-backed [`YamlParser`].
pub struct Validator<P = YamlParser> {
    parser: P,
}

impl Validator<YamlParser> {
    /// Create a validator backed by the bundled YAML parser.
    ///
    /// Fails if the parser does not pass its startup self-check, in
    /// which case no input file has been touched yet.
    pub fn new() -> Result<Self, StartupError> {
        Ok(Self {
            parser: YamlParser::initialize()?,
        })
    }
}

impl<P: DocumentParser> Validator<P> {
    /// Create a validator around an already-constructed parser.
    pub fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    /// Validate a single file.
    ///
    /// Never panics and never touches any other file: read failures and
    /// parse failures both come back as a failed [`FileValidationResult`]
    /// carrying the user-facing error line.
    pub fn validate_file(&self, path: &Path) -> FileValidationResult {
        match self.check(path) {
            Ok(()) => FileValidationResult::valid(path.to_path_buf()),
            Err(error) => {
                log::debug!("{error}");
                FileValidationResult::from_error(&error)
            }
        }
    }

    /// Read and parse one file, propagating the first failure.
    fn check(&self, path: &Path) -> Result<()> {
        let text = fs::read_to_string(path)
            .map_err(|err| ValidationError::from_read_error(path.to_path_buf(), err))?;

        let count = self
            .parser
            .parse_documents(&text)
            .map_err(|source| ValidationError::Syntax {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("{}: {count} document(s) parsed", path.display());

        Ok(())
    }

    /// Validate every path in the list, in order, and aggregate.
    pub fn run<I, T>(&self, paths: I) -> RunOutcome
    where
        I: IntoIterator<Item = T>,
        T: AsRef<Path>,
    {
        let file_results = paths
            .into_iter()
            .map(|path| self.validate_file(path.as_ref()))
            .collect();

        RunOutcome::aggregate(file_results)
    }
}
