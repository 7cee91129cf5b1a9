//! # validate-yaml Library
//!
//! A small Rust library for checking that YAML files parse as well-formed
//! document streams, with per-file error reporting suitable for CI jobs
//! and pre-commit hooks.

pub mod cli;
pub mod error;
pub mod output;
pub mod parser;
pub mod validator;

pub use cli::Cli;
pub use error::{ParseError, StartupError, ValidationError};
pub use output::{report_to_stderr, write_error_report};
pub use parser::{DocumentParser, YamlParser};
pub use validator::{FileValidationResult, RunOutcome, ValidationStatus, Validator};
