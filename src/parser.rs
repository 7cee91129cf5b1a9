//! YAML document-stream parsing.
//!
//! This crate does not parse YAML itself; it delegates to `yaml-rust2`,
//! whose `YamlLoader::load_from_str` materializes every document of a
//! multi-document stream and reports malformed input as a `ScanError`
//! with line/column context. The loader sits behind the small
//! [`DocumentParser`] trait so the driver treats it as a swappable
//! collaborator, and a startup probe confirms once per process that the
//! bundled parser actually behaves before any input file is touched.

use yaml_rust2::{ScanError, YamlLoader};

use crate::error::{ParseError, StartupError};

/// Known-good stream parsed once at startup to confirm the parser works.
const PROBE_STREAM: &str = "probe: ok\n---\n- 1\n- 2\n";

/// Number of documents the probe stream must yield.
const PROBE_DOCUMENT_COUNT: usize = 2;

/// A parser able to materialize every document contained in a text blob.
///
/// Implementations must parse eagerly: an error anywhere in the stream,
/// including after valid leading documents, is reported rather than
/// silently skipped.
pub trait DocumentParser {
    /// Parse all documents in `text`, returning how many were found.
    ///
    /// Zero documents (an empty file, or comments only) is well-formed.
    fn parse_documents(&self, text: &str) -> Result<usize, ParseError>;
}

/// The `yaml-rust2`-backed document-stream parser.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlParser;

impl YamlParser {
    /// Construct the parser, verifying that the underlying library
    /// accepts a known-good document stream.
    ///
    /// This is the only check allowed to abort a run before any input
    /// file is processed; the caller maps it to its own exit code.
    pub fn initialize() -> Result<Self, StartupError> {
        let parser = YamlParser;
        match parser.parse_documents(PROBE_STREAM) {
            Ok(PROBE_DOCUMENT_COUNT) => Ok(parser),
            Ok(count) => Err(StartupError::ParserSelfCheck {
                details: format!(
                    "probe stream yielded {count} documents, expected {PROBE_DOCUMENT_COUNT}"
                ),
            }),
            Err(err) => Err(StartupError::ParserSelfCheck {
                details: format!("probe stream failed to parse: {err}"),
            }),
        }
    }
}

impl DocumentParser for YamlParser {
    fn parse_documents(&self, text: &str) -> Result<usize, ParseError> {
        let documents = YamlLoader::load_from_str(text)?;
        Ok(documents.len())
    }
}

impl From<ScanError> for ParseError {
    fn from(err: ScanError) -> Self {
        ParseError::new(err.to_string())
    }
}
