//! Error reporting for validation outcomes.
//!
//! All reporting goes to stderr, one line per failed file, in input
//! order. A fully valid run produces no output at all; stdout is never
//! written to, so the tool composes quietly in shell pipelines.

use std::io::{self, Write};

use crate::validator::RunOutcome;

/// Write one error line per failed file to `writer`.
///
/// Valid files produce nothing. Call this only after the whole run has
/// finished so partial output never interleaves with processing.
pub fn write_error_report<W: Write>(outcome: &RunOutcome, writer: &mut W) -> io::Result<()> {
    for message in outcome.error_messages() {
        writeln!(writer, "{message}")?;
    }
    Ok(())
}

/// Report the outcome of a run on stderr.
pub fn report_to_stderr(outcome: &RunOutcome) -> io::Result<()> {
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    write_error_report(outcome, &mut handle)?;
    handle.flush()
}
