//! Console Report
//!
//! Human-readable success/failure output for interactive use.

use std::io::{self, Write};

use crate::CompilationResult;

use super::ReportWriter;

/// Console report writer.
///
/// Success is confirmed on `out` with a one-line message (plus elapsed
/// seconds in verbose mode). Failure goes to `err`: a summary line followed
/// by one `file(line,column): severity: message` line per diagnostic.
pub struct ConsoleReport<O: Write, E: Write> {
    out: O,
    err: E,
    verbose: bool,
}

impl<O: Write, E: Write> ConsoleReport<O, E> {
    /// Create a console report writer over a stdout-like and a stderr-like
    /// stream.
    pub fn new(out: O, err: E, verbose: bool) -> Self {
        ConsoleReport { out, err, verbose }
    }
}

impl<O: Write, E: Write> ReportWriter for ConsoleReport<O, E> {
    fn write_report(&mut self, result: &CompilationResult) -> io::Result<()> {
        if result.success {
            writeln!(self.out, "Compilation successful!")?;
            if self.verbose {
                writeln!(
                    self.out,
                    "Compilation time: {} seconds",
                    result.compilation_time_secs()
                )?;
            }
            self.out.flush()
        } else {
            write!(
                self.err,
                "Compilation failed with {} error(s)",
                result.error_count
            )?;
            if result.warning_count > 0 {
                write!(self.err, " and {} warning(s)", result.warning_count)?;
            }
            writeln!(self.err, ":")?;

            for diag in &result.diagnostics {
                writeln!(
                    self.err,
                    "{}({},{}): {}: {}",
                    diag.file, diag.line, diag.column, diag.severity, diag.message
                )?;
            }
            self.err.flush()
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
