//! Detailed Log Report
//!
//! The long-form log file written next to the input application: a header
//! block with totals, then a multi-line record per diagnostic.

use std::io::{self, Write};

use chrono::Local;

use crate::CompilationResult;

use super::ReportWriter;

/// Detailed log report writer.
///
/// ```text
/// CSPro Compilation Errors/Warnings
/// ==================================
/// File: app.ent
/// Date: 2026-08-23 14:02:51
/// Total Errors: 2
/// Total Warnings: 1
///
/// ERROR at line 3, column 7:
///   undefined variable `AGE2`
///   Location: app.ent
/// ```
pub struct DetailedLogReport<W: Write> {
    writer: W,
    source_file: String,
    timestamp: Option<String>,
}

impl<W: Write> DetailedLogReport<W> {
    /// Create a detailed log writer for the given top-level source file.
    pub fn new(writer: W, source_file: impl Into<String>) -> Self {
        DetailedLogReport {
            writer,
            source_file: source_file.into(),
            timestamp: None,
        }
    }

    /// Override the header timestamp. Used by tests for deterministic output.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    fn timestamp(&self) -> String {
        self.timestamp
            .clone()
            .unwrap_or_else(|| Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

impl<W: Write> ReportWriter for DetailedLogReport<W> {
    fn write_report(&mut self, result: &CompilationResult) -> io::Result<()> {
        writeln!(self.writer, "CSPro Compilation Errors/Warnings")?;
        writeln!(self.writer, "==================================")?;
        writeln!(self.writer, "File: {}", self.source_file)?;
        writeln!(self.writer, "Date: {}", self.timestamp())?;
        writeln!(self.writer, "Total Errors: {}", result.error_count)?;
        writeln!(self.writer, "Total Warnings: {}", result.warning_count)?;
        writeln!(self.writer)?;

        for diag in &result.diagnostics {
            writeln!(
                self.writer,
                "{} at line {}, column {}:",
                diag.severity.as_upper_str(),
                diag.line,
                diag.column
            )?;
            writeln!(self.writer, "  {}", diag.message)?;
            writeln!(self.writer, "  Location: {}", diag.file)?;
            writeln!(self.writer)?;
        }

        self.writer.flush()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
