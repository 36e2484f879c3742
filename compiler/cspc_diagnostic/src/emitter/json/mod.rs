//! JSON Report
//!
//! Machine-readable compilation results for editor integration.

use std::io::{self, Write};

use crate::CompilationResult;

use super::{escape_json, trailing_comma, ReportWriter};

/// JSON report writer.
///
/// Emits a single object:
///
/// ```text
/// {
///   "success": false,
///   "compilationTime": 0.42,
///   "errors": [
///     { "file": ..., "line": ..., "column": ..., "message": ..., "severity": ... }
///   ]
/// }
/// ```
///
/// The `errors` array contains every diagnostic (warnings included) in
/// emission order, with lower-case severity names. `compilationTime` is in
/// seconds. JSON is built by hand to keep this crate dependency-free.
pub struct JsonReport<W: Write> {
    writer: W,
}

impl<W: Write> JsonReport<W> {
    /// Create a new JSON report writer.
    pub fn new(writer: W) -> Self {
        JsonReport { writer }
    }
}

impl<W: Write> ReportWriter for JsonReport<W> {
    fn write_report(&mut self, result: &CompilationResult) -> io::Result<()> {
        writeln!(self.writer, "{{")?;
        writeln!(
            self.writer,
            "  \"success\": {},",
            if result.success { "true" } else { "false" }
        )?;
        writeln!(
            self.writer,
            "  \"compilationTime\": {},",
            result.compilation_time_secs()
        )?;
        writeln!(self.writer, "  \"errors\": [")?;

        for (i, diag) in result.diagnostics.iter().enumerate() {
            let comma = trailing_comma(i, result.diagnostics.len());
            writeln!(self.writer, "    {{")?;
            writeln!(self.writer, "      \"file\": \"{}\",", escape_json(&diag.file))?;
            writeln!(self.writer, "      \"line\": {},", diag.line)?;
            writeln!(self.writer, "      \"column\": {},", diag.column)?;
            writeln!(
                self.writer,
                "      \"message\": \"{}\",",
                escape_json(&diag.message)
            )?;
            writeln!(self.writer, "      \"severity\": \"{}\"", diag.severity)?;
            writeln!(self.writer, "    }}{comma}")?;
        }

        writeln!(self.writer, "  ]")?;
        writeln!(self.writer, "}}")?;
        self.writer.flush()
    }
}
