//! Editor Log Report
//!
//! The single-line-per-diagnostic format consumed by editor and IDE
//! integrations, matching what the Designer tooling produces.

use std::io::{self, Write};

use crate::{CompilationResult, DiagnosticMessage};

use super::ReportWriter;

/// Editor-compatible log writer.
///
/// Each diagnostic becomes one line in one of four shapes, depending on
/// whether a procedure context and a line number are known:
///
/// ```text
/// ERROR(INPUT, 5): bad token
/// ERROR(INPUT): bad token
/// ERROR(5): bad token
/// ERROR: bad token
/// ```
pub struct EditorLogReport<W: Write> {
    writer: W,
}

impl<W: Write> EditorLogReport<W> {
    /// Create a new editor log writer.
    pub fn new(writer: W) -> Self {
        EditorLogReport { writer }
    }
}

/// Format one diagnostic as a single editor-compatible line, without the
/// trailing newline.
pub fn format_editor_line(diag: &DiagnosticMessage) -> String {
    let severity = diag.severity.as_upper_str();
    match (diag.proc_name.as_deref(), diag.has_line()) {
        (Some(proc_name), true) => {
            format!("{severity}({proc_name}, {}): {}", diag.line, diag.message)
        }
        (Some(proc_name), false) => format!("{severity}({proc_name}): {}", diag.message),
        (None, true) => format!("{severity}({}): {}", diag.line, diag.message),
        (None, false) => format!("{severity}: {}", diag.message),
    }
}

impl<W: Write> ReportWriter for EditorLogReport<W> {
    fn write_report(&mut self, result: &CompilationResult) -> io::Result<()> {
        for diag in &result.diagnostics {
            writeln!(self.writer, "{}", format_editor_line(diag))?;
        }
        self.writer.flush()
    }
}
