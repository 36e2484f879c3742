//! Log-file persistence.
//!
//! Whenever a compilation produced diagnostics, two files are written next
//! to the input application regardless of the requested output mode: the
//! detailed log and the editor-compatible log. Editor integrations watch
//! for these fixed names, which is why they are written even for pure-JSON
//! invocations; [`LogFilePolicy`] exists for callers that want to opt out.
//!
//! Writes are best-effort. A log destination that cannot be opened does
//! not fail the compilation; it is reported as a warning-level trace event
//! and skipped.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use cspc_diagnostic::emitter::{DetailedLogReport, EditorLogReport, ReportWriter};
use cspc_diagnostic::CompilationResult;

/// Fixed name of the detailed log, written to the input file's directory.
pub const DETAILED_LOG_FILE_NAME: &str = "compileErrors.txt";

/// Fixed name of the editor-compatible log, written alongside the detailed
/// log.
pub const EDITOR_LOG_FILE_NAME: &str = "compileErrorsFormatted.txt";

/// Whether to persist the log files when diagnostics are present.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum LogFilePolicy {
    /// Write both files whenever there is at least one diagnostic.
    #[default]
    Always,
    /// Never write log files.
    Never,
}

/// Persist the detailed and editor logs for `result`.
///
/// Does nothing when there are no diagnostics or the policy says `Never`.
/// In verbose mode, each successfully-written file is echoed to `out`.
pub fn write_log_files<W: Write>(
    result: &CompilationResult,
    input_file: &Path,
    policy: LogFilePolicy,
    verbose: bool,
    out: &mut W,
) {
    if policy == LogFilePolicy::Never || !result.has_diagnostics() {
        return;
    }

    let dir = match input_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let detailed_path = dir.join(DETAILED_LOG_FILE_NAME);
    match File::create(&detailed_path) {
        Ok(file) => {
            let source = input_file.display().to_string();
            let mut report = DetailedLogReport::new(BufWriter::new(file), source);
            if let Err(err) = report.write_report(result) {
                tracing::warn!(path = %detailed_path.display(), %err, "failed to write detailed log");
            } else if verbose {
                let _ = writeln!(out, "Errors/warnings saved to: {}", detailed_path.display());
            }
        }
        Err(err) => {
            tracing::warn!(path = %detailed_path.display(), %err, "could not open detailed log");
        }
    }

    let editor_path = dir.join(EDITOR_LOG_FILE_NAME);
    match File::create(&editor_path) {
        Ok(file) => {
            let mut report = EditorLogReport::new(BufWriter::new(file));
            if let Err(err) = report.write_report(result) {
                tracing::warn!(path = %editor_path.display(), %err, "failed to write editor log");
            } else if verbose {
                let _ = writeln!(out, "Formatted errors saved to: {}", editor_path.display());
            }
        }
        Err(err) => {
            tracing::warn!(path = %editor_path.display(), %err, "could not open editor log");
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
