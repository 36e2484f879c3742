//! Report writers.
//!
//! Provides the four output formats for a compilation result:
//! - JSON: machine-readable output for editor tooling
//! - Console: human-readable success/failure summary
//! - Detailed log: multi-line record per diagnostic, with a header block
//! - Editor log: one `SEVERITY(context, line): message` line per diagnostic
//!
//! Each writer implements the [`ReportWriter`] trait, is generic over its
//! output stream, and renders purely from an immutable
//! [`CompilationResult`] — all four can be driven from the same result
//! without re-invoking the engine.

mod console;
mod detailed;
mod editor;
mod json;

pub use console::ConsoleReport;
pub use detailed::DetailedLogReport;
pub use editor::EditorLogReport;
pub use json::JsonReport;

use std::fmt::Write as _;
use std::io;

use crate::CompilationResult;

/// Trait for rendering a compilation result in some format.
pub trait ReportWriter {
    /// Render `result` to this writer's output stream.
    ///
    /// Write failures are returned rather than swallowed so the caller can
    /// decide whether they are fatal (they are not, for the log files).
    fn write_report(&mut self, result: &CompilationResult) -> io::Result<()>;
}

/// Returns a trailing comma for JSON list serialization.
///
/// Returns `","` when `index` is not the last element, `""` otherwise.
pub(crate) fn trailing_comma(index: usize, total: usize) -> &'static str {
    if index + 1 < total {
        ","
    } else {
        ""
    }
}

/// Escape a string for JSON output.
pub(crate) fn escape_json(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(result, "\\u{:04x}", c as u32);
            }
            c => result.push(c),
        }
    }
    result
}
