//! Core diagnostic types.
//!
//! Defines [`DiagnosticMessage`] and [`Severity`] — the canonical in-memory
//! form of one compiler message. Every message the engine emits, whatever
//! its native shape, is normalized into this model exactly once at the
//! engine boundary; the report writers only ever see this form.

use std::fmt;

/// Severity level for diagnostics.
///
/// The engine's deprecation message kinds are folded into `Warning` at the
/// translation boundary, so renderers never have to know about them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Lower-case name, as used by the JSON and console renderers.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Upper-case name, as used by the log-file renderers.
    pub fn as_upper_str(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One compiler message tied to a source location.
///
/// `line` and `column` are 1-based; `0` means the position is unknown and
/// renderers treat it as absent rather than as line zero. `file` names the
/// compilation unit the message belongs to, which may differ from the
/// top-level input file when the message originates from an included unit.
///
/// Messages are immutable once produced and belong to exactly one
/// [`CompilationResult`](crate::CompilationResult).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be attached to a result, not silently dropped"]
pub struct DiagnosticMessage {
    /// Compilation unit the message belongs to.
    pub file: String,
    /// 1-based line number, `0` when unknown.
    pub line: u32,
    /// 1-based column number, `0` when unknown.
    pub column: u32,
    /// Free-text description.
    pub message: String,
    /// Logical procedure or unit name, when the engine had one.
    pub proc_name: Option<String>,
    /// Severity level.
    pub severity: Severity,
}

impl DiagnosticMessage {
    /// Create a diagnostic with no position and no procedure context.
    pub fn new(severity: Severity, file: impl Into<String>, message: impl Into<String>) -> Self {
        DiagnosticMessage {
            file: file.into(),
            line: 0,
            column: 0,
            message: message.into(),
            proc_name: None,
            severity,
        }
    }

    /// Create an error diagnostic.
    pub fn error(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, file, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, file, message)
    }

    /// Set the 1-based source position.
    pub fn with_location(mut self, line: u32, column: u32) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    /// Set the procedure context.
    pub fn with_proc_name(mut self, proc_name: impl Into<String>) -> Self {
        self.proc_name = Some(proc_name.into());
        self
    }

    /// Whether the message carries a known line number.
    pub fn has_line(&self) -> bool {
        self.line > 0
    }

    /// Check if this is an error (vs warning/info).
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}
