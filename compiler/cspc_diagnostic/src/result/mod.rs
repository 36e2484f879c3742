//! Compilation request and result value types.

use std::path::PathBuf;

use crate::{DiagnosticMessage, Severity};

/// What to compile, and how.
///
/// `verbose` affects orchestrator/console output only, never the result
/// itself. `check_syntax_only` is passed through to the engine, which may
/// ignore it.
#[derive(Clone, Debug)]
pub struct CompilerOptions {
    /// Path to the application definition to compile.
    pub input_file: PathBuf,
    /// Request a syntax-check-only pass.
    pub check_syntax_only: bool,
    /// Echo progress and timing to standard output.
    pub verbose: bool,
}

impl CompilerOptions {
    /// Create options for a plain full compile of `input_file`.
    pub fn new(input_file: impl Into<PathBuf>) -> Self {
        CompilerOptions {
            input_file: input_file.into(),
            check_syntax_only: false,
            verbose: false,
        }
    }
}

/// The outcome of one `compile` call.
///
/// Created fresh per invocation, fully populated before it is returned, and
/// never mutated afterward. The error and warning counts are derived from
/// `diagnostics` at construction time, so they cannot drift from the actual
/// entries, and `success` holds exactly when there are no errors.
#[derive(Clone, Debug, PartialEq)]
pub struct CompilationResult {
    /// True iff the engine reported zero error diagnostics.
    pub success: bool,
    /// Number of `Error` entries in `diagnostics`.
    pub error_count: usize,
    /// Number of `Warning` entries in `diagnostics`.
    pub warning_count: usize,
    /// Diagnostics in engine emission order, never re-sorted.
    pub diagnostics: Vec<DiagnosticMessage>,
    /// Path of the produced artifact; populated only on success.
    pub compiled_output: Option<PathBuf>,
    /// Wall-clock duration of the compile step, in milliseconds.
    pub compilation_time_ms: f64,
}

impl CompilationResult {
    /// Build a result from the diagnostics the engine emitted.
    ///
    /// `artifact` is the path the compiled binary would be written to; it is
    /// recorded only when the compilation succeeded.
    pub fn from_diagnostics(
        diagnostics: Vec<DiagnosticMessage>,
        compilation_time_ms: f64,
        artifact: Option<PathBuf>,
    ) -> Self {
        let error_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        let warning_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();
        let success = error_count == 0;

        CompilationResult {
            success,
            error_count,
            warning_count,
            diagnostics,
            compiled_output: if success { artifact } else { None },
            compilation_time_ms,
        }
    }

    /// Build a failed result carrying a single synthetic diagnostic.
    ///
    /// Used for engine-lifecycle and load failures that never reach the
    /// parser: the failure description is the only diagnostic.
    pub fn failure(diagnostic: DiagnosticMessage, compilation_time_ms: f64) -> Self {
        Self::from_diagnostics(vec![diagnostic], compilation_time_ms, None)
    }

    /// Whether there is anything to persist to the log files.
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Compile duration in seconds, as reported in the JSON output.
    pub fn compilation_time_secs(&self) -> f64 {
        self.compilation_time_ms / 1000.0
    }
}
