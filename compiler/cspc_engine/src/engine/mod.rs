//! The compiler engine adapter.
//!
//! Owns the engine lifecycle and turns one [`CompilerOptions`] request into
//! one fully-populated [`CompilationResult`]. Every failure the backend can
//! raise is absorbed here; `compile` never propagates an error to the
//! caller.

use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use cspc_diagnostic::{CompilationResult, CompilerOptions, DiagnosticMessage};

use crate::backend::{CompileSettings, EngineBackend, EngineError, LogicVersion};
use crate::workdir::ScopedWorkDir;

/// Extension of the compiled binary artifact.
pub const BINARY_EXTENSION: &str = "pen";

/// The artifact path a successful compile of `input` produces: the input
/// path with its extension replaced by the binary extension.
pub fn artifact_path(input: &Path) -> PathBuf {
    input.with_extension(BINARY_EXTENSION)
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum EngineState {
    Uninitialized,
    Initialized,
}

/// Adapter over an [`EngineBackend`] with an explicit lifecycle.
///
/// State machine: `Uninitialized → Initialized → Uninitialized`, with
/// `compile` as a self-loop on `Initialized` — any number of compilations
/// may run between `initialize` and `shutdown`. One result is created per
/// `compile` call and handed to the caller, who may render it through any
/// number of report writers without re-invoking the engine.
pub struct CompilerEngine<B: EngineBackend> {
    backend: B,
    state: EngineState,
}

impl<B: EngineBackend> CompilerEngine<B> {
    /// Create an engine over the given backend, uninitialized.
    pub fn new(backend: B) -> Self {
        CompilerEngine {
            backend,
            state: EngineState::Uninitialized,
        }
    }

    /// Access the backend. Mainly useful for scripted backends in tests.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Whether `initialize` has succeeded and `shutdown` has not run since.
    pub fn is_initialized(&self) -> bool {
        self.state == EngineState::Initialized
    }

    /// Prepare process-wide engine state.
    ///
    /// Idempotent: calling again while initialized is a no-op returning
    /// `true`. Returns `false` (without panicking) when the runtime cannot
    /// bootstrap; a later attempt starts from the same clean slate.
    pub fn initialize(&mut self) -> bool {
        if self.state == EngineState::Initialized {
            return true;
        }
        match self.backend.bootstrap() {
            Ok(()) => {
                self.state = EngineState::Initialized;
                true
            }
            Err(err) => {
                tracing::debug!(%err, "engine bootstrap failed");
                false
            }
        }
    }

    /// Run one compilation.
    ///
    /// Initializes on demand; if that fails, the result carries a single
    /// synthetic error diagnostic and the runtime is never invoked. All
    /// backend failures during the compile sequence are likewise absorbed
    /// into the result. The reported timing covers the compile sequence
    /// only, not `initialize` or `shutdown`.
    pub fn compile(&mut self, options: &CompilerOptions) -> CompilationResult {
        if !self.initialize() {
            let diag = DiagnosticMessage::error("", EngineError::Bootstrap.to_string());
            return CompilationResult::failure(diag, 0.0);
        }

        let started = Instant::now();
        let diagnostics = match self.run_compile(options) {
            Ok(diagnostics) => diagnostics,
            Err(err) => {
                tracing::debug!(%err, "compile sequence failed");
                vec![DiagnosticMessage::error(
                    options.input_file.display().to_string(),
                    err.to_string(),
                )]
            }
        };
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

        CompilationResult::from_diagnostics(
            diagnostics,
            elapsed_ms,
            Some(artifact_path(&options.input_file)),
        )
    }

    /// The compile sequence proper: resolve, swap directory, load, compile,
    /// drain. The `?` exits all funnel through `compile`, which converts
    /// the error into a synthetic diagnostic; the directory guard restores
    /// the working directory on each of them.
    fn run_compile(&mut self, options: &CompilerOptions) -> Result<Vec<DiagnosticMessage>, EngineError> {
        let input = resolve_input(&options.input_file)?;
        let app_dir = parent_dir(&input);

        self.backend.set_logic_version(LogicVersion::CURRENT);

        {
            let _workdir = ScopedWorkDir::enter(&app_dir)?;
            self.backend.load_application(&input)?;
            self.backend.load_source()?;
            self.backend.full_compile(CompileSettings {
                check_syntax_only: options.check_syntax_only,
                optimize_flow_tree: true,
            })?;
        }

        let top_level = options.input_file.display().to_string();
        Ok(self
            .backend
            .drain_messages()
            .iter()
            .map(|msg| msg.to_diagnostic(&top_level))
            .collect())
    }

    /// Release engine-owned objects and reset to uninitialized.
    ///
    /// Always safe, even if `initialize` never ran or failed.
    pub fn shutdown(&mut self) {
        self.backend.teardown();
        self.state = EngineState::Uninitialized;
    }
}

/// Resolve the input path against the working directory at call time.
fn resolve_input(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

/// The directory the engine runs in: the input file's containing directory.
fn parent_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
