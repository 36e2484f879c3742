//! Test support for driving the adapter without a vendor runtime.
//!
//! [`ScriptedBackend`] implements [`EngineBackend`] over canned data: a
//! fixed message list plus optional failure injection at each lifecycle
//! step. It records every call it receives so tests can assert on the
//! exact sequence the adapter drove.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::backend::{CompileSettings, EngineBackend, EngineError, LogicVersion};
use crate::message::ParserMessage;

/// Serialize tests that touch the process working directory.
///
/// The adapter swaps the working directory during `compile`, and the test
/// harness runs tests on parallel threads sharing one process. Any test
/// that compiles or uses [`crate::ScopedWorkDir`] takes this guard first.
pub fn cwd_test_guard() -> MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A scripted engine backend.
///
/// All failure switches default to off; `messages` is drained once by the
/// adapter, mirroring the real runtime's message list.
#[derive(Default, Debug)]
pub struct ScriptedBackend {
    /// Fail `bootstrap` with [`EngineError::Bootstrap`].
    pub fail_bootstrap: bool,
    /// Fail `load_application` with the given reason.
    pub fail_load_application: Option<String>,
    /// Fail `load_source`.
    pub fail_load_source: bool,
    /// Fail `full_compile` with an internal error carrying this text.
    pub fail_full_compile: Option<String>,
    /// Messages the compile pass "accumulates".
    pub messages: Vec<ParserMessage>,

    /// Number of `bootstrap` calls observed.
    pub bootstrap_calls: usize,
    /// Number of `teardown` calls observed.
    pub teardown_calls: usize,
    /// Number of `full_compile` calls observed.
    pub compile_calls: usize,
    /// Last version passed to `set_logic_version`.
    pub forced_version: Option<LogicVersion>,
    /// Path passed to `load_application`.
    pub loaded_path: Option<PathBuf>,
    /// Process working directory observed during `load_application`.
    pub load_working_dir: Option<PathBuf>,
    /// Settings passed to `full_compile`.
    pub compile_settings: Option<CompileSettings>,
}

impl ScriptedBackend {
    /// A backend that compiles cleanly and emits `messages`.
    pub fn with_messages(messages: Vec<ParserMessage>) -> Self {
        ScriptedBackend {
            messages,
            ..ScriptedBackend::default()
        }
    }
}

impl EngineBackend for ScriptedBackend {
    fn bootstrap(&mut self) -> Result<(), EngineError> {
        self.bootstrap_calls += 1;
        if self.fail_bootstrap {
            Err(EngineError::Bootstrap)
        } else {
            Ok(())
        }
    }

    fn teardown(&mut self) {
        self.teardown_calls += 1;
    }

    fn set_logic_version(&mut self, version: LogicVersion) {
        self.forced_version = Some(version);
    }

    fn load_application(&mut self, path: &Path) -> Result<(), EngineError> {
        self.loaded_path = Some(path.to_path_buf());
        self.load_working_dir = env::current_dir().ok();
        match self.fail_load_application.take() {
            Some(reason) => Err(EngineError::LoadApplication(reason)),
            None => Ok(()),
        }
    }

    fn load_source(&mut self) -> Result<(), EngineError> {
        if self.fail_load_source {
            Err(EngineError::LoadSource)
        } else {
            Ok(())
        }
    }

    fn full_compile(&mut self, settings: CompileSettings) -> Result<(), EngineError> {
        self.compile_calls += 1;
        self.compile_settings = Some(settings);
        match self.fail_full_compile.take() {
            Some(reason) => Err(EngineError::Internal(reason)),
            None => Ok(()),
        }
    }

    fn drain_messages(&mut self) -> Vec<ParserMessage> {
        std::mem::take(&mut self.messages)
    }
}
