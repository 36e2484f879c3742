//! The engine boundary.
//!
//! [`EngineBackend`] is the seam between the front end and the vendor
//! compiler runtime. The adapter drives it through a fixed sequence per
//! compilation (bootstrap once, then set version → load application →
//! load source → full compile → drain messages) and absorbs every error
//! it returns; nothing behind this trait leaks past the adapter.

use std::path::Path;

use crate::message::ParserMessage;

/// Failures the engine runtime can surface.
///
/// These never escape the adapter: lifecycle failures turn `initialize`
/// into a `false`, and anything raised mid-compile becomes a single
/// synthetic error diagnostic in the result.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to initialize the compiler engine")]
    Bootstrap,

    #[error("failed to load application definition: {0}")]
    LoadApplication(String),

    #[error("failed to load application source code")]
    LoadSource,

    #[error("internal compiler failure: {0}")]
    Internal(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Target logic version for the compiled artifact.
///
/// The adapter always forces [`LogicVersion::CURRENT`] onto both the
/// artifact and the loaded application object, overriding whatever the
/// application's saved settings specify. This guarantees deterministic
/// syntax support and full diagnostic coverage regardless of legacy
/// project metadata.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LogicVersion {
    V8_0,
}

impl LogicVersion {
    /// The version every compilation is pinned to.
    pub const CURRENT: LogicVersion = LogicVersion::V8_0;
}

/// Settings for one full-compile pass.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CompileSettings {
    /// Check syntax without generating binaries. The runtime may ignore it.
    pub check_syntax_only: bool,
    /// Enable flow-tree optimization. Always on in practice.
    pub optimize_flow_tree: bool,
}

/// The vendor compiler runtime, as the adapter consumes it.
///
/// Implementations hold the engine's process-wide state: the message
/// catalog loaded by `bootstrap`, the live application object created by
/// `load_application`, and the parser-message list filled during
/// `full_compile`. `load_application` must apply the logic version set by
/// the preceding `set_logic_version` call to the loaded object.
pub trait EngineBackend {
    /// Prepare process-wide runtime state (locale, message catalog).
    fn bootstrap(&mut self) -> Result<(), EngineError>;

    /// Release the application object and compiler session. Must be safe
    /// to call in any state.
    fn teardown(&mut self);

    /// Pin the target logic version for subsequent loads and compiles.
    fn set_logic_version(&mut self, version: LogicVersion);

    /// Load the application definition at an absolute path.
    ///
    /// The working directory is the application's own directory for the
    /// duration of the load/compile sequence; runtime-internal relative
    /// lookups (included copy logic, dictionaries) depend on it.
    fn load_application(&mut self, path: &Path) -> Result<(), EngineError>;

    /// Load the application's associated logic source text.
    fn load_source(&mut self) -> Result<(), EngineError>;

    /// Run the full compile pass over the loaded application.
    ///
    /// Returns `Ok` even when the source has errors — those are reported
    /// through the message list. `Err` means the runtime itself failed.
    fn full_compile(&mut self, settings: CompileSettings) -> Result<(), EngineError>;

    /// Drain every message accumulated during the compile pass, in
    /// emission order. Subsequent calls return nothing.
    fn drain_messages(&mut self) -> Vec<ParserMessage>;
}

/// Backend used when no vendor runtime is linked into the build.
///
/// `bootstrap` always fails, so the adapter reports an initialization
/// failure instead of pretending it can compile.
#[derive(Default, Debug)]
pub struct NullBackend;

impl NullBackend {
    pub fn new() -> Self {
        NullBackend
    }
}

impl EngineBackend for NullBackend {
    fn bootstrap(&mut self) -> Result<(), EngineError> {
        Err(EngineError::Bootstrap)
    }

    fn teardown(&mut self) {}

    fn set_logic_version(&mut self, _version: LogicVersion) {}

    fn load_application(&mut self, _path: &Path) -> Result<(), EngineError> {
        Err(EngineError::Bootstrap)
    }

    fn load_source(&mut self) -> Result<(), EngineError> {
        Err(EngineError::Bootstrap)
    }

    fn full_compile(&mut self, _settings: CompileSettings) -> Result<(), EngineError> {
        Err(EngineError::Bootstrap)
    }

    fn drain_messages(&mut self) -> Vec<ParserMessage> {
        Vec::new()
    }
}
