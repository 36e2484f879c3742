//! Compiler engine adapter for the cspc front end.
//!
//! The actual census-application compiler is an external engine consumed
//! through the [`EngineBackend`] trait: a loader for application
//! definitions, a mutable target-logic-version setting, a full-compile
//! pass, and a drainable ordered list of parser messages. This crate owns
//! the engine lifecycle ([`CompilerEngine`]: initialize → compile* →
//! shutdown) and translates engine-native [`ParserMessage`]s into the
//! diagnostic model from `cspc_diagnostic`.
//!
//! The engine uses process-wide state (message catalogs, the working
//! directory, one live application object), so a `CompilerEngine` is
//! explicitly single-threaded: one compilation at a time, one engine per
//! process. Callers hold the engine as a value rather than reaching for
//! ambient globals, which keeps test runs isolated.

mod backend;
mod engine;
mod message;
pub mod testing;
mod workdir;

pub use backend::{CompileSettings, EngineBackend, EngineError, LogicVersion, NullBackend};
pub use engine::{artifact_path, CompilerEngine, BINARY_EXTENSION};
pub use message::{ParserMessage, ParserMessageKind, GENERIC_PARSER_MESSAGE};
pub use workdir::ScopedWorkDir;
