//! Diagnostic model and report writers for the cspc compiler front end.
//!
//! One compilation produces one [`CompilationResult`] holding an ordered
//! list of [`DiagnosticMessage`]s. The result is immutable once built and
//! can be rendered any number of times through the writers in [`emitter`]:
//! machine JSON, human console text, a detailed log, and a one-line-per-
//! diagnostic editor log. No writer mutates the result or talks to the
//! compiler engine.

mod diagnostic;
pub mod emitter;
mod result;

pub use diagnostic::{DiagnosticMessage, Severity};
pub use result::{CompilationResult, CompilerOptions};
