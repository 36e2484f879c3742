//! Command handlers for the cspc CLI.
//!
//! There is exactly one command — compile — but it lives behind the same
//! seam the binary uses, so tests can drive the full orchestration with a
//! scripted engine and captured output streams.

mod compile;

pub use compile::compile_file;
