//! Command-line census application compiler.
//!
//! `cspc` validates its input, drives one compilation through the engine
//! adapter, persists the two log files next to the input application, and
//! renders the result for a human or for editor tooling.

use std::sync::Once;

pub mod cli;
pub mod commands;
pub mod logs;

pub use cli::{parse_args, validate_input_file, CliAction, CliError, CliOptions, ValidationError};
pub use commands::compile_file;
pub use logs::{LogFilePolicy, DETAILED_LOG_FILE_NAME, EDITOR_LOG_FILE_NAME};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=cspcc=debug` or `RUST_LOG=cspc_engine=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
