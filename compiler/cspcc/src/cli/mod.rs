//! Argument parsing and input validation.
//!
//! Parsing is deliberately hand-rolled: the surface is one positional
//! argument and four flags, and keeping it in plain `match` arms makes the
//! usage-error behavior obvious.

use std::path::{Path, PathBuf};

/// Input extensions the compiler accepts.
pub const VALID_EXTENSIONS: &[&str] = &["ent", "bch", "pff"];

/// A parsed compile invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    /// Path to the application definition.
    pub input_file: PathBuf,
    /// Destination for JSON output; only meaningful with `--json`.
    pub output_file: Option<PathBuf>,
    /// Echo progress and timing to standard output.
    pub verbose: bool,
    /// Request syntax-check-only mode.
    pub check_only: bool,
    /// Render JSON instead of human console text.
    pub json_output: bool,
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CliAction {
    /// Run a compilation.
    Compile(CliOptions),
    /// Print usage and exit 0. Wins over every other flag.
    Help,
}

/// Usage errors: bad flags, not bad input files.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    #[error("Error: no input file specified")]
    MissingInput,

    #[error("Error: -o requires an output filename")]
    MissingOutputArg,

    #[error("Unknown option: {0}")]
    UnknownOption(String),
}

/// Problems with the input file itself, reported before any engine contact.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Input file not found: {0}")]
    NotFound(String),

    #[error("Invalid file type. Expected .ent, .bch, or .pff")]
    InvalidExtension,
}

/// Parse the arguments following the program name.
///
/// `-h`/`--help` anywhere wins immediately. A later positional argument
/// replaces an earlier one; anything else starting with `-` is an unknown
/// option.
pub fn parse_args(args: &[String]) -> Result<CliAction, CliError> {
    let mut input_file = None;
    let mut output_file = None;
    let mut verbose = false;
    let mut check_only = false;
    let mut json_output = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliAction::Help),
            "-v" => verbose = true,
            "--check-only" => check_only = true,
            "--json" => json_output = true,
            "-o" => match iter.next() {
                Some(path) => output_file = Some(PathBuf::from(path)),
                None => return Err(CliError::MissingOutputArg),
            },
            other if !other.starts_with('-') => input_file = Some(PathBuf::from(other)),
            other => return Err(CliError::UnknownOption(other.to_string())),
        }
    }

    let Some(input_file) = input_file else {
        return Err(CliError::MissingInput);
    };

    Ok(CliAction::Compile(CliOptions {
        input_file,
        output_file,
        verbose,
        check_only,
        json_output,
    }))
}

/// Check that the input exists and carries an accepted extension.
///
/// This runs before the engine is created; a failure here means exit code 1
/// with no engine contact and no log files.
pub fn validate_input_file(path: &Path) -> Result<(), ValidationError> {
    if !path.exists() {
        return Err(ValidationError::NotFound(path.display().to_string()));
    }

    let accepted = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            VALID_EXTENSIONS
                .iter()
                .any(|valid| ext.eq_ignore_ascii_case(valid))
        });
    if !accepted {
        return Err(ValidationError::InvalidExtension);
    }

    Ok(())
}
