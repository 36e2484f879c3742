//! The compile command: orchestrates one compilation end to end.

use std::fs::File;
use std::io::{BufWriter, Write};

use cspc_diagnostic::emitter::{ConsoleReport, JsonReport, ReportWriter};
use cspc_diagnostic::CompilerOptions;
use cspc_engine::{CompilerEngine, EngineBackend};

use crate::cli::CliOptions;
use crate::logs::{write_log_files, LogFilePolicy};

/// Compile the validated input and report the result.
///
/// Sequences: compile → shutdown → persist log files → render the
/// requested report. Returns the process exit code: `0` when the
/// compilation succeeded, `1` otherwise. Input validation has already
/// happened by the time this runs.
///
/// `out` and `err` stand in for stdout and stderr so tests can capture
/// them.
pub fn compile_file<B, Out, ErrOut>(
    engine: &mut CompilerEngine<B>,
    cli: &CliOptions,
    policy: LogFilePolicy,
    out: &mut Out,
    err: &mut ErrOut,
) -> i32
where
    B: EngineBackend,
    Out: Write,
    ErrOut: Write,
{
    if cli.verbose {
        let _ = writeln!(out, "Compiling: {}", cli.input_file.display());
        if cli.check_only {
            let _ = writeln!(out, "Mode: Syntax check only");
        }
    }

    let options = CompilerOptions {
        input_file: cli.input_file.clone(),
        check_syntax_only: cli.check_only,
        verbose: cli.verbose,
    };
    let result = engine.compile(&options);
    engine.shutdown();

    write_log_files(&result, &cli.input_file, policy, cli.verbose, out);

    if cli.json_output {
        if let Some(path) = &cli.output_file {
            match File::create(path) {
                Ok(file) => {
                    let mut report = JsonReport::new(BufWriter::new(file));
                    if let Err(write_err) = report.write_report(&result) {
                        let _ = writeln!(
                            err,
                            "Error: could not write results to {}: {write_err}",
                            path.display()
                        );
                        return 1;
                    }
                }
                Err(open_err) => {
                    let _ = writeln!(
                        err,
                        "Error: could not open output file {}: {open_err}",
                        path.display()
                    );
                    return 1;
                }
            }
        } else if let Err(write_err) = JsonReport::new(&mut *out).write_report(&result) {
            tracing::warn!(%write_err, "failed to write JSON report");
        }
    } else if let Err(write_err) =
        ConsoleReport::new(&mut *out, &mut *err, cli.verbose).write_report(&result)
    {
        tracing::warn!(%write_err, "failed to write console report");
    }

    i32::from(!result.success)
}
