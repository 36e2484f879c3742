//! cspc — command-line census application compiler.
//!
//! Compiles a CSPro-style application definition and reports diagnostics
//! for a human or for editor tooling.

use std::io::{self, Write};

use cspc_engine::{CompilerEngine, NullBackend};
use cspcc::{
    compile_file, init_tracing, parse_args, validate_input_file, CliAction, LogFilePolicy,
};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        std::process::exit(1);
    }

    let options = match parse_args(&args) {
        Ok(CliAction::Help) => {
            print_usage();
            return;
        }
        Ok(CliAction::Compile(options)) => options,
        Err(err) => {
            eprintln!("{err}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = validate_input_file(&options.input_file) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    let mut engine = CompilerEngine::new(NullBackend::new());
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let code = compile_file(
        &mut engine,
        &options,
        LogFilePolicy::default(),
        &mut out,
        &mut err,
    );
    let _ = out.flush();
    let _ = err.flush();
    std::process::exit(code);
}

fn print_usage() {
    println!("cspc - command-line census application compiler");
    println!();
    println!("Usage:");
    println!("  cspc <application.ent|.bch|.pff> [options]");
    println!();
    println!("Options:");
    println!("  -o <file>     Write JSON compilation results to <file>");
    println!("  -v            Verbose mode");
    println!("  --check-only  Only check syntax, don't generate binaries");
    println!("  --json        Output results in JSON format (for editor integration)");
    println!("  -h, --help    Show this help message");
    println!();
    println!("Examples:");
    println!("  cspc myapp.ent");
    println!("  cspc myapp.bch -v --json");
    println!("  cspc myapp.pff --json -o results.json");
}
