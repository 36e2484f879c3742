use super::*;
use crate::DiagnosticMessage;
use pretty_assertions::assert_eq;

fn render(result: &CompilationResult, verbose: bool) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    ConsoleReport::new(&mut out, &mut err, verbose)
        .write_report(result)
        .unwrap();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_success_one_liner() {
    let result = CompilationResult::from_diagnostics(Vec::new(), 1000.0, None);
    let (out, err) = render(&result, false);

    assert_eq!(out, "Compilation successful!\n");
    assert_eq!(err, "");
}

#[test]
fn test_success_verbose_adds_timing() {
    let result = CompilationResult::from_diagnostics(Vec::new(), 2500.0, None);
    let (out, _) = render(&result, true);

    assert_eq!(
        out,
        "Compilation successful!\nCompilation time: 2.5 seconds\n"
    );
}

#[test]
fn test_failure_summary_and_diagnostic_lines() {
    let diagnostics = vec![
        DiagnosticMessage::error("app.ent", "undefined variable `AGE2`").with_location(3, 7),
        DiagnosticMessage::warning("app.ent", "unused item").with_location(9, 1),
    ];
    let result = CompilationResult::from_diagnostics(diagnostics, 0.0, None);
    let (out, err) = render(&result, false);

    assert_eq!(out, "");
    assert_eq!(
        err,
        "Compilation failed with 1 error(s) and 1 warning(s):\n\
         app.ent(3,7): error: undefined variable `AGE2`\n\
         app.ent(9,1): warning: unused item\n"
    );
}

#[test]
fn test_failure_summary_omits_zero_warnings() {
    let diagnostics = vec![DiagnosticMessage::error("app.ent", "bad token").with_location(5, 1)];
    let result = CompilationResult::from_diagnostics(diagnostics, 0.0, None);
    let (_, err) = render(&result, false);

    assert!(err.starts_with("Compilation failed with 1 error(s):\n"));
    assert!(!err.contains("warning(s)"));
}
