use super::*;
use crate::DiagnosticMessage;
use pretty_assertions::assert_eq;

#[test]
fn test_detailed_log_format() {
    let diagnostics = vec![
        DiagnosticMessage::error("app.ent", "undefined variable `AGE2`").with_location(3, 7),
        DiagnosticMessage::warning("INCLUDED", "unused item").with_location(9, 1),
    ];
    let result = CompilationResult::from_diagnostics(diagnostics, 0.0, None);

    let mut output = Vec::new();
    DetailedLogReport::new(&mut output, "app.ent")
        .with_timestamp("2026-08-23 14:02:51")
        .write_report(&result)
        .unwrap();

    let text = String::from_utf8(output).unwrap();
    assert_eq!(
        text,
        "CSPro Compilation Errors/Warnings\n\
         ==================================\n\
         File: app.ent\n\
         Date: 2026-08-23 14:02:51\n\
         Total Errors: 1\n\
         Total Warnings: 1\n\
         \n\
         ERROR at line 3, column 7:\n\
         \x20 undefined variable `AGE2`\n\
         \x20 Location: app.ent\n\
         \n\
         WARNING at line 9, column 1:\n\
         \x20 unused item\n\
         \x20 Location: INCLUDED\n\
         \n"
    );
}

#[test]
fn test_default_timestamp_is_filled_in() {
    let result = CompilationResult::from_diagnostics(
        vec![DiagnosticMessage::error("app.ent", "bad token")],
        0.0,
        None,
    );

    let mut output = Vec::new();
    DetailedLogReport::new(&mut output, "app.ent")
        .write_report(&result)
        .unwrap();

    let text = String::from_utf8(output).unwrap();
    // Not asserting the exact time, only that the header line is present
    // and non-empty.
    let date_line = text
        .lines()
        .find(|l| l.starts_with("Date: "))
        .unwrap();
    assert!(date_line.len() > "Date: ".len());
}
