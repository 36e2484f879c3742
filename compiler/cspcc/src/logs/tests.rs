use super::*;
use cspc_diagnostic::DiagnosticMessage;
use pretty_assertions::assert_eq;

fn failing_result() -> CompilationResult {
    CompilationResult::from_diagnostics(
        vec![
            DiagnosticMessage::error("app.ent", "bad token")
                .with_location(5, 1)
                .with_proc_name("INPUT"),
            DiagnosticMessage::warning("app.ent", "unused item").with_location(9, 2),
        ],
        10.0,
        None,
    )
}

#[test]
fn test_both_log_files_written() {
    let temp = tempfile::tempdir().unwrap();
    let input = temp.path().join("app.ent");
    std::fs::write(&input, "PROC GLOBAL\n").unwrap();

    let mut out = Vec::new();
    write_log_files(
        &failing_result(),
        &input,
        LogFilePolicy::Always,
        false,
        &mut out,
    );

    let detailed = std::fs::read_to_string(temp.path().join(DETAILED_LOG_FILE_NAME)).unwrap();
    assert!(detailed.starts_with("CSPro Compilation Errors/Warnings\n"));
    assert!(detailed.contains("Total Errors: 1"));
    assert!(detailed.contains("ERROR at line 5, column 1:"));

    let editor = std::fs::read_to_string(temp.path().join(EDITOR_LOG_FILE_NAME)).unwrap();
    assert_eq!(
        editor,
        "ERROR(INPUT, 5): bad token\nWARNING(9): unused item\n"
    );
}

#[test]
fn test_no_files_for_clean_result() {
    let temp = tempfile::tempdir().unwrap();
    let input = temp.path().join("app.ent");
    let clean = CompilationResult::from_diagnostics(Vec::new(), 10.0, None);

    let mut out = Vec::new();
    write_log_files(&clean, &input, LogFilePolicy::Always, true, &mut out);

    assert!(!temp.path().join(DETAILED_LOG_FILE_NAME).exists());
    assert!(!temp.path().join(EDITOR_LOG_FILE_NAME).exists());
    assert!(out.is_empty());
}

#[test]
fn test_policy_never_suppresses_files() {
    let temp = tempfile::tempdir().unwrap();
    let input = temp.path().join("app.ent");

    let mut out = Vec::new();
    write_log_files(
        &failing_result(),
        &input,
        LogFilePolicy::Never,
        false,
        &mut out,
    );

    assert!(!temp.path().join(DETAILED_LOG_FILE_NAME).exists());
    assert!(!temp.path().join(EDITOR_LOG_FILE_NAME).exists());
}

#[test]
fn test_verbose_echoes_destinations() {
    let temp = tempfile::tempdir().unwrap();
    let input = temp.path().join("app.ent");

    let mut out = Vec::new();
    write_log_files(
        &failing_result(),
        &input,
        LogFilePolicy::Always,
        true,
        &mut out,
    );

    let echoed = String::from_utf8(out).unwrap();
    assert!(echoed.contains("Errors/warnings saved to: "));
    assert!(echoed.contains("Formatted errors saved to: "));
    assert!(echoed.contains(DETAILED_LOG_FILE_NAME));
    assert!(echoed.contains(EDITOR_LOG_FILE_NAME));
}

#[test]
fn test_unwritable_destination_is_skipped() {
    // Point the "input" into a directory that does not exist; both creates
    // fail and the call must still return normally.
    let input = Path::new("/nonexistent/cspc-logs/app.ent");
    let mut out = Vec::new();
    write_log_files(
        &failing_result(),
        input,
        LogFilePolicy::Always,
        true,
        &mut out,
    );
    assert!(out.is_empty());
}
