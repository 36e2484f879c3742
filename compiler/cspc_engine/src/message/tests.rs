use super::*;
use pretty_assertions::assert_eq;

fn message(kind: ParserMessageKind) -> ParserMessage {
    ParserMessage {
        line_number: 5,
        position_in_line: 3,
        kind,
        message_text: String::new(),
        generic_description: "undefined variable `AGE2`".to_string(),
        proc_name: String::new(),
        compilation_unit_name: String::new(),
    }
}

#[test]
fn test_severity_folding() {
    assert_eq!(ParserMessageKind::Error.fold(), Severity::Error);
    assert_eq!(ParserMessageKind::Warning.fold(), Severity::Warning);
    assert_eq!(ParserMessageKind::DeprecationMajor.fold(), Severity::Warning);
    assert_eq!(ParserMessageKind::DeprecationMinor.fold(), Severity::Warning);
}

#[test]
fn test_placeholder_prefers_message_text() {
    let mut msg = message(ParserMessageKind::Error);
    msg.generic_description = GENERIC_PARSER_MESSAGE.to_string();
    msg.message_text = "expected `;` after statement".to_string();

    assert_eq!(msg.resolved_text(), "expected `;` after statement");
}

#[test]
fn test_placeholder_without_text_stands() {
    let mut msg = message(ParserMessageKind::Error);
    msg.generic_description = GENERIC_PARSER_MESSAGE.to_string();

    assert_eq!(msg.resolved_text(), GENERIC_PARSER_MESSAGE);
}

#[test]
fn test_specific_description_wins_over_text() {
    let mut msg = message(ParserMessageKind::Error);
    msg.message_text = "something else".to_string();

    assert_eq!(msg.resolved_text(), "undefined variable `AGE2`");
}

#[test]
fn test_context_prefers_proc_name() {
    let mut msg = message(ParserMessageKind::Error);
    msg.proc_name = "INPUT".to_string();
    msg.compilation_unit_name = "INCLUDED".to_string();

    assert_eq!(msg.context_name(), Some("INPUT"));
}

#[test]
fn test_context_falls_back_to_unit_name() {
    let mut msg = message(ParserMessageKind::Error);
    msg.compilation_unit_name = "INCLUDED".to_string();

    assert_eq!(msg.context_name(), Some("INCLUDED"));
}

#[test]
fn test_file_attribution_defaults_to_input() {
    let diag = message(ParserMessageKind::Error).to_diagnostic("app.ent");
    assert_eq!(diag.file, "app.ent");
    assert_eq!(diag.line, 5);
    assert_eq!(diag.column, 3);
    assert_eq!(diag.proc_name, None);
}

#[test]
fn test_file_attribution_uses_compilation_unit() {
    let mut msg = message(ParserMessageKind::Warning);
    msg.compilation_unit_name = "COMMON_LOGIC".to_string();

    let diag = msg.to_diagnostic("app.ent");
    assert_eq!(diag.file, "COMMON_LOGIC");
    assert_eq!(diag.severity, Severity::Warning);
    assert_eq!(diag.proc_name.as_deref(), Some("COMMON_LOGIC"));
}
