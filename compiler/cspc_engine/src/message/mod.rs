//! Engine-native parser messages and their translation into diagnostics.
//!
//! The engine accumulates [`ParserMessage`]s while compiling; the adapter
//! drains them after the compile pass and normalizes each into a
//! [`DiagnosticMessage`]. All the folding rules live here, at the
//! boundary, so the report writers never see engine-native variants.

use cspc_diagnostic::{DiagnosticMessage, Severity};

/// Placeholder description the engine uses when a message has no formatted
/// text of its own.
pub const GENERIC_PARSER_MESSAGE: &str = "Logic - Parser Message";

/// Engine-native message kind.
///
/// A closed union over everything the parser can emit. The two deprecation
/// kinds exist only on this side of the boundary; both fold into
/// [`Severity::Warning`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParserMessageKind {
    Error,
    Warning,
    DeprecationMajor,
    DeprecationMinor,
}

impl ParserMessageKind {
    /// Fold the engine-native kind into the diagnostic severity taxonomy.
    pub fn fold(self) -> Severity {
        match self {
            ParserMessageKind::Error => Severity::Error,
            ParserMessageKind::Warning
            | ParserMessageKind::DeprecationMajor
            | ParserMessageKind::DeprecationMinor => Severity::Warning,
        }
    }
}

/// One message as the engine reports it.
///
/// Field semantics mirror the engine's parser-message record. Empty strings
/// mean "not set"; `line_number` and `position_in_line` are 1-based with
/// `0` for unknown.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParserMessage {
    pub line_number: u32,
    pub position_in_line: u32,
    pub kind: ParserMessageKind,
    /// Structured message text, when the engine formatted one.
    pub message_text: String,
    /// Generic description; may be the [`GENERIC_PARSER_MESSAGE`] placeholder.
    pub generic_description: String,
    /// Procedure the message was raised in, when known.
    pub proc_name: String,
    /// Compilation unit (possibly an included unit) the message belongs to.
    pub compilation_unit_name: String,
}

impl ParserMessage {
    /// The message text to report.
    ///
    /// Prefers the structured `message_text` when the generic description
    /// is the parser placeholder and a specific text exists; otherwise the
    /// generic description stands.
    pub fn resolved_text(&self) -> &str {
        if self.generic_description == GENERIC_PARSER_MESSAGE && !self.message_text.is_empty() {
            &self.message_text
        } else {
            &self.generic_description
        }
    }

    /// The procedure context to report: the explicit procedure name, or the
    /// compilation-unit name when the engine had no finer-grained context.
    pub fn context_name(&self) -> Option<&str> {
        if !self.proc_name.is_empty() {
            Some(&self.proc_name)
        } else if !self.compilation_unit_name.is_empty() {
            Some(&self.compilation_unit_name)
        } else {
            None
        }
    }

    /// Normalize into the diagnostic model.
    ///
    /// `input_file` is the top-level file being compiled; it is used for
    /// attribution unless the message names its own compilation unit, in
    /// which case the message belongs to that unit.
    pub fn to_diagnostic(&self, input_file: &str) -> DiagnosticMessage {
        let file = if self.compilation_unit_name.is_empty() {
            input_file.to_string()
        } else {
            self.compilation_unit_name.clone()
        };

        DiagnosticMessage {
            file,
            line: self.line_number,
            column: self.position_in_line,
            message: self.resolved_text().to_string(),
            proc_name: self.context_name().map(str::to_string),
            severity: self.kind.fold(),
        }
    }
}

#[cfg(test)]
mod tests;
