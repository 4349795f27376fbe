//! Diagnostics and error reporting for the PhonemaScript engine.
//!
//! Every failure the engine can produce — lexical, syntactic, or at execution time — is a
//! single [`EngineError`] value with a kind, an offending source span, and a human-readable
//! message, optionally enriched with notes and hints.

use thiserror::Error;

use crate::ast::Span;

/// An engine error with location information.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {message}")]
pub struct EngineError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl EngineError {
    pub fn lex(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Lex,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn syntax(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Syntax,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn type_error(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Type,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn undefined_register(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::UndefinedRegister,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

/// The discriminant of the engine's single failure surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("lex error")]
    Lex,
    #[error("syntax error")]
    Syntax,
    #[error("type error")]
    Type,
    #[error("undefined register error")]
    UndefinedRegister,
}

/// Render an error with source context into a string.
pub fn format_error(file_name: &str, source: &str, error: &EngineError) -> String {
    let (line_num, col_num, line_text) = get_line_info(source, error.span.start);

    let mut out = String::new();
    out.push_str(&format!("{}: {}\n", error.kind, error.message));
    out.push_str(&format!("  --> {}:{}:{}\n", file_name, line_num, col_num));

    let line_num_width = format!("{}", line_num).len();
    out.push_str(&format!("  {:>width$} |\n", "", width = line_num_width));
    out.push_str(&format!("  {:>width$} | {}\n", line_num, line_text, width = line_num_width));

    let underline_len = error
        .span
        .end
        .saturating_sub(error.span.start)
        .min(line_text.len().saturating_sub(col_num - 1))
        .max(1);
    out.push_str(&format!(
        "  {:>width$} | {}{}\n",
        "",
        " ".repeat(col_num - 1),
        "^".repeat(underline_len),
        width = line_num_width
    ));

    for note in &error.notes {
        out.push_str(&format!("  = note: {}\n", note));
    }
    for hint in &error.hints {
        out.push_str(&format!("  = hint: {}\n", hint));
    }

    out
}

/// Print an error with source context to stderr.
pub fn print_error(file_name: &str, source: &str, error: &EngineError) {
    eprint!("{}", format_error(file_name, source, error));
    eprintln!();
}

/// Get line number, column number, and line text for a byte offset
fn get_line_info(source: &str, offset: usize) -> (usize, usize, &str) {
    let offset = offset.min(source.len());
    let mut line_num = 1;
    let mut line_start = 0;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line_num += 1;
            line_start = i + 1;
        }
    }

    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    let line_text = &source[line_start..line_end];
    let col_num = offset - line_start + 1;

    (line_num, col_num, line_text)
}

// ============================================================================
// Error catalog: common errors with helpful explanations
// ============================================================================

/// Create common error values with consistent wording.
pub mod errors {
    use super::*;

    pub fn unclassifiable_character(c: char, span: Span) -> EngineError {
        EngineError::lex(format!("Character '{}' cannot be classified", c), span)
            .with_note("The phoneme alphabet is lowercase letters, whitespace, and '.'")
    }

    pub fn expected_operation(cluster: &str, span: Span) -> EngineError {
        EngineError::syntax(
            format!("Expected an operation vowel after data cluster '{}'", cluster),
            span,
        )
        .with_hint("Binary statements read: data, operation, data (e.g. `d a n`)")
    }

    pub fn operator_takes_no_left(name: &str, span: Span) -> EngineError {
        EngineError::syntax(format!("Operator '{}' does not take a left operand", name), span)
    }

    pub fn operator_needs_left(name: &str, span: Span) -> EngineError {
        EngineError::syntax(format!("Operator '{}' requires a left operand", name), span)
            .with_hint("Write it in the binary shape: data, operation, data")
    }

    pub fn expected_operand(name: &str, span: Span) -> EngineError {
        EngineError::syntax(format!("Expected a data cluster operand for '{}'", name), span)
    }

    pub fn expected_condition(name: &str, span: Span) -> EngineError {
        EngineError::syntax(
            format!("Expected a condition data cluster after '{}'", name),
            span,
        )
    }

    pub fn missing_body(name: &str, span: Span) -> EngineError {
        EngineError::syntax(format!("Control statement '{}' requires a body", name), span)
            .with_hint("The body is the rest of the line (e.g. `ea b o s`)")
    }

    pub fn slot_mismatch(key: char, slot: &str, found: &str, span: Span) -> EngineError {
        EngineError::type_error(
            format!("Register '{}' holds {} values, cannot assign {}", key, slot, found),
            span,
        )
        .with_note("Only the generic register 'd' accepts values of any type")
    }

    pub fn not_boolean(what: &str, found: &str, span: Span) -> EngineError {
        EngineError::type_error(format!("{} must be Boolean, found {}", what, found), span)
    }

    pub fn not_a_list(what: &str, found: &str, span: Span) -> EngineError {
        EngineError::type_error(format!("{} must be a List, found {}", what, found), span)
    }

    pub fn undefined_binding(name: char, span: Span) -> EngineError {
        EngineError::undefined_register(
            format!("'{}' is not a register and no loop binding with that name is active", name),
            span,
        )
        .with_note("Bindings exist only inside the loop body that created them")
    }
}
