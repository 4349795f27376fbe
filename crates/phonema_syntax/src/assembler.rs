//! Statement assembler for PhonemaScript token streams.
//!
//! Groups a classified token stream into statements matching one of three fixed shapes,
//! dispatched by the first token of each run:
//!
//! - **Binary-op**: `DataCluster OperationToken DataCluster` (e.g. `d a n`)
//! - **Unary-op**: `OperationToken DataCluster` (e.g. `o s`)
//! - **Control**: `ControlToken DataCluster body...` (e.g. `ea b o s`), where the body is the
//!   rest of the logical line, recursively assembled.
//!
//! Statements never span a terminator (line break or `.`). A token run matching none of the
//! shapes is a syntax error; the assembler synchronizes at the next boundary and continues so
//! the `--parse` debug view can report more than one problem.

use phonema_core::lang::operators::{self, OperatorId, Shape};

use crate::ast::{Operand, Program, Span, Spanned, Statement};
use crate::diagnostics::{EngineError, errors};
use crate::lexer::{Token, TokenKind};

/// The binding name a loop falls back to when its body names no binding cluster.
pub const DEFAULT_BINDING: char = 'x';

/// Assembler state.
///
/// ## Notes
/// - The assembler is single-pass; it never backtracks. Shape choice is fully determined by
///   the category of the first token of each statement.
pub struct Assembler<'a> {
    tokens: &'a [Token],
    pos: usize,
    errors: Vec<EngineError>,
}

impl<'a> Assembler<'a> {
    /// Create a new assembler for a token stream.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Assemble the entire token stream into a [`Program`].
    ///
    /// ## Errors
    /// Returns the accumulated [`EngineError`]s if any statement run matches no shape. The
    /// assembler synchronizes at the next statement boundary after an error.
    pub fn assemble(mut self) -> Result<Program, Vec<EngineError>> {
        let mut statements = Vec::new();

        self.skip_terminators();
        while !self.is_at_end() {
            match self.statement() {
                Ok(stmt) => statements.push(stmt),
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize();
                }
            }
            self.skip_terminators();
        }

        if self.errors.is_empty() {
            Ok(Program { statements })
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Statement shapes
    // ========================================================================

    /// Assemble one statement, dispatching on the first token's category.
    fn statement(&mut self) -> Result<Spanned<Statement>, EngineError> {
        let token = self
            .advance()
            .expect("statement() called at end of stream")
            .clone();
        match token.kind {
            TokenKind::Data(symbol) => self.binary(symbol, token.text, token.span),
            TokenKind::Operation(id) => self.unary(id, token.span),
            TokenKind::Control(id) => self.control(id, token.span),
            TokenKind::Terminator => Err(EngineError::syntax(
                "Unexpected statement boundary".to_string(),
                token.span,
            )),
        }
    }

    /// `DataCluster OperationToken DataCluster`.
    fn binary(
        &mut self,
        left: Operand,
        left_text: String,
        left_span: Span,
    ) -> Result<Spanned<Statement>, EngineError> {
        let op = match self.peek().map(|t| (t.kind.clone(), t.span)) {
            Some((TokenKind::Operation(id), op_span)) => {
                if operators::info_for(id).shape == Shape::Unary {
                    return Err(errors::operator_takes_no_left(operators::name_of(id), op_span));
                }
                self.advance();
                id
            }
            _ => {
                return Err(errors::expected_operation(&left_text, left_span));
            }
        };

        let right = self.operand(operators::name_of(op), left_span)?;
        let span = left_span.merge(right.span);
        Ok(Spanned::new(
            Statement::Binary {
                op,
                left: Spanned::new(left, left_span),
                right,
            },
            span,
        ))
    }

    /// `OperationToken DataCluster`.
    fn unary(&mut self, op: OperatorId, op_span: Span) -> Result<Spanned<Statement>, EngineError> {
        if operators::info_for(op).shape == Shape::Binary {
            return Err(errors::operator_needs_left(operators::name_of(op), op_span));
        }

        let operand = self.operand(operators::name_of(op), op_span)?;
        let span = op_span.merge(operand.span);
        Ok(Spanned::new(Statement::Unary { op, operand }, span))
    }

    /// `ControlToken DataCluster body...` — the body is the rest of the line.
    fn control(&mut self, op: OperatorId, op_span: Span) -> Result<Spanned<Statement>, EngineError> {
        let name = operators::name_of(op);
        let condition = match self.peek().map(|t| (t.kind.clone(), t.span)) {
            Some((TokenKind::Data(symbol), span)) => {
                self.advance();
                Spanned::new(symbol, span)
            }
            _ => return Err(errors::expected_condition(name, op_span)),
        };

        let mut body = Vec::new();
        while self.peek().is_some_and(|t| !t.kind.is_terminator()) {
            body.push(self.statement()?);
        }

        if body.is_empty() {
            return Err(errors::missing_body(name, op_span.merge(condition.span)));
        }

        let binding = (op == OperatorId::Loop)
            .then(|| first_binding(&body).unwrap_or(DEFAULT_BINDING));

        let span = body
            .iter()
            .fold(op_span.merge(condition.span), |acc, s| acc.merge(s.span));
        Ok(Spanned::new(
            Statement::Control {
                op,
                condition,
                body,
                binding,
            },
            span,
        ))
    }

    /// Require a data cluster operand for the given operator.
    fn operand(&mut self, op_name: &str, fallback_span: Span) -> Result<Spanned<Operand>, EngineError> {
        match self.peek().map(|t| (t.kind.clone(), t.span)) {
            Some((TokenKind::Data(symbol), span)) => {
                self.advance();
                Ok(Spanned::new(symbol, span))
            }
            Some((_, span)) => Err(errors::expected_operand(op_name, span)),
            None => Err(errors::expected_operand(op_name, fallback_span)),
        }
    }

    // ========================================================================
    // Stream helpers
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn skip_terminators(&mut self) {
        while self.peek().is_some_and(|t| t.kind.is_terminator()) {
            self.pos += 1;
        }
    }

    /// Skip to the next statement boundary after an error.
    fn synchronize(&mut self) {
        while let Some(token) = self.peek() {
            if token.kind.is_terminator() {
                return;
            }
            self.pos += 1;
        }
    }
}

/// Elect the loop binding name: the first binding cluster in the body, in token order.
fn first_binding(body: &[Spanned<Statement>]) -> Option<char> {
    fn of_operand(operand: &Spanned<Operand>) -> Option<char> {
        match operand.node {
            Operand::Binding(name) => Some(name),
            Operand::Register(_) => None,
        }
    }

    for stmt in body {
        let found = match &stmt.node {
            Statement::Binary { left, right, .. } => of_operand(left).or_else(|| of_operand(right)),
            Statement::Unary { operand, .. } => of_operand(operand),
            Statement::Control { condition, body, .. } => {
                of_operand(condition).or_else(|| first_binding(body))
            }
        };
        if found.is_some() {
            return found;
        }
    }
    None
}

/// Convenience function to assemble a token stream.
///
/// This is a shorthand for `Assembler::new(tokens).assemble()`.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn assemble(tokens: &[Token]) -> Result<Program, Vec<EngineError>> {
    Assembler::new(tokens).assemble()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::ErrorKind;
    use crate::lexer::lex;
    use phonema_core::lang::registers::RegisterId;

    fn assemble_source(source: &str) -> Result<Program, Vec<EngineError>> {
        assemble(&lex(source).expect("lex failed"))
    }

    fn render(program: &Program) -> String {
        program
            .statements
            .iter()
            .map(|s| s.node.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_binary_shape() {
        let program = assemble_source("d a n").unwrap();
        assert_eq!(program.statements.len(), 1);
        match &program.statements[0].node {
            Statement::Binary { op, left, right } => {
                assert_eq!(*op, OperatorId::Assign);
                assert_eq!(left.node, Operand::Register(RegisterId::Data));
                assert_eq!(right.node, Operand::Register(RegisterId::Num));
            }
            other => panic!("expected binary statement, got {:?}", other),
        }
    }

    #[test]
    fn test_unary_shape() {
        let program = assemble_source("o s").unwrap();
        match &program.statements[0].node {
            Statement::Unary { op, operand } => {
                assert_eq!(*op, OperatorId::OrOutput);
                assert_eq!(operand.node, Operand::Register(RegisterId::Str));
            }
            other => panic!("expected unary statement, got {:?}", other),
        }
    }

    #[test]
    fn test_control_shape_takes_rest_of_line() {
        let program = assemble_source("ea b o s").unwrap();
        assert_eq!(program.statements.len(), 1);
        match &program.statements[0].node {
            Statement::Control {
                op,
                condition,
                body,
                binding,
            } => {
                assert_eq!(*op, OperatorId::If);
                assert_eq!(condition.node, Operand::Register(RegisterId::Bool));
                assert_eq!(body.len(), 1);
                assert_eq!(*binding, None);
            }
            other => panic!("expected control statement, got {:?}", other),
        }
    }

    #[test]
    fn test_loop_binding_election() {
        // Explicit binding cluster in the body.
        let program = assemble_source("oo l o x").unwrap();
        match &program.statements[0].node {
            Statement::Control { binding, .. } => assert_eq!(*binding, Some('x')),
            other => panic!("expected control statement, got {:?}", other),
        }

        // First binding wins, register clusters are skipped.
        let program = assemble_source("oo l k a n").unwrap();
        match &program.statements[0].node {
            Statement::Control { binding, .. } => assert_eq!(*binding, Some('k')),
            other => panic!("expected control statement, got {:?}", other),
        }

        // No binding cluster in the body: the default name applies.
        let program = assemble_source("oo l o s").unwrap();
        match &program.statements[0].node {
            Statement::Control { binding, .. } => assert_eq!(*binding, Some(DEFAULT_BINDING)),
            other => panic!("expected control statement, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_control() {
        let program = assemble_source("oo l ea b o x").unwrap();
        match &program.statements[0].node {
            Statement::Control { op, body, binding, .. } => {
                assert_eq!(*op, OperatorId::Loop);
                assert_eq!(*binding, Some('x'));
                assert!(matches!(
                    body[0].node,
                    Statement::Control { op: OperatorId::If, .. }
                ));
            }
            other => panic!("expected control statement, got {:?}", other),
        }
    }

    #[test]
    fn test_several_statements_share_a_line() {
        let program = assemble_source("d a n o s").unwrap();
        assert_eq!(program.statements.len(), 2);
    }

    #[test]
    fn test_statements_do_not_span_lines() {
        let program = assemble_source("d a n\no s").unwrap();
        assert_eq!(program.statements.len(), 2);

        // A control body ends at the line break.
        let program = assemble_source("ea b o s\no n").unwrap();
        assert_eq!(program.statements.len(), 2);
        match &program.statements[0].node {
            Statement::Control { body, .. } => assert_eq!(body.len(), 1),
            other => panic!("expected control statement, got {:?}", other),
        }
    }

    #[test]
    fn test_syscall_is_unary_not_control() {
        let program = assemble_source("io n").unwrap();
        assert!(matches!(
            program.statements[0].node,
            Statement::Unary { op: OperatorId::Syscall, .. }
        ));
    }

    #[test]
    fn test_shapeless_runs_are_syntax_errors() {
        for (source, needle) in [
            ("d n", "Expected an operation vowel"),
            ("a d", "requires a left operand"),
            ("d u n", "does not take a left operand"),
            ("ea b", "requires a body"),
            ("ea o s", "Expected a condition"),
            ("o", "Expected a data cluster"),
        ] {
            let errors = assemble_source(source).unwrap_err();
            assert_eq!(errors[0].kind, ErrorKind::Syntax, "source {:?}", source);
            assert!(
                errors[0].message.contains(needle),
                "source {:?} produced {:?}",
                source,
                errors[0].message
            );
        }
    }

    #[test]
    fn test_recovers_at_line_boundary() {
        let errors = assemble_source("d n\nq a n\nd u n").unwrap_err();
        assert_eq!(errors.len(), 2, "one error per bad line: {:?}", errors);
    }

    #[test]
    fn test_display_snapshot() {
        let program = assemble_source("d a n\nea b o s\noo l o x").unwrap();
        insta::assert_snapshot!(render(&program), @r"
        assign(d, n)
        if(b) { or_output(s) }
        loop(l; x) { or_output(x) }
        ");
    }
}
