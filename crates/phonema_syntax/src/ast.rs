//! Statement tree definitions for PhonemaScript.
//!
//! A program is a flat sequence of statements; only control statements nest, by holding the
//! rest of their source line as a body.

use std::fmt;

use phonema_core::lang::operators::{self, OperatorId};
use phonema_core::lang::registers::{self, RegisterId};

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// A program is a sequence of top-level statements in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Spanned<Statement>>,
}

/// The resolved symbol of a DataCluster operand.
///
/// A cluster whose first letter is a register key addresses that register; any other cluster
/// names a transient, loop-scoped binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Register(RegisterId),
    Binding(char),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Register(id) => write!(f, "{}", registers::key_of(*id)),
            Operand::Binding(name) => write!(f, "{name}"),
        }
    }
}

/// One assembled statement, ready for execution.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `DataCluster OperationToken DataCluster` — e.g. `d a n`.
    Binary {
        op: OperatorId,
        left: Spanned<Operand>,
        right: Spanned<Operand>,
    },
    /// `OperationToken DataCluster` — e.g. `o s`.
    Unary {
        op: OperatorId,
        operand: Spanned<Operand>,
    },
    /// `ControlToken DataCluster body...` — e.g. `ea b o s`.
    Control {
        op: OperatorId,
        condition: Spanned<Operand>,
        body: Vec<Spanned<Statement>>,
        /// Loop-only: the implicit per-iteration binding name, elected at assembly time.
        binding: Option<char>,
    },
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Binary { op, left, right } => {
                write!(f, "{}({}, {})", operators::name_of(*op), left.node, right.node)
            }
            Statement::Unary { op, operand } => {
                write!(f, "{}({})", operators::name_of(*op), operand.node)
            }
            Statement::Control {
                op,
                condition,
                body,
                binding,
            } => {
                write!(f, "{}({}", operators::name_of(*op), condition.node)?;
                if let Some(name) = binding {
                    write!(f, "; {name}")?;
                }
                write!(f, ") {{ ")?;
                for (i, stmt) in body.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", stmt.node)?;
                }
                write!(f, " }}")
            }
        }
    }
}
