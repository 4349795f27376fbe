//! Token types for the phoneme lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Data(Operand)` for consonant clusters, already resolved to a register or binding
//! - `Operation(OperatorId)` for statement-shaped vowels (short, long, and `io`)
//! - `Control(OperatorId)` for the control digraphs `ea` and `oo`
//!
//! ## Notes
//! - ID-bearing tokens avoid stringly-typed checks in the assembler and evaluator.
//! - `Terminator` marks a statement boundary (line break or `.`); it carries no letters and
//!   is excluded from the letter partition.

use phonema_core::lang::operators::{self, OperatorId, VowelClass};

use crate::ast::{Operand, Span};

/// Lexical category of a phoneme token, as reported in diagnostics and debug views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    DataCluster,
    ShortVowel,
    LongVowel,
    Digraph,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::DataCluster => "DataCluster",
            Category::ShortVowel => "ShortVowel",
            Category::LongVowel => "LongVowel",
            Category::Digraph => "Digraph",
        };
        write!(f, "{name}")
    }
}

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Consonant cluster with its resolved symbol.
    Data(Operand),
    /// Operation vowel participating in the unary/binary statement shapes.
    Operation(OperatorId),
    /// Control digraph heading a control statement.
    Control(OperatorId),
    /// Statement boundary; never part of the letter partition.
    Terminator,
}

impl TokenKind {
    pub fn is_data(&self) -> bool {
        matches!(self, TokenKind::Data(_))
    }

    pub fn is_operation(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operation(i) if *i == id)
    }

    pub fn is_control(&self) -> bool {
        matches!(self, TokenKind::Control(_))
    }

    pub fn is_terminator(&self) -> bool {
        matches!(self, TokenKind::Terminator)
    }

    /// The lexical category, per the operator registry. `Terminator` has none.
    pub fn category(&self) -> Option<Category> {
        match self {
            TokenKind::Data(_) => Some(Category::DataCluster),
            TokenKind::Operation(id) | TokenKind::Control(id) => {
                Some(match operators::info_for(*id).class {
                    VowelClass::Short => Category::ShortVowel,
                    VowelClass::Long => Category::LongVowel,
                    VowelClass::Digraph => Category::Digraph,
                })
            }
            TokenKind::Terminator => None,
        }
    }
}

/// A token with its kind, raw text, and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}
