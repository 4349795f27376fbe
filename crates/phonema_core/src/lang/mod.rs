//! PhonemaScript vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: the six register letters and
//! the eleven vowel operators.
//!
//! The design goal is to avoid stringly-typed checks scattered across the lexer/assembler/
//! evaluator. Instead, callers work with **stable IDs** (`RegisterId`, `OperatorId`) and look up
//! spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no token types, no IO, no side effects.
//! - The lexer/assembler enforce syntax; registries provide spellings and metadata for shared
//!   use (diagnostics, docs, the CLI debug views).
//!
//! ## Examples
//! ```rust
//! use phonema_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("oo"), Some(OperatorId::Loop));
//! assert_eq!(operators::spelling_of(OperatorId::Assign), "a");
//! ```

pub mod operators;
pub mod registers;
pub mod registry;
