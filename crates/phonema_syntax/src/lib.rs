//! Shared syntax frontend for the PhonemaScript engine: lexer, statement assembler, diagnostics.
//!
//! This crate is dependency-light and intended for reuse across the runtime, the CLI debug
//! views, and future interactive tooling.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not hold register state or execute
//!   statements.
//! - Vocabulary identity (registers/operators) comes from `phonema_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use phonema_syntax::{assembler, lexer};
//!
//! let tokens = lexer::lex("o s\n").unwrap();
//! let program = assembler::assemble(&tokens).unwrap();
//! assert_eq!(program.statements.len(), 1);
//! ```
//!
//! ## See also
//! - `phonema_core::lang` for registry-backed vocabulary (registers/operators).

pub mod assembler;
pub mod ast;
pub mod diagnostics;
pub mod lexer;
