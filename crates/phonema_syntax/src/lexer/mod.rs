//! Lexer for PhonemaScript phoneme streams.
//!
//! Handles segmentation including:
//! - Two-letter vowel combinations (`aa`, `ai`, `oi`, `ea`, `oo`, `io`)
//! - Short vowels (`a`, `e`, `i`, `o`, `u`)
//! - Maximal consonant runs as data clusters
//! - Statement terminators (line breaks and `.`)
//!
//! ## Segmentation rules (maximal munch)
//!
//! At each position the lexer tries, in order:
//! 1. the two-letter table — a matching pair always wins, so `aa` is never two `a`s;
//! 2. a single short vowel;
//! 3. a maximal run of consecutive consonant letters, emitted as one data cluster.
//!
//! Whitespace separates scans and never spans a match; it carries no other meaning. Any
//! character outside the phoneme alphabet is a lex error at that exact offset.

pub mod tokens;

pub use tokens::{Category, Token, TokenKind};

use phonema_core::lang::operators::{self, Shape};
use phonema_core::lang::registers;

use crate::ast::{Operand, Span};
use crate::diagnostics::{EngineError, errors};

/// Lexer for phoneme source text.
///
/// Converts source text into a stream of classified tokens. Tokens partition the input's
/// letters exactly: concatenating the raw text of every non-terminator token reproduces the
/// input with whitespace and terminators removed.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    tokens: Vec<Token>,
    errors: Vec<EngineError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Segment the entire source text.
    ///
    /// Returns a vector of tokens on success, or the accumulated errors on failure. The
    /// driver reports only the first error (the run is already doomed), but collecting all
    /// of them keeps the `--lex` debug view useful.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<EngineError>> {
        while !self.is_at_end() {
            self.scan_token();
        }

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            // Whitespace separates scans; a match never spans it.
            ' ' | '\t' | '\r' => {}

            // Statement boundaries.
            '\n' | '.' => self.add_terminator(start),

            _ if operators::is_vowel(c) => self.scan_vowel(start, c),

            _ if is_consonant(c) => self.scan_cluster(start),

            _ => {
                self.errors
                    .push(errors::unclassifiable_character(c, Span::new(start, self.current_pos)));
            }
        }
    }

    /// Scan a vowel: two-letter table first, then a short vowel.
    ///
    /// Every two-letter spelling starts with a vowel, so the probe lives here. The pair is
    /// only formed from adjacent letters; whitespace has already broken the window.
    fn scan_vowel(&mut self, start: usize, first: char) {
        if let Some(next) = self.peek() {
            let mut pair = String::with_capacity(2);
            pair.push(first);
            pair.push(next);
            if operators::TWO_LETTER.contains(&pair.as_str()) {
                self.advance();
                let id = operators::from_str(&pair).expect("two-letter spelling missing from registry");
                let span = Span::new(start, self.current_pos);
                let kind = if operators::info_for(id).shape == Shape::Control {
                    TokenKind::Control(id)
                } else {
                    TokenKind::Operation(id)
                };
                self.tokens.push(Token::new(kind, pair, span));
                return;
            }
        }

        // Single short vowel. Every short vowel is a registered operator.
        let id = operators::from_str(&first.to_string()).expect("short vowel missing from registry");
        self.tokens.push(Token::new(
            TokenKind::Operation(id),
            first.to_string(),
            Span::new(start, self.current_pos),
        ));
    }

    /// Scan a maximal run of consonant letters as one data cluster.
    ///
    /// The resolved symbol is the register keyed by the run's first letter, or a transient
    /// binding named by that letter when it is not a register key.
    fn scan_cluster(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_consonant(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];
        let first = spelling.chars().next().expect("cluster is non-empty");
        let symbol = match registers::from_key(first) {
            Some(id) => Operand::Register(id),
            None => Operand::Binding(first),
        };

        self.tokens.push(Token::new(
            TokenKind::Data(symbol),
            spelling,
            Span::new(start, self.current_pos),
        ));
    }

    /// Emit a statement terminator, collapsing runs and leading boundaries.
    fn add_terminator(&mut self, start: usize) {
        match self.tokens.last() {
            None => {}
            Some(t) if t.kind.is_terminator() => {}
            _ => self.tokens.push(Token::new(
                TokenKind::Terminator,
                "",
                Span::new(start, self.current_pos),
            )),
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character belongs to a data cluster (lowercase non-vowel letter).
fn is_consonant(c: char) -> bool {
    c.is_ascii_lowercase() && !operators::is_vowel(c)
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<EngineError>> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
