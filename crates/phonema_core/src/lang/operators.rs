//! Operator vocabulary.
//!
//! This module defines the canonical vowel operator set (short vowels like `a`, long vowels and
//! diphthongs like `aa`, control digraphs like `oo`) along with shape and class metadata.
//!
//! ## Notes
//! - Lookup via [`from_str`] is over exact spellings; the lexer's maximal-munch rule decides
//!   where spellings begin and end.
//! - Two-letter spellings are listed in [`TWO_LETTER`]; the lexer must try these before single
//!   letters so `aa` never lexes as two `a`s.
//!
//! ## Examples
//! ```rust
//! use phonema_core::lang::operators::{self, OperatorId, Shape};
//!
//! assert_eq!(operators::from_str("ai"), Some(OperatorId::Analyze));
//! assert_eq!(operators::info_for(OperatorId::Equals).shape, Shape::Binary);
//! ```

use super::registry::{Example, Stability, ex};

/// Define which statement shape an operator participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Unary,
    Binary,
    /// Valid in both the unary and binary shape (`o`: output vs Boolean OR).
    Either,
    /// Heads a control statement with a condition operand and a nested body.
    Control,
}

/// Define the lexical class of an operator spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelClass {
    Short,
    Long,
    Digraph,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Short vowels
    Assign,
    Equals,
    AndInit,
    OrOutput,
    Negate,

    // Long vowels / diphthongs
    Call,
    Analyze,
    Combine,

    // Control digraphs
    If,
    Loop,
    Syscall,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `spelling` is the single accepted spelling; phoneme operators have no synonyms.
/// - `name` is the operator code used in diagnostics and debug views.
/// - `class` decides lexer token category; `shape` decides assembler dispatch.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub name: &'static str,
    pub class: VowelClass,
    pub shape: Shape,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Short vowels
    op(
        OperatorId::Assign,
        "a",
        "assign",
        VowelClass::Short,
        Shape::Binary,
        Stability::Stable,
        &[ex("d a n", "assign the value of n to d")],
    ),
    op(
        OperatorId::Equals,
        "e",
        "equals",
        VowelClass::Short,
        Shape::Binary,
        Stability::Stable,
        &[ex("n e s", "write (n == s) into b; cross-type is always false")],
    ),
    op(
        OperatorId::AndInit,
        "i",
        "and_init",
        VowelClass::Short,
        Shape::Binary,
        Stability::Stable,
        &[ex("b i d", "Boolean AND into b; also first-time initialization")],
    ),
    op(
        OperatorId::OrOutput,
        "o",
        "or_output",
        VowelClass::Short,
        Shape::Either,
        Stability::Stable,
        &[
            ex("o s", "emit the string register to the output sink"),
            ex("b o d", "Boolean OR into b"),
        ],
    ),
    op(
        OperatorId::Negate,
        "u",
        "unary",
        VowelClass::Short,
        Shape::Unary,
        Stability::Stable,
        &[ex("u b", "negate the Boolean register in place")],
    ),
    // Long vowels / diphthongs
    op(
        OperatorId::Call,
        "aa",
        "call",
        VowelClass::Long,
        Shape::Unary,
        Stability::Stable,
        &[ex("aa p", "mark the process slot executed")],
    ),
    op(
        OperatorId::Analyze,
        "ai",
        "analyze",
        VowelClass::Long,
        Shape::Binary,
        Stability::Stable,
        &[ex("l ai d", "aggregate the list, parameterized by d")],
    ),
    op(
        OperatorId::Combine,
        "oi",
        "combine",
        VowelClass::Long,
        Shape::Binary,
        Stability::Stable,
        &[ex("n oi n", "numeric sum; lists and strings concatenate")],
    ),
    // Control digraphs
    op(
        OperatorId::If,
        "ea",
        "if",
        VowelClass::Digraph,
        Shape::Control,
        Stability::Stable,
        &[ex("ea b o s", "if b is true, emit s")],
    ),
    op(
        OperatorId::Loop,
        "oo",
        "loop",
        VowelClass::Digraph,
        Shape::Control,
        Stability::Stable,
        &[ex("oo l o x", "for each element of l, emit it via binding x")],
    ),
    op(
        OperatorId::Syscall,
        "io",
        "syscall",
        VowelClass::Digraph,
        Shape::Unary,
        Stability::ExtensionPoint,
        &[ex("io n", "reserved for environment interaction; currently identity")],
    ),
];

/// The two-letter spellings, in the order the lexer probes them.
///
/// Long vowels (call class) come before digraphs so that ties on the same letter pair resolve
/// the same way everywhere. No pair appears in both classes today, so the ordering is a
/// stability guarantee rather than a live tie-break.
pub const TWO_LETTER: &[&str] = &["aa", "ai", "oi", "ea", "oo", "io"];

/// The short vowel letters.
pub const SHORT_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Resolve a spelling to an operator id.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// Return the canonical spelling for an operator id.
pub fn spelling_of(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the operator code name (as used in diagnostics and debug views).
pub fn name_of(id: OperatorId) -> &'static str {
    info_for(id).name
}

/// Return the full metadata entry for an operator id.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Check whether a letter is a vowel (and therefore never part of a DataCluster).
pub fn is_vowel(c: char) -> bool {
    SHORT_VOWELS.contains(&c)
}

const fn op(
    id: OperatorId,
    spelling: &'static str,
    name: &'static str,
    class: VowelClass,
    shape: Shape,
    stability: Stability,
    examples: &'static [Example],
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        name,
        class,
        shape,
        stability,
        examples,
    }
}
