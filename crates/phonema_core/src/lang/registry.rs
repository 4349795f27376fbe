//! Shareable metadata for `phonema_core::lang` registries.
//!
//! The `phonema_core::lang` module is a set of **registry-first** vocabularies: register letters
//! and vowel operators. This submodule provides the small, dependency-free metadata types that
//! are reused across both registries.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in
//!   `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules still lives
//!   in the lexer/assembler.

/// Describe the lifecycle status of a vocabulary item.
///
/// ## Notes
/// - This is intended for docs/tooling (e.g. to flag extension-point operators), not for
///   feature-gating by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    /// Reserved extension point: accepted by the lexer, minimally implemented by the evaluator.
    ExtensionPoint,
}

/// Represent a small example snippet for documentation.
///
/// ## Notes
/// - `code` is the example body, in phoneme notation.
/// - `note` is a short explanation (one sentence).
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: &'static str,
}

/// Shorthand constructor so registry tables stay readable.
pub const fn ex(code: &'static str, note: &'static str) -> Example {
    Example { code, note }
}
