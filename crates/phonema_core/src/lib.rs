//! Provide the shared phoneme vocabulary and pure type policy for the PhonemaScript engine.
//!
//! This crate is intentionally small and dependency-light. It contains deterministic helpers that both:
//! - the syntax frontend can use for token classification decisions, and
//! - the runtime can use to enforce the same semantics at execution time.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, and no frontend-specific types.
//! - Current scope: register and vowel-operator vocabulary (registry-first const tables) and the
//!   slot/value type policy (which values a register slot accepts, which type a `combine` yields).

pub mod lang;

/// Represent the type of a runtime value.
///
/// This is not a concrete runtime type. It exists so the frontend and the evaluator agree on
/// typing decisions without sharing a value representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTy {
    Bool,
    Num,
    Str,
    List,
    Process,
}

impl std::fmt::Display for ValueTy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueTy::Bool => "Boolean",
            ValueTy::Num => "Numeric",
            ValueTy::Str => "String",
            ValueTy::List => "List",
            ValueTy::Process => "Process",
        };
        write!(f, "{name}")
    }
}

/// Represent the declared type of a register slot.
///
/// Five slots are concretely typed; `Generic` accepts any non-process value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotTy {
    Bool,
    Num,
    Str,
    List,
    Generic,
    Process,
}

impl std::fmt::Display for SlotTy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SlotTy::Bool => "Boolean",
            SlotTy::Num => "Numeric",
            SlotTy::Str => "String",
            SlotTy::List => "List",
            SlotTy::Generic => "Generic",
            SlotTy::Process => "Process",
        };
        write!(f, "{name}")
    }
}

/// Decide whether a slot accepts a value of the given type.
///
/// ## Notes
/// - `Generic` accepts every value type except `Process`: the generic slot ranges over
///   `Boolean | Numeric | String | List`, and process markers never leave the process slot.
///
/// ## Examples
/// ```rust
/// use phonema_core::{SlotTy, ValueTy, slot_accepts};
///
/// assert!(slot_accepts(SlotTy::Generic, ValueTy::Num));
/// assert!(!slot_accepts(SlotTy::Num, ValueTy::Str));
/// assert!(!slot_accepts(SlotTy::Generic, ValueTy::Process));
/// ```
pub fn slot_accepts(slot: SlotTy, value: ValueTy) -> bool {
    match slot {
        SlotTy::Bool => value == ValueTy::Bool,
        SlotTy::Num => value == ValueTy::Num,
        SlotTy::Str => value == ValueTy::Str,
        SlotTy::List => value == ValueTy::List,
        SlotTy::Generic => value != ValueTy::Process,
        SlotTy::Process => value == ValueTy::Process,
    }
}

/// Decide the result type of `combine` for a pair of operand types.
///
/// Returns `None` for pairs `combine` rejects: only like types combine, and only the three
/// concatenation/sum-capable types do.
///
/// ## Examples
/// ```rust
/// use phonema_core::{ValueTy, combine_result};
///
/// assert_eq!(combine_result(ValueTy::Num, ValueTy::Num), Some(ValueTy::Num));
/// assert_eq!(combine_result(ValueTy::Num, ValueTy::Str), None);
/// ```
pub fn combine_result(left: ValueTy, right: ValueTy) -> Option<ValueTy> {
    match (left, right) {
        (ValueTy::List, ValueTy::List) => Some(ValueTy::List),
        (ValueTy::Num, ValueTy::Num) => Some(ValueTy::Num),
        (ValueTy::Str, ValueTy::Str) => Some(ValueTy::Str),
        _ => None,
    }
}

/// Decide whether equality comparison across these types can ever be true.
///
/// Cross-type comparison is always false by language rule, so callers can short-circuit
/// without inspecting values.
pub fn comparable(left: ValueTy, right: ValueTy) -> bool {
    left == right
}
