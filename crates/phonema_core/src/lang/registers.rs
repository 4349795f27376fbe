//! Define the register vocabulary: the six permanently-allocated typed slots.
//!
//! This module is the single source of truth for register letters: a stable identifier
//! ([`RegisterId`]) plus a const metadata table ([`REGISTERS`]) that records key letters, slot
//! types, and initial values.
//!
//! ## Notes
//! - A consonant cluster resolves to the register whose key equals the cluster's **first**
//!   letter; any other first letter names a transient loop-scoped binding, which is not a
//!   register and has no entry here.
//! - Lookup via [`from_key`] is over single letters, not cluster spellings.
//!
//! ## Examples
//! ```rust
//! use phonema_core::lang::registers::{self, RegisterId};
//!
//! assert_eq!(registers::from_key('n'), Some(RegisterId::Num));
//! assert_eq!(registers::key_of(RegisterId::List), 'l');
//! assert_eq!(registers::from_key('x'), None); // binding, not a register
//! ```
//!
//! ## See also
//! - [`crate::lang::operators`] for the vowel operator registry.

use super::registry::{Example, Stability, ex};
use crate::SlotTy;

/// Stable identifier for every register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterId {
    /// `b` — Boolean slot.
    Bool,
    /// `n` — Numeric slot.
    Num,
    /// `s` — String slot.
    Str,
    /// `l` — List slot.
    List,
    /// `d` — Generic data slot.
    Data,
    /// `p` — Process marker slot.
    Proc,
}

/// Metadata for a register.
///
/// ## Notes
/// - `initial` is the documented initial value; the store is the source of truth for the
///   concrete representation.
#[derive(Debug, Clone, Copy)]
pub struct RegisterInfo {
    pub id: RegisterId,
    pub key: char,
    pub slot: SlotTy,
    pub initial: &'static str,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all registers.
pub const REGISTERS: &[RegisterInfo] = &[
    RegisterInfo {
        id: RegisterId::Bool,
        key: 'b',
        slot: SlotTy::Bool,
        initial: "false",
        stability: Stability::Stable,
        examples: &[ex("n e s", "writes the comparison result into b")],
    },
    RegisterInfo {
        id: RegisterId::Num,
        key: 'n',
        slot: SlotTy::Num,
        initial: "0",
        stability: Stability::Stable,
        examples: &[ex("d a n", "assign the value of n to d")],
    },
    RegisterInfo {
        id: RegisterId::Str,
        key: 's',
        slot: SlotTy::Str,
        initial: "\"\"",
        stability: Stability::Stable,
        examples: &[ex("o s", "output the string register")],
    },
    RegisterInfo {
        id: RegisterId::List,
        key: 'l',
        slot: SlotTy::List,
        initial: "empty list",
        stability: Stability::Stable,
        examples: &[ex("oo l o x", "iterate the list, emitting each element")],
    },
    RegisterInfo {
        id: RegisterId::Data,
        key: 'd',
        slot: SlotTy::Generic,
        initial: "\"\"",
        stability: Stability::Stable,
        examples: &[ex("d a n", "the generic slot accepts any value")],
    },
    RegisterInfo {
        id: RegisterId::Proc,
        key: 'p',
        slot: SlotTy::Process,
        initial: "idle",
        stability: Stability::Stable,
        examples: &[ex("aa p", "mark the process slot executed")],
    },
];

/// Resolve a key letter to a register id, if reserved.
pub fn from_key(key: char) -> Option<RegisterId> {
    REGISTERS.iter().find(|r| r.key == key).map(|r| r.id)
}

/// Return the key letter for a register id.
pub fn key_of(id: RegisterId) -> char {
    info_for(id).key
}

/// Return the declared slot type for a register id.
pub fn slot_of(id: RegisterId) -> SlotTy {
    info_for(id).slot
}

/// Return the full metadata entry for a register id.
pub fn info_for(id: RegisterId) -> &'static RegisterInfo {
    REGISTERS.iter().find(|r| r.id == id).expect("register info missing")
}
