//! Evaluator for assembled statements.
//!
//! `execute` dispatches on statement shape; the per-shape modules hold the operator
//! semantics:
//!
//! - `binary` - assign, equals, and_init, or (binary form), analyze, combine
//! - `unary` - output, unary negation, call, syscall
//! - `control` - if and loop
//!
//! All evaluation is total over valid inputs: every failure is a type error or an undefined
//! register error carrying the offending operand's span. The store is mutated in place;
//! there is no rollback on failure.

mod binary;
mod control;
mod unary;

use phonema_syntax::ast::{Operand, Spanned, Statement};
use phonema_syntax::diagnostics::{EngineError, errors};

use super::store::{RegisterStore, StoreError};
use super::value::Value;

/// Execute one statement against the store, appending any emissions to `out`.
pub fn execute(
    statement: &Spanned<Statement>,
    store: &mut RegisterStore,
    out: &mut Vec<Value>,
) -> Result<(), EngineError> {
    match &statement.node {
        Statement::Binary { op, left, right } => binary::execute(*op, left, right, store),
        Statement::Unary { op, operand } => unary::execute(*op, operand, store, out),
        Statement::Control {
            op,
            condition,
            body,
            binding,
        } => control::execute(*op, condition, body, *binding, store, out),
    }
}

/// Read an operand's current value: a register read, or an active loop binding.
///
/// A binding operand outside the loop scope that created it is an undefined register error.
fn read_operand(operand: &Spanned<Operand>, store: &RegisterStore) -> Result<Value, EngineError> {
    match operand.node {
        Operand::Register(id) => Ok(store.get(id)),
        Operand::Binding(name) => store
            .binding(name)
            .cloned()
            .ok_or_else(|| errors::undefined_binding(name, operand.span)),
    }
}

/// Write a value through an operand: a typed register write, or a rebind of an active
/// loop binding.
fn write_operand(
    operand: &Spanned<Operand>,
    value: Value,
    store: &mut RegisterStore,
) -> Result<(), EngineError> {
    match operand.node {
        Operand::Register(id) => store.set(id, value).map_err(|e| match e {
            StoreError::SlotMismatch { key, slot, found } => {
                errors::slot_mismatch(key, &slot.to_string(), &found.to_string(), operand.span)
            }
        }),
        Operand::Binding(name) => {
            if store.binding(name).is_none() {
                return Err(errors::undefined_binding(name, operand.span));
            }
            store.bind(name, value);
            Ok(())
        }
    }
}
