//! Control-shape operator semantics.
//!
//! Control statement states (simplified):
//!
//! Pending → Evaluating-Condition → Executing-Body → Done   (if, condition true)
//!                                → Skipped        → Done   (if, condition false)
//! Pending → Evaluating-Condition → Iterating(k=0..n) → Done (loop)
//!
//! The terminal state is always Done; no statement re-enters evaluation, and loop
//! iterations run strictly in list order with no overlap.

use phonema_core::lang::operators::OperatorId;
use phonema_syntax::ast::{Operand, Spanned, Statement};
use phonema_syntax::diagnostics::{EngineError, errors};

use super::{execute as execute_statement, read_operand};
use crate::runtime::store::RegisterStore;
use crate::runtime::value::Value;

pub(super) fn execute(
    op: OperatorId,
    condition: &Spanned<Operand>,
    body: &[Spanned<Statement>],
    binding: Option<char>,
    store: &mut RegisterStore,
    out: &mut Vec<Value>,
) -> Result<(), EngineError> {
    match op {
        OperatorId::If => conditional(condition, body, store, out),
        OperatorId::Loop => iterate(condition, body, binding, store, out),
        _ => unreachable!("assembler never places {op:?} in the control shape"),
    }
}

/// `ea b body`: execute the body iff the condition is true. There is no else-branch.
fn conditional(
    condition: &Spanned<Operand>,
    body: &[Spanned<Statement>],
    store: &mut RegisterStore,
    out: &mut Vec<Value>,
) -> Result<(), EngineError> {
    let value = read_operand(condition, store)?;
    let Value::Bool(truth) = value else {
        return Err(errors::not_boolean(
            "Condition of 'if'",
            &value.ty().to_string(),
            condition.span,
        ));
    };

    if truth {
        for statement in body {
            execute_statement(statement, store, out)?;
        }
    }
    Ok(())
}

/// `oo l body`: execute the body once per element, in list order.
///
/// Each iteration binds the current element to the statement's implicit binding name for
/// that iteration only. The binding is removed (and any shadowed outer binding restored)
/// when the iteration ends, even if the iteration fails.
fn iterate(
    condition: &Spanned<Operand>,
    body: &[Spanned<Statement>],
    binding: Option<char>,
    store: &mut RegisterStore,
    out: &mut Vec<Value>,
) -> Result<(), EngineError> {
    let value = read_operand(condition, store)?;
    let Value::List(items) = value else {
        return Err(errors::not_a_list(
            "Condition of 'loop'",
            &value.ty().to_string(),
            condition.span,
        ));
    };
    let name = binding.expect("the assembler elects a binding for every loop");

    for item in items {
        let shadowed = store.bind(name, item);
        let result = body
            .iter()
            .try_for_each(|statement| execute_statement(statement, store, out));
        store.unbind(name, shadowed);
        result?;
    }
    Ok(())
}
