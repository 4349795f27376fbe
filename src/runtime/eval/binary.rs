//! Binary-shape operator semantics.

use phonema_core::comparable;
use phonema_core::lang::operators::OperatorId;
use phonema_core::lang::registers::RegisterId;
use phonema_syntax::ast::{Operand, Spanned};
use phonema_syntax::diagnostics::{EngineError, errors};

use super::{read_operand, write_operand};
use crate::runtime::store::RegisterStore;
use crate::runtime::value::Value;

pub(super) fn execute(
    op: OperatorId,
    left: &Spanned<Operand>,
    right: &Spanned<Operand>,
    store: &mut RegisterStore,
) -> Result<(), EngineError> {
    match op {
        OperatorId::Assign => assign(left, right, store),
        OperatorId::Equals => equals(left, right, store),
        OperatorId::AndInit => and_init(left, right, store),
        OperatorId::OrOutput => or(left, right, store),
        OperatorId::Analyze => analyze(left, right, store),
        OperatorId::Combine => combine(left, right, store),
        _ => unreachable!("assembler never places {op:?} in the binary shape"),
    }
}

/// `left a right`: left ← current value of right.
///
/// Coercion is implicit only into the generic slot; typed slots reject mismatches.
fn assign(
    left: &Spanned<Operand>,
    right: &Spanned<Operand>,
    store: &mut RegisterStore,
) -> Result<(), EngineError> {
    let value = read_operand(right, store)?;
    write_operand(left, value, store)
}

/// `left e right`: b ← (left == right), type-aware; cross-type is always false.
fn equals(
    left: &Spanned<Operand>,
    right: &Spanned<Operand>,
    store: &mut RegisterStore,
) -> Result<(), EngineError> {
    let lv = read_operand(left, store)?;
    let rv = read_operand(right, store)?;
    let equal = comparable(lv.ty(), rv.ty()) && lv == rv;
    store
        .set(RegisterId::Bool, Value::Bool(equal))
        .expect("the Boolean slot accepts Boolean values");
    Ok(())
}

/// `left i right`: Boolean AND into b; also first-time initialization of left.
///
/// An untouched left register is initialized to the right operand's value (through the
/// normal slot-type check). If afterwards both operands are Boolean, b receives their AND.
/// A statement that neither initializes nor ANDs is a type error.
fn and_init(
    left: &Spanned<Operand>,
    right: &Spanned<Operand>,
    store: &mut RegisterStore,
) -> Result<(), EngineError> {
    let rv = read_operand(right, store)?;

    let mut did_init = false;
    if let Operand::Register(id) = left.node {
        if !store.is_initialized(id) {
            write_operand(left, rv.clone(), store)?;
            did_init = true;
        }
    }

    let lv = read_operand(left, store)?;
    match (&lv, &rv) {
        (Value::Bool(a), Value::Bool(b)) => {
            store
                .set(RegisterId::Bool, Value::Bool(*a && *b))
                .expect("the Boolean slot accepts Boolean values");
            Ok(())
        }
        _ if did_init => Ok(()),
        _ => Err(errors::not_boolean(
            "Operands of 'and_init'",
            &format!("{} and {}", lv.ty(), rv.ty()),
            left.span.merge(right.span),
        )),
    }
}

/// `left o right`: b ← (left OR right), Boolean only.
fn or(
    left: &Spanned<Operand>,
    right: &Spanned<Operand>,
    store: &mut RegisterStore,
) -> Result<(), EngineError> {
    let lv = read_operand(left, store)?;
    let rv = read_operand(right, store)?;
    match (&lv, &rv) {
        (Value::Bool(a), Value::Bool(b)) => {
            store
                .set(RegisterId::Bool, Value::Bool(*a || *b))
                .expect("the Boolean slot accepts Boolean values");
            Ok(())
        }
        _ => Err(errors::not_boolean(
            "Operands of binary 'or_output'",
            &format!("{} and {}", lv.ty(), rv.ty()),
            left.span.merge(right.span),
        )),
    }
}

/// `left ai right`: aggregate the list held by left, parameterized by right.
///
/// The right operand selects the aggregate: a Numeric parameter selects the numeric sum
/// (every element must be Numeric), anything else selects the element count. The numeric
/// result lands in register `n`, keeping the list slot a list. This is the engine's
/// aggregate extension point: richer parameterizations slot in here.
fn analyze(
    left: &Spanned<Operand>,
    right: &Spanned<Operand>,
    store: &mut RegisterStore,
) -> Result<(), EngineError> {
    let lv = read_operand(left, store)?;
    let Value::List(items) = lv else {
        return Err(errors::not_a_list(
            "Left operand of 'analyze'",
            &lv.ty().to_string(),
            left.span,
        ));
    };

    let rv = read_operand(right, store)?;
    let result = match rv {
        Value::Num(_) => {
            let mut sum = 0i64;
            for item in &items {
                let Value::Num(n) = item else {
                    return Err(EngineError::type_error(
                        format!("'analyze' sum requires Numeric elements, found {}", item.ty()),
                        left.span,
                    ));
                };
                sum += *n;
            }
            sum
        }
        _ => items.len() as i64,
    };

    store
        .set(RegisterId::Num, Value::Num(result))
        .expect("the Numeric slot accepts Numeric values");
    Ok(())
}

/// `left oi right`: left ← left combined with right: like types only.
fn combine(
    left: &Spanned<Operand>,
    right: &Spanned<Operand>,
    store: &mut RegisterStore,
) -> Result<(), EngineError> {
    let lv = read_operand(left, store)?;
    let rv = read_operand(right, store)?;
    let combined = match (lv, rv) {
        (Value::List(mut a), Value::List(b)) => {
            a.extend(b);
            Value::List(a)
        }
        (Value::Num(a), Value::Num(b)) => Value::Num(a + b),
        (Value::Str(mut a), Value::Str(b)) => {
            a.push_str(&b);
            Value::Str(a)
        }
        (lv, rv) => {
            return Err(EngineError::type_error(
                format!("'combine' cannot join {} with {}", lv.ty(), rv.ty()),
                left.span.merge(right.span),
            )
            .with_note("Lists concatenate, Numerics sum, Strings concatenate; other pairs are rejected"));
        }
    };
    write_operand(left, combined, store)
}
