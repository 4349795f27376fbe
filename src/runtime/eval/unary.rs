//! Unary-shape operator semantics.

use phonema_core::lang::operators::OperatorId;
use phonema_core::lang::registers::RegisterId;
use phonema_syntax::ast::{Operand, Spanned};
use phonema_syntax::diagnostics::EngineError;

use super::{read_operand, write_operand};
use crate::runtime::store::RegisterStore;
use crate::runtime::value::{ProcessState, Value};

pub(super) fn execute(
    op: OperatorId,
    operand: &Spanned<Operand>,
    store: &mut RegisterStore,
    out: &mut Vec<Value>,
) -> Result<(), EngineError> {
    match op {
        OperatorId::OrOutput => output(operand, store, out),
        OperatorId::Negate => negate(operand, store),
        OperatorId::Call => call(operand, store),
        OperatorId::Syscall => syscall(operand, store),
        _ => unreachable!("assembler never places {op:?} in the unary shape"),
    }
}

/// `o x`: emit the operand's value to the output sink.
fn output(
    operand: &Spanned<Operand>,
    store: &RegisterStore,
    out: &mut Vec<Value>,
) -> Result<(), EngineError> {
    let value = read_operand(operand, store)?;
    out.push(value);
    Ok(())
}

/// `u x`: negate the operand in place: Boolean NOT, Numeric arithmetic negation.
fn negate(operand: &Spanned<Operand>, store: &mut RegisterStore) -> Result<(), EngineError> {
    let value = read_operand(operand, store)?;
    let negated = match value {
        Value::Bool(b) => Value::Bool(!b),
        Value::Num(n) => Value::Num(-n),
        other => {
            return Err(EngineError::type_error(
                format!("'unary' negates Boolean or Numeric values, found {}", other.ty()),
                operand.span,
            ));
        }
    };
    write_operand(operand, negated, store)
}

/// `aa p`: mark the process slot executed.
///
/// The operand is evaluated as a sub-program pointer, so it must be process-typed; today
/// the only process-typed operand is the `p` register itself.
fn call(operand: &Spanned<Operand>, store: &mut RegisterStore) -> Result<(), EngineError> {
    let value = read_operand(operand, store)?;
    let Value::Process(_) = value else {
        return Err(EngineError::type_error(
            format!("'call' requires a Process operand, found {}", value.ty()),
            operand.span,
        ));
    };

    store
        .set(RegisterId::Proc, Value::Process(ProcessState::Executed))
        .expect("the Process slot accepts Process values");
    Ok(())
}

/// `io x`: reserved for environment interaction.
///
/// Minimal implementation: reads the operand and returns it unchanged. This is the
/// engine's environment extension point; a host that wants `io` to read input into a
/// register replaces this body.
fn syscall(operand: &Spanned<Operand>, store: &mut RegisterStore) -> Result<(), EngineError> {
    let value = read_operand(operand, store)?;
    tracing::debug!(operand = %operand.node, value = %value, "syscall is a no-op");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::eval::execute;
    use phonema_syntax::assembler::assemble;
    use phonema_syntax::diagnostics::ErrorKind;
    use phonema_syntax::lexer::lex;

    fn run_stmt(source: &str, store: &mut RegisterStore) -> Result<Vec<Value>, EngineError> {
        let program = assemble(&lex(source).unwrap()).unwrap();
        let mut out = Vec::new();
        for stmt in &program.statements {
            execute(stmt, store, &mut out)?;
        }
        Ok(out)
    }

    #[test]
    fn test_output_emits_in_order() {
        let mut store = RegisterStore::new();
        store.set(RegisterId::Str, Value::Str("hi".to_string())).unwrap();
        store.set(RegisterId::Num, Value::Num(3)).unwrap();
        let out = run_stmt("o s o n", &mut store).unwrap();
        assert_eq!(out, vec![Value::Str("hi".to_string()), Value::Num(3)]);
    }

    #[test]
    fn test_negate_boolean_and_numeric() {
        let mut store = RegisterStore::new();
        store.set(RegisterId::Bool, Value::Bool(true)).unwrap();
        run_stmt("u b", &mut store).unwrap();
        assert_eq!(store.get(RegisterId::Bool), Value::Bool(false));

        store.set(RegisterId::Num, Value::Num(5)).unwrap();
        run_stmt("u n", &mut store).unwrap();
        assert_eq!(store.get(RegisterId::Num), Value::Num(-5));
    }

    #[test]
    fn test_negate_rejects_other_types() {
        let mut store = RegisterStore::new();
        let err = run_stmt("u s", &mut store).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Type);
        let err = run_stmt("u p", &mut store).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Type);
    }

    #[test]
    fn test_call_marks_process_executed() {
        let mut store = RegisterStore::new();
        assert_eq!(store.get(RegisterId::Proc), Value::Process(ProcessState::Idle));
        run_stmt("aa p", &mut store).unwrap();
        assert_eq!(store.get(RegisterId::Proc), Value::Process(ProcessState::Executed));
    }

    #[test]
    fn test_call_rejects_non_process_operand() {
        let mut store = RegisterStore::new();
        let err = run_stmt("aa n", &mut store).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Type);
    }

    #[test]
    fn test_syscall_is_identity() {
        let mut store = RegisterStore::new();
        store.set(RegisterId::Num, Value::Num(7)).unwrap();
        let before = store.clone();
        let out = run_stmt("io n", &mut store).unwrap();
        assert!(out.is_empty());
        assert_eq!(store, before);
    }
}
