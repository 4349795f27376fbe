//! The register store: six permanent typed slots plus loop-scoped bindings.
//!
//! The six registers exist for the entire program lifetime; they are never created or
//! destroyed, only overwritten. Bindings exist only during the loop iteration that created
//! them and are removed deterministically when that iteration ends, even if it fails.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use phonema_core::lang::registers::{self, RegisterId};
use phonema_core::{SlotTy, ValueTy, slot_accepts};

use super::value::{ProcessState, Value};

/// Error raised by [`RegisterStore::set`] when a typed slot rejects a value.
///
/// The store has no span information; the evaluator attaches the offending operand span when
/// surfacing this as an engine error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("register '{key}' holds {slot} values, cannot accept {found}")]
    SlotMismatch { key: char, slot: SlotTy, found: ValueTy },
}

/// The fixed register file of a program run.
///
/// Registers are addressed by [`RegisterId`] in constant time. The store also tracks which
/// registers have been written at least once, which gives `and_init` its first-write
/// initialization semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterStore {
    flag: bool,
    number: i64,
    text: String,
    items: Vec<Value>,
    data: Value,
    process: ProcessState,
    initialized: HashSet<RegisterId>,
    bindings: HashMap<char, Value>,
}

impl Default for RegisterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterStore {
    /// Create a store with every register at its documented initial value.
    pub fn new() -> Self {
        Self {
            flag: false,
            number: 0,
            text: String::new(),
            items: Vec::new(),
            data: Value::Str(String::new()),
            process: ProcessState::Idle,
            initialized: HashSet::new(),
            bindings: HashMap::new(),
        }
    }

    /// Read a register's current value.
    pub fn get(&self, id: RegisterId) -> Value {
        match id {
            RegisterId::Bool => Value::Bool(self.flag),
            RegisterId::Num => Value::Num(self.number),
            RegisterId::Str => Value::Str(self.text.clone()),
            RegisterId::List => Value::List(self.items.clone()),
            RegisterId::Data => self.data.clone(),
            RegisterId::Proc => Value::Process(self.process),
        }
    }

    /// Overwrite a register, enforcing its slot type.
    ///
    /// Typed slots (`b,n,s,l,p`) reject values of any other type; only the generic slot `d`
    /// coerces, and it still rejects process markers.
    pub fn set(&mut self, id: RegisterId, value: Value) -> Result<(), StoreError> {
        let slot = registers::slot_of(id);
        if !slot_accepts(slot, value.ty()) {
            return Err(StoreError::SlotMismatch {
                key: registers::key_of(id),
                slot,
                found: value.ty(),
            });
        }

        match (id, value) {
            (RegisterId::Bool, Value::Bool(b)) => self.flag = b,
            (RegisterId::Num, Value::Num(n)) => self.number = n,
            (RegisterId::Str, Value::Str(s)) => self.text = s,
            (RegisterId::List, Value::List(items)) => self.items = items,
            (RegisterId::Data, v) => self.data = v,
            (RegisterId::Proc, Value::Process(p)) => self.process = p,
            _ => unreachable!("slot_accepts admitted a mismatched value"),
        }
        self.initialized.insert(id);
        Ok(())
    }

    /// Whether a register has been written at least once this run.
    pub fn is_initialized(&self, id: RegisterId) -> bool {
        self.initialized.contains(&id)
    }

    /// Read an active loop binding.
    pub fn binding(&self, name: char) -> Option<&Value> {
        self.bindings.get(&name)
    }

    /// Install a loop binding, returning any value it shadows.
    ///
    /// The caller must pass the shadowed value back to [`unbind`](Self::unbind) when the
    /// iteration ends so nested loops restore outer bindings.
    pub fn bind(&mut self, name: char, value: Value) -> Option<Value> {
        self.bindings.insert(name, value)
    }

    /// Remove a loop binding, reinstating the shadowed value if there was one.
    pub fn unbind(&mut self, name: char, shadowed: Option<Value>) {
        match shadowed {
            Some(value) => {
                self.bindings.insert(name, value);
            }
            None => {
                self.bindings.remove(&name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_values() {
        let store = RegisterStore::new();
        assert_eq!(store.get(RegisterId::Bool), Value::Bool(false));
        assert_eq!(store.get(RegisterId::Num), Value::Num(0));
        assert_eq!(store.get(RegisterId::Str), Value::Str(String::new()));
        assert_eq!(store.get(RegisterId::List), Value::List(vec![]));
        assert_eq!(store.get(RegisterId::Data), Value::Str(String::new()));
        assert_eq!(store.get(RegisterId::Proc), Value::Process(ProcessState::Idle));
        for r in phonema_core::lang::registers::REGISTERS {
            assert!(!store.is_initialized(r.id));
        }
    }

    #[test]
    fn test_typed_slot_rejects_mismatch() {
        let mut store = RegisterStore::new();
        let err = store.set(RegisterId::Num, Value::Str("5".to_string())).unwrap_err();
        assert_eq!(
            err,
            StoreError::SlotMismatch {
                key: 'n',
                slot: SlotTy::Num,
                found: ValueTy::Str,
            }
        );
        // The failed write does not initialize the register.
        assert!(!store.is_initialized(RegisterId::Num));
    }

    #[test]
    fn test_generic_slot_accepts_any_value_type() {
        let mut store = RegisterStore::new();
        for v in [
            Value::Bool(true),
            Value::Num(7),
            Value::Str("x".to_string()),
            Value::List(vec![Value::Num(1)]),
        ] {
            store.set(RegisterId::Data, v.clone()).unwrap();
            assert_eq!(store.get(RegisterId::Data), v);
        }
        assert!(store.set(RegisterId::Data, Value::Process(ProcessState::Idle)).is_err());
    }

    #[test]
    fn test_set_marks_initialized() {
        let mut store = RegisterStore::new();
        store.set(RegisterId::Bool, Value::Bool(true)).unwrap();
        assert!(store.is_initialized(RegisterId::Bool));
        assert!(!store.is_initialized(RegisterId::Num));
    }

    #[test]
    fn test_bindings_shadow_and_restore() {
        let mut store = RegisterStore::new();
        assert_eq!(store.bind('x', Value::Num(1)), None);
        let shadowed = store.bind('x', Value::Num(2));
        assert_eq!(shadowed, Some(Value::Num(1)));
        assert_eq!(store.binding('x'), Some(&Value::Num(2)));

        store.unbind('x', shadowed);
        assert_eq!(store.binding('x'), Some(&Value::Num(1)));

        store.unbind('x', None);
        assert_eq!(store.binding('x'), None);
    }
}
