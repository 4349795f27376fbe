//! Runtime value representation.

use std::fmt;

use phonema_core::ValueTy;

/// State of the process marker register `p`.
///
/// The marker is opaque: it records whether a sub-block was executed and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessState {
    #[default]
    Idle,
    Executed,
}

/// A runtime value.
///
/// ## Notes
/// - Equality is type-aware: values of different variants are never equal, which is exactly
///   the language's cross-type comparison rule, so the derived `PartialEq` is the semantic
///   equality.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Num(i64),
    Str(String),
    List(Vec<Value>),
    Process(ProcessState),
}

impl Value {
    /// The type of this value, for policy decisions in `phonema_core`.
    pub fn ty(&self) -> ValueTy {
        match self {
            Value::Bool(_) => ValueTy::Bool,
            Value::Num(_) => ValueTy::Num,
            Value::Str(_) => ValueTy::Str,
            Value::List(_) => ValueTy::List,
            Value::Process(_) => ValueTy::Process,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Num(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Process(ProcessState::Idle) => write!(f, "idle"),
            Value::Process(ProcessState::Executed) => write!(f, "executed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_type_equality_is_false() {
        assert_ne!(Value::Num(5), Value::Str("5".to_string()));
        assert_ne!(Value::Bool(false), Value::Num(0));
        assert_ne!(Value::List(vec![]), Value::Str(String::new()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Num(-3).to_string(), "-3");
        assert_eq!(Value::Str("hi".to_string()).to_string(), "hi");
        assert_eq!(
            Value::List(vec![Value::Num(1), Value::Num(2), Value::Num(3)]).to_string(),
            "[1, 2, 3]"
        );
        assert_eq!(Value::Process(ProcessState::Idle).to_string(), "idle");
    }
}
