//! Runtime for assembled PhonemaScript programs.
//!
//! The runtime is deliberately small and explicit:
//!
//! - `value` - the runtime value representation shared by registers, bindings, and the
//!   output sink.
//! - `store` - the register store: six permanent typed slots plus loop-scoped bindings.
//! - `eval` - the evaluator: executes one statement against a store.
//! - `driver` - the program driver: lex → assemble → execute, collecting emissions.
//!
//! ## Design
//!
//! The store is an explicit value passed into every call, never ambient global state. This
//! keeps runs independent: multiple programs can execute against separate stores with no
//! cross-run leakage. Execution is purely sequential; a `&mut RegisterStore` borrow is the
//! serialization boundary for anything exposing the engine as a service.

pub mod driver;
pub mod eval;
pub mod store;
pub mod value;
