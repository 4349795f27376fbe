//! Program driver: the end-to-end pipeline for one program run.
//!
//! Sequences lex → assemble → execute over a fresh or caller-provided store, collecting
//! every `o`-emitted value into an ordered output sequence. The driver fails fast: the
//! first lexical, syntactic, type, or undefined-register error aborts the run. Lexical and
//! syntactic errors abort before any statement executes; execution errors leave the store
//! in whatever state prior statements produced (no rollback; callers that need atomicity
//! snapshot the store first).

use phonema_syntax::assembler;
use phonema_syntax::diagnostics::EngineError;
use phonema_syntax::lexer;

use super::eval;
use super::store::RegisterStore;
use super::value::Value;

/// The observable result of a program run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// The register store as the program left it.
    pub store: RegisterStore,
    /// Every value emitted by unary `o`, in emission order.
    pub output: Vec<Value>,
}

/// Run a program against a fresh register store.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn run(source: &str) -> Result<RunOutcome, EngineError> {
    let mut store = RegisterStore::new();
    let output = run_with_store(source, &mut store)?;
    Ok(RunOutcome { store, output })
}

/// Run a program against an existing store (e.g. one carrying register presets).
///
/// On error the store keeps all mutations made by statements that completed before the
/// failure.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn run_with_store(source: &str, store: &mut RegisterStore) -> Result<Vec<Value>, EngineError> {
    let tokens = lexer::lex(source).map_err(first_error)?;
    let program = assembler::assemble(&tokens).map_err(first_error)?;
    tracing::debug!(statements = program.statements.len(), "program assembled");

    let mut output = Vec::new();
    for statement in &program.statements {
        eval::execute(statement, store, &mut output)?;
    }
    Ok(output)
}

/// The engine reports the first error in source order; the frontends collect more only for
/// their debug views.
fn first_error(errors: Vec<EngineError>) -> EngineError {
    errors
        .into_iter()
        .next()
        .expect("frontend failure always carries at least one error")
}
