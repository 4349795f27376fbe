//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use phonema_syntax::diagnostics::{self, EngineError};
use phonema_syntax::{assembler, lexer};

use crate::runtime::driver;

use super::{CliError, CliResult, ExitCode};

/// Read a source file, mapping IO failures to CLI errors.
fn read_source(path: &str) -> CliResult<String> {
    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading {}: {}", path, e)))
}

/// Render accumulated frontend errors into one CLI failure.
fn report_errors(path: &str, source: &str, errors: &[EngineError]) -> CliError {
    let mut msg = String::new();
    for err in errors {
        msg.push_str(&diagnostics::format_error(path, source, err));
    }
    CliError::failure(msg.trim_end().to_string())
}

/// `--lex`: print the classified token stream.
pub fn lex_file(path: &str) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let tokens = lexer::lex(&source).map_err(|errs| report_errors(path, &source, &errs))?;

    for token in &tokens {
        match token.kind.category() {
            Some(category) => println!(
                "{:>4}..{:<4} {:<12} {}",
                token.span.start, token.span.end, category.to_string(), token.text
            ),
            None => println!("{:>4}..{:<4} {:<12}", token.span.start, token.span.end, "Terminator"),
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// `--parse`: print the assembled statements.
pub fn parse_file(path: &str) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let tokens = lexer::lex(&source).map_err(|errs| report_errors(path, &source, &errs))?;
    let program = assembler::assemble(&tokens).map_err(|errs| report_errors(path, &source, &errs))?;

    for statement in &program.statements {
        println!("{}", statement.node);
    }
    Ok(ExitCode::SUCCESS)
}

/// `run <file>`: execute a program from a file.
pub fn run_file(path: &str) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    run_source(path, &source)
}

/// Execute phoneme source, printing each emitted value on its own line.
pub fn run_source(name: &str, source: &str) -> CliResult<ExitCode> {
    match driver::run(source) {
        Ok(outcome) => {
            for value in &outcome.output {
                println!("{value}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let rendered = diagnostics::format_error(name, source, &err);
            Err(CliError::failure(rendered.trim_end().to_string()))
        }
    }
}
