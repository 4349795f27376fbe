//! CLI module for the PhonemaScript engine
//!
//! This module provides the command-line interface for the engine.
//!
//! ## Commands
//!
//! - `run <file>` - Run a phoneme program from a file
//! - `run -c <code>` - Run inline phoneme source
//! - `--lex <file>` - Print the classified token stream (debug)
//! - `--parse <file>` - Print the assembled statements (debug)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// ASCII art logo - embedded at compile time from assets/logo.txt
const LOGO: &str = include_str!("../../assets/logo.txt");
const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The PhonemaScript engine
#[derive(Parser, Debug)]
#[command(name = "phonema")]
#[command(version = VERSION)]
#[command(about = "The PhonemaScript phoneme execution engine", long_about = None)]
#[command(before_help = LOGO)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to run (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    // Debug/development flags
    /// Segment only, printing the token stream (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Assemble only, printing the statements (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a phoneme program
    Run {
        /// Source file to run
        #[arg(value_name = "FILE", conflicts_with = "command")]
        file: Option<PathBuf>,
        /// Run inline source code
        #[arg(short = 'c', long = "command", value_name = "CODE")]
        command: Option<String>,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    // Print the logo before clap renders help
    if env::args().len() == 1
        || env::args().any(|a| a == "--help" || a == "-h" || a == "--version" || a == "-V")
    {
        print_logo();
    }

    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file.to_string_lossy());
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file.to_string_lossy());
    }

    match cli.command {
        Some(Command::Run { file, command }) => execute_run(file, command),
        None => {
            // Default: run the file if provided
            if let Some(file) = cli.file {
                commands::run_file(&file.to_string_lossy())
            } else {
                // No command and no file - show help
                Err(CliError::new("", ExitCode::FAILURE))
            }
        }
    }
}

/// Handle the `run` subcommand with its various forms.
fn execute_run(file: Option<PathBuf>, code: Option<String>) -> CliResult<ExitCode> {
    if let Some(code) = code {
        if code.is_empty() {
            return Err(CliError::failure(
                "Error: -c/--command requires source code string",
            ));
        }
        commands::run_source("<command>", &code)
    } else if let Some(file) = file {
        commands::run_file(&file.to_string_lossy())
    } else {
        Err(CliError::failure(
            "Error: run requires a file path or -c \"code\"",
        ))
    }
}

/// Print the logo to stderr.
fn print_logo() {
    let cyan = "\x1b[1;36m";
    let reset = "\x1b[0m";
    for line in LOGO.lines() {
        eprintln!("{cyan}{line}{reset}");
    }
}

// ============================================================================
// Tests
// ============================================================================
