//! CLI support for dql-lang
//!
//! Provides programmatic access to the `dql` command so other tools can
//! embed the same checks.

mod check;
mod tokens;

pub use check::{execute_check, CheckOptions, CheckResult};
pub use tokens::execute_tokens;

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    #[error("Lex error: {0}")]
    Lex(#[from] crate::LexError),

    #[error("Config error: {0}")]
    Config(#[from] crate::ConfigError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No query provided. Pass it as an argument or pipe it to stdin.")]
    NoInput,
}
