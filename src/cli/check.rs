//! Parse DQL queries and print the rendered documents

use std::path::PathBuf;

use super::CliError;
use crate::{Parser, Translator, TranslatorConfig};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The DQL query to parse
    pub query: String,
    /// Translator config; when set, defaults and mappings are applied
    pub config: Option<PathBuf>,
    /// Only validate syntax, don't render
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Query rendered successfully
    Success(serde_json::Value),
}

impl CheckResult {
    pub fn to_output(&self, pretty: bool) -> Result<String, CliError> {
        Ok(match self {
            CheckResult::SyntaxValid => "Syntax is valid".to_string(),
            CheckResult::Success(value) if pretty => serde_json::to_string_pretty(value)?,
            CheckResult::Success(value) => serde_json::to_string(value)?,
        })
    }
}

/// Execute a dql check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let query = options.query.trim_end_matches(['\n', '\r']);

    if options.syntax_only {
        Parser::new().parse_query(query)?;
        return Ok(CheckResult::SyntaxValid);
    }

    let output = match &options.config {
        Some(path) => {
            let config = TranslatorConfig::load_from(path)?;
            Translator::new(config).translate(Some(query))?.to_json()
        }
        None => Parser::new().parse(query)?.to_json(),
    };

    Ok(CheckResult::Success(output))
}
