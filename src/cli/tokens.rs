//! Dump the token stream of a query

use super::CliError;
use crate::tokenize;

/// One line per lexeme: `line:column`, token kind, source text.
pub fn execute_tokens(query: &str) -> Result<Vec<String>, CliError> {
    let lexemes = tokenize(query)?;
    Ok(lexemes
        .iter()
        .map(|lexeme| {
            format!(
                "{}:{}\t{:?}\t{}",
                lexeme.position.line, lexeme.position.column, lexeme.token, lexeme.text
            )
        })
        .collect())
}
