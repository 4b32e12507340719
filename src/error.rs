//! Error types for lexing and parsing DQL.

use crate::lexer::Position;

/// Why the lexer rejected the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorReason {
    #[error("unterminated string: missing closing quote")]
    UnterminatedString,

    #[error("unexpected character '{0}'")]
    InvalidCharacter(char),

    #[error("malformed number `{0}`")]
    MalformedNumber(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason} at {position}")]
pub struct LexError {
    pub position: Position,
    pub reason: LexErrorReason,
}

/// Token sequence does not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, found {found} at {position}")]
pub struct SyntaxError {
    pub position: Position,
    pub expected: String,
    pub found: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),

    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    pub fn position(&self) -> Position {
        match self {
            ParseError::Lex(e) => e.position,
            ParseError::Syntax(e) => e.position,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
