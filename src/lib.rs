pub mod adapter;
pub mod ast;
pub mod cli;
pub mod config;
pub mod error;
pub mod hook;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod value;

pub use adapter::{Translation, Translator};
pub use ast::{CompareOp, Condition, Connective, Direction, Operator, Query, SortItem, SortSpec, Token};
pub use config::{ConfigError, Defaults, TranslatorConfig};
pub use error::{LexError, LexErrorReason, ParseError, SyntaxError};
pub use hook::{ConditionHook, FnHook, Operand, RenameHook};
pub use lexer::{Lexeme, Lexer, Position, tokenize};
pub use parser::Parser;
pub use render::{Document, Renderer};
pub use value::Literal;

/// Parse `input` with a hook-less parser and render it.
///
/// ```
/// use dql_lang::parse;
/// use serde_json::json;
///
/// let document = parse("identifier='value'").unwrap();
/// assert_eq!(document.where_clause, Some(json!({"identifier": "value"})));
/// assert_eq!(document.order_by, None);
/// ```
pub fn parse(input: &str) -> error::Result<Document> {
    Parser::new().parse(input)
}

/// Parse `input` into its typed form.
pub fn parse_query(input: &str) -> error::Result<Query> {
    Parser::new().parse_query(input)
}
