use std::fmt;
use std::mem;

use crate::{
    ast::{
        CompareOp, Condition, Connective, Direction, Operator, Query, SortItem, SortSpec, Token,
    },
    error::{LexError, ParseError, Result, SyntaxError},
    hook::{ConditionHook, FnHook, Operand},
    lexer::{Lexeme, Lexer},
    render::{Document, Renderer},
    value::Literal,
};

/// Deepest parenthesized group a query may contain.
pub const MAX_NESTING: usize = 64;

/// DQL parser.
///
/// A parser owns at most one [`ConditionHook`]. The hook is private to the
/// instance: installing it on one parser has no effect on any other, and a
/// parser without a hook always renders the default document.
///
/// `parse` takes `&self` and installing a hook takes `&mut self`, so a hook
/// can never change underneath a running parse.
///
/// # Examples
///
/// ```
/// use dql_lang::Parser;
/// use serde_json::json;
///
/// let parser = Parser::new();
/// let document = parser.parse("a=1 AND b=2 ORDER BY a DESC").unwrap();
///
/// assert_eq!(document.where_clause, Some(json!({"$and": [{"a": 1}, {"b": 2}]})));
/// assert_eq!(document.order_by, Some(json!({"a": -1})));
/// ```
#[derive(Default)]
pub struct Parser {
    hook: Option<Box<dyn ConditionHook>>,
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("hook", &self.hook.is_some())
            .finish()
    }
}

impl Parser {
    pub fn new() -> Self {
        Parser { hook: None }
    }

    /// Create a parser whose leaves render through `hook`.
    pub fn with_hook<F>(hook: F) -> Self
    where
        F: Fn(&str, Operator, Operand<'_>) -> Option<serde_json::Value> + Send + Sync + 'static,
    {
        Self::with_condition_hook(FnHook(hook))
    }

    pub fn with_condition_hook<H>(hook: H) -> Self
    where
        H: ConditionHook + 'static,
    {
        Parser {
            hook: Some(Box::new(hook)),
        }
    }

    /// Install `hook`, replacing any hook set before.
    pub fn set_hook<F>(&mut self, hook: F)
    where
        F: Fn(&str, Operator, Operand<'_>) -> Option<serde_json::Value> + Send + Sync + 'static,
    {
        self.set_condition_hook(FnHook(hook));
    }

    pub fn set_condition_hook<H>(&mut self, hook: H)
    where
        H: ConditionHook + 'static,
    {
        self.hook = Some(Box::new(hook));
    }

    pub fn clear_hook(&mut self) {
        self.hook = None;
    }

    pub fn has_hook(&self) -> bool {
        self.hook.is_some()
    }

    /// Parse `input` into its typed form.
    ///
    /// The empty string is the only input without any clause; it yields a
    /// query with both clauses absent.
    pub fn parse_query(&self, input: &str) -> Result<Query> {
        tracing::debug!(len = input.len(), "parsing query");

        let result = if input.is_empty() {
            Ok(Query::default())
        } else {
            Grammar::new(input)
                .map_err(ParseError::from)
                .and_then(|mut grammar| grammar.parse_query())
        };

        match &result {
            Ok(query) => tracing::debug!(
                has_where = query.where_clause.is_some(),
                has_order_by = query.order_by.is_some(),
                "parsed query"
            ),
            Err(error) => tracing::debug!(%error, "rejected query"),
        }
        result
    }

    /// Parse `input` and render it, consulting this parser's hook for every
    /// leaf condition.
    pub fn parse(&self, input: &str) -> Result<Document> {
        let query = self.parse_query(input)?;
        Ok(self.render(&query))
    }

    /// Render an already parsed query through this parser's hook.
    pub fn render(&self, query: &Query) -> Document {
        Renderer::new(self.hook.as_deref()).render_query(query)
    }
}

/// Recursive-descent state over one input.
struct Grammar {
    lexer: Lexer,
    current: Lexeme,
    depth: usize,
}

impl Grammar {
    fn new(input: &str) -> std::result::Result<Self, LexError> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Grammar {
            lexer,
            current,
            depth: 0,
        })
    }

    fn advance(&mut self) -> Result<Lexeme> {
        let next = self.lexer.next_token()?;
        Ok(mem::replace(&mut self.current, next))
    }

    fn check(&self, token: &Token) -> bool {
        mem::discriminant(&self.current.token) == mem::discriminant(token)
    }

    fn error(&self, expected: &str) -> ParseError {
        ParseError::Syntax(SyntaxError {
            position: self.current.position,
            expected: expected.to_string(),
            found: self.current.token.describe(),
        })
    }

    fn expect(&mut self, token: Token, expected: &str) -> Result<Lexeme> {
        if !self.check(&token) {
            return Err(self.error(expected));
        }
        self.advance()
    }

    fn parse_query(&mut self) -> Result<Query> {
        let where_clause = if self.check(&Token::Order) || self.check(&Token::Eof) {
            None
        } else {
            Some(self.parse_or()?)
        };

        let order_by = if self.check(&Token::Order) {
            Some(self.parse_order_by()?)
        } else {
            None
        };

        if where_clause.is_none() && order_by.is_none() {
            return Err(self.error("a condition or ORDER BY"));
        }

        if !self.check(&Token::Eof) {
            return Err(if order_by.is_some() {
                self.error("`,`, ASC, DESC or end of input")
            } else {
                self.error("AND, OR, ORDER BY or end of input")
            });
        }

        Ok(Query {
            where_clause,
            order_by,
        })
    }

    fn parse_or(&mut self) -> Result<Condition> {
        let first = self.parse_and()?;
        let mut rest = vec![];

        while self.check(&Token::Or) {
            self.advance()?;
            rest.push(self.parse_and()?);
        }
        Ok(Condition::reduce(Connective::Or, first, rest))
    }

    fn parse_and(&mut self) -> Result<Condition> {
        let first = self.parse_unit()?;
        let mut rest = vec![];

        while self.check(&Token::And) {
            self.advance()?;
            rest.push(self.parse_unit()?);
        }
        Ok(Condition::reduce(Connective::And, first, rest))
    }

    fn parse_unit(&mut self) -> Result<Condition> {
        match &self.current.token {
            Token::LParen => {
                if self.depth == MAX_NESTING {
                    return Err(self.error(&format!("at most {} nested groups", MAX_NESTING)));
                }
                self.depth += 1;
                self.advance()?;
                let condition = self.parse_or()?;
                self.expect(Token::RParen, "`)`")?;
                self.depth -= 1;
                Ok(condition)
            }
            Token::Identifier(name) => {
                let identifier = name.clone();
                self.advance()?;
                self.parse_predicate(identifier)
            }
            _ => Err(self.error("an identifier or `(`")),
        }
    }

    /// Everything after the identifier of a comparison or membership test.
    fn parse_predicate(&mut self, identifier: String) -> Result<Condition> {
        let operator = match self.current.token {
            Token::Eq => Some(CompareOp::Equal),
            Token::NotEq => Some(CompareOp::NotEqual),
            Token::Lt => Some(CompareOp::LessThan),
            Token::Gt => Some(CompareOp::GreaterThan),
            Token::LtEq => Some(CompareOp::LessEqual),
            Token::GtEq => Some(CompareOp::GreaterEqual),
            _ => None,
        };

        if let Some(operator) = operator {
            self.advance()?;
            let value = self.parse_value()?;
            return Ok(Condition::Comparison {
                identifier,
                operator,
                value,
            });
        }

        let negated = if self.check(&Token::Not) {
            self.advance()?;
            self.expect(Token::In, "IN")?;
            true
        } else {
            self.expect(Token::In, "a comparison operator, IN or NOT IN")?;
            false
        };

        let values = self.parse_value_list()?;
        Ok(Condition::Membership {
            identifier,
            negated,
            values,
        })
    }

    fn parse_value(&mut self) -> Result<Literal> {
        let literal = match &self.current.token {
            Token::String(s) => Literal::String(s.clone()),
            Token::Integer(n) => Literal::Integer(*n),
            Token::Float(n) => Literal::Float(*n),
            Token::Boolean(b) => Literal::Boolean(*b),
            Token::Null => Literal::Null,
            _ => return Err(self.error("a literal value")),
        };
        self.advance()?;
        Ok(literal)
    }

    fn parse_value_list(&mut self) -> Result<Vec<Literal>> {
        self.expect(Token::LParen, "`(`")?;
        let mut values = vec![self.parse_value()?];

        while self.check(&Token::Comma) {
            self.advance()?;
            values.push(self.parse_value()?);
        }

        self.expect(Token::RParen, "`,` or `)`")?;
        Ok(values)
    }

    fn parse_order_by(&mut self) -> Result<SortSpec> {
        self.expect(Token::Order, "ORDER")?;
        self.expect(Token::By, "BY")?;

        let mut items = vec![self.parse_sort_item()?];
        while self.check(&Token::Comma) {
            self.advance()?;
            items.push(self.parse_sort_item()?);
        }
        Ok(SortSpec { items })
    }

    fn parse_sort_item(&mut self) -> Result<SortItem> {
        let identifier = match &self.current.token {
            Token::Identifier(name) => name.clone(),
            _ => return Err(self.error("an identifier")),
        };
        self.advance()?;

        let direction = match self.current.token {
            Token::Asc => {
                self.advance()?;
                Direction::Ascending
            }
            Token::Desc => {
                self.advance()?;
                Direction::Descending
            }
            _ => Direction::default(),
        };

        Ok(SortItem {
            identifier,
            direction,
        })
    }
}
