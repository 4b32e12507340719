use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    /// Floating-point number, written with a decimal point
    ///
    /// # Examples
    /// ```text
    /// 3.14
    /// -0.5
    /// ```
    Float(f64),

    /// Integer
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -10
    /// ```
    Integer(i64),

    /// String literal enclosed in single quotes
    ///
    /// # Examples
    /// ```text
    /// 'hello'
    /// 'it\'s'
    /// ```
    String(String),

    /// Boolean values, any letter case
    ///
    /// # Examples
    /// ```text
    /// true
    /// FALSE
    /// ```
    Boolean(bool),

    /// Null value, any letter case
    Null,

    // Identifiers
    /// Dotted field path
    ///
    /// Every segment starts with a letter or underscore, followed by letters,
    /// digits, or underscores.
    ///
    /// # Examples
    /// ```text
    /// status
    /// qualified.identifier
    /// _meta.created_at
    /// ```
    Identifier(String),

    // Comparison
    /// Equality operator `=`
    Eq,

    /// Inequality operator `!=`
    NotEq,

    /// Less than
    Lt,

    /// Greater than
    Gt,

    /// Less than or equal
    LtEq,

    /// Greater than or equal
    GtEq,

    // Keywords (case-insensitive)
    /// Logical AND
    ///
    /// # Examples
    /// ```text
    /// a=1 AND b=2
    /// a=1 and b=2
    /// ```
    And,

    /// Logical OR
    Or,

    /// Negation, only valid in front of `IN`
    Not,

    /// Membership test
    ///
    /// # Examples
    /// ```text
    /// status IN ('open', 'closed')
    /// status NOT IN ('archived')
    /// ```
    In,

    /// First half of `ORDER BY`
    Order,

    /// Second half of `ORDER BY`
    By,

    /// Ascending sort direction
    Asc,

    /// Descending sort direction
    Desc,

    // Delimiters
    /// Left parenthesis for grouping or value lists
    LParen,

    /// Right parenthesis
    RParen,

    /// Comma separating values or sort items
    Comma,

    /// End of input
    Eof,
}

impl Token {
    /// Map a bare word onto its keyword token, ignoring letter case.
    ///
    /// Returns `None` for words that are plain identifiers.
    pub fn keyword(word: &str) -> Option<Token> {
        let token = match word.to_ascii_lowercase().as_str() {
            "and" => Token::And,
            "or" => Token::Or,
            "not" => Token::Not,
            "in" => Token::In,
            "order" => Token::Order,
            "by" => Token::By,
            "asc" => Token::Asc,
            "desc" => Token::Desc,
            "true" => Token::Boolean(true),
            "false" => Token::Boolean(false),
            "null" => Token::Null,
            _ => return None,
        };
        Some(token)
    }

    /// Short description used in syntax error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Float(n) => format!("number {:?}", n),
            Token::Integer(n) => format!("number {}", n),
            Token::String(s) => format!("string '{}'", s),
            Token::Boolean(b) => format!("boolean {}", b),
            Token::Null => "null".to_string(),
            Token::Identifier(name) => format!("identifier `{}`", name),
            Token::Eof => "end of input".to_string(),
            other => format!("`{}`", other),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Float(n) => write!(f, "{:?}", n),
            Token::Integer(n) => write!(f, "{}", n),
            Token::String(s) => write!(f, "'{}'", s),
            Token::Boolean(b) => write!(f, "{}", b),
            Token::Null => write!(f, "null"),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Eq => write!(f, "="),
            Token::NotEq => write!(f, "!="),
            Token::Lt => write!(f, "<"),
            Token::Gt => write!(f, ">"),
            Token::LtEq => write!(f, "<="),
            Token::GtEq => write!(f, ">="),
            Token::And => write!(f, "AND"),
            Token::Or => write!(f, "OR"),
            Token::Not => write!(f, "NOT"),
            Token::In => write!(f, "IN"),
            Token::Order => write!(f, "ORDER"),
            Token::By => write!(f, "BY"),
            Token::Asc => write!(f, "ASC"),
            Token::Desc => write!(f, "DESC"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Eof => write!(f, "<eof>"),
        }
    }
}
