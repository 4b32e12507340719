use std::fmt;

/// A literal value appearing on the right-hand side of a condition.
///
/// The set of literal kinds is closed: every consumer matches exhaustively,
/// so a new kind cannot slip through rendering unnoticed.
///
/// # Type Preservation
///
/// Numbers keep the distinction they were written with:
/// - `10` becomes [`Literal::Integer`]
/// - `10.0` becomes [`Literal::Float`]
///
/// # Examples
///
/// ```
/// use dql_lang::Literal;
///
/// let string = Literal::String("two".to_string());
/// let integer = Literal::Integer(1);
/// let float = Literal::Float(2.5);
/// let boolean = Literal::Boolean(false);
/// let null = Literal::Null;
///
/// assert_eq!(integer.to_json(), serde_json::json!(1));
/// assert_eq!(null.to_json(), serde_json::Value::Null);
/// # let _ = (string, float, boolean);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// `null`
    Null,

    /// `true` / `false`
    Boolean(bool),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// Floating-point number, written with a decimal point
    Float(f64),

    /// Single-quoted string, quotes stripped
    String(String),
}

impl Literal {
    /// Render the literal as a JSON value.
    ///
    /// Non-finite floats cannot come out of the lexer, but a hand-built
    /// literal may hold one. It renders as `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Literal::Null => serde_json::Value::Null,
            Literal::Boolean(b) => serde_json::Value::Bool(*b),
            Literal::Integer(n) => serde_json::Value::Number((*n).into()),
            Literal::Float(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Literal::String(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => write!(f, "null"),
            Literal::Boolean(b) => write!(f, "{}", b),
            Literal::Integer(n) => write!(f, "{}", n),
            Literal::Float(n) => write!(f, "{:?}", n),
            Literal::String(s) => write!(f, "'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
        }
    }
}

impl From<Literal> for serde_json::Value {
    fn from(literal: Literal) -> Self {
        literal.to_json()
    }
}

#[test]
fn test_float_keeps_fraction_in_display() {
    assert_eq!(Literal::Float(10.0).to_string(), "10.0");
    assert_eq!(Literal::Integer(10).to_string(), "10");
}

#[test]
fn test_string_display_escapes_quotes() {
    let literal = Literal::String("it's".to_string());
    assert_eq!(literal.to_string(), "'it\\'s'");
}
