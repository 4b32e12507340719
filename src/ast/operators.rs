use std::fmt;

/// Comparison operators allowed between an identifier and a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// Equal (`=`)
    Equal,
    /// Not equal (`!=`)
    NotEqual,
    /// Less than (`<`)
    LessThan,
    /// Greater than (`>`)
    GreaterThan,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

impl CompareOp {
    /// Operator name in the rendered document, `None` for equality which
    /// renders without a wrapper.
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            CompareOp::Equal => None,
            CompareOp::NotEqual => Some("$ne"),
            CompareOp::LessThan => Some("$lt"),
            CompareOp::GreaterThan => Some("$gt"),
            CompareOp::LessEqual => Some("$lte"),
            CompareOp::GreaterEqual => Some("$gte"),
        }
    }

    /// Source text of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Equal => "=",
            CompareOp::NotEqual => "!=",
            CompareOp::LessThan => "<",
            CompareOp::GreaterThan => ">",
            CompareOp::LessEqual => "<=",
            CompareOp::GreaterEqual => ">=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator handed to an extension hook: either a comparison or a
/// membership test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Compare(CompareOp),
    /// `IN`
    In,
    /// `NOT IN`
    NotIn,
}

impl Operator {
    /// Operator name in the rendered document. Equality has none.
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            Operator::Compare(op) => op.symbol(),
            Operator::In => Some("$in"),
            Operator::NotIn => Some("$nin"),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Compare(op) => write!(f, "{}", op),
            Operator::In => write!(f, "IN"),
            Operator::NotIn => write!(f, "NOT IN"),
        }
    }
}

/// Logical connectives joining conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    /// `AND`
    And,
    /// `OR`
    Or,
}

impl Connective {
    pub fn symbol(self) -> &'static str {
        match self {
            Connective::And => "$and",
            Connective::Or => "$or",
        }
    }
}
