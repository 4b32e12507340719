//! Extension hooks that override how single conditions render.
//!
//! A hook is consulted once for every comparison and membership leaf, in
//! source order, while a query renders. Returning `Some` replaces the default
//! rendering of that leaf; returning `None` keeps it.
//!
//! Hooks are owned by the [`Parser`](crate::Parser) they are installed on.
//! There is no global registry, so a hook never leaks into another instance.
//!
//! # Examples
//!
//! ```
//! use dql_lang::{Operand, Operator, Parser};
//! use serde_json::json;
//!
//! let parser = Parser::with_hook(|identifier: &str, _op: Operator, operand: Operand<'_>| {
//!     (identifier == "name").then(|| {
//!         json!({"$or": [
//!             {"firstName": {"$regexp": operand.to_json()}},
//!             {"lastName": {"$regexp": operand.to_json()}},
//!         ]})
//!     })
//! });
//!
//! let document = parser.parse("name='foulen' AND age < 10").unwrap();
//! assert_eq!(
//!     document.where_clause,
//!     Some(json!({"$and": [
//!         {"$or": [
//!             {"firstName": {"$regexp": "foulen"}},
//!             {"lastName": {"$regexp": "foulen"}},
//!         ]},
//!         {"age": {"$lt": 10}},
//!     ]}))
//! );
//! ```

use crate::ast::Operator;
use crate::value::Literal;

/// Right-hand side of a leaf as seen by a hook.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    /// Literal of a comparison
    Scalar(&'a Literal),
    /// Literal list of a membership test
    List(&'a [Literal]),
}

impl<'a> Operand<'a> {
    pub fn as_scalar(&self) -> Option<&'a Literal> {
        match self {
            Operand::Scalar(literal) => Some(literal),
            Operand::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&'a [Literal]> {
        match self {
            Operand::Scalar(_) => None,
            Operand::List(values) => Some(values),
        }
    }

    /// Default JSON form: the literal itself, or an array of literals.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Operand::Scalar(literal) => literal.to_json(),
            Operand::List(values) => {
                serde_json::Value::Array(values.iter().map(Literal::to_json).collect())
            }
        }
    }
}

/// Strategy consulted for every leaf condition during rendering.
pub trait ConditionHook: Send + Sync {
    fn render(
        &self,
        identifier: &str,
        operator: Operator,
        operand: Operand<'_>,
    ) -> Option<serde_json::Value>;
}

/// Adapts a closure into a [`ConditionHook`].
pub struct FnHook<F>(pub F);

impl<F> ConditionHook for FnHook<F>
where
    F: Fn(&str, Operator, Operand<'_>) -> Option<serde_json::Value> + Send + Sync,
{
    fn render(
        &self,
        identifier: &str,
        operator: Operator,
        operand: Operand<'_>,
    ) -> Option<serde_json::Value> {
        (self.0)(identifier, operator, operand)
    }
}

/// Renames identifiers and otherwise keeps the default rendering.
///
/// Useful when the public field names of an API differ from the stored
/// ones.
#[derive(Debug, Clone, Default)]
pub struct RenameHook {
    renames: std::collections::HashMap<String, String>,
}

impl RenameHook {
    pub fn new<I, K, V>(renames: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        RenameHook {
            renames: renames
                .into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
        }
    }
}

impl ConditionHook for RenameHook {
    fn render(
        &self,
        identifier: &str,
        operator: Operator,
        operand: Operand<'_>,
    ) -> Option<serde_json::Value> {
        let target = self.renames.get(identifier)?;
        Some(crate::render::leaf(target, operator, operand))
    }
}
