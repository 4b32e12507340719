//! Rendering of parsed queries into condition documents.
//!
//! The document vocabulary is generic and backend-agnostic:
//!
//! | Condition                  | Rendering                               |
//! |----------------------------|-----------------------------------------|
//! | `a = v`                    | `{"a": v}`                              |
//! | `a > v` (`<`, `>=`, ...)   | `{"a": {"$gt": v}}`                     |
//! | `a IN (v, w)`              | `{"a": {"$in": [v, w]}}`                |
//! | `a NOT IN (v, w)`          | `{"a": {"$nin": [v, w]}}`               |
//! | `x AND y`                  | `{"$and": [x, y]}`                      |
//! | `x OR y`                   | `{"$or": [x, y]}`                       |
//! | `ORDER BY a, b DESC`       | `{"a": 1, "b": -1}`                     |
//!
//! Object keys keep insertion order, so sort documents list keys in clause
//! order.

use serde_json::{Map, Value};

use crate::ast::{Condition, Connective, Operator, Query, SortSpec};
use crate::hook::{ConditionHook, Operand};

/// Rendered query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub where_clause: Option<Value>,
    pub order_by: Option<Value>,
}

impl Document {
    /// `{"where": ..., "orderBy": ...}` with `null` for an absent clause.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            "where".to_string(),
            self.where_clause.clone().unwrap_or(Value::Null),
        );
        map.insert(
            "orderBy".to_string(),
            self.order_by.clone().unwrap_or(Value::Null),
        );
        Value::Object(map)
    }
}

/// Default rendering of one leaf.
pub fn leaf(identifier: &str, operator: Operator, operand: Operand<'_>) -> Value {
    let value = match operator.symbol() {
        None => operand.to_json(),
        Some(symbol) => {
            let mut wrapped = Map::new();
            wrapped.insert(symbol.to_string(), operand.to_json());
            Value::Object(wrapped)
        }
    };

    let mut map = Map::new();
    map.insert(identifier.to_string(), value);
    Value::Object(map)
}

/// Render a sort specification as `{identifier: 1 | -1}`.
///
/// A repeated identifier keeps its first position and takes the last
/// direction given.
pub fn sort(spec: &SortSpec) -> Value {
    let mut map = Map::new();
    for item in spec {
        map.insert(item.identifier.clone(), Value::from(item.direction.as_i64()));
    }
    Value::Object(map)
}

pub struct Renderer<'h> {
    hook: Option<&'h dyn ConditionHook>,
}

impl<'h> Renderer<'h> {
    pub fn new(hook: Option<&'h dyn ConditionHook>) -> Self {
        Renderer { hook }
    }

    pub fn render_query(&self, query: &Query) -> Document {
        Document {
            where_clause: query
                .where_clause
                .as_ref()
                .map(|condition| self.render_condition(condition)),
            order_by: query.order_by.as_ref().map(sort),
        }
    }

    pub fn render_condition(&self, condition: &Condition) -> Value {
        match condition {
            Condition::Comparison {
                identifier,
                operator,
                value,
            } => self.render_leaf(identifier, Operator::Compare(*operator), Operand::Scalar(value)),
            Condition::Membership {
                identifier,
                negated,
                values,
            } => {
                let operator = if *negated {
                    Operator::NotIn
                } else {
                    Operator::In
                };
                self.render_leaf(identifier, operator, Operand::List(values))
            }
            Condition::And(children) => self.render_compound(Connective::And, children),
            Condition::Or(children) => self.render_compound(Connective::Or, children),
        }
    }

    fn render_compound(&self, connective: Connective, children: &[Condition]) -> Value {
        let rendered = children
            .iter()
            .map(|child| self.render_condition(child))
            .collect();

        let mut map = Map::new();
        map.insert(connective.symbol().to_string(), Value::Array(rendered));
        Value::Object(map)
    }

    fn render_leaf(&self, identifier: &str, operator: Operator, operand: Operand<'_>) -> Value {
        if let Some(hook) = self.hook {
            if let Some(custom) = hook.render(identifier, operator, operand) {
                tracing::trace!(identifier, %operator, "condition hook override");
                return custom;
            }
        }
        leaf(identifier, operator, operand)
    }
}
