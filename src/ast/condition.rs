use crate::ast::{CompareOp, Connective};
use crate::value::Literal;

/// Node of a parsed where clause.
///
/// `And` and `Or` are n-ary and never directly contain a child of their own
/// connective: [`Condition::reduce`] splices such children in while the tree
/// is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Comparison against a literal
    ///
    /// # Example
    /// ```text
    /// age >= 18
    /// ```
    Comparison {
        identifier: String,
        operator: CompareOp,
        value: Literal,
    },

    /// Membership test against a literal list
    ///
    /// # Example
    /// ```text
    /// status IN ('open', 'pending')
    /// status NOT IN ('archived')
    /// ```
    Membership {
        identifier: String,
        negated: bool,
        values: Vec<Literal>,
    },

    /// Every child must hold
    And(Vec<Condition>),

    /// At least one child must hold
    Or(Vec<Condition>),
}

impl Condition {
    /// Join a non-empty run of conditions with `connective`.
    ///
    /// A run of one collapses to that condition. Children that already carry
    /// the same connective are spliced in, so `a AND (b AND c)` and
    /// `a AND b AND c` reduce to the same three-child node.
    pub fn reduce(connective: Connective, first: Condition, rest: Vec<Condition>) -> Condition {
        if rest.is_empty() {
            return first;
        }

        let mut children = Vec::with_capacity(rest.len() + 1);
        for child in std::iter::once(first).chain(rest) {
            match (connective, child) {
                (Connective::And, Condition::And(nested)) => children.extend(nested),
                (Connective::Or, Condition::Or(nested)) => children.extend(nested),
                (_, child) => children.push(child),
            }
        }

        match connective {
            Connective::And => Condition::And(children),
            Connective::Or => Condition::Or(children),
        }
    }

    /// Connective of a compound node, `None` for leaves.
    pub fn connective(&self) -> Option<Connective> {
        match self {
            Condition::And(_) => Some(Connective::And),
            Condition::Or(_) => Some(Connective::Or),
            Condition::Comparison { .. } | Condition::Membership { .. } => None,
        }
    }

    /// Direct children of a compound node; empty for leaves.
    pub fn children(&self) -> &[Condition] {
        match self {
            Condition::And(children) | Condition::Or(children) => children,
            Condition::Comparison { .. } | Condition::Membership { .. } => &[],
        }
    }

    /// Identifier of a leaf, `None` for compound nodes.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Condition::Comparison { identifier, .. } | Condition::Membership { identifier, .. } => {
                Some(identifier.as_str())
            }
            Condition::And(_) | Condition::Or(_) => None,
        }
    }

    /// Leaves in source order.
    pub fn leaves(&self) -> Vec<&Condition> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Condition>) {
        match self {
            Condition::Comparison { .. } | Condition::Membership { .. } => out.push(self),
            Condition::And(children) | Condition::Or(children) => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }

    /// Whether no compound node in the tree has a child of its own
    /// connective or fewer than two children.
    pub fn is_normalized(&self) -> bool {
        match self.connective() {
            None => true,
            Some(connective) => {
                let children = self.children();
                children.len() >= 2
                    && children.iter().all(|child| {
                        child.connective() != Some(connective) && child.is_normalized()
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eq(identifier: &str, value: i64) -> Condition {
        Condition::Comparison {
            identifier: identifier.to_string(),
            operator: CompareOp::Equal,
            value: Literal::Integer(value),
        }
    }

    #[test]
    fn test_reduce_singleton_collapses() {
        let reduced = Condition::reduce(Connective::And, eq("a", 1), vec![]);
        assert_eq!(reduced, eq("a", 1));
    }

    #[test]
    fn test_reduce_splices_same_connective() {
        let inner = Condition::reduce(Connective::And, eq("b", 2), vec![eq("c", 3)]);
        let outer = Condition::reduce(Connective::And, eq("a", 1), vec![inner]);

        assert_eq!(outer, Condition::And(vec![eq("a", 1), eq("b", 2), eq("c", 3)]));
        assert!(outer.is_normalized());
    }

    #[test]
    fn test_reduce_keeps_other_connective_nested() {
        let inner = Condition::reduce(Connective::Or, eq("b", 2), vec![eq("c", 3)]);
        let outer = Condition::reduce(Connective::And, eq("a", 1), vec![inner.clone()]);

        assert_eq!(outer, Condition::And(vec![eq("a", 1), inner]));
        assert_eq!(outer.leaves().len(), 3);
    }
}
