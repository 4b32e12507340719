use crate::ast::Condition;

/// Complete parsed query.
///
/// Both clauses are optional; an absent clause is `None`, never an empty
/// structure.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    /// Filter condition
    pub where_clause: Option<Condition>,

    /// Sort specification from `ORDER BY`
    pub order_by: Option<SortSpec>,
}

impl Query {
    pub fn is_empty(&self) -> bool {
        self.where_clause.is_none() && self.order_by.is_none()
    }
}

/// Sort direction of one `ORDER BY` item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Numeric form used in rendered documents: `1` or `-1`.
    pub fn as_i64(self) -> i64 {
        match self {
            Direction::Ascending => 1,
            Direction::Descending => -1,
        }
    }
}

/// One `ORDER BY` item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortItem {
    pub identifier: String,
    pub direction: Direction,
}

/// Ordered sort specification.
///
/// Items keep clause order and duplicates are not removed here; rendering
/// into an object coalesces them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub items: Vec<SortItem>,
}

impl SortSpec {
    pub fn iter(&self) -> impl Iterator<Item = &SortItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Direction last given for `identifier`.
    pub fn direction_of(&self, identifier: &str) -> Option<Direction> {
        self.items
            .iter()
            .rev()
            .find(|item| item.identifier == identifier)
            .map(|item| item.direction)
    }
}

impl<'a> IntoIterator for &'a SortSpec {
    type Item = &'a SortItem;
    type IntoIter = std::slice::Iter<'a, SortItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
