use crate::ast::Node;

/// An entry of a target list: a projected expression, an INSERT column, or an
/// UPDATE `SET name = val` assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResTarget {
    pub name: Option<String>,
    pub val: Option<Box<Node>>,
    pub location: usize,
}

impl ResTarget {
    /// An INSERT column: name only.
    pub fn column(name: impl Into<String>, location: usize) -> Self {
        Self { name: Some(name.into()), val: None, location }
    }

    /// An UPDATE assignment.
    pub fn assign(name: impl Into<String>, val: impl Into<Node>, location: usize) -> Self {
        Self { name: Some(name.into()), val: Some(Box::new(val.into())), location }
    }

    /// An unnamed projection.
    pub fn value(val: impl Into<Node>, location: usize) -> Self {
        Self { name: None, val: Some(Box::new(val.into())), location }
    }
}
