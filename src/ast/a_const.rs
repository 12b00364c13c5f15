use crate::ast::Node;

/// A literal constant; `val` is one of `String`, `Integer`, `Float` or `Null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AConst {
    pub val: Box<Node>,
    pub location: usize,
}

impl AConst {
    pub fn new(val: Node, location: usize) -> Self {
        Self { val: Box::new(val), location }
    }

    pub fn string(value: impl Into<String>, location: usize) -> Self {
        Self::new(Node::String(value.into()), location)
    }
}
