use crate::ast::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolOp {
    And,
    Or,
    Not,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoolExpr {
    pub op: BoolOp,
    pub args: Vec<Node>,
    pub location: usize,
}

impl BoolExpr {
    pub fn and(args: Vec<Node>, location: usize) -> Self {
        Self { op: BoolOp::And, args, location }
    }

    pub fn or(args: Vec<Node>, location: usize) -> Self {
        Self { op: BoolOp::Or, args, location }
    }
}
