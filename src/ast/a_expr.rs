use crate::ast::Node;

/// An operator expression. Prefix operators leave `lexpr` empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AExpr {
    /// Operator name, possibly schema qualified (`["pg_catalog", "="]`).
    pub name: Vec<String>,
    pub lexpr: Option<Box<Node>>,
    pub rexpr: Option<Box<Node>>,
    pub location: usize,
}

impl AExpr {
    pub fn binary(op: &str, left: impl Into<Node>, right: impl Into<Node>, location: usize) -> Self {
        Self {
            name: vec![op.to_string()],
            lexpr: Some(Box::new(left.into())),
            rexpr: Some(Box::new(right.into())),
            location,
        }
    }

    pub fn prefix(op: &str, operand: impl Into<Node>, location: usize) -> Self {
        Self {
            name: vec![op.to_string()],
            lexpr: None,
            rexpr: Some(Box::new(operand.into())),
            location,
        }
    }

    /// The operator name joined with `.`.
    pub fn op(&self) -> String {
        self.name.join(".")
    }
}
