use crate::ast::Node;

/// A function argument passed by name: `f(label => $1)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedArgExpr {
    pub name: Option<String>,
    pub arg: Box<Node>,
    pub location: usize,
}

impl NamedArgExpr {
    pub fn new(name: Option<&str>, arg: impl Into<Node>, location: usize) -> Self {
        Self {
            name: name.map(str::to_string),
            arg: Box::new(arg.into()),
            location,
        }
    }
}
