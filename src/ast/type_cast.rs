use crate::ast::{Node, TypeName};

/// `arg::type_name` or `CAST(arg AS type_name)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeCast {
    pub arg: Box<Node>,
    pub type_name: Option<TypeName>,
    pub location: usize,
}

impl TypeCast {
    pub fn new(arg: impl Into<Node>, type_name: TypeName, location: usize) -> Self {
        Self { arg: Box::new(arg.into()), type_name: Some(type_name), location }
    }
}
