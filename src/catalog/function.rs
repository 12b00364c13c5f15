use serde::{Deserialize, Serialize};

use crate::ast::TypeName;

/// Type name used for arguments and results nothing is known about.
pub const ANY_TYPE: &str = "any";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    /// Empty for positional-only arguments.
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: TypeName,
}

impl Argument {
    pub fn new(name: impl Into<String>, type_name: TypeName) -> Self {
        Self { name: name.into(), type_name }
    }

    pub fn unnamed(type_name: TypeName) -> Self {
        Self::new("", type_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub args: Vec<Argument>,
    pub return_type: TypeName,
}

impl Function {
    pub fn new(name: impl Into<String>, args: Vec<Argument>, return_type: TypeName) -> Self {
        Self { name: name.into(), args, return_type }
    }

    /// A permissive stand-in for a function the catalog does not know:
    /// every argument and the result are typed `any`.
    pub fn any(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            args: (0..arity).map(|_| Argument::unnamed(TypeName::new(ANY_TYPE))).collect(),
            return_type: TypeName::new(ANY_TYPE),
        }
    }
}
