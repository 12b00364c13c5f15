use std::fmt;

use crate::{ast::FuncName, catalog::TableName};

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    SchemaNotFound(String),
    TableNotFound(TableName),
    FunctionNotFound { name: FuncName, arity: usize },
    /// Catalog metadata could not be read or decoded.
    Load(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::SchemaNotFound(name) => write!(f, "schema \"{}\" does not exist", name),
            CatalogError::TableNotFound(name) => write!(f, "relation \"{}\" does not exist", name),
            CatalogError::FunctionNotFound { name, arity } => {
                write!(f, "function {}/{} does not exist", name, arity)
            }
            CatalogError::Load(msg) => write!(f, "could not load catalog: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}
