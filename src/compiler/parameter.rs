use serde::{Deserialize, Serialize};

use crate::catalog::TableName;

/// Everything inferred about one placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamColumn {
    /// Empty when nothing suggested a name.
    pub name: String,
    /// Schema qualified type name, without array bounds.
    pub data_type: String,
    pub not_null: bool,
    pub is_array: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableName>,
}

/// A typed placeholder, handed to the code generator.
///
/// `column` is `None` for a bare placeholder whose type is left to a later stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub number: usize,
    pub column: Option<ParamColumn>,
}

impl Parameter {
    pub fn untyped(number: usize) -> Self {
        Self { number, column: None }
    }

    pub fn typed(number: usize, column: ParamColumn) -> Self {
        Self { number, column: Some(column) }
    }

    pub fn name(&self) -> Option<&str> {
        self.column.as_ref().map(|c| c.name.as_str())
    }

    pub fn data_type(&self) -> Option<&str> {
        self.column.as_ref().map(|c| c.data_type.as_str())
    }
}
