use serde::{Deserialize, Serialize};

use crate::ast::TypeName;

/// Column metadata as declared in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: TypeName,
    #[serde(default)]
    pub is_not_null: bool,
    #[serde(default)]
    pub is_array: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, type_name: TypeName) -> Self {
        let is_array = type_name.is_array();
        Self { name: name.into(), type_name, is_not_null: false, is_array }
    }

    pub fn not_null(mut self) -> Self {
        self.is_not_null = true;
        self
    }
}
