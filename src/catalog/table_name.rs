use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ast::RangeVar;

/// Table name as written in the statement; `schema` stays empty when the
/// statement did not qualify it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub name: String,
}

impl TableName {
    pub fn new(name: impl Into<String>) -> Self {
        Self { schema: None, name: name.into() }
    }

    pub fn qualified(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self { schema: Some(schema.into()), name: name.into() }
    }

    /// Schema key used by lookup maps; unqualified names map to `""`.
    pub fn schema_key(&self) -> &str {
        self.schema.as_deref().unwrap_or("")
    }
}

impl From<&RangeVar> for TableName {
    fn from(rv: &RangeVar) -> Self {
        Self { schema: rv.schemaname.clone(), name: rv.relname.clone() }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{}.{}", schema, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}
