use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static TYPE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?P<schema>[^.\[\]]+)\.)?(?P<name>[^.\[\]]+)(?P<bounds>(?:\[\d*\])*)$")
        .expect("type name pattern is valid")
});

/// A declared type: `int4`, `pg_catalog.int4`, `text[]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeName {
    pub schema: Option<String>,
    pub name: String,
    /// Number of `[]` suffixes.
    pub array_bounds: usize,
}

impl TypeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self { schema: None, name: name.into(), array_bounds: 0 }
    }

    pub fn qualified(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self { schema: Some(schema.into()), name: name.into(), array_bounds: 0 }
    }

    pub fn array(mut self, bounds: usize) -> Self {
        self.array_bounds = bounds;
        self
    }

    /// Schema qualified name without array bounds, as exposed to code generators.
    pub fn data_type(&self) -> String {
        match &self.schema {
            Some(schema) if !schema.is_empty() => format!("{}.{}", schema, self.name),
            _ => self.name.clone(),
        }
    }

    pub fn is_array(&self) -> bool {
        self.array_bounds > 0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.data_type(), "[]".repeat(self.array_bounds))
    }
}

impl FromStr for TypeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = TYPE_NAME
            .captures(s.trim())
            .ok_or_else(|| format!("invalid type name '{}'", s))?;

        Ok(TypeName {
            schema: caps.name("schema").map(|m| m.as_str().trim().to_string()),
            name: caps["name"].trim().to_string(),
            array_bounds: caps.name("bounds").map_or(0, |m| m.as_str().matches('[').count()),
        })
    }
}

impl TryFrom<String> for TypeName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeName> for String {
    fn from(value: TypeName) -> Self {
        value.to_string()
    }
}
