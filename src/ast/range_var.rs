/// A table reference in a FROM clause or the target relation of a DML statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeVar {
    pub schemaname: Option<String>,
    pub relname: String,
    pub alias: Option<String>,
    pub location: usize,
}

impl RangeVar {
    pub fn new(relname: impl Into<String>, location: usize) -> Self {
        Self { schemaname: None, relname: relname.into(), alias: None, location }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schemaname = Some(schema.into());
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}
