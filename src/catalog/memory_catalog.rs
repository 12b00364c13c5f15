use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    ast::FuncName,
    catalog::{Catalog, CatalogError, Function, Table, TableName},
};

fn default_schema_name() -> String {
    "public".to_string()
}

/// Tables and functions living in one schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub name: String,
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub functions: Vec<Function>,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn function(&self, name: &str, arity: usize) -> Option<&Function> {
        self.functions.iter().find(|f| f.name == name && f.args.len() == arity)
    }
}

/// A plain in-memory `Catalog`.
///
/// Unqualified table names resolve against `default_schema`. Unqualified
/// function names look in `default_schema` first, then in every other schema
/// in declaration order, so built-ins kept in `pg_catalog` are found too.
///
/// The value is immutable once handed to the resolver and can be shared
/// between threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCatalog {
    #[serde(default = "default_schema_name")]
    pub default_schema: String,
    #[serde(default)]
    pub schemas: Vec<Schema>,
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new(default_schema_name())
    }
}

impl MemoryCatalog {
    pub fn new(default_schema: impl Into<String>) -> Self {
        let default_schema = default_schema.into();
        Self {
            schemas: vec![Schema::new(default_schema.clone())],
            default_schema,
        }
    }

    /// Decode a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(|e| CatalogError::Load(e.to_string()))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| CatalogError::Load(format!("could not read {}: {}", path.display(), e)))?;
        let catalog = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), schemas = catalog.schemas.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.iter().find(|s| s.name == name)
    }

    fn schema_mut(&mut self, name: &str) -> &mut Schema {
        let idx = match self.schemas.iter().position(|s| s.name == name) {
            Some(idx) => idx,
            None => {
                self.schemas.push(Schema::new(name));
                self.schemas.len() - 1
            }
        };
        &mut self.schemas[idx]
    }

    /// Add or replace a table in `schema`, creating the schema when needed.
    pub fn add_table(&mut self, schema: &str, table: Table) {
        let schema = self.schema_mut(schema);
        match schema.tables.iter_mut().find(|t| t.name == table.name) {
            Some(existing) => *existing = table,
            None => schema.tables.push(table),
        }
    }

    pub fn add_function(&mut self, schema: &str, function: Function) {
        self.schema_mut(schema).functions.push(function);
    }

    pub fn with_table(mut self, schema: &str, table: Table) -> Self {
        self.add_table(schema, table);
        self
    }

    pub fn with_function(mut self, schema: &str, function: Function) -> Self {
        self.add_function(schema, function);
        self
    }
}

impl Catalog for MemoryCatalog {
    fn get_table(&self, name: &TableName) -> Result<Table, CatalogError> {
        let schema_name = name.schema.as_deref().unwrap_or(&self.default_schema);
        let schema = self
            .schema(schema_name)
            .ok_or_else(|| CatalogError::SchemaNotFound(schema_name.to_string()))?;
        schema
            .table(&name.name)
            .cloned()
            .ok_or_else(|| CatalogError::TableNotFound(name.clone()))
    }

    fn get_function(&self, name: &FuncName, arity: usize) -> Result<Function, CatalogError> {
        let not_found = || CatalogError::FunctionNotFound { name: name.clone(), arity };

        if let Some(schema_name) = &name.schema {
            return self
                .schema(schema_name)
                .and_then(|s| s.function(&name.name, arity))
                .cloned()
                .ok_or_else(not_found);
        }

        let default = self.schema(&self.default_schema).into_iter();
        let others = self.schemas.iter().filter(|s| s.name != self.default_schema);
        default
            .chain(others)
            .find_map(|s| s.function(&name.name, arity))
            .cloned()
            .ok_or_else(not_found)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;
    use crate::{
        ast::TypeName,
        catalog::{Argument, Column},
    };

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::new("public")
            .with_table(
                "public",
                Table::new("users", vec![
                    Column::new("id", TypeName::qualified("pg_catalog", "int8")).not_null(),
                    Column::new("name", TypeName::new("text")),
                ]),
            )
            .with_function(
                "pg_catalog",
                Function::new("lower", vec![Argument::unnamed(TypeName::new("text"))], TypeName::new("text")),
            )
            .with_function(
                "public",
                Function::new("lower", vec![Argument::new("s", TypeName::new("citext"))], TypeName::new("citext")),
            )
    }

    #[test]
    fn get_table_defaults_to_default_schema() {
        let c = catalog();
        let t = c.get_table(&TableName::new("users")).unwrap();
        assert_eq!(t.columns.len(), 2);
        assert!(t.column("id").unwrap().is_not_null);

        let t = c.get_table(&TableName::qualified("public", "users")).unwrap();
        assert_eq!(t.name, "users");
    }

    #[test]
    fn get_table_reports_missing_schema_and_table() {
        let c = catalog();
        assert_eq!(
            c.get_table(&TableName::qualified("audit", "users")),
            Err(CatalogError::SchemaNotFound("audit".into()))
        );
        assert_eq!(
            c.get_table(&TableName::new("ghosts")),
            Err(CatalogError::TableNotFound(TableName::new("ghosts")))
        );
    }

    #[test]
    fn add_table_replaces_existing_definition() {
        let mut c = catalog();
        c.add_table("public", Table::new("users", vec![Column::new("id", TypeName::new("uuid"))]));
        let t = c.get_table(&TableName::new("users")).unwrap();
        assert_eq!(t.columns.len(), 1);
        assert_eq!(t.columns[0].type_name.data_type(), "uuid");
    }

    #[test]
    fn get_function_prefers_default_schema_then_others() {
        let c = catalog();
        let f = c.get_function(&FuncName::new("lower"), 1).unwrap();
        assert_eq!(f.return_type.data_type(), "citext");

        let f = c.get_function(&FuncName::qualified("pg_catalog", "lower"), 1).unwrap();
        assert_eq!(f.return_type.data_type(), "text");

        assert!(matches!(
            c.get_function(&FuncName::new("lower"), 2),
            Err(CatalogError::FunctionNotFound { arity: 2, .. })
        ));
    }

    #[test]
    fn from_json_decodes_types() {
        let doc = json!({
            "schemas": [{
                "name": "public",
                "tables": [{
                    "name": "posts",
                    "columns": [
                        { "name": "id", "type": "pg_catalog.int4", "is_not_null": true },
                        { "name": "tags", "type": "text[]", "is_array": true }
                    ]
                }]
            }]
        });
        let c = MemoryCatalog::from_json(&doc.to_string()).unwrap();
        assert_eq!(c.default_schema, "public");

        let t = c.get_table(&TableName::new("posts")).unwrap();
        let tags = t.column("tags").unwrap();
        assert!(tags.is_array);
        assert_eq!(tags.type_name.data_type(), "text");
        assert_eq!(t.column("id").unwrap().type_name.data_type(), "pg_catalog.int4");
    }

    #[test]
    fn from_json_rejects_bad_type_names() {
        let doc = json!({
            "schemas": [{ "name": "public", "tables": [{ "name": "t", "columns": [{ "name": "c", "type": "a.b.c" }] }] }]
        });
        assert!(matches!(MemoryCatalog::from_json(&doc.to_string()), Err(CatalogError::Load(_))));
    }

    #[test]
    fn load_from_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let original = catalog();

        let mut file = fs::File::create(&path).unwrap();
        file.write_all(serde_json::to_string_pretty(&original).unwrap().as_bytes()).unwrap();
        drop(file);

        let loaded = MemoryCatalog::load_from_file(&path).unwrap();
        assert_eq!(loaded, original);

        let missing = MemoryCatalog::load_from_file(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(CatalogError::Load(_))));
    }
}
