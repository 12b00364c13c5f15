use indexmap::IndexMap;

use crate::{
    ast::RangeVar,
    catalog::{Catalog, Column, TableName},
};

/// schema -> table -> column name -> column
type ColumnIndex = IndexMap<String, IndexMap<String, IndexMap<String, Column>>>;

/// The tables a statement can see, keyed the way the statement names them.
#[derive(Debug, Clone, Default)]
pub struct TableScope {
    /// alias -> table
    pub aliases: IndexMap<String, TableName>,
    /// Every referenced table in order of appearance, duplicates kept.
    pub tables: Vec<TableName>,
    /// The first range variable; result targets without their own table fall back to it.
    pub default_table: Option<TableName>,
    columns: ColumnIndex,
}

impl TableScope {
    /// Index the columns of every range variable the catalog knows about.
    ///
    /// Tables the catalog cannot resolve (CTEs, subqueries, missing DDL) are
    /// skipped; columns coming from them simply do not resolve.
    pub fn build(catalog: &dyn Catalog, rvs: &[RangeVar]) -> Self {
        let mut scope = TableScope::default();

        for rv in rvs {
            let fqn = TableName::from(rv);
            if scope.default_table.is_none() {
                scope.default_table = Some(fqn.clone());
            }
            if let Some(alias) = &rv.alias {
                scope.aliases.insert(alias.clone(), fqn.clone());
            }
            scope.tables.push(fqn);
        }

        for fqn in &scope.tables {
            match catalog.get_table(fqn) {
                Ok(table) => {
                    let columns = table.columns.into_iter().map(|c| (c.name.clone(), c)).collect();
                    scope
                        .columns
                        .entry(fqn.schema_key().to_string())
                        .or_default()
                        .insert(fqn.name.clone(), columns);
                }
                Err(err) => {
                    tracing::debug!(table = %fqn, error = %err, "table not in catalog, skipping");
                }
            }
        }

        scope
    }

    pub fn column(&self, table: &TableName, name: &str) -> Option<&Column> {
        self.columns.get(table.schema_key())?.get(&table.name)?.get(name)
    }

    /// Tables a column reference may belong to.
    ///
    /// A qualifier is matched against aliases first, then against table names.
    /// Unqualified references, and qualifiers matching neither, search every
    /// referenced table.
    pub fn candidates(&self, qualifier: Option<&str>) -> Vec<&TableName> {
        let Some(qualifier) = qualifier else {
            return self.tables.iter().collect();
        };

        if let Some(table) = self.aliases.get(qualifier) {
            return vec![table];
        }

        match self.tables.iter().find(|t| t.name == qualifier) {
            Some(table) => vec![table],
            None => self.tables.iter().collect(),
        }
    }
}
