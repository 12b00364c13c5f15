pub mod catalog_error;
pub use catalog_error::*;

pub mod table_name;
pub use table_name::*;

pub mod column;
pub use column::*;

pub mod table;
pub use table::*;

pub mod function;
pub use function::*;

pub mod memory_catalog;
pub use memory_catalog::*;

use crate::ast::FuncName;

/// Read-only schema metadata consulted while typing parameters.
///
/// Implementations are owned by whatever maintains the schema; the resolver
/// only ever reads through this trait.
pub trait Catalog {
    /// Look up a table. An unqualified name resolves against the default schema.
    fn get_table(&self, name: &TableName) -> Result<Table, CatalogError>;

    /// Look up a function by name and number of arguments.
    fn get_function(&self, name: &FuncName, arity: usize) -> Result<Function, CatalogError>;
}
