pub mod ast;

pub mod catalog;
pub use catalog::{Catalog, CatalogError, MemoryCatalog};

pub mod config;
pub use config::{Config, UnsupportedParent};

pub mod source;
pub use source::{Edit, EditError, apply_edits};

pub mod rewrite;
pub use rewrite::{NamedParams, ParamNames, normalize};

pub mod compiler;
pub use compiler::{FoundParams, ParamFinder, ParamResolver, Parameter, ResolveError, find_params, resolve};
