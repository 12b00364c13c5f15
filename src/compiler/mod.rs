pub mod parameter;
pub use parameter::*;

pub mod occurrence;
pub use occurrence::*;

pub mod resolve_error;
pub use resolve_error::*;

pub mod table_scope;
pub use table_scope::*;

pub mod param_resolver;
pub use param_resolver::*;

pub mod find_params;
pub use find_params::*;
