pub mod node;
pub use node::*;

pub mod raw_stmt;
pub use raw_stmt::*;

pub mod a_const;
pub use a_const::*;

pub mod range_var;
pub use range_var::*;

pub mod column_ref;
pub use column_ref::*;

pub mod a_expr;
pub use a_expr::*;

pub mod bool_expr;
pub use bool_expr::*;

pub mod func_call;
pub use func_call::*;

pub mod named_arg_expr;
pub use named_arg_expr::*;

pub mod type_name;
pub use type_name::*;

pub mod type_cast;
pub use type_cast::*;

pub mod res_target;
pub use res_target::*;

pub mod param_ref;
pub use param_ref::*;

pub mod statements;
pub use statements::*;

pub mod walk;
pub use walk::*;
