use crate::{
    Config,
    ast::{AExpr, FuncCall, Node},
};

/// Recognizes the named placeholder spellings enabled by a `Config`.
pub struct ParamMarkers<'a> {
    config: &'a Config,
}

impl<'a> ParamMarkers<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// `sqlc.arg(name)` / `sqlc.arg('name')`.
    pub fn is_param_func(&self, call: &FuncCall) -> bool {
        call.func == self.config.arg_func
    }

    /// `@name`, parsed as a prefix operator applied to `name`.
    pub fn is_param_sign(&self, expr: &AExpr) -> bool {
        expr.lexpr.is_none() && expr.rexpr.is_some() && expr.op() == self.config.param_sign
    }

    /// `@name::type`; the cast binds tighter than the prefix operator.
    pub fn is_param_sign_cast(&self, expr: &AExpr) -> bool {
        self.is_param_sign(expr) && matches!(expr.rexpr.as_deref(), Some(Node::TypeCast(_)))
    }

    pub fn is_marker(&self, node: &Node) -> bool {
        match node {
            Node::FuncCall(call) => self.is_param_func(call),
            Node::AExpr(expr) => self.is_param_sign(expr),
            _ => false,
        }
    }

    pub fn contains_marker(&self, node: &Node) -> bool {
        node.descendants().any(|n| self.is_marker(n))
    }
}
