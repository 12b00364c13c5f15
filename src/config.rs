use crate::ast::FuncName;

/// What the resolver does with a placeholder whose parent it cannot type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnsupportedParent {
    /// Emit no parameter and keep going.
    #[default]
    Skip,
    /// Fail the statement with `ResolveError::UnsupportedParent`.
    Reject,
}

/// Settings shared by the normalizer and the resolver.
///
/// - `arg_func` is the call-style named parameter marker, `sqlc.arg(name)` by default.
/// - `param_sign` is the prefix of the sign style marker, `@name` by default.
/// - `unsupported_parent` controls placeholders in contexts the resolver cannot type.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub arg_func: FuncName,
    pub param_sign: String,
    pub unsupported_parent: UnsupportedParent,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arg_func: FuncName::qualified("sqlc", "arg"),
            param_sign: "@".to_string(),
            unsupported_parent: UnsupportedParent::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different call-style marker, e.g. `("app", "param")` for `app.param(name)`.
    pub fn with_arg_func(mut self, schema: Option<&str>, name: &str) -> Self {
        self.arg_func = FuncName { schema: schema.map(str::to_string), name: name.to_string() };
        self
    }

    pub fn with_param_sign(mut self, sign: &str) -> Self {
        self.param_sign = sign.to_string();
        self
    }

    /// Convenience: fail on placeholders in untyped contexts instead of dropping them.
    pub fn strict() -> Self {
        Self { unsupported_parent: UnsupportedParent::Reject, ..Self::default() }
    }
}
