use indexmap::IndexMap;

use crate::{
    Config,
    ast::{AExpr, FuncCall, Node, ParamRef, RawStmt},
    rewrite::{ParamMarkers, flatten},
    source::Edit,
};

/// Ordinal -> user chosen name, in ordinal order.
pub type ParamNames = IndexMap<usize, String>;

/// Rewrites named placeholders (`sqlc.arg(name)`, `@name::type`, `@name`) into
/// positional `$n` placeholders.
///
/// Names get ordinals in order of first appearance starting at 1; repeated
/// names share an ordinal. Every replacement is recorded as an `Edit` against
/// the statement text.
pub struct NamedParams<'a> {
    config: &'a Config,
    markers: ParamMarkers<'a>,
    ordinals: IndexMap<String, usize>,
    edits: Vec<Edit>,
    stmt_location: usize,
}

impl<'a> NamedParams<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            markers: ParamMarkers::new(config),
            ordinals: IndexMap::new(),
            edits: Vec::new(),
            stmt_location: 0,
        }
    }

    pub fn normalize(mut self, raw: RawStmt) -> (RawStmt, ParamNames, Vec<Edit>) {
        if !self.markers.contains_marker(&raw.stmt) {
            return (raw, ParamNames::new(), Vec::new());
        }

        let RawStmt { stmt, stmt_location, stmt_len } = raw;
        self.stmt_location = stmt_location;
        let stmt = self.rewrite(stmt);

        let names: ParamNames = self.ordinals.into_iter().map(|(name, number)| (number, name)).collect();
        tracing::debug!(params = names.len(), edits = self.edits.len(), "normalized named parameters");

        (RawStmt { stmt, stmt_location, stmt_len }, names, self.edits)
    }

    fn rewrite(&mut self, node: Node) -> Node {
        match node {
            Node::FuncCall(call) if self.markers.is_param_func(&call) => self.replace_func(call),
            Node::AExpr(expr) if self.markers.is_param_sign(&expr) => self.replace_sign(expr),
            other => other.map_children(&mut |child| self.rewrite(child)),
        }
    }

    fn replace_func(&mut self, call: FuncCall) -> Node {
        let (name, is_const) = flatten(&call.args);
        let number = self.ordinal(&name);
        let old = if is_const {
            format!("{}('{}')", self.config.arg_func, name)
        } else {
            format!("{}({})", self.config.arg_func, name)
        };
        self.record(call.location, old, number);
        Node::ParamRef(ParamRef::new(number, call.location))
    }

    fn replace_sign(&mut self, expr: AExpr) -> Node {
        let AExpr { name: op, lexpr, rexpr, location } = expr;
        let operand = match rexpr {
            Some(operand) => *operand,
            None => return Node::AExpr(AExpr { name: op, lexpr, rexpr: None, location }),
        };

        match operand {
            Node::TypeCast(mut cast) => {
                let (name, _) = flatten([cast.arg.as_ref()]);
                let number = self.ordinal(&name);
                self.record(location, format!("{}{}", self.config.param_sign, name), number);
                cast.arg = Box::new(Node::ParamRef(ParamRef::new(number, location)));
                Node::TypeCast(cast)
            }
            other => {
                let (name, _) = flatten([&other]);
                let number = self.ordinal(&name);
                self.record(location, format!("{}{}", self.config.param_sign, name), number);
                Node::ParamRef(ParamRef::new(number, location))
            }
        }
    }

    fn ordinal(&mut self, name: &str) -> usize {
        let next = self.ordinals.len() + 1;
        *self.ordinals.entry(name.to_string()).or_insert(next)
    }

    fn record(&mut self, location: usize, old: String, number: usize) {
        let location = location.saturating_sub(self.stmt_location);
        self.edits.push(Edit::new(location, old, format!("${}", number)));
    }
}

/// Normalize named placeholders using the default markers.
pub fn normalize(raw: RawStmt) -> (RawStmt, ParamNames, Vec<Edit>) {
    let config = Config::default();
    NamedParams::new(&config).normalize(raw)
}
