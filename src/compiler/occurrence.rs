use crate::ast::{AExpr, FuncCall, Node, ParamRef, RangeVar, ResTarget, TypeCast};

/// The immediate syntactic context of a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamParent {
    LimitCount,
    LimitOffset,
    Node(Node),
}

impl ParamParent {
    pub fn kind(&self) -> &'static str {
        match self {
            ParamParent::LimitCount => "LimitCount",
            ParamParent::LimitOffset => "LimitOffset",
            ParamParent::Node(node) => node.kind(),
        }
    }
}

impl From<Node> for ParamParent {
    fn from(value: Node) -> Self {
        ParamParent::Node(value)
    }
}

impl From<AExpr> for ParamParent {
    fn from(value: AExpr) -> Self {
        ParamParent::Node(value.into())
    }
}

impl From<FuncCall> for ParamParent {
    fn from(value: FuncCall) -> Self {
        ParamParent::Node(value.into())
    }
}

impl From<ResTarget> for ParamParent {
    fn from(value: ResTarget) -> Self {
        ParamParent::Node(value.into())
    }
}

impl From<TypeCast> for ParamParent {
    fn from(value: TypeCast) -> Self {
        ParamParent::Node(value.into())
    }
}

impl From<ParamRef> for ParamParent {
    fn from(value: ParamRef) -> Self {
        ParamParent::Node(value.into())
    }
}

/// One appearance of a placeholder together with what surrounds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamOccurrence {
    pub param: ParamRef,
    pub parent: ParamParent,
    /// Table the placeholder is assigned into (INSERT/UPDATE targets).
    pub rv: Option<RangeVar>,
    /// Explicit rename for this occurrence.
    pub name: Option<String>,
}

impl ParamOccurrence {
    pub fn new(param: ParamRef, parent: impl Into<ParamParent>) -> Self {
        Self { param, parent: parent.into(), rv: None, name: None }
    }

    pub fn with_rv(mut self, rv: RangeVar) -> Self {
        self.rv = Some(rv);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
