use ordered_float::NotNan;

use crate::ast::{
    AConst, AExpr, BoolExpr, ColumnRef, DeleteStmt, FuncCall, InsertStmt, NamedArgExpr, ParamRef,
    RangeVar, ResTarget, SelectStmt, TypeCast, UpdateStmt,
};

/// One node of a parsed statement.
///
/// Only the shapes the parameter passes care about are modelled; everything the
/// parser produces outside of them is expected to be folded into `List`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    List(Vec<Node>),
    /// Bare text fragment: identifiers inside column references, string constants.
    String(String),
    Integer(i64),
    Float(NotNan<f64>),
    Null,
    AConst(AConst),
    RangeVar(RangeVar),
    ColumnRef(ColumnRef),
    AExpr(AExpr),
    BoolExpr(BoolExpr),
    FuncCall(FuncCall),
    NamedArgExpr(NamedArgExpr),
    TypeCast(TypeCast),
    ResTarget(ResTarget),
    ParamRef(ParamRef),
    SelectStmt(SelectStmt),
    InsertStmt(InsertStmt),
    UpdateStmt(UpdateStmt),
    DeleteStmt(DeleteStmt),
}

impl Node {
    /// Short variant name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::List(_) => "List",
            Node::String(_) => "String",
            Node::Integer(_) => "Integer",
            Node::Float(_) => "Float",
            Node::Null => "Null",
            Node::AConst(_) => "AConst",
            Node::RangeVar(_) => "RangeVar",
            Node::ColumnRef(_) => "ColumnRef",
            Node::AExpr(_) => "AExpr",
            Node::BoolExpr(_) => "BoolExpr",
            Node::FuncCall(_) => "FuncCall",
            Node::NamedArgExpr(_) => "NamedArgExpr",
            Node::TypeCast(_) => "TypeCast",
            Node::ResTarget(_) => "ResTarget",
            Node::ParamRef(_) => "ParamRef",
            Node::SelectStmt(_) => "SelectStmt",
            Node::InsertStmt(_) => "InsertStmt",
            Node::UpdateStmt(_) => "UpdateStmt",
            Node::DeleteStmt(_) => "DeleteStmt",
        }
    }

    /// Byte offset of the node in the source file, when the parser recorded one.
    pub fn location(&self) -> Option<usize> {
        match self {
            Node::AConst(n) => Some(n.location),
            Node::RangeVar(n) => Some(n.location),
            Node::ColumnRef(n) => Some(n.location),
            Node::AExpr(n) => Some(n.location),
            Node::BoolExpr(n) => Some(n.location),
            Node::FuncCall(n) => Some(n.location),
            Node::NamedArgExpr(n) => Some(n.location),
            Node::TypeCast(n) => Some(n.location),
            Node::ResTarget(n) => Some(n.location),
            Node::ParamRef(n) => Some(n.location),
            _ => None,
        }
    }

    pub fn string(value: impl Into<String>) -> Node {
        Node::String(value.into())
    }
}

impl From<ParamRef> for Node {
    fn from(value: ParamRef) -> Self {
        Node::ParamRef(value)
    }
}

impl From<ColumnRef> for Node {
    fn from(value: ColumnRef) -> Self {
        Node::ColumnRef(value)
    }
}

impl From<AConst> for Node {
    fn from(value: AConst) -> Self {
        Node::AConst(value)
    }
}

impl From<AExpr> for Node {
    fn from(value: AExpr) -> Self {
        Node::AExpr(value)
    }
}

impl From<FuncCall> for Node {
    fn from(value: FuncCall) -> Self {
        Node::FuncCall(value)
    }
}

impl From<TypeCast> for Node {
    fn from(value: TypeCast) -> Self {
        Node::TypeCast(value)
    }
}

impl From<ResTarget> for Node {
    fn from(value: ResTarget) -> Self {
        Node::ResTarget(value)
    }
}

impl From<RangeVar> for Node {
    fn from(value: RangeVar) -> Self {
        Node::RangeVar(value)
    }
}

impl From<NamedArgExpr> for Node {
    fn from(value: NamedArgExpr) -> Self {
        Node::NamedArgExpr(value)
    }
}

impl From<BoolExpr> for Node {
    fn from(value: BoolExpr) -> Self {
        Node::BoolExpr(value)
    }
}

impl From<SelectStmt> for Node {
    fn from(value: SelectStmt) -> Self {
        Node::SelectStmt(value)
    }
}

impl From<InsertStmt> for Node {
    fn from(value: InsertStmt) -> Self {
        Node::InsertStmt(value)
    }
}

impl From<UpdateStmt> for Node {
    fn from(value: UpdateStmt) -> Self {
        Node::UpdateStmt(value)
    }
}

impl From<DeleteStmt> for Node {
    fn from(value: DeleteStmt) -> Self {
        Node::DeleteStmt(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_and_location() {
        let node = Node::from(ParamRef::new(3, 17));
        assert_eq!(node.kind(), "ParamRef");
        assert_eq!(node.location(), Some(17));

        let text = Node::string("id");
        assert_eq!(text.kind(), "String");
        assert_eq!(text.location(), None);
    }
}
