use crate::ast::{Node, RangeVar, ResTarget};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SelectStmt {
    pub target_list: Vec<Node>,
    pub from_clause: Vec<Node>,
    pub where_clause: Option<Box<Node>>,
    /// `VALUES (...), (...)` rows, used as the source of an INSERT.
    pub values_lists: Vec<Vec<Node>>,
    pub limit_count: Option<Box<Node>>,
    pub limit_offset: Option<Box<Node>>,
}

impl SelectStmt {
    pub fn values(rows: Vec<Vec<Node>>) -> Self {
        Self { values_lists: rows, ..Default::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InsertStmt {
    pub relation: RangeVar,
    pub cols: Vec<ResTarget>,
    pub select_stmt: Option<Box<Node>>,
    pub returning_list: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UpdateStmt {
    pub relation: RangeVar,
    /// `SET` assignments, each a `ResTarget`.
    pub target_list: Vec<Node>,
    pub from_clause: Vec<Node>,
    pub where_clause: Option<Box<Node>>,
    pub returning_list: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeleteStmt {
    pub relation: RangeVar,
    pub where_clause: Option<Box<Node>>,
    pub returning_list: Vec<Node>,
}
