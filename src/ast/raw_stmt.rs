use crate::ast::Node;

/// A single statement as handed over by the parser.
///
/// `stmt_location` is the byte offset of the statement inside the source file;
/// node locations are absolute, so edits subtract it to become statement relative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawStmt {
    pub stmt: Node,
    pub stmt_location: usize,
    pub stmt_len: usize,
}

impl RawStmt {
    pub fn new(stmt: impl Into<Node>, stmt_location: usize, stmt_len: usize) -> Self {
        Self { stmt: stmt.into(), stmt_location, stmt_len }
    }
}
