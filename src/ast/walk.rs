use crate::ast::Node;

impl Node {
    /// Direct children in source order.
    pub fn children(&self) -> Vec<&Node> {
        let mut out: Vec<&Node> = Vec::new();
        match self {
            Node::List(items) => out.extend(items),
            Node::AConst(c) => out.push(&c.val),
            Node::ColumnRef(c) => out.extend(&c.fields),
            Node::AExpr(e) => {
                out.extend(e.lexpr.as_deref());
                out.extend(e.rexpr.as_deref());
            }
            Node::BoolExpr(e) => out.extend(&e.args),
            Node::FuncCall(f) => out.extend(&f.args),
            Node::NamedArgExpr(n) => out.push(&n.arg),
            Node::TypeCast(c) => out.push(&c.arg),
            Node::ResTarget(t) => out.extend(t.val.as_deref()),
            Node::SelectStmt(s) => {
                out.extend(&s.target_list);
                out.extend(&s.from_clause);
                out.extend(s.where_clause.as_deref());
                out.extend(s.values_lists.iter().flatten());
                out.extend(s.limit_count.as_deref());
                out.extend(s.limit_offset.as_deref());
            }
            Node::InsertStmt(s) => {
                out.extend(s.select_stmt.as_deref());
                out.extend(&s.returning_list);
            }
            Node::UpdateStmt(s) => {
                out.extend(&s.target_list);
                out.extend(&s.from_clause);
                out.extend(s.where_clause.as_deref());
                out.extend(&s.returning_list);
            }
            Node::DeleteStmt(s) => {
                out.extend(s.where_clause.as_deref());
                out.extend(&s.returning_list);
            }
            Node::String(_)
            | Node::Integer(_)
            | Node::Float(_)
            | Node::Null
            | Node::RangeVar(_)
            | Node::ParamRef(_) => {}
        }
        out
    }

    /// Pre-order, depth-first iterator over this node and everything below it.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Rebuild this node with every direct child passed through `f`.
    ///
    /// `f` decides whether to recurse, which lets a rewriter stop descending
    /// once it has replaced a subtree.
    pub fn map_children<F>(self, f: &mut F) -> Node
    where
        F: FnMut(Node) -> Node,
    {
        match self {
            Node::List(items) => Node::List(map_all(items, f)),
            Node::AConst(mut c) => {
                c.val = map_box(c.val, f);
                Node::AConst(c)
            }
            Node::ColumnRef(mut c) => {
                c.fields = map_all(c.fields, f);
                Node::ColumnRef(c)
            }
            Node::AExpr(mut e) => {
                e.lexpr = map_opt(e.lexpr, f);
                e.rexpr = map_opt(e.rexpr, f);
                Node::AExpr(e)
            }
            Node::BoolExpr(mut e) => {
                e.args = map_all(e.args, f);
                Node::BoolExpr(e)
            }
            Node::FuncCall(mut call) => {
                call.args = map_all(call.args, f);
                Node::FuncCall(call)
            }
            Node::NamedArgExpr(mut n) => {
                n.arg = map_box(n.arg, f);
                Node::NamedArgExpr(n)
            }
            Node::TypeCast(mut c) => {
                c.arg = map_box(c.arg, f);
                Node::TypeCast(c)
            }
            Node::ResTarget(mut t) => {
                t.val = map_opt(t.val, f);
                Node::ResTarget(t)
            }
            Node::SelectStmt(mut s) => {
                s.target_list = map_all(s.target_list, f);
                s.from_clause = map_all(s.from_clause, f);
                s.where_clause = map_opt(s.where_clause, f);
                s.values_lists = s.values_lists.into_iter().map(|row| map_all(row, &mut *f)).collect();
                s.limit_count = map_opt(s.limit_count, f);
                s.limit_offset = map_opt(s.limit_offset, f);
                Node::SelectStmt(s)
            }
            Node::InsertStmt(mut s) => {
                s.select_stmt = map_opt(s.select_stmt, f);
                s.returning_list = map_all(s.returning_list, f);
                Node::InsertStmt(s)
            }
            Node::UpdateStmt(mut s) => {
                s.target_list = map_all(s.target_list, f);
                s.from_clause = map_all(s.from_clause, f);
                s.where_clause = map_opt(s.where_clause, f);
                s.returning_list = map_all(s.returning_list, f);
                Node::UpdateStmt(s)
            }
            Node::DeleteStmt(mut s) => {
                s.where_clause = map_opt(s.where_clause, f);
                s.returning_list = map_all(s.returning_list, f);
                Node::DeleteStmt(s)
            }
            leaf => leaf,
        }
    }
}

fn map_all<F: FnMut(Node) -> Node>(items: Vec<Node>, f: &mut F) -> Vec<Node> {
    items.into_iter().map(&mut *f).collect()
}

fn map_box<F: FnMut(Node) -> Node>(node: Box<Node>, f: &mut F) -> Box<Node> {
    Box::new(f(*node))
}

fn map_opt<F: FnMut(Node) -> Node>(node: Option<Box<Node>>, f: &mut F) -> Option<Box<Node>> {
    node.map(|n| map_box(n, &mut *f))
}

pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().into_iter().rev());
        Some(node)
    }
}
