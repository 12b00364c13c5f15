use indexmap::IndexMap;

use crate::{
    ast::{InsertStmt, Node, ParamRef, RangeVar, RawStmt, ResTarget, SelectStmt, UpdateStmt},
    compiler::{ParamOccurrence, ParamParent},
};

/// What the resolver needs to know about a normalized statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoundParams {
    /// Every table reference, statement relations included, in source order.
    pub range_vars: Vec<RangeVar>,
    /// One occurrence per ordinal, ordered by ordinal.
    pub occurrences: Vec<ParamOccurrence>,
}

/// Collects placeholders together with the context the resolver types them from.
///
/// A placeholder's parent is the closest enclosing `AExpr`, `FuncCall`,
/// `ResTarget` or `TypeCast`; a placeholder with none of them above it is its
/// own parent. When an ordinal appears more than once only its first
/// appearance is kept.
#[derive(Debug, Default)]
pub struct ParamFinder {
    range_vars: Vec<RangeVar>,
    found: IndexMap<usize, ParamOccurrence>,
}

impl ParamFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(mut self, raw: &RawStmt) -> FoundParams {
        self.visit(&raw.stmt, None);

        let mut occurrences: Vec<_> = self.found.into_values().collect();
        occurrences.sort_by_key(|occ| occ.param.number);

        FoundParams { range_vars: self.range_vars, occurrences }
    }

    fn record(&mut self, param: &ParamRef, parent: ParamParent, rv: Option<RangeVar>) {
        self.found.entry(param.number).or_insert_with(|| {
            let occ = ParamOccurrence::new(*param, parent);
            match rv {
                Some(rv) => occ.with_rv(rv),
                None => occ,
            }
        });
    }

    fn visit(&mut self, node: &Node, parent: Option<&Node>) {
        match node {
            Node::ParamRef(param) => {
                let parent = match parent {
                    Some(parent) => ParamParent::Node(parent.clone()),
                    None => ParamParent::from(*param),
                };
                let rv = self.range_vars.last().cloned();
                self.record(param, parent, rv);
            }
            Node::RangeVar(rv) => self.range_vars.push(rv.clone()),
            Node::SelectStmt(select) => self.visit_select(select, None),
            Node::InsertStmt(insert) => self.visit_insert(insert),
            Node::UpdateStmt(update) => self.visit_update(update),
            Node::DeleteStmt(delete) => {
                self.range_vars.push(delete.relation.clone());
                self.visit_all(delete.where_clause.as_deref(), None);
                self.visit_all(&delete.returning_list, None);
            }
            Node::AExpr(_) | Node::FuncCall(_) | Node::ResTarget(_) | Node::TypeCast(_) => {
                for child in node.children() {
                    self.visit(child, Some(node));
                }
            }
            _ => {
                for child in node.children() {
                    self.visit(child, parent);
                }
            }
        }
    }

    fn visit_all<'n>(&mut self, nodes: impl IntoIterator<Item = &'n Node>, parent: Option<&Node>) {
        for node in nodes {
            self.visit(node, parent);
        }
    }

    /// `insert` carries the target relation and columns when the select is
    /// the `VALUES` source of an INSERT.
    fn visit_select(&mut self, select: &SelectStmt, insert: Option<(&RangeVar, &[ResTarget])>) {
        self.visit_all(&select.target_list, None);
        self.visit_all(&select.from_clause, None);
        self.visit_all(select.where_clause.as_deref(), None);

        for row in &select.values_lists {
            for (i, value) in row.iter().enumerate() {
                let target = insert.and_then(|(rv, cols)| cols.get(i).map(|col| (rv, col)));
                match (value, target) {
                    (Node::ParamRef(param), Some((rv, col))) => {
                        self.record(param, ParamParent::from(col.clone()), Some(rv.clone()));
                    }
                    _ => self.visit(value, None),
                }
            }
        }

        self.visit_limit(select.limit_count.as_deref(), ParamParent::LimitCount);
        self.visit_limit(select.limit_offset.as_deref(), ParamParent::LimitOffset);
    }

    fn visit_limit(&mut self, limit: Option<&Node>, kind: ParamParent) {
        match limit {
            Some(Node::ParamRef(param)) => self.record(param, kind, None),
            Some(other) => self.visit(other, None),
            None => {}
        }
    }

    fn visit_insert(&mut self, insert: &InsertStmt) {
        self.range_vars.push(insert.relation.clone());

        match insert.select_stmt.as_deref() {
            Some(Node::SelectStmt(select)) => {
                self.visit_select(select, Some((&insert.relation, insert.cols.as_slice())));
            }
            Some(other) => self.visit(other, None),
            None => {}
        }

        self.visit_all(&insert.returning_list, None);
    }

    fn visit_update(&mut self, update: &UpdateStmt) {
        self.range_vars.push(update.relation.clone());

        for target in &update.target_list {
            let assigned = match target {
                Node::ResTarget(res) => match res.val.as_deref() {
                    Some(Node::ParamRef(param)) => Some((res, param)),
                    _ => None,
                },
                _ => None,
            };
            match assigned {
                Some((res, param)) => {
                    self.record(param, ParamParent::from(res.clone()), Some(update.relation.clone()));
                }
                None => self.visit(target, None),
            }
        }

        self.visit_all(&update.from_clause, None);
        self.visit_all(update.where_clause.as_deref(), None);
        self.visit_all(&update.returning_list, None);
    }
}

/// Collect range variables and placeholder occurrences from a normalized statement.
pub fn find_params(raw: &RawStmt) -> FoundParams {
    ParamFinder::new().find(raw)
}
