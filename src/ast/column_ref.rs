use crate::ast::Node;

/// A possibly qualified column reference such as `id`, `u.id` or `public.users.id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnRef {
    pub fields: Vec<Node>,
    pub location: usize,
}

impl ColumnRef {
    pub fn new(fields: &[&str], location: usize) -> Self {
        Self {
            fields: fields.iter().map(|f| Node::string(*f)).collect(),
            location,
        }
    }

    /// The textual name components; non-text fields (`*`) are ignored.
    pub fn names(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter_map(|f| match f {
                Node::String(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }
}
