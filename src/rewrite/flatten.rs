use crate::ast::Node;

/// Collapse a name-bearing subtree into its literal text.
///
/// Concatenates every `String` fragment in pre-order and reports whether an
/// `AConst` was seen, i.e. whether the name was written as a quoted string.
pub fn flatten<'a, I>(nodes: I) -> (String, bool)
where
    I: IntoIterator<Item = &'a Node>,
{
    nodes
        .into_iter()
        .flat_map(|node| node.descendants())
        .fold((String::new(), false), |(mut text, is_const), node| match node {
            Node::AConst(_) => (text, true),
            Node::String(fragment) => {
                text.push_str(fragment);
                (text, is_const)
            }
            _ => (text, is_const),
        })
}

#[cfg(test)]
mod tests {
    use ordered_float::NotNan;

    use super::*;
    use crate::ast::{AConst, ColumnRef};

    #[test]
    fn flatten_identifier() {
        let args = vec![Node::from(ColumnRef::new(&["user_id"], 9))];
        assert_eq!(flatten(&args), ("user_id".to_string(), false));
    }

    #[test]
    fn flatten_quoted_constant() {
        let args = vec![Node::from(AConst::string("user id", 9))];
        assert_eq!(flatten(&args), ("user id".to_string(), true));
    }

    #[test]
    fn flatten_ignores_non_text() {
        let args = vec![Node::Integer(4), Node::Float(NotNan::new(2.5).unwrap()), Node::Null];
        assert_eq!(flatten(&args), (String::new(), false));
    }
}
