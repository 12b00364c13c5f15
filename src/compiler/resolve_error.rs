use std::fmt;

/// Why a statement's parameters could not be typed.
///
/// Locations are byte offsets into the source file, as recorded by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The left side of a comparison holds no column to type the placeholder against.
    NoColumnReference { location: usize },
    ColumnNotFound { name: String, location: usize },
    AmbiguousColumn { name: String, location: usize },
    /// A column reference with more than two name components.
    TooManyQualifiers { fields: Vec<String>, location: usize },
    /// The placeholder sits past the last argument the function declares.
    ArityMismatch { function: String, location: usize },
    /// A cast without a type, or a result target without a name or table.
    MissingTypeInfo { node: &'static str, detail: String, location: usize },
    /// Only raised when the configuration rejects untyped contexts.
    UnsupportedParent { kind: &'static str, location: usize },
}

impl ResolveError {
    pub fn location(&self) -> usize {
        match self {
            ResolveError::NoColumnReference { location }
            | ResolveError::ColumnNotFound { location, .. }
            | ResolveError::AmbiguousColumn { location, .. }
            | ResolveError::TooManyQualifiers { location, .. }
            | ResolveError::ArityMismatch { location, .. }
            | ResolveError::MissingTypeInfo { location, .. }
            | ResolveError::UnsupportedParent { location, .. } => *location,
        }
    }

    /// PostgreSQL error code used when rendering the diagnostic.
    pub fn sqlstate(&self) -> &'static str {
        match self {
            ResolveError::ColumnNotFound { .. } | ResolveError::AmbiguousColumn { .. } => "42703",
            ResolveError::ArityMismatch { .. } => "42883",
            ResolveError::TooManyQualifiers { .. } => "42601",
            _ => "XXXXX",
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NoColumnReference { .. } => write!(f, "no column reference found"),
            ResolveError::ColumnNotFound { name, .. } => write!(f, "column \"{}\" does not exist", name),
            ResolveError::AmbiguousColumn { name, .. } => {
                write!(f, "column reference \"{}\" is ambiguous", name)
            }
            ResolveError::TooManyQualifiers { fields, .. } => {
                write!(f, "improper qualified name (too many dotted names): {}", fields.join("."))
            }
            ResolveError::ArityMismatch { function, .. } => {
                write!(f, "incorrect number of arguments to {}", function)
            }
            ResolveError::MissingTypeInfo { node, detail, .. } => write!(f, "{} {}", node, detail),
            ResolveError::UnsupportedParent { kind, .. } => {
                write!(f, "unsupported reference type: {}", kind)
            }
        }
    }
}

impl std::error::Error for ResolveError {}
