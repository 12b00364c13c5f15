use std::fmt;

use serde::{Deserialize, Serialize};

/// A textual substitution against the original statement text.
///
/// `location` is a byte offset relative to the start of the statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub location: usize,
    pub old: String,
    pub new: String,
}

impl Edit {
    pub fn new(location: usize, old: impl Into<String>, new: impl Into<String>) -> Self {
        Self { location, old: old.into(), new: new.into() }
    }

    fn end(&self) -> usize {
        self.location + self.old.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    OutOfBounds(Edit),
    EmptyOld(Edit),
    EmptyNew(Edit),
    /// The source text at the edit location is not `old`.
    Mismatch { edit: Edit, found: String },
    Overlap(Edit, Edit),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::OutOfBounds(e) => write!(f, "edit at {} is out of bounds", e.location),
            EditError::EmptyOld(e) => write!(f, "edit at {} has nothing to replace", e.location),
            EditError::EmptyNew(e) => write!(f, "edit at {} has empty contents", e.location),
            EditError::Mismatch { edit, found } => write!(
                f,
                "edit at {} expected '{}' but found '{}'",
                edit.location, edit.old, found
            ),
            EditError::Overlap(a, b) => {
                write!(f, "edits at {} and {} overlap", a.location, b.location)
            }
        }
    }
}

impl std::error::Error for EditError {}

/// Apply `edits` to `source` and return the rewritten text.
///
/// Edits are applied from the highest location down, so earlier offsets stay
/// valid while later text changes length.
pub fn apply_edits(source: &str, edits: &[Edit]) -> Result<String, EditError> {
    let mut ordered: Vec<&Edit> = edits.iter().collect();
    ordered.sort_by(|a, b| b.location.cmp(&a.location));

    let mut out = source.to_string();
    for (idx, edit) in ordered.iter().enumerate() {
        if edit.old.is_empty() {
            return Err(EditError::EmptyOld((*edit).clone()));
        }
        if edit.new.is_empty() {
            return Err(EditError::EmptyNew((*edit).clone()));
        }
        if edit.end() > source.len() {
            return Err(EditError::OutOfBounds((*edit).clone()));
        }
        if let Some(next) = ordered.get(idx + 1) {
            if next.end() > edit.location {
                return Err(EditError::Overlap((*next).clone(), (*edit).clone()));
            }
        }

        let found = source.get(edit.location..edit.end()).ok_or_else(|| EditError::OutOfBounds((*edit).clone()))?;
        if found != edit.old {
            return Err(EditError::Mismatch { edit: (*edit).clone(), found: found.to_string() });
        }

        out.replace_range(edit.location..edit.end(), &edit.new);
    }

    Ok(out)
}
