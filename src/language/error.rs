use std::{fmt, path::Path};

use thiserror::Error;

/// Violations of the invariants held by the document model. Every mutating
/// operation checks before it changes anything, so a returned error means
/// the value is exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("a property value requires at least one element")]
    ValueRequired,
    #[error("value '{0}' is already present")]
    DuplicateValue(String),
    #[error("value '{0}' not found")]
    ValueNotFound(String),
    #[error("cannot remove '{0}', the last remaining value")]
    LastValue(String),
    #[error("invalid property label '{0}'")]
    InvalidLabel(String),
    #[error("property '{0}' is already present in node")]
    DuplicateProperty(String),
    #[error("property '{0}' not found in node")]
    PropertyNotFound(String),
    #[error("a sequence requires at least one node")]
    EmptySequence,
    #[error("invalid index {0}")]
    InvalidIndex(usize),
}

/// Failures moving a Cursor through a GameTree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("invalid variation number {0}")]
    InvalidVariation(usize),
    #[error("reached end of game tree")]
    EndOfTree,
    #[error("reached start of game tree")]
    StartOfTree,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}
