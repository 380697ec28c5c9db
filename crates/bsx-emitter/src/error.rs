//! Construction-time errors.
//!
//! A tree that violates a structural invariant is rejected while it is being
//! built; emission never fails.

use bsx_common::Range;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConstructionError {
    /// A call carries more arguments than the runtime accepts.
    TooManyArguments {
        count: usize,
        max: usize,
        range: Range,
    },
    /// A namespaced name was built over something other than a chain of
    /// dotted accesses rooted at a bare identifier.
    InvalidNamespaceChain { range: Range },
    /// A comment node was built without any comment tokens.
    EmptyComment,
}

impl ConstructionError {
    /// Where the offending node sits; `None` when it has no tokens.
    pub fn range(&self) -> Option<Range> {
        match self {
            ConstructionError::TooManyArguments { range, .. }
            | ConstructionError::InvalidNamespaceChain { range } => Some(*range),
            ConstructionError::EmptyComment => None,
        }
    }
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionError::TooManyArguments { count, max, range } => write!(
                f,
                "call at {} has {} arguments, at most {} are allowed",
                range.start, count, max
            ),
            ConstructionError::InvalidNamespaceChain { range } => write!(
                f,
                "expression at {} is not a dotted name rooted at an identifier",
                range.start
            ),
            ConstructionError::EmptyComment => write!(f, "comment has no comment tokens"),
        }
    }
}

impl std::error::Error for ConstructionError {}
