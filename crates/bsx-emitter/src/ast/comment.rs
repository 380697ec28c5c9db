use crate::error::ConstructionError;
use bsx_common::{Range, Token};

/// Which syntactic position a comment occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentPlacement {
    /// A statement in a block or body.
    Statement,
    /// A filler between elements of an array or associative-array literal.
    Element,
}

/// One or more consecutive comment lines.
///
/// The same node kind serves both as a statement and as a collection-literal
/// element; `placement` records which.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    pub(crate) tokens: Vec<Token>,
    pub(crate) placement: CommentPlacement,
    range: Range,
}

impl Comment {
    /// Fails when `tokens` is empty.
    pub fn new(tokens: Vec<Token>, placement: CommentPlacement) -> Result<Self, ConstructionError> {
        let range = Range::cover_all(tokens.iter().map(|t| t.range))
            .ok_or(ConstructionError::EmptyComment)?;
        Ok(Comment {
            tokens,
            placement,
            range,
        })
    }

    pub fn statement(tokens: Vec<Token>) -> Result<Self, ConstructionError> {
        Comment::new(tokens, CommentPlacement::Statement)
    }

    pub fn element(tokens: Vec<Token>) -> Result<Self, ConstructionError> {
        Comment::new(tokens, CommentPlacement::Element)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn placement(&self) -> CommentPlacement {
        self.placement
    }

    pub fn range(&self) -> Range {
        self.range
    }
}
