//! Emission primitive.
//!
//! Every node emits an ordered list of [`SourceNode`]s. Concatenating their
//! text gives the output; the mapped ones also feed the source map.

use bsx_common::Position;
use std::borrow::Cow;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceNode {
    /// Synthesized text with no source position (indentation, separators,
    /// canonical keywords standing in for absent tokens).
    Text(Cow<'static, str>),
    /// Text written at `position` in `source`.
    Mapped {
        position: Position,
        source: Arc<str>,
        text: String,
    },
}

impl SourceNode {
    pub fn mapped(position: Position, source: &Arc<str>, text: impl Into<String>) -> Self {
        SourceNode::Mapped {
            position,
            source: Arc::clone(source),
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            SourceNode::Text(text) => text,
            SourceNode::Mapped { text, .. } => text,
        }
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            SourceNode::Text(_) => None,
            SourceNode::Mapped { position, .. } => Some(*position),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

impl From<&'static str> for SourceNode {
    fn from(text: &'static str) -> Self {
        SourceNode::Text(Cow::Borrowed(text))
    }
}

impl From<String> for SourceNode {
    fn from(text: String) -> Self {
        SourceNode::Text(Cow::Owned(text))
    }
}

/// Concatenated output text of `nodes`.
pub fn to_text(nodes: &[SourceNode]) -> String {
    let mut out = String::with_capacity(nodes.iter().map(|n| n.text().len()).sum());
    for node in nodes {
        out.push_str(node.text());
    }
    out
}
