//! Walk-local transpile context.
//!
//! One `TranspileState` exists per file being transpiled. It is never shared
//! between files: block depth and the ancestor stack are mutated throughout
//! the walk.

use crate::ast::{
    AALiteralExpression, ArrayLiteralExpression, Block, ElseClause, ElseIfClause,
    FunctionExpression, IfStatement, NamespaceStatement,
};
use crate::helpers::{HelpersNeeded, RuntimeHelper};
use crate::namespace::{NameStyle, NamespaceResolver};
use crate::options::TranspileOptions;
use crate::source_node::SourceNode;
use bsx_common::{Position, Range, Token};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::sync::Arc;

/// An enclosing node on the ancestor stack.
#[derive(Clone, Copy, Debug)]
pub enum Ancestor<'a> {
    If(&'a IfStatement),
    ElseIf(&'a ElseIfClause),
    Else(&'a ElseClause),
    Block(&'a Block),
    Function(&'a FunctionExpression),
    Namespace(&'a NamespaceStatement),
    ArrayLiteral(&'a ArrayLiteralExpression),
    AALiteral(&'a AALiteralExpression),
    /// Any other node that opens a nested statement sequence (loops,
    /// try/catch); only its range is consulted.
    Other(Range),
}

impl Ancestor<'_> {
    pub fn range(&self) -> Range {
        match self {
            Ancestor::If(node) => node.range(),
            Ancestor::ElseIf(node) => node.range(),
            Ancestor::Else(node) => node.range(),
            Ancestor::Block(node) => node.range(),
            Ancestor::Function(node) => node.range(),
            Ancestor::Namespace(node) => node.range(),
            Ancestor::ArrayLiteral(node) => node.range(),
            Ancestor::AALiteral(node) => node.range(),
            Ancestor::Other(range) => *range,
        }
    }
}

pub struct TranspileState<'a> {
    options: &'a TranspileOptions,
    resolver: &'a dyn NamespaceResolver,
    source_path: Arc<str>,
    block_depth: usize,
    lineage: SmallVec<[Ancestor<'a>; 16]>,
    helpers: HelpersNeeded,
}

impl<'a> TranspileState<'a> {
    pub fn new(
        options: &'a TranspileOptions,
        resolver: &'a dyn NamespaceResolver,
        source_path: impl Into<Arc<str>>,
    ) -> Self {
        TranspileState {
            options,
            resolver,
            source_path: source_path.into(),
            block_depth: 0,
            lineage: SmallVec::new(),
            helpers: HelpersNeeded::default(),
        }
    }

    pub fn options(&self) -> &'a TranspileOptions {
        self.options
    }

    pub fn resolver(&self) -> &'a dyn NamespaceResolver {
        self.resolver
    }

    pub fn source_path(&self) -> &Arc<str> {
        &self.source_path
    }

    // =========================================================================
    // Indentation
    // =========================================================================

    pub fn block_depth(&self) -> usize {
        self.block_depth
    }

    /// Run `f` one block level deeper; the depth is restored afterwards.
    pub fn with_block<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.block_depth += 1;
        let result = f(self);
        self.block_depth -= 1;
        result
    }

    pub fn indent(&self) -> SourceNode {
        if self.block_depth == 0 {
            return SourceNode::Text(Cow::Borrowed(""));
        }
        SourceNode::Text(Cow::Owned(self.options.indent_unit.repeat(self.block_depth)))
    }

    pub fn newline(&self) -> SourceNode {
        SourceNode::Text(Cow::Borrowed(self.options.new_line_str()))
    }

    // =========================================================================
    // Position-tagged text
    // =========================================================================

    pub fn source_node(&self, position: Position, text: impl Into<String>) -> SourceNode {
        SourceNode::mapped(position, &self.source_path, text)
    }

    /// The token's own text, tagged with its start position.
    pub fn token_node(&self, token: &Token) -> SourceNode {
        self.source_node(token.start(), token.text.clone())
    }

    /// An optional token, or `fallback` without a position when it was never
    /// written.
    pub fn token_or(&self, token: Option<&Token>, fallback: &'static str) -> SourceNode {
        match token {
            Some(token) => self.token_node(token),
            None => SourceNode::from(fallback),
        }
    }

    // =========================================================================
    // Lineage
    // =========================================================================

    /// Run `f` with `ancestor` on top of the stack; the stack is restored
    /// afterwards.
    pub fn with_ancestor<R>(&mut self, ancestor: Ancestor<'a>, f: impl FnOnce(&mut Self) -> R) -> R {
        let depth = self.lineage.len();
        self.lineage.push(ancestor);
        let result = f(self);
        self.lineage.truncate(depth);
        result
    }

    pub fn parent(&self) -> Option<&Ancestor<'a>> {
        self.lineage.last()
    }

    pub fn lineage(&self) -> &[Ancestor<'a>] {
        &self.lineage
    }

    /// The innermost namespace the walk is inside, if any.
    pub fn enclosing_namespace(&self) -> Option<&'a NamespaceStatement> {
        self.lineage.iter().rev().find_map(|ancestor| match ancestor {
            Ancestor::Namespace(namespace) => Some(*namespace),
            _ => None,
        })
    }

    pub fn enclosing_namespace_name(&self, style: NameStyle) -> Option<String> {
        self.enclosing_namespace()
            .map(|namespace| namespace.name().name_text(style))
    }

    // =========================================================================
    // Runtime helpers
    // =========================================================================

    /// Record a use of `helper` and return its callable name.
    pub fn note_helper(&mut self, helper: RuntimeHelper) -> String {
        self.helpers.mark(helper);
        helper.name(&self.options.helper_prefix)
    }

    pub fn helpers(&self) -> &HelpersNeeded {
        &self.helpers
    }
}
