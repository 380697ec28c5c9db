//! Namespace resolution seam and the namespaced-name view.
//!
//! The core never decides on its own whether a dotted name refers to a
//! namespace; it asks a [`NamespaceResolver`] supplied by the caller and
//! treats the answer as authoritative.

use crate::ast::{DottedGetExpression, Expression};
use crate::error::ConstructionError;
use bsx_common::{Position, Range, Token};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Scope queries needed by the namespace rewrite.
///
/// Both queries must be pure and return a stable answer for the duration of
/// one transpilation.
pub trait NamespaceResolver {
    /// Does the dotted chain `parts` (root first) start with a known
    /// namespace name?
    fn callee_starts_with_namespace(&self, parts: &[&str]) -> bool;

    /// Is `name` a function declared inside a namespace? `enclosing_namespace`
    /// is the dotted name of the namespace the reference appears in, if any.
    fn is_namespace_function(&self, name: &str, enclosing_namespace: Option<&str>) -> bool;
}

/// Resolver for callers without namespace support; nothing is rewritten.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoNamespaces;

impl NamespaceResolver for NoNamespaces {
    fn callee_starts_with_namespace(&self, _parts: &[&str]) -> bool {
        false
    }

    fn is_namespace_function(&self, _name: &str, _enclosing_namespace: Option<&str>) -> bool {
        false
    }
}

/// Case-insensitive in-memory resolver.
///
/// Registering `A.B` registers both `a` and `a.b`. Functions are keyed by
/// their fully qualified lowercase name.
#[derive(Clone, Debug, Default)]
pub struct NamespaceTable {
    namespaces: FxHashSet<String>,
    functions: FxHashSet<String>,
}

impl NamespaceTable {
    pub fn new() -> Self {
        NamespaceTable::default()
    }

    pub fn add_namespace(&mut self, name: &str) {
        let lower = name.to_ascii_lowercase();
        let mut prefix = String::with_capacity(lower.len());
        for part in lower.split('.') {
            if !prefix.is_empty() {
                prefix.push('.');
            }
            prefix.push_str(part);
            self.namespaces.insert(prefix.clone());
        }
    }

    /// Register `function` as declared in `namespace` (which is registered
    /// too).
    pub fn add_function(&mut self, namespace: &str, function: &str) {
        self.add_namespace(namespace);
        self.functions
            .insert(format!("{namespace}.{function}").to_ascii_lowercase());
    }

    pub fn is_namespace(&self, name: &str) -> bool {
        self.namespaces.contains(&name.to_ascii_lowercase())
    }

    pub fn namespace_count(&self) -> usize {
        self.namespaces.len()
    }
}

impl NamespaceResolver for NamespaceTable {
    fn callee_starts_with_namespace(&self, parts: &[&str]) -> bool {
        let Some(root) = parts.first() else {
            return false;
        };
        self.is_namespace(root)
    }

    fn is_namespace_function(&self, name: &str, enclosing_namespace: Option<&str>) -> bool {
        let qualified = match enclosing_namespace {
            Some(namespace) => format!("{namespace}.{name}"),
            None => name.to_string(),
        };
        self.functions.contains(&qualified.to_ascii_lowercase())
    }
}

// =============================================================================
// Namespaced names
// =============================================================================

/// Spelling of a [`NamespacedName`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameStyle {
    /// `A.B.c`, the superset syntax.
    Dotted,
    /// `A_B_c`, the target syntax.
    Flattened,
}

impl NameStyle {
    pub fn separator(self) -> &'static str {
        match self {
            NameStyle::Dotted => ".",
            NameStyle::Flattened => "_",
        }
    }
}

/// A view over `Variable(.name)*`, validated when it is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespacedName {
    expression: Box<Expression>,
}

impl NamespacedName {
    /// Fails unless `expression` is a variable or a chain of dotted accesses
    /// rooted at one.
    pub fn new(expression: Expression) -> Result<Self, ConstructionError> {
        if dotted_chain(&expression).is_none() {
            return Err(ConstructionError::InvalidNamespaceChain {
                range: expression.range(),
            });
        }
        Ok(NamespacedName {
            expression: Box::new(expression),
        })
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn range(&self) -> Range {
        self.expression.range()
    }

    pub fn start(&self) -> Position {
        self.range().start
    }

    /// Name tokens, root first.
    pub fn parts(&self) -> SmallVec<[&Token; 4]> {
        dotted_chain(&self.expression).unwrap_or_default()
    }

    /// The last part (`c` in `A.B.c`).
    pub fn last_part(&self) -> &str {
        self.parts().last().map_or("", |token| token.text.as_str())
    }

    pub fn name_text(&self, style: NameStyle) -> String {
        join_parts(&self.parts(), style)
    }
}

/// Name tokens of a `Variable(.name)*` chain, root first; `None` when any
/// link is something else.
pub(crate) fn dotted_chain(expression: &Expression) -> Option<SmallVec<[&Token; 4]>> {
    let mut parts: SmallVec<[&Token; 4]> = SmallVec::new();
    let mut current = expression;
    loop {
        match current {
            Expression::Variable(variable) => {
                parts.push(&variable.name);
                break;
            }
            Expression::DottedGet(DottedGetExpression { obj, name, .. }) => {
                parts.push(name);
                current = obj;
            }
            _ => return None,
        }
    }
    parts.reverse();
    Some(parts)
}

pub(crate) fn join_parts(parts: &[&Token], style: NameStyle) -> String {
    let mut text = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            text.push_str(style.separator());
        }
        text.push_str(&part.text);
    }
    text
}
