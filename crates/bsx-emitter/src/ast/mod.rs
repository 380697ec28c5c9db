//! Syntax tree consumed by the emitter.
//!
//! Trees are built by the external parser; nodes own their children and are
//! read-only afterwards. Children are reached through accessors so a node's
//! range always covers them. The only child replacements are `replace_body`
//! and `replace_end_token` on [`FunctionExpression`] and
//! [`FunctionStatement`], which recompute the range.

/// Read-only accessors for node fields.
macro_rules! impl_accessors {
    ($ty:ident { $($field:ident: $out:ty),* $(,)? }) => {
        impl $ty {
            $(
                pub fn $field(&self) -> &$out {
                    &self.$field
                }
            )*
        }
    };
}

pub mod comment;
pub mod expressions;
pub mod statements;

pub use comment::{Comment, CommentPlacement};
pub use expressions::{
    AALiteralExpression, AAMember, AAPair, ArrayLiteralExpression, BinaryExpression,
    CallExpression, CallfuncExpression, DottedGetExpression, Expression, FunctionExpression,
    FunctionParameter, GroupingExpression, IndexedGetExpression, LiteralExpression,
    NewExpression, NullCoalescingExpression, TemplatePart, TemplateStringExpression,
    TernaryExpression, TypeClause, UnaryExpression, VariableExpression,
    XmlAttributeGetExpression,
};
pub use statements::{
    AssignmentStatement, Block, Body, DottedSetStatement, ElseClause, ElseIfClause,
    ExpressionStatement, ForEachStatement, ForStatement, ForStep, FunctionStatement,
    GotoStatement, IfStatement, ImportStatement, IncrementStatement, IndexedSetStatement,
    KeywordStatement, LabelStatement, LibraryStatement, NamespaceStatement, PrintItem,
    PrintStatement, ReturnStatement, Statement, ThrowStatement, TryCatchStatement,
    WhileStatement,
};
