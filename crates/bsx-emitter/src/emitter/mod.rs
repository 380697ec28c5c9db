//! Node emission.
//!
//! Every statement and expression kind gets an inherent
//! `transpile(&self, &mut TranspileState) -> Vec<SourceNode>`; the sum types
//! dispatch with an exhaustive match. Submodules mirror the node families:
//!
//! - `statements`: blocks, bodies, control flow and assignment forms
//! - `expressions`: operators, calls, member access and namespace rewriting
//! - `literals`: scalar, collection and template-string literals
//! - `functions`: function expressions and declarations
//! - `comments`: comment statements and elements
//!
//! Ternary and null-coalescing emission lives with the rest of their
//! lowering in `crate::lowering`.

mod comments;
mod expressions;
mod functions;
mod literals;
mod statements;

pub use literals::{decode_string_literal, quote_string};
