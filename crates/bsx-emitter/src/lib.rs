//! Transpilation core of the bsx compiler.
//!
//! This crate turns a parsed syntax tree into target-language source text
//! and a source map:
//! - Syntax tree taxonomy (`ast`)
//! - Emission primitive and walk-local state (`SourceNode`, `TranspileState`)
//! - Namespace resolution seam and flattened names (`namespace`)
//! - Lowering of `?:` and `??` into runtime helper calls (`lowering`)
//! - File-level printing with source map generation (`printer`)

// Syntax tree nodes
pub mod ast;

// Construction-time errors
pub mod error;
pub use error::ConstructionError;

// Per-node emission
pub mod emitter;

// Runtime helper bookkeeping
pub mod helpers;
pub use helpers::{HelpersNeeded, RuntimeHelper};

// Ternary / null-coalescing lowering
pub mod lowering;

// Namespace resolver seam and namespaced names
pub mod namespace;
pub use namespace::{NameStyle, NamespaceResolver, NamespaceTable, NamespacedName, NoNamespaces};

// Transpile configuration
pub mod options;
pub use options::TranspileOptions;

// File-level printer
pub mod printer;
pub use printer::{PrintOutput, Printer, print_to_string};

// Emission primitive
pub mod source_node;
pub use source_node::SourceNode;

// Walk-local context
pub mod transpile_state;
pub use transpile_state::{Ancestor, TranspileState};

#[cfg(test)]
#[path = "tests/test_fixtures.rs"]
mod test_fixtures;

#[cfg(test)]
#[path = "tests/transpile_state_tests.rs"]
mod transpile_state_tests;

#[cfg(test)]
#[path = "tests/ast_tests.rs"]
mod ast_tests;

#[cfg(test)]
#[path = "tests/statement_tests.rs"]
mod statement_tests;

#[cfg(test)]
#[path = "tests/expression_tests.rs"]
mod expression_tests;

#[cfg(test)]
#[path = "tests/lowering_tests.rs"]
mod lowering_tests;

#[cfg(test)]
#[path = "tests/printer_tests.rs"]
mod printer_tests;
