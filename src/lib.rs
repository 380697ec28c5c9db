//! bsx: transpiler core for a BrighterScript-style superset of BrightScript.
//!
//! This crate re-exports the workspace crates for hosts that want a single
//! dependency:
//! - `bsx_common`: positions, tokens, limits and source-map generation
//! - `bsx_emitter`: syntax tree, emission, namespace rewriting and lowering
//!
//! Hosts that want diagnostics output call [`tracing_config::init_tracing`]
//! once at startup.

// Shared leaf types
pub use bsx_common::{NewLineKind, Position, Range, Token, TokenKind, limits, source_map};

// Transpilation core
pub use bsx_emitter::{
    Ancestor, ConstructionError, HelpersNeeded, NameStyle, NamespaceResolver, NamespaceTable,
    NamespacedName, NoNamespaces, PrintOutput, Printer, RuntimeHelper, SourceNode,
    TranspileOptions, TranspileState, ast, print_to_string,
};

// Tracing subscriber setup driven by BSX_LOG / BSX_LOG_FORMAT
pub mod tracing_config;
