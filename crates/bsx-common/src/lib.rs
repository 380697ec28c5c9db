//! Common types and utilities for the bsx transpiler.
//!
//! This crate provides foundational types used across all bsx crates:
//! - Position/Range types for line/column source locations
//! - The positioned token model handed over by the lexer
//! - Common enums (`NewLineKind`)
//! - Transpiler limits
//! - Source map generation

// Common types - Shared constants to break circular dependencies
pub mod common;
pub use common::NewLineKind;

// Centralized limits and thresholds
pub mod limits;

// Position/Range types for line/column source locations
pub mod position;
pub use position::{Position, Range, lines_touch};

// Positioned tokens produced by the lexer
pub mod token;
pub use token::{Token, TokenKind};

// Source Map generation
pub mod source_map;

#[cfg(test)]
#[path = "tests/position_tests.rs"]
mod position_tests;

#[cfg(test)]
#[path = "tests/source_map_tests.rs"]
mod source_map_tests;
