//! Rewrites of superset expressions with no target-language equivalent.

pub mod expression_info;
mod scope_safe;

pub use expression_info::{captured_variables, contains_mutating, is_mutating, reachable};
