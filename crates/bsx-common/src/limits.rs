//! Centralized limits for the transpiler.
//!
//! Limits that reject a tree at construction time live here so the parser,
//! the emitter and any diagnostics layer agree on the same values.

// =============================================================================
// Construction Limits
// =============================================================================

/// Maximum number of arguments a call expression may carry.
///
/// The target runtime refuses to dispatch calls with more arguments than
/// this, so a call node exceeding it is rejected when it is built rather
/// than producing output that fails on device.
///
/// ```text
/// doWork(a1, a2, ..., a32)        ' ok
/// doWork(a1, a2, ..., a32, a33)   ' rejected at construction
/// ```
pub const MAX_CALL_ARGUMENTS: usize = 32;
