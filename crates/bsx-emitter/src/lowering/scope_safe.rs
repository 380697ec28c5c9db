//! Lowering of `?:` and `??` into runtime helper calls.
//!
//! When the operands that may be skipped are free of side effects, the
//! value-only helpers are called with every operand evaluated up front:
//!
//! ```text
//! bslib_simpleTernary(test, a, b)
//! bslib_simpleCoalesce(left, right)
//! ```
//!
//! Otherwise each deferred operand is wrapped in a function literal that
//! takes a scope object holding every captured variable, so it runs at most
//! once and sees the caller's bindings:
//!
//! ```text
//! bslib_scopeSafeTernary(test, {"a": a}, function(scope)
//!     a = scope["a"]
//!     return a.b()
//! end function, function(scope)
//!     a = scope["a"]
//!     return a
//! end function)
//! ```

use super::expression_info::{captured_variables, contains_mutating};
use crate::ast::{Expression, NullCoalescingExpression, TernaryExpression, VariableExpression};
use crate::helpers::RuntimeHelper;
use crate::namespace::NameStyle;
use crate::source_node::SourceNode;
use crate::transpile_state::TranspileState;
use tracing::trace;

impl TernaryExpression {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let test: &'a Expression = &self.test;
        let consequent: &'a Expression = &self.consequent;
        let alternate: &'a Expression = &self.alternate;

        if !contains_mutating(consequent) && !contains_mutating(alternate) {
            let helper = state.note_helper(RuntimeHelper::SimpleTernary);
            trace!(helper = %helper, "ternary lowered to value helper");
            let mut out = vec![state.source_node(self.question.start(), helper), "(".into()];
            out.extend(test.transpile(state));
            out.push(", ".into());
            out.extend(consequent.transpile(state));
            out.push(", ".into());
            out.extend(alternate.transpile(state));
            out.push(")".into());
            return out;
        }

        let helper = state.note_helper(RuntimeHelper::ScopeSafeTernary);
        let captured = capture(state, &[consequent, alternate]);
        trace!(helper = %helper, captured = captured.len(), "ternary lowered to scope-safe helper");

        let mut out = vec![state.source_node(self.question.start(), helper), "(".into()];
        out.extend(test.transpile(state));
        out.push(", ".into());
        out.extend(scope_object(state, &captured));
        out.push(", ".into());
        out.extend(deferred_operand(state, &captured, consequent));
        out.push(", ".into());
        out.extend(deferred_operand(state, &captured, alternate));
        out.push(")".into());
        out
    }
}

impl NullCoalescingExpression {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let left: &'a Expression = &self.consequent;
        let right: &'a Expression = &self.alternate;

        if !contains_mutating(left) && !contains_mutating(right) {
            let helper = state.note_helper(RuntimeHelper::SimpleCoalesce);
            trace!(helper = %helper, "coalescing lowered to value helper");
            let mut out = vec![state.source_node(self.operator.start(), helper), "(".into()];
            out.extend(left.transpile(state));
            out.push(", ".into());
            out.extend(right.transpile(state));
            out.push(")".into());
            return out;
        }

        let helper = state.note_helper(RuntimeHelper::ScopeSafeCoalesce);
        let captured = capture(state, &[right]);
        trace!(helper = %helper, captured = captured.len(), "coalescing lowered to scope-safe helper");

        let mut out = vec![state.source_node(self.operator.start(), helper), "(".into()];
        out.extend(left.transpile(state));
        out.push(", ".into());
        out.extend(scope_object(state, &captured));
        out.push(", ".into());
        out.extend(deferred_operand(state, &captured, right));
        out.push(")".into());
        out
    }
}

fn capture<'a>(
    state: &TranspileState<'a>,
    operands: &[&'a Expression],
) -> Vec<&'a VariableExpression> {
    let namespace = state.enclosing_namespace_name(NameStyle::Dotted);
    captured_variables(operands, state.resolver(), namespace.as_deref())
}

/// `{"a": a, "b": b}`, or `{}` when nothing is captured.
fn scope_object(state: &TranspileState<'_>, captured: &[&VariableExpression]) -> Vec<SourceNode> {
    if captured.is_empty() {
        return vec!["{}".into()];
    }
    let mut out = vec!["{".into()];
    for (i, variable) in captured.iter().enumerate() {
        if i > 0 {
            out.push(", ".into());
        }
        out.push(format!("\"{}\": ", variable.name.text).into());
        out.push(state.token_node(&variable.name));
    }
    out.push("}".into());
    out
}

/// A function literal that rebinds the captured variables from `scope` and
/// returns `operand`.
fn deferred_operand<'a>(
    state: &mut TranspileState<'a>,
    captured: &[&'a VariableExpression],
    operand: &'a Expression,
) -> Vec<SourceNode> {
    let mut out: Vec<SourceNode> = vec!["function(scope)".into()];
    state.with_block(|state| {
        for variable in captured {
            let name = &variable.name.text;
            out.push(state.newline());
            out.push(state.indent());
            out.push(format!("{name} = scope[\"{name}\"]").into());
        }
        out.push(state.newline());
        out.push(state.indent());
        out.push("return ".into());
        out.extend(operand.transpile(state));
    });
    out.push(state.newline());
    out.push(state.indent());
    out.push("end function".into());
    out
}
