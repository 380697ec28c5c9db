//! Reachability walk over expressions.
//!
//! Lowering needs to know, for each operand, which sub-expressions it
//! contains (to detect side effects) and which free variables it reads (to
//! capture them). Both come from one walk implemented here over the closed
//! set of expression kinds.

use crate::ast::{AAMember, Expression, TemplatePart, VariableExpression};
use crate::namespace::NamespaceResolver;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Direct sub-expressions of `expression`. Function literals are opaque:
/// their bodies are evaluated only when called.
fn children(expression: &Expression) -> SmallVec<[&Expression; 4]> {
    let mut out: SmallVec<[&Expression; 4]> = SmallVec::new();
    match expression {
        Expression::Binary(e) => {
            out.push(&*e.left);
            out.push(&*e.right);
        }
        Expression::Unary(e) => out.push(&*e.right),
        Expression::Call(e) => {
            out.push(e.callee());
            out.extend(e.args());
        }
        Expression::Callfunc(e) => {
            out.push(&*e.callee);
            out.extend(e.args.iter());
        }
        Expression::DottedGet(e) => out.push(&*e.obj),
        Expression::IndexedGet(e) => {
            out.push(&*e.obj);
            out.push(&*e.index);
        }
        Expression::XmlAttributeGet(e) => out.push(&*e.obj),
        Expression::Grouping(e) => out.push(&*e.expression),
        Expression::ArrayLiteral(e) => out.extend(e.elements.iter().filter(|el| !el.is_comment())),
        Expression::AALiteral(e) => {
            out.extend(e.members.iter().filter_map(|member| match member {
                AAMember::Pair(pair) => Some(&pair.value),
                AAMember::Comment(_) => None,
            }))
        }
        // The class name is a type reference, not a value read.
        Expression::New(e) => out.extend(e.args()),
        Expression::Ternary(e) => {
            out.push(&*e.test);
            out.push(&*e.consequent);
            out.push(&*e.alternate);
        }
        Expression::NullCoalescing(e) => {
            out.push(&*e.consequent);
            out.push(&*e.alternate);
        }
        Expression::TemplateString(e) => {
            out.extend(e.parts.iter().filter_map(|part| match part {
                TemplatePart::Expression(expression) => Some(expression),
                TemplatePart::Text(_) => None,
            }))
        }
        Expression::Function(_)
        | Expression::Variable(_)
        | Expression::Literal(_)
        | Expression::Comment(_) => {}
    }
    out
}

/// Every expression reachable from `root`, `root` included, in pre-order.
pub fn reachable(root: &Expression) -> Vec<&Expression> {
    let mut found = Vec::new();
    let mut stack: Vec<&Expression> = vec![root];
    while let Some(expression) = stack.pop() {
        found.push(expression);
        let kids = children(expression);
        stack.extend(kids.into_iter().rev());
    }
    found
}

/// Calls, `callfunc` invocations, constructor calls and dotted accesses may
/// run code with side effects (dotted accesses can hit a getter).
pub fn is_mutating(expression: &Expression) -> bool {
    matches!(
        expression,
        Expression::Call(_)
            | Expression::Callfunc(_)
            | Expression::New(_)
            | Expression::DottedGet(_)
    )
}

pub fn contains_mutating(root: &Expression) -> bool {
    reachable(root).into_iter().any(is_mutating)
}

/// Free variables read by the deferred `operands` that must be rebound
/// inside the generated function literals.
///
/// Names are deduplicated case-insensitively and returned sorted by their
/// lowercase spelling. `m` and local callees are captured like any other
/// name. Namespace roots and namespace functions are skipped since they are
/// rewritten to global names.
pub fn captured_variables<'e>(
    operands: &[&'e Expression],
    resolver: &dyn NamespaceResolver,
    enclosing_namespace: Option<&str>,
) -> Vec<&'e VariableExpression> {
    let expressions: Vec<&'e Expression> = operands
        .iter()
        .flat_map(|&operand| reachable(operand))
        .collect();

    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut captured: Vec<(String, &'e VariableExpression)> = Vec::new();
    for expression in expressions {
        let Expression::Variable(variable) = expression else {
            continue;
        };
        let name = variable.name.text.as_str();
        let lower = name.to_ascii_lowercase();
        if seen.contains(&lower)
            || resolver.callee_starts_with_namespace(&[name])
            || resolver.is_namespace_function(name, enclosing_namespace)
        {
            continue;
        }
        seen.insert(lower.clone());
        captured.push((lower, variable));
    }
    captured.sort_by(|a, b| a.0.cmp(&b.0));
    captured.into_iter().map(|(_, variable)| variable).collect()
}
