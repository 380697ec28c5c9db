use crate::ast::{
    BinaryExpression, CallExpression, CallfuncExpression, DottedGetExpression, Expression,
    GroupingExpression, IndexedGetExpression, NewExpression, UnaryExpression, VariableExpression,
    XmlAttributeGetExpression,
};
use crate::namespace::{NameStyle, dotted_chain, join_parts};
use crate::source_node::SourceNode;
use crate::transpile_state::TranspileState;
use smallvec::SmallVec;
use tracing::trace;

impl Expression {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        match self {
            Expression::Binary(e) => e.transpile(state),
            Expression::Unary(e) => e.transpile(state),
            Expression::Call(e) => e.transpile(state),
            Expression::Callfunc(e) => e.transpile(state),
            Expression::Function(e) => e.transpile(state),
            Expression::DottedGet(e) => e.transpile(state),
            Expression::Variable(e) => e.transpile(state),
            Expression::IndexedGet(e) => e.transpile(state),
            Expression::XmlAttributeGet(e) => e.transpile(state),
            Expression::Grouping(e) => e.transpile(state),
            Expression::Literal(e) => e.transpile(state),
            Expression::ArrayLiteral(e) => e.transpile(state),
            Expression::AALiteral(e) => e.transpile(state),
            Expression::New(e) => e.transpile(state),
            Expression::Ternary(e) => e.transpile(state),
            Expression::NullCoalescing(e) => e.transpile(state),
            Expression::TemplateString(e) => e.transpile(state),
            Expression::Comment(e) => e.transpile(state),
        }
    }
}

/// `a, b, c`
fn push_arguments<'a>(
    state: &mut TranspileState<'a>,
    args: &'a [Expression],
    out: &mut Vec<SourceNode>,
) {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(", ".into());
        }
        out.extend(arg.transpile(state));
    }
}

// =============================================================================
// Operators
// =============================================================================

impl BinaryExpression {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = self.left.transpile(state);
        out.push(" ".into());
        out.push(state.token_node(&self.operator));
        out.push(" ".into());
        out.extend(self.right.transpile(state));
        out
    }
}

impl UnaryExpression {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = vec![state.token_node(&self.operator), " ".into()];
        out.extend(self.right.transpile(state));
        out
    }
}

impl GroupingExpression {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = vec![state.token_node(&self.left_paren)];
        out.extend(self.expression.transpile(state));
        out.push(state.token_node(&self.right_paren));
        out
    }
}

// =============================================================================
// Calls
// =============================================================================

impl CallExpression {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = self.callee().transpile(state);
        out.push(state.token_node(self.open_paren()));
        push_arguments(state, self.args(), &mut out);
        out.push(state.token_node(self.close_paren()));
        out
    }
}

impl CallfuncExpression {
    /// `node@.method(a)` becomes `node.callfunc("method", a)`. The runtime
    /// rejects `callfunc` with only a method name, so an empty argument list
    /// passes `invalid`.
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = self.callee.transpile(state);
        out.push(state.source_node(self.operator.start(), ".callfunc"));
        out.push(state.token_node(&self.open_paren));
        out.push(state.source_node(
            self.method_name.start(),
            format!("\"{}\"", self.method_name.text),
        ));
        if self.args.is_empty() {
            out.push(", invalid".into());
        } else {
            out.push(", ".into());
            push_arguments(state, &self.args, &mut out);
        }
        out.push(state.token_node(&self.close_paren));
        out
    }
}

impl NewExpression {
    /// Classes compile to a constructor function named after the flattened
    /// class name.
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let class_name = self.class_name();
        let mut out = vec![state.source_node(
            class_name.start(),
            class_name.name_text(NameStyle::Flattened),
        )];
        out.push(state.token_node(self.open_paren()));
        push_arguments(state, self.args(), &mut out);
        out.push(state.token_node(self.close_paren()));
        out
    }
}

// =============================================================================
// Access
// =============================================================================

impl DottedGetExpression {
    /// A chain rooted at a namespace is emitted as one flattened identifier
    /// (`Foo.Bar.baz` becomes `Foo_Bar_baz`).
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        if let Some(mut parts) = dotted_chain(&self.obj) {
            parts.push(&self.name);
            let names: SmallVec<[&str; 4]> = parts.iter().map(|t| t.text.as_str()).collect();
            if state.resolver().callee_starts_with_namespace(&names) {
                let flattened = join_parts(&parts, NameStyle::Flattened);
                trace!(name = %flattened, "namespaced access flattened");
                return vec![state.source_node(parts[0].start(), flattened)];
            }
        }
        let mut out = self.obj.transpile(state);
        out.push(state.token_node(&self.dot));
        out.push(state.token_node(&self.name));
        out
    }
}

impl VariableExpression {
    /// Inside a namespace, a bare reference to a sibling function is
    /// qualified with the flattened namespace name.
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        if let Some(namespace) = state.enclosing_namespace() {
            let dotted = namespace.name().name_text(NameStyle::Dotted);
            if state
                .resolver()
                .is_namespace_function(&self.name.text, Some(&dotted))
            {
                let qualified = format!(
                    "{}_{}",
                    namespace.name().name_text(NameStyle::Flattened),
                    self.name.text
                );
                trace!(name = %qualified, "namespace function reference qualified");
                return vec![state.source_node(self.name.start(), qualified)];
            }
        }
        vec![state.token_node(&self.name)]
    }
}

impl IndexedGetExpression {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = self.obj.transpile(state);
        out.push(state.token_node(&self.open_square));
        out.extend(self.index.transpile(state));
        out.push(state.token_node(&self.close_square));
        out
    }
}

impl XmlAttributeGetExpression {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = self.obj.transpile(state);
        out.push(state.token_node(&self.at));
        out.push(state.token_node(&self.name));
        out
    }
}
