use crate::ast::{FunctionExpression, FunctionParameter, FunctionStatement};
use crate::namespace::NameStyle;
use crate::source_node::SourceNode;
use crate::transpile_state::{Ancestor, TranspileState};

impl FunctionExpression {
    /// An anonymous function literal.
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        self.transpile_named(state, None)
    }

    /// `name` is emitted between the keyword and the parameter list.
    pub fn transpile_named<'a>(
        &'a self,
        state: &mut TranspileState<'a>,
        name: Option<SourceNode>,
    ) -> Vec<SourceNode> {
        let mut out = vec![state.token_node(&self.function_type)];
        if let Some(name) = name {
            out.push(" ".into());
            out.push(name);
        }
        out.push(state.token_node(&self.left_paren));
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                out.push(", ".into());
            }
            out.extend(parameter.transpile(state));
        }
        out.push(state.token_node(&self.right_paren));
        if let Some(return_type) = &self.return_type {
            out.push(" ".into());
            out.push(state.token_node(&return_type.as_token));
            out.push(" ".into());
            out.push(state.token_node(&return_type.type_token));
        }

        let body = self.body();
        out.extend(state.with_ancestor(Ancestor::Function(self), |state| body.transpile(state)));
        out.push(state.newline());
        out.push(state.indent());
        out.push(state.token_node(self.end_token()));
        out
    }
}

impl FunctionParameter {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = vec![state.token_node(&self.name)];
        if let Some(default_value) = &self.default_value {
            out.push(" = ".into());
            out.extend(default_value.transpile(state));
        }
        if let Some(type_clause) = &self.type_clause {
            out.push(" ".into());
            out.push(state.token_node(&type_clause.as_token));
            out.push(" ".into());
            out.push(state.token_node(&type_clause.type_token));
        }
        out
    }
}

impl FunctionStatement {
    /// Declarations inside a namespace get the flattened qualified name.
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let name = match state.enclosing_namespace_name(NameStyle::Flattened) {
            Some(namespace) => {
                state.source_node(self.name.start(), format!("{namespace}_{}", self.name.text))
            }
            None => state.token_node(&self.name),
        };
        self.func.transpile_named(state, Some(name))
    }
}
