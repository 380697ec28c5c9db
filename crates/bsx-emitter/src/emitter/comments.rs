use crate::ast::Comment;
use crate::source_node::SourceNode;
use crate::transpile_state::TranspileState;

impl Comment {
    /// Lines after the first are re-indented; no trailing line break.
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = Vec::with_capacity(self.tokens.len() * 3);
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                out.push(state.newline());
                out.push(state.indent());
            }
            out.push(state.token_node(token));
        }
        out
    }
}
