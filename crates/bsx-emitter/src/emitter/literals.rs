use crate::ast::{
    AALiteralExpression, AAMember, ArrayLiteralExpression, LiteralExpression, TemplatePart,
    TemplateStringExpression,
};
use crate::helpers::RuntimeHelper;
use crate::source_node::SourceNode;
use crate::transpile_state::{Ancestor, TranspileState};
use bsx_common::{TokenKind, lines_touch};

/// String value of a quoted literal token: surrounding quotes removed and
/// doubled quotes collapsed. A missing closing quote is tolerated.
pub fn decode_string_literal(text: &str) -> String {
    let inner = text.strip_prefix('"').unwrap_or(text);
    let inner = inner.strip_suffix('"').unwrap_or(inner);
    inner.replace("\"\"", "\"")
}

/// `value` as a target-language string literal.
pub fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

impl LiteralExpression {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        if self.token.kind == TokenKind::StringLiteral {
            let value = decode_string_literal(&self.token.text);
            return vec![state.source_node(self.token.start(), quote_string(&value))];
        }
        vec![state.token_node(&self.token)]
    }
}

// =============================================================================
// Collections
// =============================================================================

impl ArrayLiteralExpression {
    /// One element per line. Every non-comment element except the last gets
    /// a comma; comments on the line of the previous element (or of `[`)
    /// stay on that line.
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = vec![state.token_node(&self.open)];
        state.with_ancestor(Ancestor::ArrayLiteral(self), |state| {
            state.with_block(|state| {
                let mut previous = self.open.range;
                for (i, element) in self.elements.iter().enumerate() {
                    let range = element.range();
                    if element.is_comment() && lines_touch(&previous, &range) {
                        out.push(" ".into());
                    } else {
                        out.push(state.newline());
                        out.push(state.indent());
                    }
                    out.extend(element.transpile(state));
                    let more_values = self.elements[i + 1..].iter().any(|e| !e.is_comment());
                    if !element.is_comment() && more_values {
                        out.push(",".into());
                    }
                    previous = range;
                }
            });
        });
        if !self.elements.is_empty() {
            out.push(state.newline());
            out.push(state.indent());
        }
        out.push(state.token_node(&self.close));
        out
    }
}

impl AALiteralExpression {
    /// One `key: value` per line with the array-literal comma and comment
    /// rules. A comment on the line of `{` also suppresses the line break
    /// after the brace.
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = vec![state.token_node(&self.open)];
        let first_touches = self
            .members
            .first()
            .is_some_and(|m| m.is_comment() && lines_touch(&self.open.range, &m.range()));
        if !self.members.is_empty() && !first_touches {
            out.push(state.newline());
        }
        state.with_ancestor(Ancestor::AALiteral(self), |state| {
            state.with_block(|state| {
                let mut previous = self.open.range;
                for (i, member) in self.members.iter().enumerate() {
                    let range = member.range();
                    if member.is_comment() && lines_touch(&previous, &range) {
                        out.push(" ".into());
                    } else {
                        out.push(state.indent());
                    }
                    match member {
                        AAMember::Pair(pair) => {
                            out.push(state.token_node(&pair.key));
                            out.push(state.token_node(&pair.colon));
                            out.push(" ".into());
                            out.extend(pair.value.transpile(state));
                            if self.members[i + 1..].iter().any(|m| !m.is_comment()) {
                                out.push(",".into());
                            }
                        }
                        AAMember::Comment(comment) => out.extend(comment.transpile(state)),
                    }
                    let next_joins = self
                        .members
                        .get(i + 1)
                        .is_some_and(|next| next.is_comment() && lines_touch(&range, &next.range()));
                    if !next_joins {
                        out.push(state.newline());
                    }
                    previous = range;
                }
            });
        });
        if !self.members.is_empty() {
            out.push(state.indent());
        }
        out.push(state.token_node(&self.close));
        out
    }
}

// =============================================================================
// Template strings
// =============================================================================

impl TemplateStringExpression {
    /// Lowered to string concatenation: text segments become quoted
    /// strings, line breaks become `chr(10)` and interpolations are wrapped
    /// in the runtime `toString` helper. More than one piece is
    /// parenthesized so the result binds like a single operand.
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut pieces: Vec<Vec<SourceNode>> = Vec::new();
        for part in &self.parts {
            match part {
                TemplatePart::Text(token) => {
                    let normalized = token.text.replace("\r\n", "\n");
                    for (i, segment) in normalized.split('\n').enumerate() {
                        if i > 0 {
                            pieces.push(vec!["chr(10)".into()]);
                        }
                        if !segment.is_empty() {
                            pieces.push(vec![state.source_node(token.start(), quote_string(segment))]);
                        }
                    }
                }
                TemplatePart::Expression(expression) => {
                    let helper = state.note_helper(RuntimeHelper::ToString);
                    let mut piece = vec![state.source_node(expression.range().start, helper), "(".into()];
                    piece.extend(expression.transpile(state));
                    piece.push(")".into());
                    pieces.push(piece);
                }
            }
        }

        match pieces.len() {
            0 => vec![state.source_node(self.open.start(), "\"\"")],
            1 => pieces.pop().unwrap_or_default(),
            _ => {
                let mut out = vec![SourceNode::from("(")];
                for (i, piece) in pieces.into_iter().enumerate() {
                    if i > 0 {
                        out.push(" + ".into());
                    }
                    out.extend(piece);
                }
                out.push(")".into());
                out
            }
        }
    }
}
