use crate::ast::{
    AssignmentStatement, Block, Body, DottedSetStatement, ExpressionStatement, ForEachStatement,
    ForStatement, GotoStatement, IfStatement, ImportStatement, IncrementStatement,
    IndexedSetStatement, KeywordStatement, LabelStatement, LibraryStatement, NamespaceStatement,
    PrintItem, PrintStatement, ReturnStatement, Statement, ThrowStatement, TryCatchStatement,
    WhileStatement,
};
use crate::source_node::SourceNode;
use crate::transpile_state::{Ancestor, TranspileState};
use bsx_common::{Range, lines_touch};

impl Statement {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        match self {
            Statement::Assignment(s) => s.transpile(state),
            Statement::Expression(s) => s.transpile(state),
            Statement::Comment(s) => s.transpile(state),
            Statement::If(s) => s.transpile(state),
            Statement::For(s) => s.transpile(state),
            Statement::ForEach(s) => s.transpile(state),
            Statement::While(s) => s.transpile(state),
            Statement::DottedSet(s) => s.transpile(state),
            Statement::IndexedSet(s) => s.transpile(state),
            Statement::Increment(s) => s.transpile(state),
            Statement::Print(s) => s.transpile(state),
            Statement::Goto(s) => s.transpile(state),
            Statement::Label(s) => s.transpile(state),
            Statement::Return(s) => s.transpile(state),
            Statement::End(s) => s.transpile(state, "end"),
            Statement::Stop(s) => s.transpile(state, "stop"),
            Statement::ExitFor(s) => s.transpile(state, "exit for"),
            Statement::ExitWhile(s) => s.transpile(state, "exit while"),
            Statement::Library(s) => s.transpile(state),
            Statement::Function(s) => s.transpile(state),
            Statement::Namespace(s) => s.transpile(state),
            Statement::Import(s) => s.transpile(state),
            Statement::TryCatch(s) => s.transpile(state),
            Statement::Throw(s) => s.transpile(state),
        }
    }
}

// =============================================================================
// Statement sequences
// =============================================================================

impl Block {
    /// Emits each statement on its own indented line, one level deeper than
    /// the owner. A comment on the same line as the previous statement, or
    /// as the owner's opening line, is joined with a space instead.
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        // Only the opening line counts: clause ranges end at their last statement.
        let owner_opening = state.parent().map(|owner| Range::at(owner.range().start));
        let mut out = Vec::new();
        state.with_ancestor(Ancestor::Block(self), |state| {
            state.with_block(|state| {
                let mut previous: Option<&Statement> = None;
                for statement in &self.statements {
                    let range = statement.range();
                    let joins = statement.is_comment()
                        && (previous.is_some_and(|p| lines_touch(&p.range(), &range))
                            || owner_opening.is_some_and(|owner| lines_touch(&owner, &range)));
                    if joins {
                        out.push(" ".into());
                    } else {
                        out.push(state.newline());
                        out.push(state.indent());
                    }
                    out.extend(statement.transpile(state));
                    previous = Some(statement);
                }
            });
        });
        out
    }
}

impl Body {
    /// Emits a file or namespace body at the current depth, separating
    /// function declarations from their neighbours with a blank line.
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = Vec::new();
        for (i, statement) in self.statements.iter().enumerate() {
            if let Some(previous) = i.checked_sub(1).map(|p| &self.statements[p]) {
                let next = self.statements.get(i + 1);
                if statement.is_comment()
                    && previous.range().end.line == statement.range().start.line
                {
                    out.push(" ".into());
                } else {
                    let blank_line = (statement.is_comment() && next.is_some_and(Statement::is_function))
                        || (statement.is_function() && !previous.is_comment());
                    out.push(state.newline());
                    if blank_line {
                        out.push(state.newline());
                    }
                    out.push(state.indent());
                }
            }
            out.extend(statement.transpile(state));
        }
        out
    }
}

// =============================================================================
// Simple statements
// =============================================================================

impl AssignmentStatement {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = vec![
            state.token_node(&self.name),
            " ".into(),
            state.token_node(&self.operator),
            " ".into(),
        ];
        out.extend(self.value.transpile(state));
        out
    }
}

impl ExpressionStatement {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        self.expression.transpile(state)
    }
}

impl DottedSetStatement {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = self.obj.transpile(state);
        out.push(state.token_node(&self.dot));
        out.push(state.token_node(&self.name));
        out.push(" = ".into());
        out.extend(self.value.transpile(state));
        out
    }
}

impl IndexedSetStatement {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = self.obj.transpile(state);
        out.push(state.token_node(&self.open_square));
        out.extend(self.index.transpile(state));
        out.push(state.token_node(&self.close_square));
        out.push(" = ".into());
        out.extend(self.value.transpile(state));
        out
    }
}

impl IncrementStatement {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = self.value.transpile(state);
        out.push(state.token_node(&self.operator));
        out
    }
}

impl PrintStatement {
    /// Separator tokens are dropped; their column alignment is not
    /// reproduced.
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = vec![state.token_node(&self.print_token)];
        let mut first = true;
        for item in &self.items {
            let PrintItem::Expression(expression) = item else {
                continue;
            };
            out.push(if first { " " } else { " ; " }.into());
            out.extend(expression.transpile(state));
            first = false;
        }
        out
    }
}

impl GotoStatement {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        vec![
            state.token_node(&self.goto_token),
            " ".into(),
            state.token_node(&self.label),
        ]
    }
}

impl LabelStatement {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        vec![state.token_node(&self.name), state.token_node(&self.colon)]
    }
}

impl ReturnStatement {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = vec![state.token_node(&self.return_token)];
        if let Some(value) = &self.value {
            out.push(" ".into());
            out.extend(value.transpile(state));
        }
        out
    }
}

impl KeywordStatement {
    /// `keyword` is the canonical spelling; the token may have been written
    /// differently (`exitwhile`, `END`).
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>, keyword: &str) -> Vec<SourceNode> {
        vec![state.source_node(self.token.start(), keyword)]
    }
}

impl LibraryStatement {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        vec![
            state.token_node(&self.library_token),
            " ".into(),
            state.token_node(&self.file_path),
        ]
    }
}

impl ImportStatement {
    /// Imports are resolved by the packaging layer; the line survives only
    /// as a comment.
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        vec![
            "'".into(),
            state.token_node(&self.import_token),
            " ".into(),
            state.token_node(&self.file_path),
        ]
    }
}

impl ThrowStatement {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = vec![state.token_node(&self.throw_token), " ".into()];
        out.extend(self.expression.transpile(state));
        out
    }
}

// =============================================================================
// Compound statements
// =============================================================================

/// Appends a branch body, followed by the line break before the next clause
/// or closing keyword. The break is skipped for an empty body unless
/// configured otherwise.
fn push_body(state: &TranspileState<'_>, body: Vec<SourceNode>, out: &mut Vec<SourceNode>) {
    let has_body = !body.is_empty();
    out.extend(body);
    if has_body || state.options().newline_before_empty_block_end {
        out.push(state.newline());
    }
}

impl IfStatement {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = vec![state.token_node(&self.if_token), " ".into()];
        out.extend(self.condition.transpile(state));
        out.push(" ".into());
        out.push(state.token_or(self.then_token.as_ref(), "then"));

        let body = state.with_ancestor(Ancestor::If(self), |state| self.then_branch.transpile(state));
        push_body(state, body, &mut out);

        for clause in &self.else_ifs {
            out.push(state.indent());
            out.push(state.token_node(&clause.else_if_token));
            out.push(" ".into());
            out.extend(clause.condition.transpile(state));
            out.push(" ".into());
            out.push(state.token_or(clause.then_token.as_ref(), "then"));
            let body = state.with_ancestor(Ancestor::ElseIf(clause), |state| clause.body.transpile(state));
            push_body(state, body, &mut out);
        }

        if let Some(else_clause) = &self.else_clause {
            out.push(state.indent());
            out.push(state.token_node(&else_clause.else_token));
            let body = state.with_ancestor(Ancestor::Else(else_clause), |state| {
                else_clause.body.transpile(state)
            });
            push_body(state, body, &mut out);
        }

        out.push(state.indent());
        out.push(state.token_or(self.end_if.as_ref(), "end if"));
        out
    }
}

impl ForStatement {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = vec![state.token_node(&self.for_token), " ".into()];
        out.extend(self.counter.transpile(state));
        out.push(" ".into());
        out.push(state.token_node(&self.to_token));
        out.push(" ".into());
        out.extend(self.final_value.transpile(state));
        if let Some(step) = &self.step {
            out.push(" ".into());
            out.push(state.token_node(&step.step_token));
            out.push(" ".into());
            out.extend(step.increment.transpile(state));
        }
        let body = state.with_ancestor(Ancestor::Other(self.range()), |state| {
            self.body.transpile(state)
        });
        push_body(state, body, &mut out);
        out.push(state.indent());
        out.push(state.token_node(&self.end_for));
        out
    }
}

impl ForEachStatement {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = vec![
            state.token_node(&self.for_each_token),
            " ".into(),
            state.token_node(&self.item),
            " ".into(),
            state.token_node(&self.in_token),
            " ".into(),
        ];
        out.extend(self.target.transpile(state));
        let body = state.with_ancestor(Ancestor::Other(self.range()), |state| {
            self.body.transpile(state)
        });
        push_body(state, body, &mut out);
        out.push(state.indent());
        out.push(state.token_node(&self.end_for));
        out
    }
}

impl WhileStatement {
    /// Unlike `for`, the line break before `end while` is unconditional.
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = vec![state.token_node(&self.while_token), " ".into()];
        out.extend(self.condition.transpile(state));
        out.extend(state.with_ancestor(Ancestor::Other(self.range()), |state| {
            self.body.transpile(state)
        }));
        out.push(state.newline());
        out.push(state.indent());
        out.push(state.token_node(&self.end_while));
        out
    }
}

impl TryCatchStatement {
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        let mut out = vec![state.token_node(&self.try_token)];
        out.extend(state.with_ancestor(Ancestor::Other(self.range()), |state| {
            self.try_branch.transpile(state)
        }));
        out.push(state.newline());
        out.push(state.indent());
        out.push(state.token_node(&self.catch_token));
        out.push(" ".into());
        out.push(state.token_node(&self.exception_variable));
        let catch_line = self.catch_token.range.cover(self.exception_variable.range);
        out.extend(state.with_ancestor(Ancestor::Other(catch_line), |state| {
            self.catch_branch.transpile(state)
        }));
        out.push(state.newline());
        out.push(state.indent());
        out.push(state.token_node(&self.end_try));
        out
    }
}

impl NamespaceStatement {
    /// Namespaces have no runtime form; only the body is emitted, with the
    /// namespace on the ancestor stack so declarations inside it flatten.
    pub fn transpile<'a>(&'a self, state: &mut TranspileState<'a>) -> Vec<SourceNode> {
        state.with_ancestor(Ancestor::Namespace(self), |state| self.body.transpile(state))
    }
}
