//! Statement nodes.

use super::comment::Comment;
use super::expressions::{Expression, FunctionExpression};
use crate::error::ConstructionError;
use crate::namespace::NamespacedName;
use bsx_common::{Position, Range, Token};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    Assignment(AssignmentStatement),
    Expression(ExpressionStatement),
    Comment(Comment),
    If(IfStatement),
    For(ForStatement),
    ForEach(ForEachStatement),
    While(WhileStatement),
    DottedSet(DottedSetStatement),
    IndexedSet(IndexedSetStatement),
    Increment(IncrementStatement),
    Print(PrintStatement),
    Goto(GotoStatement),
    Label(LabelStatement),
    Return(ReturnStatement),
    End(KeywordStatement),
    Stop(KeywordStatement),
    ExitFor(KeywordStatement),
    ExitWhile(KeywordStatement),
    Library(LibraryStatement),
    Function(FunctionStatement),
    Namespace(NamespaceStatement),
    Import(ImportStatement),
    TryCatch(TryCatchStatement),
    Throw(ThrowStatement),
}

impl Statement {
    pub fn range(&self) -> Range {
        match self {
            Statement::Assignment(s) => s.range,
            Statement::Expression(s) => s.range,
            Statement::Comment(s) => s.range(),
            Statement::If(s) => s.range,
            Statement::For(s) => s.range,
            Statement::ForEach(s) => s.range,
            Statement::While(s) => s.range,
            Statement::DottedSet(s) => s.range,
            Statement::IndexedSet(s) => s.range,
            Statement::Increment(s) => s.range,
            Statement::Print(s) => s.range,
            Statement::Goto(s) => s.range,
            Statement::Label(s) => s.range,
            Statement::Return(s) => s.range,
            Statement::End(s) | Statement::Stop(s) | Statement::ExitFor(s) | Statement::ExitWhile(s) => {
                s.token.range
            }
            Statement::Library(s) => s.range,
            Statement::Function(s) => s.range,
            Statement::Namespace(s) => s.range,
            Statement::Import(s) => s.range,
            Statement::TryCatch(s) => s.range,
            Statement::Throw(s) => s.range,
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Statement::Comment(_))
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Statement::Function(_))
    }
}

macro_rules! impl_from_node {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Statement {
                fn from(node: $ty) -> Self {
                    Statement::$variant(node)
                }
            }
        )*
    };
}

impl_from_node! {
    Assignment(AssignmentStatement),
    Expression(ExpressionStatement),
    If(IfStatement),
    For(ForStatement),
    ForEach(ForEachStatement),
    While(WhileStatement),
    DottedSet(DottedSetStatement),
    IndexedSet(IndexedSetStatement),
    Increment(IncrementStatement),
    Print(PrintStatement),
    Goto(GotoStatement),
    Label(LabelStatement),
    Return(ReturnStatement),
    Library(LibraryStatement),
    Function(FunctionStatement),
    Namespace(NamespaceStatement),
    Import(ImportStatement),
    TryCatch(TryCatchStatement),
    Throw(ThrowStatement),
}

macro_rules! impl_range {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $ty {
                pub fn range(&self) -> Range {
                    self.range
                }
            }
        )*
    };
}

impl_range! {
    ExpressionStatement,
    DottedSetStatement,
    IndexedSetStatement,
    IncrementStatement,
    PrintStatement,
    GotoStatement,
    LabelStatement,
    ReturnStatement,
    LibraryStatement,
    ImportStatement,
    ThrowStatement,
    IfStatement,
    ForStatement,
    ForEachStatement,
    WhileStatement,
    TryCatchStatement,
    FunctionStatement,
    NamespaceStatement,
}

impl_accessors!(Block { statements: [Statement] });
impl_accessors!(Body { statements: [Statement] });
impl_accessors!(AssignmentStatement { name: Token, operator: Token, value: Expression });
impl_accessors!(ExpressionStatement { expression: Expression });
impl_accessors!(DottedSetStatement { obj: Expression, dot: Token, name: Token, value: Expression });
impl_accessors!(IndexedSetStatement {
    obj: Expression,
    open_square: Token,
    index: Expression,
    close_square: Token,
    value: Expression,
});
impl_accessors!(IncrementStatement { value: Expression, operator: Token });
impl_accessors!(PrintStatement { print_token: Token, items: [PrintItem] });
impl_accessors!(GotoStatement { goto_token: Token, label: Token });
impl_accessors!(LabelStatement { name: Token, colon: Token });
impl_accessors!(ReturnStatement { return_token: Token });
impl_accessors!(KeywordStatement { token: Token });
impl_accessors!(LibraryStatement { library_token: Token, file_path: Token });
impl_accessors!(ImportStatement { import_token: Token, file_path: Token });
impl_accessors!(ThrowStatement { throw_token: Token, expression: Expression });
impl_accessors!(ElseIfClause { else_if_token: Token, condition: Expression, body: Block });
impl_accessors!(ElseClause { else_token: Token, body: Block });
impl_accessors!(IfStatement {
    if_token: Token,
    condition: Expression,
    then_branch: Block,
    else_ifs: [ElseIfClause],
});
impl_accessors!(ForStep { step_token: Token, increment: Expression });
impl_accessors!(ForStatement {
    for_token: Token,
    counter: AssignmentStatement,
    to_token: Token,
    final_value: Expression,
    body: Block,
    end_for: Token,
});
impl_accessors!(ForEachStatement {
    for_each_token: Token,
    item: Token,
    in_token: Token,
    target: Expression,
    body: Block,
    end_for: Token,
});
impl_accessors!(WhileStatement {
    while_token: Token,
    condition: Expression,
    body: Block,
    end_while: Token,
});
impl_accessors!(TryCatchStatement {
    try_token: Token,
    try_branch: Block,
    catch_token: Token,
    exception_variable: Token,
    catch_branch: Block,
    end_try: Token,
});
impl_accessors!(FunctionStatement { name: Token, func: FunctionExpression });
impl_accessors!(NamespaceStatement { keyword: Token, body: Body, end_keyword: Token });

// =============================================================================
// Statement sequences
// =============================================================================

/// A nested statement sequence owned by a compound statement or function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub(crate) statements: Vec<Statement>,
    range: Range,
}

impl Block {
    /// `start` is where the block opens in the source (just after the
    /// header of the owning construct), which gives empty blocks a range.
    pub fn new(start: Position, statements: Vec<Statement>) -> Self {
        let range = statements
            .iter()
            .map(Statement::range)
            .fold(Range::at(start), Range::cover);
        Block { statements, range }
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// Top-level statements of a file or of a namespace.
///
/// Unlike a [`Block`], a body has no opening position of its own, so an
/// empty body has no range.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Body {
    pub(crate) statements: Vec<Statement>,
    range: Option<Range>,
}

impl Body {
    pub fn new(statements: Vec<Statement>) -> Self {
        let range = Range::cover_all(statements.iter().map(Statement::range));
        Body { statements, range }
    }

    pub fn range(&self) -> Option<Range> {
        self.range
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

// =============================================================================
// Simple statements
// =============================================================================

/// `name = value`, or a compound form such as `name += value`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignmentStatement {
    pub(crate) name: Token,
    pub(crate) operator: Token,
    pub(crate) value: Expression,
    range: Range,
}

impl AssignmentStatement {
    pub fn new(name: Token, operator: Token, value: Expression) -> Self {
        let range = name.range.cover(value.range());
        AssignmentStatement {
            name,
            operator,
            value,
            range,
        }
    }

    pub fn range(&self) -> Range {
        self.range
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpressionStatement {
    pub(crate) expression: Expression,
    range: Range,
}

impl ExpressionStatement {
    pub fn new(expression: Expression) -> Self {
        let range = expression.range();
        ExpressionStatement { expression, range }
    }
}

/// `obj.name = value`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DottedSetStatement {
    pub(crate) obj: Expression,
    pub(crate) dot: Token,
    pub(crate) name: Token,
    pub(crate) value: Expression,
    range: Range,
}

impl DottedSetStatement {
    pub fn new(obj: Expression, dot: Token, name: Token, value: Expression) -> Self {
        let range = obj.range().cover(value.range());
        DottedSetStatement {
            obj,
            dot,
            name,
            value,
            range,
        }
    }
}

/// `obj[index] = value`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedSetStatement {
    pub(crate) obj: Expression,
    pub(crate) open_square: Token,
    pub(crate) index: Expression,
    pub(crate) close_square: Token,
    pub(crate) value: Expression,
    range: Range,
}

impl IndexedSetStatement {
    pub fn new(
        obj: Expression,
        open_square: Token,
        index: Expression,
        close_square: Token,
        value: Expression,
    ) -> Self {
        let range = obj.range().cover(index.range()).cover(value.range());
        IndexedSetStatement {
            obj,
            open_square,
            index,
            close_square,
            value,
            range,
        }
    }
}

/// `value++` / `value--`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncrementStatement {
    pub(crate) value: Expression,
    pub(crate) operator: Token,
    range: Range,
}

impl IncrementStatement {
    pub fn new(value: Expression, operator: Token) -> Self {
        let range = value.range().cover(operator.range);
        IncrementStatement {
            value,
            operator,
            range,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrintItem {
    Expression(Expression),
    /// `;` or `,` between items. Column alignment is not reproduced.
    Separator(Token),
}

impl PrintItem {
    pub fn range(&self) -> Range {
        match self {
            PrintItem::Expression(expression) => expression.range(),
            PrintItem::Separator(token) => token.range,
        }
    }
}

/// `print a; b, c`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintStatement {
    pub(crate) print_token: Token,
    pub(crate) items: Vec<PrintItem>,
    range: Range,
}

impl PrintStatement {
    pub fn new(print_token: Token, items: Vec<PrintItem>) -> Self {
        let range = items
            .iter()
            .map(PrintItem::range)
            .fold(print_token.range, Range::cover);
        PrintStatement {
            print_token,
            items,
            range,
        }
    }
}

/// `goto label`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GotoStatement {
    pub(crate) goto_token: Token,
    pub(crate) label: Token,
    range: Range,
}

impl GotoStatement {
    pub fn new(goto_token: Token, label: Token) -> Self {
        let range = goto_token.range.cover(label.range);
        GotoStatement {
            goto_token,
            label,
            range,
        }
    }
}

/// `label:`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelStatement {
    pub(crate) name: Token,
    pub(crate) colon: Token,
    range: Range,
}

impl LabelStatement {
    pub fn new(name: Token, colon: Token) -> Self {
        let range = name.range.cover(colon.range);
        LabelStatement { name, colon, range }
    }
}

/// `return [value]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReturnStatement {
    pub(crate) return_token: Token,
    pub(crate) value: Option<Expression>,
    range: Range,
}

impl ReturnStatement {
    pub fn new(return_token: Token, value: Option<Expression>) -> Self {
        let range = match &value {
            Some(value) => return_token.range.cover(value.range()),
            None => return_token.range,
        };
        ReturnStatement {
            return_token,
            value,
            range,
        }
    }

    pub fn value(&self) -> Option<&Expression> {
        self.value.as_ref()
    }
}

/// A statement made of a single keyword (`end`, `stop`, `exit for`,
/// `exit while`); the enclosing [`Statement`] variant says which.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordStatement {
    pub(crate) token: Token,
}

impl KeywordStatement {
    pub fn new(token: Token) -> Self {
        KeywordStatement { token }
    }
}

/// `Library "v30/bslCore.brs"`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryStatement {
    pub(crate) library_token: Token,
    pub(crate) file_path: Token,
    range: Range,
}

impl LibraryStatement {
    pub fn new(library_token: Token, file_path: Token) -> Self {
        let range = library_token.range.cover(file_path.range);
        LibraryStatement {
            library_token,
            file_path,
            range,
        }
    }
}

/// `import "pkg:/source/lib.bs"`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportStatement {
    pub(crate) import_token: Token,
    pub(crate) file_path: Token,
    range: Range,
}

impl ImportStatement {
    pub fn new(import_token: Token, file_path: Token) -> Self {
        let range = import_token.range.cover(file_path.range);
        ImportStatement {
            import_token,
            file_path,
            range,
        }
    }
}

/// `throw value`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThrowStatement {
    pub(crate) throw_token: Token,
    pub(crate) expression: Expression,
    range: Range,
}

impl ThrowStatement {
    pub fn new(throw_token: Token, expression: Expression) -> Self {
        let range = throw_token.range.cover(expression.range());
        ThrowStatement {
            throw_token,
            expression,
            range,
        }
    }
}

// =============================================================================
// Compound statements
// =============================================================================

/// `else if condition [then] <body>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElseIfClause {
    pub(crate) else_if_token: Token,
    pub(crate) condition: Expression,
    pub(crate) then_token: Option<Token>,
    pub(crate) body: Block,
    range: Range,
}

impl ElseIfClause {
    pub fn new(
        else_if_token: Token,
        condition: Expression,
        then_token: Option<Token>,
        body: Block,
    ) -> Self {
        let range = else_if_token
            .range
            .cover(condition.range())
            .cover(body.range());
        ElseIfClause {
            else_if_token,
            condition,
            then_token,
            body,
            range,
        }
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn then_token(&self) -> Option<&Token> {
        self.then_token.as_ref()
    }
}

/// `else <body>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElseClause {
    pub(crate) else_token: Token,
    pub(crate) body: Block,
    range: Range,
}

impl ElseClause {
    pub fn new(else_token: Token, body: Block) -> Self {
        let range = else_token.range.cover(body.range());
        ElseClause {
            else_token,
            body,
            range,
        }
    }

    pub fn range(&self) -> Range {
        self.range
    }
}

/// `if condition [then] <body> [else if ...]* [else <body>] [end if]`
///
/// `then` and `end if` may be absent in the source; they are emitted as
/// canonical text without a source position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IfStatement {
    pub(crate) if_token: Token,
    pub(crate) condition: Expression,
    pub(crate) then_token: Option<Token>,
    pub(crate) then_branch: Block,
    pub(crate) else_ifs: Vec<ElseIfClause>,
    pub(crate) else_clause: Option<ElseClause>,
    pub(crate) end_if: Option<Token>,
    range: Range,
}

impl IfStatement {
    pub fn new(
        if_token: Token,
        condition: Expression,
        then_token: Option<Token>,
        then_branch: Block,
        else_ifs: Vec<ElseIfClause>,
        else_clause: Option<ElseClause>,
        end_if: Option<Token>,
    ) -> Self {
        let mut range = if_token
            .range
            .cover(condition.range())
            .cover(then_branch.range());
        for clause in &else_ifs {
            range = range.cover(clause.range());
        }
        if let Some(else_clause) = &else_clause {
            range = range.cover(else_clause.range());
        }
        if let Some(end_if) = &end_if {
            range = range.cover(end_if.range);
        }
        IfStatement {
            if_token,
            condition,
            then_token,
            then_branch,
            else_ifs,
            else_clause,
            end_if,
            range,
        }
    }

    pub fn then_token(&self) -> Option<&Token> {
        self.then_token.as_ref()
    }

    pub fn else_clause(&self) -> Option<&ElseClause> {
        self.else_clause.as_ref()
    }

    pub fn end_if(&self) -> Option<&Token> {
        self.end_if.as_ref()
    }
}

/// `step <increment>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForStep {
    pub(crate) step_token: Token,
    pub(crate) increment: Expression,
}

impl ForStep {
    pub fn new(step_token: Token, increment: Expression) -> Self {
        ForStep {
            step_token,
            increment,
        }
    }

    pub fn range(&self) -> Range {
        self.step_token.range.cover(self.increment.range())
    }
}

/// `for counter = start to final [step n] <body> end for`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForStatement {
    pub(crate) for_token: Token,
    pub(crate) counter: AssignmentStatement,
    pub(crate) to_token: Token,
    pub(crate) final_value: Expression,
    pub(crate) step: Option<ForStep>,
    pub(crate) body: Block,
    pub(crate) end_for: Token,
    range: Range,
}

impl ForStatement {
    pub fn new(
        for_token: Token,
        counter: AssignmentStatement,
        to_token: Token,
        final_value: Expression,
        step: Option<ForStep>,
        body: Block,
        end_for: Token,
    ) -> Self {
        let mut range = for_token
            .range
            .cover(counter.range())
            .cover(final_value.range())
            .cover(body.range())
            .cover(end_for.range);
        if let Some(step) = &step {
            range = range.cover(step.range());
        }
        ForStatement {
            for_token,
            counter,
            to_token,
            final_value,
            step,
            body,
            end_for,
            range,
        }
    }

    pub fn step(&self) -> Option<&ForStep> {
        self.step.as_ref()
    }
}

/// `for each item in target <body> end for`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForEachStatement {
    pub(crate) for_each_token: Token,
    pub(crate) item: Token,
    pub(crate) in_token: Token,
    pub(crate) target: Expression,
    pub(crate) body: Block,
    pub(crate) end_for: Token,
    range: Range,
}

impl ForEachStatement {
    pub fn new(
        for_each_token: Token,
        item: Token,
        in_token: Token,
        target: Expression,
        body: Block,
        end_for: Token,
    ) -> Self {
        let range = for_each_token
            .range
            .cover(target.range())
            .cover(body.range())
            .cover(end_for.range);
        ForEachStatement {
            for_each_token,
            item,
            in_token,
            target,
            body,
            end_for,
            range,
        }
    }
}

/// `while condition <body> end while`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhileStatement {
    pub(crate) while_token: Token,
    pub(crate) condition: Expression,
    pub(crate) body: Block,
    pub(crate) end_while: Token,
    range: Range,
}

impl WhileStatement {
    pub fn new(while_token: Token, condition: Expression, body: Block, end_while: Token) -> Self {
        let range = while_token
            .range
            .cover(condition.range())
            .cover(body.range())
            .cover(end_while.range);
        WhileStatement {
            while_token,
            condition,
            body,
            end_while,
            range,
        }
    }
}

/// `try <body> catch e <body> end try`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TryCatchStatement {
    pub(crate) try_token: Token,
    pub(crate) try_branch: Block,
    pub(crate) catch_token: Token,
    pub(crate) exception_variable: Token,
    pub(crate) catch_branch: Block,
    pub(crate) end_try: Token,
    range: Range,
}

impl TryCatchStatement {
    pub fn new(
        try_token: Token,
        try_branch: Block,
        catch_token: Token,
        exception_variable: Token,
        catch_branch: Block,
        end_try: Token,
    ) -> Self {
        let range = try_token
            .range
            .cover(try_branch.range())
            .cover(catch_branch.range())
            .cover(end_try.range);
        TryCatchStatement {
            try_token,
            try_branch,
            catch_token,
            exception_variable,
            catch_branch,
            end_try,
            range,
        }
    }
}

// =============================================================================
// Declarations
// =============================================================================

/// A named function or sub declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionStatement {
    pub(crate) name: Token,
    pub(crate) func: FunctionExpression,
    range: Range,
}

impl FunctionStatement {
    pub fn new(name: Token, func: FunctionExpression) -> Self {
        let range = name.range.cover(func.range());
        FunctionStatement { name, func, range }
    }

    /// [`FunctionExpression::replace_body`], keeping this declaration's
    /// range in step with the function's.
    pub fn replace_body(&mut self, body: Block) -> Block {
        let previous = self.func.replace_body(body);
        self.range = self.name.range.cover(self.func.range());
        previous
    }

    /// [`FunctionExpression::replace_end_token`], keeping this declaration's
    /// range in step with the function's.
    pub fn replace_end_token(&mut self, end_token: Token) -> Token {
        let previous = self.func.replace_end_token(end_token);
        self.range = self.name.range.cover(self.func.range());
        previous
    }
}

/// `namespace A.B <body> end namespace`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceStatement {
    pub(crate) keyword: Token,
    name: NamespacedName,
    pub(crate) body: Body,
    pub(crate) end_keyword: Token,
    range: Range,
}

impl NamespaceStatement {
    /// Fails when `name` is not a dotted name rooted at an identifier.
    pub fn new(
        keyword: Token,
        name: Expression,
        body: Body,
        end_keyword: Token,
    ) -> Result<Self, ConstructionError> {
        let name = NamespacedName::new(name)?;
        let mut range = keyword.range.cover(name.range()).cover(end_keyword.range);
        if let Some(body_range) = body.range() {
            range = range.cover(body_range);
        }
        Ok(NamespaceStatement {
            keyword,
            name,
            body,
            end_keyword,
            range,
        })
    }

    pub fn name(&self) -> &NamespacedName {
        &self.name
    }
}
