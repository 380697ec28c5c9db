//! Expression nodes.
//!
//! Every node owns its children and computes its range once, when it is
//! built. Children are crate-private behind accessors, so a range can only
//! change through the replacements on [`FunctionExpression`].

use super::comment::Comment;
use super::statements::Block;
use crate::error::ConstructionError;
use crate::namespace::NamespacedName;
use bsx_common::limits::MAX_CALL_ARGUMENTS;
use bsx_common::{Range, Token};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    Binary(BinaryExpression),
    Unary(UnaryExpression),
    Call(CallExpression),
    Callfunc(CallfuncExpression),
    Function(FunctionExpression),
    DottedGet(DottedGetExpression),
    Variable(VariableExpression),
    IndexedGet(IndexedGetExpression),
    XmlAttributeGet(XmlAttributeGetExpression),
    Grouping(GroupingExpression),
    Literal(LiteralExpression),
    ArrayLiteral(ArrayLiteralExpression),
    AALiteral(AALiteralExpression),
    New(NewExpression),
    Ternary(TernaryExpression),
    NullCoalescing(NullCoalescingExpression),
    TemplateString(TemplateStringExpression),
    Comment(Comment),
}

impl Expression {
    pub fn range(&self) -> Range {
        match self {
            Expression::Binary(e) => e.range,
            Expression::Unary(e) => e.range,
            Expression::Call(e) => e.range,
            Expression::Callfunc(e) => e.range,
            Expression::Function(e) => e.range,
            Expression::DottedGet(e) => e.range,
            Expression::Variable(e) => e.range,
            Expression::IndexedGet(e) => e.range,
            Expression::XmlAttributeGet(e) => e.range,
            Expression::Grouping(e) => e.range,
            Expression::Literal(e) => e.range,
            Expression::ArrayLiteral(e) => e.range,
            Expression::AALiteral(e) => e.range,
            Expression::New(e) => e.range,
            Expression::Ternary(e) => e.range,
            Expression::NullCoalescing(e) => e.range,
            Expression::TemplateString(e) => e.range,
            Expression::Comment(e) => e.range(),
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Expression::Comment(_))
    }
}

macro_rules! impl_from_node {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Expression {
                fn from(node: $ty) -> Self {
                    Expression::$variant(node)
                }
            }
        )*
    };
}

impl_from_node! {
    Binary(BinaryExpression),
    Unary(UnaryExpression),
    Call(CallExpression),
    Callfunc(CallfuncExpression),
    Function(FunctionExpression),
    DottedGet(DottedGetExpression),
    Variable(VariableExpression),
    IndexedGet(IndexedGetExpression),
    XmlAttributeGet(XmlAttributeGetExpression),
    Grouping(GroupingExpression),
    Literal(LiteralExpression),
    ArrayLiteral(ArrayLiteralExpression),
    AALiteral(AALiteralExpression),
    New(NewExpression),
    Ternary(TernaryExpression),
    NullCoalescing(NullCoalescingExpression),
    TemplateString(TemplateStringExpression),
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
    BinaryExpression,
    UnaryExpression,
    CallExpression,
    CallfuncExpression,
    NewExpression,
    DottedGetExpression,
    VariableExpression,
    IndexedGetExpression,
    XmlAttributeGetExpression,
    GroupingExpression,
    LiteralExpression,
    ArrayLiteralExpression,
    AALiteralExpression,
    TemplateStringExpression,
    TernaryExpression,
    NullCoalescingExpression,
}

impl_accessors!(BinaryExpression { left: Expression, operator: Token, right: Expression });
impl_accessors!(UnaryExpression { operator: Token, right: Expression });
impl_accessors!(CallfuncExpression {
    callee: Expression,
    operator: Token,
    method_name: Token,
    open_paren: Token,
    args: [Expression],
    close_paren: Token,
});
impl_accessors!(TypeClause { as_token: Token, type_token: Token });
impl_accessors!(FunctionParameter { name: Token });
impl_accessors!(FunctionExpression {
    function_type: Token,
    left_paren: Token,
    parameters: [FunctionParameter],
    right_paren: Token,
});
impl_accessors!(DottedGetExpression { obj: Expression, dot: Token, name: Token });
impl_accessors!(VariableExpression { name: Token });
impl_accessors!(IndexedGetExpression {
    obj: Expression,
    open_square: Token,
    index: Expression,
    close_square: Token,
});
impl_accessors!(XmlAttributeGetExpression { obj: Expression, at: Token, name: Token });
impl_accessors!(GroupingExpression { left_paren: Token, expression: Expression, right_paren: Token });
impl_accessors!(LiteralExpression { token: Token });
impl_accessors!(ArrayLiteralExpression { open: Token, elements: [Expression], close: Token });
impl_accessors!(AAPair { key: Token, colon: Token, value: Expression });
impl_accessors!(AALiteralExpression { open: Token, members: [AAMember], close: Token });
impl_accessors!(TemplateStringExpression { open: Token, parts: [TemplatePart], close: Token });
impl_accessors!(TernaryExpression {
    test: Expression,
    question: Token,
    consequent: Expression,
    colon: Token,
    alternate: Expression,
});
impl_accessors!(NullCoalescingExpression {
    consequent: Expression,
    operator: Token,
    alternate: Expression,
});

fn check_argument_count(args: &[Expression], range: Range) -> Result<(), ConstructionError> {
    if args.len() > MAX_CALL_ARGUMENTS {
        return Err(ConstructionError::TooManyArguments {
            count: args.len(),
            max: MAX_CALL_ARGUMENTS,
            range,
        });
    }
    Ok(())
}

// =============================================================================
// Operators
// =============================================================================

/// `left OP right`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryExpression {
    pub(crate) left: Box<Expression>,
    pub(crate) operator: Token,
    pub(crate) right: Box<Expression>,
    range: Range,
}

impl BinaryExpression {
    pub fn new(left: Expression, operator: Token, right: Expression) -> Self {
        let range = left.range().cover(operator.range).cover(right.range());
        BinaryExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            range,
        }
    }
}

/// `OP right`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnaryExpression {
    pub(crate) operator: Token,
    pub(crate) right: Box<Expression>,
    range: Range,
}

impl UnaryExpression {
    pub fn new(operator: Token, right: Expression) -> Self {
        let range = operator.range.cover(right.range());
        UnaryExpression {
            operator,
            right: Box::new(right),
            range,
        }
    }
}

// =============================================================================
// Calls
// =============================================================================

/// `callee(args)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallExpression {
    callee: Box<Expression>,
    open_paren: Token,
    args: Vec<Expression>,
    close_paren: Token,
    range: Range,
}

impl CallExpression {
    /// Fails when more than [`MAX_CALL_ARGUMENTS`] arguments are supplied.
    pub fn new(
        callee: Expression,
        open_paren: Token,
        args: Vec<Expression>,
        close_paren: Token,
    ) -> Result<Self, ConstructionError> {
        let range = Range::cover_all(
            [callee.range(), open_paren.range, close_paren.range]
                .into_iter()
                .chain(args.iter().map(Expression::range)),
        )
        .unwrap_or_default();
        check_argument_count(&args, range)?;
        Ok(CallExpression {
            callee: Box::new(callee),
            open_paren,
            args,
            close_paren,
            range,
        })
    }

    pub fn callee(&self) -> &Expression {
        &self.callee
    }

    pub fn open_paren(&self) -> &Token {
        &self.open_paren
    }

    pub fn args(&self) -> &[Expression] {
        &self.args
    }

    pub fn close_paren(&self) -> &Token {
        &self.close_paren
    }
}

/// `callee@.methodName(args)`, a call dispatched through `callfunc`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallfuncExpression {
    pub(crate) callee: Box<Expression>,
    pub(crate) operator: Token,
    pub(crate) method_name: Token,
    pub(crate) open_paren: Token,
    pub(crate) args: Vec<Expression>,
    pub(crate) close_paren: Token,
    range: Range,
}

impl CallfuncExpression {
    pub fn new(
        callee: Expression,
        operator: Token,
        method_name: Token,
        open_paren: Token,
        args: Vec<Expression>,
        close_paren: Token,
    ) -> Self {
        let range = Range::cover_all(
            [callee.range(), close_paren.range]
                .into_iter()
                .chain(args.iter().map(Expression::range)),
        )
        .unwrap_or_default();
        CallfuncExpression {
            callee: Box::new(callee),
            operator,
            method_name,
            open_paren,
            args,
            close_paren,
            range,
        }
    }
}

/// `new Name.Space.Klass(args)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewExpression {
    new_token: Token,
    class_name: NamespacedName,
    open_paren: Token,
    args: Vec<Expression>,
    close_paren: Token,
    range: Range,
}

impl NewExpression {
    /// Fails when `class_name` is not a dotted name or the argument limit is
    /// exceeded.
    pub fn new(
        new_token: Token,
        class_name: Expression,
        open_paren: Token,
        args: Vec<Expression>,
        close_paren: Token,
    ) -> Result<Self, ConstructionError> {
        let class_name = NamespacedName::new(class_name)?;
        let range = Range::cover_all(
            [new_token.range, class_name.range(), close_paren.range]
                .into_iter()
                .chain(args.iter().map(Expression::range)),
        )
        .unwrap_or_default();
        check_argument_count(&args, range)?;
        Ok(NewExpression {
            new_token,
            class_name,
            open_paren,
            args,
            close_paren,
            range,
        })
    }

    pub fn new_token(&self) -> &Token {
        &self.new_token
    }

    pub fn class_name(&self) -> &NamespacedName {
        &self.class_name
    }

    pub fn open_paren(&self) -> &Token {
        &self.open_paren
    }

    pub fn args(&self) -> &[Expression] {
        &self.args
    }

    pub fn close_paren(&self) -> &Token {
        &self.close_paren
    }
}

// =============================================================================
// Functions
// =============================================================================

/// `as <type>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeClause {
    pub(crate) as_token: Token,
    pub(crate) type_token: Token,
}

impl TypeClause {
    pub fn new(as_token: Token, type_token: Token) -> Self {
        TypeClause {
            as_token,
            type_token,
        }
    }

    pub fn range(&self) -> Range {
        self.as_token.range.cover(self.type_token.range)
    }
}

/// `name [= default] [as type]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionParameter {
    pub(crate) name: Token,
    pub(crate) default_value: Option<Expression>,
    pub(crate) type_clause: Option<TypeClause>,
    range: Range,
}

impl FunctionParameter {
    pub fn new(
        name: Token,
        default_value: Option<Expression>,
        type_clause: Option<TypeClause>,
    ) -> Self {
        let mut range = name.range;
        if let Some(default_value) = &default_value {
            range = range.cover(default_value.range());
        }
        if let Some(type_clause) = &type_clause {
            range = range.cover(type_clause.range());
        }
        FunctionParameter {
            name,
            default_value,
            type_clause,
            range,
        }
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn default_value(&self) -> Option<&Expression> {
        self.default_value.as_ref()
    }

    pub fn type_clause(&self) -> Option<&TypeClause> {
        self.type_clause.as_ref()
    }
}

/// `function|sub [name](params) [as type] <body> end function|end sub`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionExpression {
    pub(crate) function_type: Token,
    pub(crate) left_paren: Token,
    pub(crate) parameters: Vec<FunctionParameter>,
    pub(crate) right_paren: Token,
    pub(crate) return_type: Option<TypeClause>,
    body: Block,
    end_token: Token,
    range: Range,
}

impl FunctionExpression {
    pub fn new(
        function_type: Token,
        left_paren: Token,
        parameters: Vec<FunctionParameter>,
        right_paren: Token,
        return_type: Option<TypeClause>,
        body: Block,
        end_token: Token,
    ) -> Self {
        let mut func = FunctionExpression {
            function_type,
            left_paren,
            parameters,
            right_paren,
            return_type,
            body,
            end_token,
            range: Range::default(),
        };
        func.range = func.compute_range();
        func
    }

    fn compute_range(&self) -> Range {
        self.function_type
            .range
            .cover(self.body.range())
            .cover(self.end_token.range)
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn return_type(&self) -> Option<&TypeClause> {
        self.return_type.as_ref()
    }

    pub fn body(&self) -> &Block {
        &self.body
    }

    pub fn end_token(&self) -> &Token {
        &self.end_token
    }

    /// Swap in a desugared body. One of the two child replacements a later
    /// pass is allowed to make; the range is recomputed. Through a
    /// [`FunctionStatement`](super::FunctionStatement), use its method of the
    /// same name so the declaration's range follows.
    pub fn replace_body(&mut self, body: Block) -> Block {
        let previous = std::mem::replace(&mut self.body, body);
        self.range = self.compute_range();
        previous
    }

    /// Swap in a different closing token (for example when a `sub` is
    /// rewritten as a `function`); the range is recomputed.
    pub fn replace_end_token(&mut self, end_token: Token) -> Token {
        let previous = std::mem::replace(&mut self.end_token, end_token);
        self.range = self.compute_range();
        previous
    }
}

// =============================================================================
// Access
// =============================================================================

/// `obj.name`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DottedGetExpression {
    pub(crate) obj: Box<Expression>,
    pub(crate) dot: Token,
    pub(crate) name: Token,
    range: Range,
}

impl DottedGetExpression {
    pub fn new(obj: Expression, dot: Token, name: Token) -> Self {
        let range = obj.range().cover(name.range);
        DottedGetExpression {
            obj: Box::new(obj),
            dot,
            name,
            range,
        }
    }
}

/// A bare identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableExpression {
    pub(crate) name: Token,
    range: Range,
}

impl VariableExpression {
    pub fn new(name: Token) -> Self {
        let range = name.range;
        VariableExpression { name, range }
    }
}

/// `obj[index]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedGetExpression {
    pub(crate) obj: Box<Expression>,
    pub(crate) open_square: Token,
    pub(crate) index: Box<Expression>,
    pub(crate) close_square: Token,
    range: Range,
}

impl IndexedGetExpression {
    pub fn new(obj: Expression, open_square: Token, index: Expression, close_square: Token) -> Self {
        let range = obj.range().cover(index.range()).cover(close_square.range);
        IndexedGetExpression {
            obj: Box::new(obj),
            open_square,
            index: Box::new(index),
            close_square,
            range,
        }
    }
}

/// `obj@name`, attribute access on an XML element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlAttributeGetExpression {
    pub(crate) obj: Box<Expression>,
    pub(crate) at: Token,
    pub(crate) name: Token,
    range: Range,
}

impl XmlAttributeGetExpression {
    pub fn new(obj: Expression, at: Token, name: Token) -> Self {
        let range = obj.range().cover(name.range);
        XmlAttributeGetExpression {
            obj: Box::new(obj),
            at,
            name,
            range,
        }
    }
}

/// `(expression)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupingExpression {
    pub(crate) left_paren: Token,
    pub(crate) expression: Box<Expression>,
    pub(crate) right_paren: Token,
    range: Range,
}

impl GroupingExpression {
    pub fn new(left_paren: Token, expression: Expression, right_paren: Token) -> Self {
        let range = left_paren
            .range
            .cover(expression.range())
            .cover(right_paren.range);
        GroupingExpression {
            left_paren,
            expression: Box::new(expression),
            right_paren,
            range,
        }
    }
}

// =============================================================================
// Literals
// =============================================================================

/// A string, numeric, boolean or `invalid` literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralExpression {
    pub(crate) token: Token,
    range: Range,
}

impl LiteralExpression {
    pub fn new(token: Token) -> Self {
        let range = token.range;
        LiteralExpression { token, range }
    }
}

/// `[a, b, c]`; elements may include comments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayLiteralExpression {
    pub(crate) open: Token,
    pub(crate) elements: Vec<Expression>,
    pub(crate) close: Token,
    range: Range,
}

impl ArrayLiteralExpression {
    pub fn new(open: Token, elements: Vec<Expression>, close: Token) -> Self {
        let range = Range::cover_all(
            [open.range, close.range]
                .into_iter()
                .chain(elements.iter().map(Expression::range)),
        )
        .unwrap_or_default();
        ArrayLiteralExpression {
            open,
            elements,
            close,
            range,
        }
    }
}

/// `key: value` inside an associative-array literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AAPair {
    pub(crate) key: Token,
    pub(crate) colon: Token,
    pub(crate) value: Expression,
    range: Range,
}

impl AAPair {
    pub fn new(key: Token, colon: Token, value: Expression) -> Self {
        let range = key.range.cover(value.range());
        AAPair {
            key,
            colon,
            value,
            range,
        }
    }

    pub fn range(&self) -> Range {
        self.range
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AAMember {
    Pair(AAPair),
    Comment(Comment),
}

impl AAMember {
    pub fn range(&self) -> Range {
        match self {
            AAMember::Pair(pair) => pair.range(),
            AAMember::Comment(comment) => comment.range(),
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, AAMember::Comment(_))
    }
}

/// `{ key: value, ... }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AALiteralExpression {
    pub(crate) open: Token,
    pub(crate) members: Vec<AAMember>,
    pub(crate) close: Token,
    range: Range,
}

impl AALiteralExpression {
    pub fn new(open: Token, members: Vec<AAMember>, close: Token) -> Self {
        let range = Range::cover_all(
            [open.range, close.range]
                .into_iter()
                .chain(members.iter().map(AAMember::range)),
        )
        .unwrap_or_default();
        AALiteralExpression {
            open,
            members,
            close,
            range,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplatePart {
    /// Raw text between interpolations, without the backticks.
    Text(Token),
    /// `${expression}`
    Expression(Expression),
}

impl TemplatePart {
    pub fn range(&self) -> Range {
        match self {
            TemplatePart::Text(token) => token.range,
            TemplatePart::Expression(expression) => expression.range(),
        }
    }
}

/// `` `text ${expression} text` ``
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateStringExpression {
    pub(crate) open: Token,
    pub(crate) parts: Vec<TemplatePart>,
    pub(crate) close: Token,
    range: Range,
}

impl TemplateStringExpression {
    pub fn new(open: Token, parts: Vec<TemplatePart>, close: Token) -> Self {
        let range = Range::cover_all(
            [open.range, close.range]
                .into_iter()
                .chain(parts.iter().map(TemplatePart::range)),
        )
        .unwrap_or_default();
        TemplateStringExpression {
            open,
            parts,
            close,
            range,
        }
    }
}

// =============================================================================
// Conditional
// =============================================================================

/// `test ? consequent : alternate`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TernaryExpression {
    pub(crate) test: Box<Expression>,
    pub(crate) question: Token,
    pub(crate) consequent: Box<Expression>,
    pub(crate) colon: Token,
    pub(crate) alternate: Box<Expression>,
    range: Range,
}

impl TernaryExpression {
    pub fn new(
        test: Expression,
        question: Token,
        consequent: Expression,
        colon: Token,
        alternate: Expression,
    ) -> Self {
        let range = test
            .range()
            .cover(consequent.range())
            .cover(alternate.range());
        TernaryExpression {
            test: Box::new(test),
            question,
            consequent: Box::new(consequent),
            colon,
            alternate: Box::new(alternate),
            range,
        }
    }
}

/// `consequent ?? alternate`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NullCoalescingExpression {
    pub(crate) consequent: Box<Expression>,
    pub(crate) operator: Token,
    pub(crate) alternate: Box<Expression>,
    range: Range,
}

impl NullCoalescingExpression {
    pub fn new(consequent: Expression, operator: Token, alternate: Expression) -> Self {
        let range = consequent.range().cover(alternate.range());
        NullCoalescingExpression {
            consequent: Box::new(consequent),
            operator,
            alternate: Box::new(alternate),
            range,
        }
    }
}
