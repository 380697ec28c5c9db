//! Positioned tokens.
//!
//! Tokens are produced by the lexer, which lives outside the transpiler core.
//! The core only reads them: their text is the authoritative spelling and
//! their range is what the source map points back to.

use crate::position::{Position, Range};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Identifier,

    // Literals
    StringLiteral,
    TemplateStringQuasi,
    IntegerLiteral,
    LongIntegerLiteral,
    FloatLiteral,
    DoubleLiteral,
    HexLiteral,
    True,
    False,
    Invalid,

    Comment,

    // Keywords
    If,
    Then,
    ElseIf,
    Else,
    EndIf,
    For,
    ForEach,
    To,
    Step,
    In,
    EndFor,
    While,
    EndWhile,
    ExitFor,
    ExitWhile,
    Function,
    Sub,
    EndFunction,
    EndSub,
    As,
    Return,
    Print,
    Goto,
    End,
    Stop,
    Library,
    Namespace,
    EndNamespace,
    Import,
    New,
    Try,
    Catch,
    EndTry,
    Throw,
    Not,
    And,
    Or,
    Mod,

    // Punctuation and operators
    Dot,
    Callfunc,
    At,
    Comma,
    Colon,
    Semicolon,
    Question,
    QuestionQuestion,
    LeftParen,
    RightParen,
    LeftSquare,
    RightSquare,
    LeftCurly,
    RightCurly,
    BackTick,
    Equal,
    LessGreater,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Plus,
    Minus,
    Star,
    Slash,
    Backslash,
    Caret,
    LeftShift,
    RightShift,
    PlusEqual,
    MinusEqual,
    StarEqual,
    SlashEqual,
    BackslashEqual,
    LeftShiftEqual,
    RightShiftEqual,
    PlusPlus,
    MinusMinus,
}

impl TokenKind {
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::StringLiteral
                | TokenKind::TemplateStringQuasi
                | TokenKind::IntegerLiteral
                | TokenKind::LongIntegerLiteral
                | TokenKind::FloatLiteral
                | TokenKind::DoubleLiteral
                | TokenKind::HexLiteral
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Invalid
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub range: Range,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, range: Range) -> Self {
        Token {
            kind,
            text: text.into(),
            range,
        }
    }

    /// Token that sits on a single line starting at `line`/`column`; the end
    /// column is derived from the text width.
    pub fn at(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        let text = text.into();
        let width = text.chars().count() as u32;
        Token {
            kind,
            range: Range::new(
                Position::new(line, column),
                Position::new(line, column + width),
            ),
            text,
        }
    }

    pub fn start(&self) -> Position {
        self.range.start
    }
}
