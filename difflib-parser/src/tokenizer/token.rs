use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token("=")]
    Assign,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("sin")]
    Sin,

    #[token("cos")]
    Cos,

    #[token("tan")]
    Tan,

    #[token("sec")]
    Sec,

    #[token("log")]
    Log,

    #[token("ln")]
    Ln,

    #[token("root")]
    Root,

    #[token("e", priority = 3)]
    E,

    #[regex(r"[a-zA-Z]+")]
    Name,

    /// A run of digits and decimal points. Whether it is a valid number is decided by the parser.
    #[regex(r"[0-9.]+")]
    Number,

    #[regex(r".", priority = 0)]
    Illegal,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    /// Returns true if the token is the name of a built-in function, such as `sin`.
    pub fn is_function(self) -> bool {
        matches!(
            self,
            TokenKind::Sin
                | TokenKind::Cos
                | TokenKind::Tan
                | TokenKind::Sec
                | TokenKind::Log
                | TokenKind::Ln
                | TokenKind::Root
        )
    }

    /// Returns true if an expression can begin with this token, not counting unary operators.
    pub fn starts_primary(self) -> bool {
        self.is_function()
            || matches!(self, TokenKind::Number | TokenKind::Name | TokenKind::E | TokenKind::OpenParen)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}
