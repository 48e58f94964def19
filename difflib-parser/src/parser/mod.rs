pub mod error;
pub mod expr;
pub mod op;
pub mod primary;
pub mod query;
pub mod token;

use error::{Error, ExpectedEof, IllegalCharacter, UnclosedParenthesis, UnexpectedEof};
use difflib_error::ErrorKind;
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// A high-level parser for expressions. This is the type to use to parse a piece of text into a
/// [`difflib::Expr`].
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the previous token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the beginning of the stream.
    pub fn prev_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor.checked_sub(1)?)
    }

    /// Returns the end of the previous token, or the start of the source code if there is none.
    pub fn prev_end(&self) -> usize {
        self.prev_token().map_or(0, |token| token.span.end)
    }

    /// Returns the start of the next meaningful token, or the end of the source code if there are
    /// no more tokens.
    pub fn next_start(&mut self) -> usize {
        self.skip_whitespace();
        self.span().start
    }

    /// Skips whitespace tokens, so that the cursor points at the next meaningful token.
    fn skip_whitespace(&mut self) {
        while self.tokens.get(self.cursor).is_some_and(Token::is_whitespace) {
            self.cursor += 1;
        }
    }

    /// Returns the next token to be parsed without consuming it. Whitespace tokens are skipped.
    ///
    /// Returns [`None`] if there are no more tokens.
    pub fn peek_token(&mut self) -> Option<&Token<'source>> {
        self.skip_whitespace();
        self.tokens.get(self.cursor)
    }

    /// Returns the kind of the next token to be parsed without consuming it.
    pub fn peek_kind(&mut self) -> Option<TokenKind> {
        self.peek_token().map(|token| token.kind)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        self.skip_whitespace();
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                // cloning is cheap: only Range<_> is cloned
                Ok(token.clone())
            },
            None => Err(self.error(UnexpectedEof)),
        }
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        let start = self.cursor;
        match T::parse(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Parses multiple values (at least one) from the given stream of tokens, each delimited by a
    /// certain token.
    ///
    /// Parsing stops at the first value that is not followed by the delimiter. If a delimiter is
    /// found, the value after it must parse successfully.
    pub fn parse_delimited<T: Parse>(&mut self, delimiter: TokenKind) -> Result<Vec<T>, Error> {
        let mut values = vec![T::parse(self)?];

        while self.peek_kind() == Some(delimiter) {
            self.cursor += 1;
            values.push(T::parse(self)?);
        }

        Ok(values)
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        let Some(token) = self.peek_token() else {
            return Ok(value);
        };

        let span = token.span.clone();
        match token.kind {
            TokenKind::CloseParen => Err(Error::new(vec![span], UnclosedParenthesis { opening: false })),
            TokenKind::Illegal => Err(Error::new(vec![span], IllegalCharacter {
                character: token.lexeme.to_owned(),
            })),
            _ => Err(Error::new(vec![span.start..self.eof_span().end], ExpectedEof)),
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// The binary operation is left-associative.
    ///
    /// `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// The binary operation is right-associative.
    ///
    /// `a op b op c` is evaluated as `a op (b op c)`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors. Implicit
    /// multiplication, such as `2x`, has the same precedence.
    Factor,

    /// Precedence of unary subtraction (`-`).
    Neg,

    /// Precedence of exponentiation (`^`).
    Exp,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}
