//! Errors that can occur while parsing. Every error is a [`difflib_error::Error`] whose kind is one
//! of the structs in this module, so it can be reported against the source it was parsed from.

use ariadne::Fmt;
use difflib_attrs::ErrorKind;
use difflib_error::EXPR;
use crate::tokenizer::TokenKind;

pub use difflib_error::Error;

/// Renders a list of token kinds for an error message.
fn list(kinds: &[TokenKind]) -> String {
    kinds.iter()
        .map(|kind| format!("{:?}", kind))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", list(expected))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// A character that is not part of the language was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("illegal character `{}`", character),
    labels = ["here"],
    help = format!(
        "expressions are built from numbers, variables, {}, and the functions sin, cos, tan, sec, log, ln, and root",
        "+ - * / ^".fg(EXPR),
    ),
)]
pub struct IllegalCharacter {
    /// The character that was found.
    pub character: String,
}

/// A run of digits and decimal points could not be read as a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number `{}`", lexeme),
    labels = ["this number"],
    help = "a number can contain at most one decimal point",
)]
pub struct InvalidNumber {
    /// The text of the number.
    pub lexeme: String,
}
