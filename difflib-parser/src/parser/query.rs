//! A line of input to the shell: an expression, optionally followed by values for its variables.
//!
//! ```text
//! x^2 + y ; x = 3, y = 1 / 2
//! ```

use difflib::Expr;
use crate::tokenizer::TokenKind;
use super::{
    error::Error,
    token::{Assign, Name, Semicolon},
    Parse,
    Parser,
};
use std::ops::Range;

/// A value given to a variable, such as `x = 3`.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// The name of the variable.
    pub name: String,

    /// The value of the variable. This is an expression so that values such as `1 / 3` can be
    /// written.
    pub value: Expr,

    /// The region of the source code that this binding was parsed from.
    pub span: Range<usize>,
}

impl Parse for Binding {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.try_parse::<Name>()?;
        input.try_parse::<Assign>()?;
        let value = Expr::parse(input)?;
        Ok(Self {
            name: name.lexeme,
            value,
            span: name.span.start..input.prev_end(),
        })
    }
}

/// An expression, along with the values given to its variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// The expression.
    pub expr: Expr,

    /// The region of the source code that the expression was parsed from.
    pub span: Range<usize>,

    /// The values given to variables, in the order they were written.
    pub bindings: Vec<Binding>,
}

impl Parse for Query {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let start = input.next_start();
        let expr = Expr::parse(input)?;
        let span = start..input.prev_end();

        let mut bindings = Vec::new();
        if input.peek_kind() == Some(TokenKind::Semicolon) {
            input.try_parse::<Semicolon>()?;
            if input.peek_kind().is_some() {
                bindings = input.parse_delimited::<Binding>(TokenKind::Comma)?;
            }
        }

        Ok(Self { expr, span, bindings })
    }
}
