//! Parsing of the expressions that bind tighter than every operator: literals, variables, function
//! calls, and parenthesized expressions.

use difflib::Expr;
use crate::tokenizer::{Token, TokenKind};
use super::{
    error::{
        EmptyParenthesis,
        Error,
        IllegalCharacter,
        InvalidNumber,
        UnclosedParenthesis,
        UnexpectedToken,
    },
    token::{CloseParen, OpenParen},
    Parse,
    Parser,
};
use std::ops::Range;

/// The tokens that can begin a primary expression.
const PRIMARY_START: &[TokenKind] = &[
    TokenKind::Number,
    TokenKind::Name,
    TokenKind::E,
    TokenKind::OpenParen,
    TokenKind::Sin,
    TokenKind::Cos,
    TokenKind::Tan,
    TokenKind::Sec,
    TokenKind::Log,
    TokenKind::Ln,
    TokenKind::Root,
];

/// Creates the error for a token that was found where one of the `expected` tokens should be.
fn unexpected(token: Token, expected: &'static [TokenKind]) -> Error {
    match token.kind {
        TokenKind::Illegal => Error::new(vec![token.span], IllegalCharacter {
            character: token.lexeme.to_owned(),
        }),
        found => Error::new(vec![token.span], UnexpectedToken { expected, found }),
    }
}

/// Parses the inside of a pair of parentheses, as well as the closing parenthesis. The opening
/// parenthesis, whose span is given, must already have been consumed.
fn parse_paren_body(input: &mut Parser, opening: Range<usize>) -> Result<Expr, Error> {
    if input.peek_kind() == Some(TokenKind::CloseParen) {
        return Err(input.error(EmptyParenthesis));
    }

    let expr = Expr::parse(input)?;
    match input.peek_kind() {
        Some(TokenKind::CloseParen) => {
            input.try_parse::<CloseParen>()?;
            Ok(expr)
        },
        Some(_) => Err(unexpected(input.next_token()?, &[TokenKind::CloseParen])),
        None => Err(Error::new(vec![opening], UnclosedParenthesis { opening: true })),
    }
}

/// Builds the expression for a call to the given built-in function.
///
/// Functions without a node of their own are rewritten in terms of those that do:
///
/// - `tan(f) = sin(f) * cos(f)^-1`
/// - `sec(f) = cos(f)^-1`
/// - `root(f) = f^0.5`
fn call(function: TokenKind, arg: Expr) -> Expr {
    match function {
        TokenKind::Sin => Expr::sin(arg),
        TokenKind::Cos => Expr::cos(arg),
        TokenKind::Tan => Expr::product(
            Expr::sin(arg.clone()),
            Expr::power(Expr::cos(arg), Expr::num(-1.0)),
        ),
        TokenKind::Sec => Expr::power(Expr::cos(arg), Expr::num(-1.0)),
        TokenKind::Root => Expr::power(arg, Expr::num(0.5)),
        // `log` and `ln` are both the natural logarithm
        _ => Expr::log(arg),
    }
}

/// Parses a primary expression.
pub fn parse_primary(input: &mut Parser) -> Result<Expr, Error> {
    let token = input.next_token()?;
    match token.kind {
        TokenKind::Number => token.lexeme
            .parse::<f64>()
            .map(Expr::num)
            .map_err(|_| Error::new(vec![token.span], InvalidNumber {
                lexeme: token.lexeme.to_owned(),
            })),
        TokenKind::Name => Ok(Expr::var(token.lexeme)),
        TokenKind::E => Ok(Expr::num(std::f64::consts::E)),
        TokenKind::OpenParen => parse_paren_body(input, token.span),
        function if function.is_function() => {
            let open = input.try_parse::<OpenParen>()?;
            let arg = parse_paren_body(input, open.span)?;
            Ok(call(function, arg))
        },
        _ => Err(unexpected(token, PRIMARY_START)),
    }
}
