//! Parsing of whole expressions, using precedence climbing over the binary operators in [`BinOp`].

use difflib::Expr;
use log::trace;
use crate::tokenizer::TokenKind;
use super::{
    error::Error,
    op::BinOp,
    primary::parse_primary,
    Associativity,
    Parse,
    Parser,
    Precedence,
};

/// Parses a unary expression, or a primary expression if there is no unary operator.
///
/// Negation applies to everything that binds tighter than it, so `-x^2` is `-(x^2)`. The negation
/// of a literal is folded into the literal.
pub fn parse_unary(input: &mut Parser) -> Result<Expr, Error> {
    if input.peek_kind() == Some(TokenKind::Sub) {
        input.next_token()?;
        let operand = parse_unary(input)?;
        let operand = parse_binary(input, operand, Precedence::Neg)?;
        Ok(-operand)
    } else {
        parse_primary(input)
    }
}

/// Parses the operators and operands following `lhs`, as long as the operators have at least the
/// given precedence.
pub fn parse_binary(input: &mut Parser, mut lhs: Expr, precedence: Precedence) -> Result<Expr, Error> {
    loop {
        let op = match BinOp::peek(input) {
            Some(op) if op.precedence() >= precedence => op,
            _ => break,
        };

        if op.is_implicit() {
            trace!("implicit multiplication at {:?}", input.span());
        } else {
            input.next_token()?;
        }

        let mut rhs = parse_unary(input)?;

        // before creating the `lhs op rhs` node, check the precedence of the following operator,
        // if any, so that `3 + 4 * 5` is not parsed as `(3 + 4) * 5`
        while let Some(next_op) = BinOp::peek(input) {
            let binds_tighter = next_op.precedence() > op.precedence()
                || (next_op.precedence() == op.precedence()
                    && next_op.associativity() == Associativity::Right);
            if !binds_tighter {
                break;
            }
            rhs = parse_binary(input, rhs, next_op.precedence())?;
        }

        lhs = op.apply(lhs, rhs);
    }

    Ok(lhs)
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = parse_unary(input)?;
        parse_binary(input, lhs, Precedence::Any)
    }
}
