use difflib::Expr;
use crate::tokenizer::TokenKind;
use super::{Associativity, Parser, Precedence};

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// `a + b`, which becomes `Sum(a, b)`.
    Add,

    /// `a - b`, which becomes `Sum(a, Product(-1, b))`.
    Sub,

    /// `a * b`, which becomes `Product(a, b)`.
    Mul,

    /// `a / b`, which becomes `Product(a, Power(b, -1))`.
    Div,

    /// `a ^ b`, which becomes `Power(a, b)`.
    Exp,

    /// Implicit multiplication, such as `2x` or `x(x + 1)`.
    ///
    /// This is not a real operator, as there is no token for it, but it is treated as one for the
    /// purposes of parsing.
    ImplicitMul,
}

impl BinOp {
    /// Returns the operator represented by the given token, if any.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            TokenKind::Exp => Some(Self::Exp),
            _ => None,
        }
    }

    /// Returns the operator that the next token in the stream represents, without consuming it.
    ///
    /// If the next token begins an expression instead, the operator is implicit multiplication.
    pub fn peek(input: &mut Parser) -> Option<Self> {
        let kind = input.peek_kind()?;
        Self::from_token(kind)
            .or_else(|| kind.starts_primary().then_some(Self::ImplicitMul))
    }

    /// Returns true if this operator has no token.
    pub fn is_implicit(self) -> bool {
        self == Self::ImplicitMul
    }

    /// Returns the precedence of the operator.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul | Self::Div | Self::ImplicitMul => Precedence::Factor,
            Self::Exp => Precedence::Exp,
        }
    }

    /// Returns the associativity of the operator.
    pub fn associativity(self) -> Associativity {
        match self {
            Self::Exp => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Builds the expression `lhs op rhs`.
    pub fn apply(self, lhs: Expr, rhs: Expr) -> Expr {
        match self {
            Self::Add => Expr::sum(lhs, rhs),
            Self::Sub => Expr::sum(lhs, Expr::product(Expr::num(-1.0), rhs)),
            Self::Mul | Self::ImplicitMul => Expr::product(lhs, rhs),
            Self::Div => Expr::product(lhs, Expr::power(rhs, Expr::num(-1.0))),
            Self::Exp => Expr::power(lhs, rhs),
        }
    }
}
