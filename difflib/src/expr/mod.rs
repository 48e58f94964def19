//! The expression tree that every algorithm in this crate operates on.
//!
//! An [`Expr`] is a closed set of node kinds: numeric literals, variables, binary sums and
//! products, generic powers, and the natural logarithm, sine, and cosine of a sub-expression.
//! Sums and products are **strictly binary**; a longer sum such as `a + b + c` is represented as a
//! left-leaning chain `(a + b) + c`.
//!
//! Nodes own their children through [`Box`], so a tree can never alias one of its subtrees with
//! another tree. Every algorithm in this crate reads its input by reference and builds a new tree
//! for its output; nothing is ever rewritten in place.
//!
//! # Structural checks
//!
//! [`Expr::is_trivially_zero`] and [`Expr::is_trivially_one`] answer whether a tree is _built in
//! a shape_ known to be identically zero or one. They do not evaluate anything, and they have
//! false negatives: `x + (-1 * x)` is not recognized as zero, and neither is `sin(π)`.
//! They are intended to clean up trees, and are not mathematically rigorous.

mod iter;

pub use iter::ExprIter;

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Add, Mul, Neg};

/// A node of an expression tree.
///
/// [`PartialEq`] is structural: two trees are equal only if they have the same shape and the same
/// literals in the same places. `x + 1` and `1 + x` are **not** equal.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, such as `2` or `-0.5`.
    Number(f64),

    /// A reference to an independent variable, such as `x`.
    Variable(String),

    /// `lhs + rhs`.
    Sum(Box<Expr>, Box<Expr>),

    /// `lhs * rhs`.
    Product(Box<Expr>, Box<Expr>),

    /// `base ^ exponent`, where both sides may be arbitrary expressions.
    Power(Box<Expr>, Box<Expr>),

    /// The natural logarithm of the operand.
    Log(Box<Expr>),

    /// The sine of the operand, in radians.
    Sine(Box<Expr>),

    /// The cosine of the operand, in radians.
    Cosine(Box<Expr>),
}

impl Expr {
    /// Creates a numeric literal.
    pub fn num(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a variable reference.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates the sum `lhs + rhs`.
    pub fn sum(lhs: Expr, rhs: Expr) -> Self {
        Self::Sum(Box::new(lhs), Box::new(rhs))
    }

    /// Creates the product `lhs * rhs`.
    pub fn product(lhs: Expr, rhs: Expr) -> Self {
        Self::Product(Box::new(lhs), Box::new(rhs))
    }

    /// Creates the power `base ^ exponent`.
    pub fn power(base: Expr, exponent: Expr) -> Self {
        Self::Power(Box::new(base), Box::new(exponent))
    }

    /// Creates the natural logarithm `log(operand)`.
    pub fn log(operand: Expr) -> Self {
        Self::Log(Box::new(operand))
    }

    /// Creates `sin(operand)`.
    pub fn sin(operand: Expr) -> Self {
        Self::Sine(Box::new(operand))
    }

    /// Creates `cos(operand)`.
    pub fn cos(operand: Expr) -> Self {
        Self::Cosine(Box::new(operand))
    }

    /// Returns the value of this expression if it is a numeric literal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the name of this expression if it is a variable.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if this expression is a numeric literal.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns `true` if this expression is built in a shape that is identically zero.
    ///
    /// - A literal is zero if its value is `0`.
    /// - A sum is zero if **both** terms are zero.
    /// - A product is zero if **either** factor is zero.
    /// - A power is zero if its base is zero and its exponent is not (`0^0` is left alone).
    /// - `log(f)` is zero if `f` is the literal `1`.
    /// - `sin(f)` is zero if `f` is zero. The other zeros of the sine are not modeled.
    /// - `cos(f)` is never considered zero.
    ///
    /// Variables are never zero.
    pub fn is_trivially_zero(&self) -> bool {
        match self {
            Self::Number(value) => *value == 0.0,
            Self::Variable(_) => false,
            Self::Sum(lhs, rhs) => lhs.is_trivially_zero() && rhs.is_trivially_zero(),
            Self::Product(lhs, rhs) => lhs.is_trivially_zero() || rhs.is_trivially_zero(),
            Self::Power(base, exponent) => base.is_trivially_zero() && !exponent.is_trivially_zero(),
            Self::Log(operand) => operand.is_trivially_one(),
            Self::Sine(operand) => operand.is_trivially_zero(),
            Self::Cosine(_) => false,
        }
    }

    /// Returns `true` if this expression is the numeric literal `1`.
    pub fn is_trivially_one(&self) -> bool {
        matches!(self, Self::Number(value) if *value == 1.0)
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }

    /// Returns the names of all variables that appear in this expression, in sorted order.
    pub fn variables(&self) -> BTreeSet<&str> {
        self.post_order_iter()
            .filter_map(Expr::as_variable)
            .collect()
    }

    /// Returns the number of nodes in this expression.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }
}

/// Renders the expression fully parenthesized, e.g. `(x + 2.000000)`, `x^(2.000000)`,
/// `log (x)`. Numbers are always printed with six decimal places.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{:.6}", value),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Sum(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Self::Product(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Self::Power(base, exponent) => write!(f, "{}^({})", base, exponent),
            Self::Log(operand) => write!(f, "log ({})", operand),
            Self::Sine(operand) => write!(f, "sin ({})", operand),
            Self::Cosine(operand) => write!(f, "cos ({})", operand),
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Builds `self + rhs`. No simplification is done.
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::sum(self, rhs)
    }
}

/// Builds `self * rhs`. No simplification is done.
impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::product(self, rhs)
    }
}

/// Multiplies this expression by -1. No simplification is done, except for the case where the
/// expression is a numeric literal, in which case the number is negated.
impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Number(value) => Self::Number(-value),
            expr => Self::product(Self::Number(-1.0), expr),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn display_is_fully_parenthesized() {
        let expr = Expr::sum(
            Expr::product(Expr::num(2.0), Expr::var("x")),
            Expr::power(Expr::var("x"), Expr::num(3.0)),
        );
        assert_eq!(expr.to_string(), "((2.000000 * x) + x^(3.000000))");
    }

    #[test]
    fn display_functions() {
        let expr = Expr::log(Expr::sin(Expr::cos(Expr::var("t"))));
        assert_eq!(expr.to_string(), "log (sin (cos (t)))");
    }

    #[test]
    fn operators_build_nodes() {
        let x = Expr::var("x");
        assert_eq!(x.clone() + Expr::num(1.0), Expr::sum(Expr::var("x"), Expr::num(1.0)));
        assert_eq!(x.clone() * x.clone(), Expr::product(Expr::var("x"), Expr::var("x")));
        assert_eq!(-x, Expr::product(Expr::num(-1.0), Expr::var("x")));
        assert_eq!(-Expr::num(2.5), Expr::num(-2.5));
    }

    #[test]
    fn zero_checks() {
        assert!(Expr::num(0.0).is_trivially_zero());
        assert!(!Expr::num(0.5).is_trivially_zero());
        assert!(!Expr::var("x").is_trivially_zero());
        assert!(Expr::sum(Expr::num(0.0), Expr::num(0.0)).is_trivially_zero());
        assert!(!Expr::sum(Expr::num(0.0), Expr::var("x")).is_trivially_zero());
        assert!(Expr::product(Expr::num(0.0), Expr::var("x")).is_trivially_zero());
        assert!(Expr::product(Expr::var("x"), Expr::num(0.0)).is_trivially_zero());
        assert!(Expr::power(Expr::num(0.0), Expr::var("x")).is_trivially_zero());
        assert!(!Expr::power(Expr::num(0.0), Expr::num(0.0)).is_trivially_zero());
        assert!(Expr::log(Expr::num(1.0)).is_trivially_zero());
        assert!(Expr::sin(Expr::num(0.0)).is_trivially_zero());
        assert!(!Expr::cos(Expr::num(0.0)).is_trivially_zero());
    }

    #[test]
    fn shapes_that_are_zero_but_not_detected() {
        // x - x
        let expr = Expr::var("x") + -Expr::var("x");
        assert!(!expr.is_trivially_zero());
    }

    #[test]
    fn variables_are_collected_once() {
        let expr = Expr::sum(
            Expr::product(Expr::var("y"), Expr::var("x")),
            Expr::sin(Expr::var("x")),
        );
        assert_eq!(expr.variables().into_iter().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(expr.node_count(), 6);
    }
}
