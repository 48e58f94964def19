//! Symbolic derivatives of the logarithm and the trigonometric functions, with the chain rule
//! applied.

use log::trace;

use crate::error::Error;
use crate::expr::Expr;
use crate::simplify::simplify;

use super::derivative;

/// `log(f)' = f' / f`
///
/// Logarithms of powers and products are expanded first. `log(b^n)`, with `n` a literal, is
/// differentiated as `n * b' / b`, which stays defined for negative `b`. Other powers `log(b^e)` are
/// differentiated as `e * log(b)`, and `log(p * q)` as `log(p) + log(q)`.
pub(super) fn log_derivative(operand: &Expr, with: &str) -> Result<Expr, Error> {
    match operand {
        Expr::Power(base, exponent) => match simplify(exponent)?.as_number() {
            Some(n) => {
                trace!("log rule: log of monomial {}", operand);
                Ok(Expr::product(Expr::num(n), reciprocal_rule(base, with)?))
            },
            None => {
                trace!("log rule: expanding log of power {}", operand);
                let expanded = Expr::product((**exponent).clone(), Expr::log((**base).clone()));
                derivative(&expanded, with)
            },
        },
        Expr::Product(lhs, rhs) => {
            trace!("log rule: expanding log of product {}", operand);
            let expanded = Expr::sum(Expr::log((**lhs).clone()), Expr::log((**rhs).clone()));
            derivative(&expanded, with)
        },
        _ => reciprocal_rule(operand, with),
    }
}

/// `f' * f^(-1)`
fn reciprocal_rule(f: &Expr, with: &str) -> Result<Expr, Error> {
    Ok(Expr::product(
        derivative(f, with)?,
        Expr::power(f.clone(), Expr::num(-1.0)),
    ))
}

/// `sin(f)' = cos(f) * f'`
pub(super) fn sin_derivative(operand: &Expr, with: &str) -> Result<Expr, Error> {
    Ok(Expr::product(Expr::cos(operand.clone()), derivative(operand, with)?))
}

/// `cos(f)' = (sin(f) * -1) * f'`
pub(super) fn cos_derivative(operand: &Expr, with: &str) -> Result<Expr, Error> {
    Ok(Expr::product(
        Expr::product(Expr::sin(operand.clone()), Expr::num(-1.0)),
        derivative(operand, with)?,
    ))
}
