//! Symbolic differentiation.
//!
//! [`derivative`] walks the tree and applies one rule per node kind, producing a brand new tree.
//! The result is not simplified; pass it through [`simplify`](crate::simplify::simplify) to prune
//! the zeros and ones the rules leave behind.
//!
//! Powers are differentiated according to the shape of their (simplified) children:
//!
//! - `c^f`, with `c` a literal: `ln(c) * c^f * f'`
//! - `f^n`, with `n` a literal: `n * f^(n - 1) * f'`, or `1 * 1 * f'` when `n` is `1`
//! - `f^g` otherwise: `f^g * (ln(f) * g)'` (logarithmic differentiation)

mod function;

use log::{debug, trace};

use crate::error::Error;
use crate::expr::Expr;
use crate::simplify::simplify;

/// `(f + g)' = f' + g'`
fn sum_rule(lhs: &Expr, rhs: &Expr, with: &str) -> Result<Expr, Error> {
    Ok(Expr::sum(derivative(lhs, with)?, derivative(rhs, with)?))
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(lhs: &Expr, rhs: &Expr, with: &str) -> Result<Expr, Error> {
    Ok(Expr::sum(
        Expr::product(derivative(lhs, with)?, rhs.clone()),
        Expr::product(lhs.clone(), derivative(rhs, with)?),
    ))
}

/// Differentiates `base ^ exponent`, choosing the rule from the shape of the simplified children.
fn power_rule(base: &Expr, exponent: &Expr, with: &str) -> Result<Expr, Error> {
    let base = simplify(base)?;
    let exponent = simplify(exponent)?;

    match (base.as_number(), exponent.as_number()) {
        (Some(_), Some(_)) => {
            trace!("power rule: constant {}^({})", base, exponent);
            Ok(Expr::num(0.0))
        },
        (Some(c), None) => {
            trace!("power rule: exponential {}^({})", base, exponent);
            let d_exponent = derivative(&exponent, with)?;
            Ok(Expr::product(
                Expr::log(Expr::num(c)),
                Expr::product(Expr::power(base, exponent), d_exponent),
            ))
        },
        (None, Some(n)) => {
            trace!("power rule: monomial {}^({})", base, exponent);
            let d_base = derivative(&base, with)?;
            // `f^0` is left out, since the simplifier rejects it when `f` is structurally zero
            let reduced = if n == 1.0 {
                Expr::num(1.0)
            } else {
                Expr::power(base, Expr::num(n - 1.0))
            };
            Ok(Expr::product(Expr::num(n), Expr::product(reduced, d_base)))
        },
        (None, None) => {
            trace!("power rule: logarithmic differentiation of {}^({})", base, exponent);
            let log_form = Expr::product(Expr::log(base.clone()), exponent.clone());
            let d_log_form = derivative(&log_form, with)?;
            Ok(Expr::product(Expr::power(base, exponent), d_log_form))
        },
    }
}

/// Computes the derivative of the given expression with respect to the variable `with`.
///
/// Variables other than `with` are treated as constants. The only error that can occur is
/// [`Error::IndeterminateForm`], raised when a power's children simplify to `0^0`.
pub fn derivative(f: &Expr, with: &str) -> Result<Expr, Error> {
    match f {
        Expr::Number(_) => Ok(Expr::num(0.0)),
        Expr::Variable(name) => Ok(Expr::num(if name == with { 1.0 } else { 0.0 })),
        Expr::Sum(lhs, rhs) => sum_rule(lhs, rhs, with),
        Expr::Product(lhs, rhs) => product_rule(lhs, rhs, with),
        Expr::Power(base, exponent) => power_rule(base, exponent, with),
        Expr::Log(operand) => function::log_derivative(operand, with),
        Expr::Sine(operand) => function::sin_derivative(operand, with),
        Expr::Cosine(operand) => function::cos_derivative(operand, with),
    }
}

/// Computes the derivative of the given expression with respect to `with`, then simplifies it.
pub fn simplified_derivative(f: &Expr, with: &str) -> Result<Expr, Error> {
    let derivative = derivative(f, with)?;
    let simplified = simplify(&derivative)?;
    debug!(
        "d/d{} of {} node(s): {} node(s), {} after simplification",
        with,
        f.node_count(),
        derivative.node_count(),
        simplified.node_count(),
    );
    Ok(simplified)
}
