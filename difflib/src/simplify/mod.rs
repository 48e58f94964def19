//! Simplification of expressions.
//!
//! [`simplify`] prunes the zeros and ones that differentiation leaves behind, in a single
//! bottom-up pass: the children of every node are simplified first, then the node itself is
//! rewritten by the rules in [`rules`]. The input tree is never modified; a new tree is returned.
//!
//! Logarithms are handled differently. The operand of a logarithm is inspected **before** it is
//! simplified, and `log(c^b)` and `log(c*a)` are expanded to `b*log(c)` and `log(c)+log(a)` when
//! `c` is a positive literal. Other powers and products are left inside the logarithm, since
//! expanding them would make the tree undefined for negative bases and factors.
//!
//! No trigonometric identities are applied; `sin` and `cos` only have their operand simplified.

pub mod rules;
pub mod step;

use log::debug;

use crate::error::Error;
use crate::expr::Expr;
use crate::step_collector::StepCollector;
use step::Step;

/// Base implementation of the simplification algorithm.
fn simplify_with(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Expr, Error> {
    match expr {
        Expr::Number(_) | Expr::Variable(_) => Ok(expr.clone()),
        Expr::Sum(lhs, rhs) => {
            let lhs = simplify_with(lhs, step_collector)?;
            let rhs = simplify_with(rhs, step_collector)?;
            Ok(rules::add_zero(&lhs, &rhs, step_collector)
                .unwrap_or_else(|| Expr::sum(lhs, rhs)))
        },
        Expr::Product(lhs, rhs) => {
            let lhs = simplify_with(lhs, step_collector)?;
            let rhs = simplify_with(rhs, step_collector)?;
            Ok(rules::multiply_zero(&lhs, &rhs, step_collector)
                .or_else(|| rules::multiply_one(&lhs, &rhs, step_collector))
                .unwrap_or_else(|| Expr::product(lhs, rhs)))
        },
        Expr::Power(base, exponent) => {
            let base = simplify_with(base, step_collector)?;
            let exponent = simplify_with(exponent, step_collector)?;
            rules::power_indeterminate(&base, &exponent)?;
            Ok(rules::power_zero(&base, &exponent, step_collector)
                .or_else(|| rules::power_zero_left(&base, &exponent, step_collector))
                .or_else(|| rules::power_one(&base, &exponent, step_collector))
                .unwrap_or_else(|| Expr::power(base, exponent)))
        },
        Expr::Log(operand) => {
            let expanded = rules::log_power(operand, step_collector)
                .or_else(|| rules::log_product(operand, step_collector));
            match expanded {
                Some(expanded) => simplify_with(&expanded, step_collector),
                None => Ok(Expr::log(simplify_with(operand, step_collector)?)),
            }
        },
        Expr::Sine(operand) => Ok(Expr::sin(simplify_with(operand, step_collector)?)),
        Expr::Cosine(operand) => Ok(Expr::cos(simplify_with(operand, step_collector)?)),
    }
}

/// Simplifies the given expression.
///
/// The only error that can occur is [`Error::IndeterminateForm`], if a power simplifies to `0^0`.
pub fn simplify(expr: &Expr) -> Result<Expr, Error> {
    simplify_with(expr, &mut ())
}

/// Simplifies the given expression, and also returns the steps taken by the simplifier, in the
/// order they were applied.
pub fn simplify_with_steps(expr: &Expr) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let simplified = simplify_with(expr, &mut steps)?;
    debug!(
        "simplified {} node(s) to {} in {} step(s)",
        expr.node_count(),
        simplified.node_count(),
        steps.len(),
    );
    Ok((simplified, steps))
}
