//! The rewriting rules used by the simplifier.
//!
//! Each rule receives the children of a node that have **already been simplified**, and returns
//! `Some(expr)` with the rewritten node if the rule applies, or `None` if it does not. The logarithm
//! rules are the exception: they inspect the operand before it is simplified, and return a tree that
//! still has to be simplified.
//!
//! The logarithm rules only fire when a positive literal guarantees that the expanded tree is
//! defined exactly where the original is. `log(x^2)` is defined at `x = -1`, but `2*log(x)` is not,
//! so it is left alone.

use log::trace;

use crate::error::{kind::IndeterminateForm, Error};
use crate::expr::Expr;
use crate::step_collector::StepCollector;
use super::step::Step;

/// Records that the given step fired.
fn record(step_collector: &mut dyn StepCollector<Step>, step: Step) {
    trace!("simplify: {:?} ({})", step, step);
    step_collector.push(step);
}

/// `0+a = a`
/// `a+0 = a`
/// `0+0 = 0`
pub fn add_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let simplified = match (lhs.is_trivially_zero(), rhs.is_trivially_zero()) {
        (true, true) => Expr::num(0.0),
        (true, false) => rhs.clone(),
        (false, true) => lhs.clone(),
        (false, false) => return None,
    };

    record(step_collector, Step::AddZero);
    Some(simplified)
}

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !lhs.is_trivially_zero() && !rhs.is_trivially_zero() {
        return None;
    }

    record(step_collector, Step::MultiplyZero);
    Some(Expr::num(0.0))
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let simplified = if lhs.is_trivially_one() {
        rhs.clone()
    } else if rhs.is_trivially_one() {
        lhs.clone()
    } else {
        return None;
    };

    record(step_collector, Step::MultiplyOne);
    Some(simplified)
}

/// Fails with [`Error::IndeterminateForm`] if the power is `0^0`.
pub fn power_indeterminate(base: &Expr, exponent: &Expr) -> Result<(), Error> {
    if base.is_trivially_zero() && exponent.is_trivially_zero() {
        trace!("simplify: {}^({}) is indeterminate", base, exponent);
        return Err(IndeterminateForm.into());
    }
    Ok(())
}

/// `a^0 = 1`
///
/// `0^0` must be rejected by [`power_indeterminate`] before this rule is tried.
pub fn power_zero(_: &Expr, exponent: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !exponent.is_trivially_zero() {
        return None;
    }

    record(step_collector, Step::PowerZero);
    Some(Expr::num(1.0))
}

/// `0^a = 0`
pub fn power_zero_left(base: &Expr, _: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !base.is_trivially_zero() {
        return None;
    }

    record(step_collector, Step::PowerZeroLeft);
    Some(Expr::num(0.0))
}

/// `a^1 = a`
pub fn power_one(base: &Expr, exponent: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !exponent.is_trivially_one() {
        return None;
    }

    record(step_collector, Step::PowerOne);
    Some(base.clone())
}

/// Returns true if the expression is a numeric literal greater than zero.
fn is_positive_literal(expr: &Expr) -> bool {
    matches!(expr.as_number(), Some(value) if value > 0.0)
}

/// `log(c^b) = b*log(c)`, where `c` is a positive literal.
///
/// The returned tree is not simplified.
pub fn log_power(operand: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::Power(base, exponent) = operand else {
        return None;
    };
    if !is_positive_literal(base) {
        return None;
    }

    record(step_collector, Step::LogPower);
    Some(Expr::product((**exponent).clone(), Expr::log((**base).clone())))
}

/// `log(c*a) = log(c)+log(a)`
/// `log(a*c) = log(a)+log(c)`
///
/// `c` must be a positive literal. The returned tree is not simplified.
pub fn log_product(operand: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::Product(lhs, rhs) = operand else {
        return None;
    };
    if !is_positive_literal(lhs) && !is_positive_literal(rhs) {
        return None;
    }

    record(step_collector, Step::LogProduct);
    Some(Expr::sum(Expr::log((**lhs).clone()), Expr::log((**rhs).clone())))
}
