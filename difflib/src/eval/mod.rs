//! Numeric evaluation of expressions.

pub mod ctxt;

use crate::error::{kind::NonPositiveLogarithm, Error};
use crate::expr::Expr;
use ctxt::{Ctxt, LogDomain};

/// Any type that can be evaluated to produce a number.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression to produce a value, using an empty context.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Ctxt::default())
    }
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        Ok(match self {
            Expr::Number(value) => *value,
            Expr::Variable(name) => ctxt.get_var(name).ok_or_else(|| Error::unbound(name.as_str()))?,
            Expr::Sum(lhs, rhs) => lhs.eval(ctxt)? + rhs.eval(ctxt)?,
            Expr::Product(lhs, rhs) => lhs.eval(ctxt)? * rhs.eval(ctxt)?,
            Expr::Power(base, exponent) => base.eval(ctxt)?.powf(exponent.eval(ctxt)?),
            Expr::Log(operand) => {
                let value = operand.eval(ctxt)?;
                // `!(value > 0)` so that `NaN` operands are rejected as well
                if ctxt.log_domain == LogDomain::Error && !(value > 0.0) {
                    return Err(NonPositiveLogarithm { value }.into());
                }
                value.ln()
            },
            Expr::Sine(operand) => operand.eval(ctxt)?.sin(),
            Expr::Cosine(operand) => operand.eval(ctxt)?.cos(),
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        assert_float_absolute_eq,
    };
    use crate::error::kind::UnboundVariable;
    use super::*;

    fn bind_x(x: f64) -> Ctxt {
        Ctxt::from_iter([("x", x)])
    }

    #[test]
    fn number() {
        assert_eq!(Expr::num(2.5).eval_default().unwrap(), 2.5);
    }

    #[test]
    fn sum_of_products() {
        // 1.1 * 3.3 + -2x
        let expr = Expr::sum(
            Expr::product(Expr::num(1.1), Expr::num(3.3)),
            Expr::product(Expr::num(-2.0), Expr::var("x")),
        );
        assert_float_absolute_eq!(expr.eval(&bind_x(1.0)).unwrap(), 1.63, 1e-12);
    }

    #[test]
    fn power_and_trig() {
        let expr = Expr::power(Expr::var("x"), Expr::num(3.0));
        assert_float_absolute_eq!(expr.eval(&bind_x(2.0)).unwrap(), 8.0);

        let expr = Expr::sum(
            Expr::power(Expr::sin(Expr::var("x")), Expr::num(2.0)),
            Expr::power(Expr::cos(Expr::var("x")), Expr::num(2.0)),
        );
        assert_float_absolute_eq!(expr.eval(&bind_x(0.7)).unwrap(), 1.0, 1e-12);
    }

    #[test]
    fn unbound_variable() {
        let err = Expr::var("y").eval(&bind_x(1.0)).unwrap_err();
        assert_eq!(err, Error::UnboundVariable(UnboundVariable { name: "y".to_string() }));
    }

    #[test]
    fn log_of_non_positive_is_an_error() {
        let err = Expr::log(Expr::var("x")).eval(&bind_x(-1.0)).unwrap_err();
        assert_eq!(err, Error::Domain(NonPositiveLogarithm { value: -1.0 }));

        let err = Expr::log(Expr::num(0.0)).eval_default().unwrap_err();
        assert_eq!(err, Error::Domain(NonPositiveLogarithm { value: 0.0 }));
    }

    #[test]
    fn log_of_non_positive_is_nan_when_allowed() {
        let ctxt = bind_x(-1.0).with_log_domain(LogDomain::Nan);
        assert!(Expr::log(Expr::var("x")).eval(&ctxt).unwrap().is_nan());
    }

    #[test]
    fn evaluation_does_not_touch_the_tree() {
        let expr = Expr::log(Expr::power(Expr::var("x"), Expr::num(2.0)));
        let before = expr.clone();
        expr.eval(&bind_x(3.0)).unwrap();
        assert_eq!(expr, before);
    }
}
