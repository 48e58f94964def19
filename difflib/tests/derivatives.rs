use assert_float_eq::assert_float_absolute_eq;
use difflib::{
    derivative,
    error::kind::{IndeterminateForm, UnboundVariable},
    simplified_derivative,
    simplify,
    simplify_with_steps,
    Ctxt,
    Error,
    Eval,
    Expr,
    Step,
};
use pretty_assertions::assert_eq;

fn x() -> Expr {
    Expr::var("x")
}

/// Differentiates with respect to `x`, then evaluates both the raw and the simplified derivative
/// at the given point, checking that they agree.
fn derivative_at(f: &Expr, point: f64) -> f64 {
    let ctxt = Ctxt::from_iter([("x", point)]);
    let raw = derivative(f, "x").unwrap().eval(&ctxt).unwrap();
    let pruned = simplified_derivative(f, "x").unwrap().eval(&ctxt).unwrap();
    assert_float_absolute_eq!(raw, pruned, 1e-9);
    raw
}

#[test]
fn reference_values() {
    let linear = Expr::sum(
        Expr::product(Expr::num(1.1), Expr::num(3.3)),
        Expr::product(Expr::num(-2.0), x()),
    );
    assert_float_absolute_eq!(derivative_at(&linear, 2.0), -2.0, 1e-12);
    assert_float_absolute_eq!(derivative_at(&Expr::log(x()), 4.5), 1.0 / 4.5, 1e-12);
    assert_float_absolute_eq!(
        derivative_at(&Expr::log(Expr::power(x(), Expr::num(3.0))), 4.5),
        3.0 / 4.5,
        1e-12
    );
    assert_float_absolute_eq!(derivative_at(&Expr::power(x(), Expr::num(-1.0)), 0.5), -4.0, 1e-12);
    assert_float_absolute_eq!(derivative_at(&Expr::power(x(), Expr::num(2.0)), 6.8), 13.6, 1e-12);
    assert_float_absolute_eq!(
        derivative_at(&Expr::power(Expr::num(4.0), x()), 6.8),
        17213.270665,
        1e-5
    );
    assert_float_absolute_eq!(
        derivative_at(&Expr::power(x(), x()), 6.8),
        1336550.933484,
        1e-5
    );

    let half_pi = std::f64::consts::FRAC_PI_2;
    assert_float_absolute_eq!(derivative_at(&Expr::sin(x()), half_pi), 0.0, 1e-12);
    assert_float_absolute_eq!(derivative_at(&Expr::cos(x()), half_pi), -1.0, 1e-12);
}

#[test]
fn zero_to_the_zero_is_indeterminate() {
    let err = simplify(&Expr::power(Expr::num(0.0), Expr::num(0.0))).unwrap_err();
    assert_eq!(err, Error::IndeterminateForm(IndeterminateForm));
}

#[test]
fn unbound_variable() {
    let err = Expr::var("y").eval(&Ctxt::from_iter([("x", 1.0)])).unwrap_err();
    assert_eq!(err, Error::UnboundVariable(UnboundVariable { name: "y".to_string() }));
}

#[test]
fn partial_derivatives() {
    // f(x, y) = x^2 * y + sin(y)
    let f = Expr::sum(
        Expr::product(Expr::power(x(), Expr::num(2.0)), Expr::var("y")),
        Expr::sin(Expr::var("y")),
    );
    let ctxt = Ctxt::from_iter([("x", 3.0), ("y", 0.0)]);

    let df_dx = simplified_derivative(&f, "x").unwrap();
    assert_eq!(df_dx.eval(&ctxt).unwrap(), 0.0);

    let df_dy = simplified_derivative(&f, "y").unwrap();
    assert_float_absolute_eq!(df_dy.eval(&ctxt).unwrap(), 10.0, 1e-12);
}

#[test]
fn simplified_derivative_of_polynomial() {
    // 3x^2 + 2x + 1
    let f = Expr::sum(
        Expr::sum(
            Expr::product(Expr::num(3.0), Expr::power(x(), Expr::num(2.0))),
            Expr::product(Expr::num(2.0), x()),
        ),
        Expr::num(1.0),
    );
    let (df, steps) = simplify_with_steps(&derivative(&f, "x").unwrap()).unwrap();
    assert_eq!(df.to_string(), "((3.000000 * (2.000000 * x)) + 2.000000)");
    assert!(steps.contains(&Step::MultiplyZero));
    assert!(steps.contains(&Step::PowerOne));
    assert!(steps.contains(&Step::AddZero));
}
