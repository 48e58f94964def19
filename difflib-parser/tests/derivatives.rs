//! Differentiates parsed expressions, and checks the results against finite differences.

use assert_float_eq::assert_float_absolute_eq;
use difflib::{derivative, simplify, Ctxt, Eval};
use difflib_parser::parse;

/// Evaluates the expression parsed from `source` with `x` bound to the given value.
fn eval_x(source: &str, x: f64) -> f64 {
    parse(source).unwrap().eval(&Ctxt::from_iter([("x", x)])).unwrap()
}

/// Performs finite difference to approximate the derivative of the provided expression.
fn finite_difference(source: &str, x: f64) -> f64 {
    const DX: f64 = 0.000001;
    (eval_x(source, x + DX) - eval_x(source, x - DX)) / (2.0 * DX)
}

fn test_for_function(source: &str, points: impl IntoIterator<Item = f64>) {
    const TOL: f64 = 0.0001;

    let function = parse(source).unwrap();
    let symbolic = simplify(&derivative(&function, "x").unwrap()).unwrap();

    for point in points.into_iter() {
        let symbolically_computed = symbolic.eval(&Ctxt::from_iter([("x", point)])).unwrap();
        let numerically_computed = finite_difference(source, point);

        assert_float_absolute_eq!(symbolically_computed, numerically_computed, TOL);
    }
}

#[test]
fn polynomial() {
    test_for_function("x^3 - 4x^2 + 2x - 7", [-2.0, 0.0, 1.5, 3.0]);
}

#[test]
fn quotient() {
    test_for_function("(x^2 + 1) / (x - 3)", [-1.0, 0.5, 2.0, 4.0]);
}

#[test]
fn trigonometry() {
    test_for_function("sin(x)cos(x) + tan(x)", [-1.0, 0.3, 1.2]);
    test_for_function("sec(2x)", [0.1, 0.5]);
}

#[test]
fn logarithms_and_roots() {
    test_for_function("ln(x^2 + 1) + log(3x)", [0.5, 1.0, 4.0]);
    test_for_function("root(x) * x", [0.25, 1.0, 9.0]);
}

#[test]
fn logarithms_of_negative_bases_and_factors() {
    test_for_function("log(x^2) + ln((x - 3)(x - 4))", [-1.0, 1.0, 2.0]);
}

#[test]
fn exponentials() {
    test_for_function("e^(2x)", [-1.0, 0.0, 1.0]);
    test_for_function("2^x * x^x", [0.5, 1.0, 2.0]);
}

#[test]
fn nested() {
    test_for_function("sin(cos(x)^2) / (1 + x^2)", [-2.0, 0.0, 0.7, 3.0]);
}
