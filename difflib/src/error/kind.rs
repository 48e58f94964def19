use ariadne::Fmt;
use difflib_attrs::ErrorKind;
use difflib_error::EXPR;

/// Simplification encountered `0^0`, which has no well-defined value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "`0^0` is not well-defined",
    labels = ["this expression contains an indeterminate form"],
    help = format!("change the {} so the base or the exponent is not zero", "expression".fg(EXPR)),
)]
pub struct IndeterminateForm;

/// A variable was evaluated without a value bound to it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` has no value", name),
    labels = ["this expression uses the variable"],
    help = format!("to bind it, type: {}", format!("; {} = <number>", name).fg(EXPR)),
)]
pub struct UnboundVariable {
    /// The name of the variable that was not bound.
    pub name: String,
}

/// The natural logarithm was taken of a number that is not positive.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot take the logarithm of {}", value),
    labels = ["this expression"],
    help = "the logarithm is only defined for positive numbers",
)]
pub struct NonPositiveLogarithm {
    /// The value the operand of the logarithm evaluated to.
    pub value: f64,
}
