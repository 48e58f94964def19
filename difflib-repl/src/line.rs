//! Processing of a single line of input.

use difflib::{derivative, simplify_with_steps, Ctxt, Eval, Expr, LogDomain};
use difflib_parser::parser::{query::Query, Parser};
use log::debug;
use std::fmt::Write;
use crate::error::Error;

/// How lines are processed.
#[derive(Debug, Clone)]
pub struct Options {
    /// The variable to differentiate with respect to.
    pub var: String,

    /// Whether to simplify the derivative.
    pub simplify: bool,

    /// Whether to list the simplification steps.
    pub steps: bool,

    /// What to do when a logarithm of a non-positive number is evaluated.
    pub log_domain: LogDomain,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            var: String::from("x"),
            simplify: true,
            steps: false,
            log_domain: LogDomain::default(),
        }
    }
}

/// Builds the evaluation context from the bindings in the query. A binding can use the values of
/// the bindings before it.
fn bind(query: &Query, options: &Options) -> Result<Ctxt, Error> {
    let mut ctxt = Ctxt::new().with_log_domain(options.log_domain);
    for binding in &query.bindings {
        let value = binding.value
            .eval(&ctxt)
            .map_err(|err| Error::compute(err, binding.span.clone()))?;
        ctxt.add_var(&binding.name, value);
    }
    Ok(ctxt)
}

/// Parses the line, differentiates the expression in it, and returns the text to print.
///
/// The expression and its derivative are evaluated if every variable in the expression is bound.
pub fn process(input: &str, options: &Options) -> Result<String, Error> {
    let query = Parser::new(input).try_parse_full::<Query>()?;
    let ctxt = bind(&query, options)?;
    let compute_err = |err| Error::compute(err, query.span.clone());

    let raw = derivative(&query.expr, &options.var).map_err(compute_err)?;
    let (derivative, steps) = if options.simplify {
        simplify_with_steps(&raw).map_err(compute_err)?
    } else {
        (raw, Vec::new())
    };
    debug!("d/d{} of `{}` has {} node(s)", options.var, input.trim(), derivative.node_count());

    let mut out = String::new();
    // writing to a `String` cannot fail
    let _ = writeln!(out, "expr: {}", query.expr);
    let _ = writeln!(out, "d/d{}: {}", options.var, derivative);
    if options.steps {
        for step in &steps {
            let _ = writeln!(out, "  {}", step);
        }
    }

    if is_bound(&query.expr, &ctxt) {
        let value = query.expr.eval(&ctxt).map_err(compute_err)?;
        let derivative_value = derivative.eval(&ctxt).map_err(compute_err)?;
        let bindings = query.bindings.iter()
            .map(|binding| format!("{} = {}", binding.name, ctxt.get_var(&binding.name).unwrap_or(f64::NAN)))
            .collect::<Vec<_>>()
            .join(", ");
        if bindings.is_empty() {
            let _ = writeln!(out, "value: {}", value);
        } else {
            let _ = writeln!(out, "at {}:", bindings);
            let _ = writeln!(out, "  expr = {}", value);
        }
        let _ = writeln!(out, "  d/d{} = {}", options.var, derivative_value);
    }

    Ok(out)
}

/// Returns true if every variable in the expression has a value.
fn is_bound(expr: &Expr, ctxt: &Ctxt) -> bool {
    expr.variables().into_iter().all(|name| ctxt.has_var(name))
}

#[cfg(test)]
mod tests {
    use difflib::{error::kind::UnboundVariable, Error as ComputeError};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn derivative_only() {
        let out = process("x^2 + y", &Options::default()).unwrap();
        assert_eq!(out, "expr: (x^(2.000000) + y)\nd/dx: (2.000000 * x)\n");
    }

    #[test]
    fn evaluates_when_bound() {
        let out = process("x^2 + y; x = 3, y = x + 1", &Options::default()).unwrap();
        assert_eq!(
            out,
            "expr: (x^(2.000000) + y)\nd/dx: (2.000000 * x)\nat x = 3, y = 4:\n  expr = 13\n  d/dx = 6\n",
        );
    }

    #[test]
    fn other_variable_and_steps() {
        let options = Options {
            var: String::from("y"),
            steps: true,
            ..Options::default()
        };
        let out = process("3y", &options).unwrap();
        assert_eq!(out, "expr: (3.000000 * y)\nd/dy: 3.000000\n  a * 0 = 0\n  a * 1 = a\n  a + 0 = a\n");
    }

    #[test]
    fn without_simplification() {
        let options = Options { simplify: false, ..Options::default() };
        let out = process("sin(x)", &options).unwrap();
        assert_eq!(out, "expr: sin (x)\nd/dx: (cos (x) * 1.000000)\n");
    }

    #[test]
    fn unsimplified_derivative_of_even_power_at_negative_base() {
        let options = Options { simplify: false, ..Options::default() };
        let out = process("log(x^2); x = -1", &options).unwrap();
        assert_eq!(
            out,
            "expr: log (x^(2.000000))\nd/dx: (2.000000 * (1.000000 * x^(-1.000000)))\nat x = -1:\n  expr = 0\n  d/dx = -2\n",
        );
    }

    #[test]
    fn binding_error_points_at_binding() {
        let err = process("x; x = z", &Options::default()).unwrap_err();
        match err {
            Error::Compute { error, span } => {
                assert_eq!(error, ComputeError::UnboundVariable(UnboundVariable { name: "z".to_string() }));
                assert_eq!(span, 3..8);
            },
            Error::Parse(err) => panic!("unexpected parse error: {:?}", err),
        }
    }

    #[test]
    fn domain_error_points_at_expression() {
        let err = process("log(x) ; x = -1", &Options::default()).unwrap_err();
        assert!(matches!(err, Error::Compute { error: ComputeError::Domain(_), span } if span == (0..6)));

        let options = Options { log_domain: LogDomain::Nan, ..Options::default() };
        let out = process("log(x) ; x = -1", &options).unwrap();
        assert!(out.contains("expr = NaN"), "{out}");
    }

    #[test]
    fn parse_error() {
        assert!(matches!(process("2 * (x", &Options::default()), Err(Error::Parse(_))));
    }
}
