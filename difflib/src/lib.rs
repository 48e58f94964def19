//! Symbolic differentiation of expression trees.
//!
//! This crate represents expressions built from numbers, variables, sums, products, powers, the
//! natural logarithm, sine, and cosine as an [`Expr`] tree, and provides three recursive
//! algorithms over it:
//!
//! - [`derivative`]: computes the derivative of an expression with respect to a variable.
//! - [`simplify`]: prunes the zeros and ones that differentiation leaves behind.
//! - [`Eval`]: evaluates an expression numerically, given values for its variables.
//!
//! Each algorithm reads its input by reference and returns a new tree.
//!
//! # Example
//!
//! ```
//! use difflib::{derivative, simplify, Ctxt, Eval, Expr};
//!
//! // x^2 + sin(x)
//! let f = Expr::power(Expr::var("x"), Expr::num(2.0)) + Expr::sin(Expr::var("x"));
//!
//! let df = simplify(&derivative(&f, "x").unwrap()).unwrap();
//! assert_eq!(df.to_string(), "((2.000000 * x) + cos (x))");
//!
//! let ctxt = Ctxt::from_iter([("x", 0.0)]);
//! assert_eq!(df.eval(&ctxt).unwrap(), 1.0);
//! ```
//!
//! Text can be parsed into an [`Expr`] with the `difflib-parser` crate.

pub mod derivative;
pub mod error;
pub mod eval;
pub mod expr;
pub mod simplify;
pub mod step_collector;

pub use derivative::{derivative, simplified_derivative};
pub use error::Error;
pub use eval::{ctxt::{Ctxt, LogDomain}, Eval};
pub use expr::Expr;
pub use simplify::{simplify, simplify_with_steps, step::Step};
