//! Tokenizer and parser for the textual form of [`difflib::Expr`].
//!
//! The language is ordinary infix math: `+ - * / ^`, parentheses, implicit multiplication (`2x`,
//! `3sin(x)`), the constant `e`, and the functions `sin`, `cos`, `tan`, `sec`, `log` (or `ln`),
//! and `root`. Operators and functions that have no node of their own are rewritten in terms of
//! those that do, so `a - b` becomes `a + -1 * b` and `tan(x)` becomes `sin(x) * cos(x)^-1`.
//!
//! ```
//! use difflib::Expr;
//! use difflib_parser::parse;
//!
//! let expr = parse("2x + 1").unwrap();
//! assert_eq!(expr, Expr::sum(Expr::product(Expr::num(2.0), Expr::var("x")), Expr::num(1.0)));
//! ```

pub mod parser;
pub mod tokenizer;

use difflib::Expr;
use log::debug;
use parser::{error::Error, Parser};

/// Parses the given source into an expression. All of the source must be consumed.
pub fn parse(source: &str) -> Result<Expr, Error> {
    let expr = Parser::new(source).try_parse_full::<Expr>()?;
    debug!("parsed `{}` into {} node(s)", source, expr.node_count());
    Ok(expr)
}
