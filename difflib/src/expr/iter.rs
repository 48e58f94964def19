use super::Expr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the current expression in the stack and marks it as the last visited expression.
    fn visit(&mut self) -> Option<&'a Expr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given expression matches the last visited expression.
    fn is_last_visited(&self, expr: &'a Expr) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, expr),
            None => false,
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = *self.stack.last()?;
            match expr {
                Expr::Number(_) | Expr::Variable(_) => return self.visit(),
                Expr::Sum(lhs, rhs) | Expr::Product(lhs, rhs) | Expr::Power(lhs, rhs) => {
                    if self.is_last_visited(rhs) {
                        return self.visit();
                    }
                    self.stack.push(rhs);
                    self.stack.push(lhs);
                },
                Expr::Log(operand) | Expr::Sine(operand) | Expr::Cosine(operand) => {
                    if self.is_last_visited(operand) {
                        return self.visit();
                    }
                    self.stack.push(operand);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_order() {
        // sin(x) * (y + 2)
        let expr = Expr::product(
            Expr::sin(Expr::var("x")),
            Expr::sum(Expr::var("y"), Expr::num(2.0)),
        );
        let rendered = expr.post_order_iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(rendered, vec![
            "x",
            "sin (x)",
            "y",
            "2.000000",
            "(y + 2.000000)",
            "(sin (x) * (y + 2.000000))",
        ]);
    }
}
