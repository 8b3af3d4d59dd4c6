use std::fmt;

use crate::expression::ast::Expression;

impl fmt::Display for Expression {
    /// Renders the tree fully parenthesized with no spaces, regardless of
    /// operator precedence: `((2+3)*4)`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Number(n) => write!(f, "{}", n),
            Expression::Binary(op, l, r) => write!(f, "({}{}{})", l, op.symbol(), r),
        }
    }
}
