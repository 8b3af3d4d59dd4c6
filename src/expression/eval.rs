use log::debug;

use crate::expression::ast::{BinOp, Expression};
use crate::expression::errors::ExpressionError;

impl BinOp {
    fn apply(self, left: i64, right: i64) -> Result<i64, ExpressionError> {
        match self {
            BinOp::Add => left.checked_add(right).ok_or(ExpressionError::Overflow),
            BinOp::Sub => left.checked_sub(right).ok_or(ExpressionError::Overflow),
            BinOp::Mul => left.checked_mul(right).ok_or(ExpressionError::Overflow),
            BinOp::Div => {
                if right == 0 {
                    debug!("Division by zero attempted");
                    Err(ExpressionError::DivisionByZero)
                } else {
                    // checked_div still fails on i64::MIN / -1
                    left.checked_div(right).ok_or(ExpressionError::Overflow)
                }
            }
        }
    }
}

impl Expression {
    /// Evaluate the tree to an integer. Division truncates toward zero.
    ///
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division by zero
    /// - Arithmetic that does not fit in `i64`
    pub fn evaluate(&self) -> Result<i64, ExpressionError> {
        match self {
            Expression::Number(n) => Ok(*n),
            Expression::Binary(op, l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                let result = op.apply(left, right);
                if let Err(ref e) = result {
                    debug!("Expression evaluation failed: {}", e);
                }
                result
            }
        }
    }
}
