use std::rc::Rc;

use log::debug;

use crate::enumerate::errors::EnumerateError;
use crate::expression::{BinOp, Expression};

/// Enumerates every expression tree over a contiguous range of the input
/// sequence: each split point divides the range into a left and a right
/// sub-range, and every left tree is combined with every right tree under
/// every operator.
#[derive(Debug, Clone)]
pub struct ExpressionGenerator {
    node_budget: Option<usize>,
    nodes_created: usize,
}

impl ExpressionGenerator {
    pub fn new() -> Self {
        Self {
            node_budget: None,
            nodes_created: 0,
        }
    }

    /// A generator that fails with `BudgetExceeded` once more than `limit`
    /// nodes have been allocated, instead of letting the exponential search
    /// run away.
    pub fn with_node_budget(limit: usize) -> Self {
        Self {
            node_budget: Some(limit),
            nodes_created: 0,
        }
    }

    /// Number of tree nodes allocated so far, literals included.
    pub fn nodes_created(&self) -> usize {
        self.nodes_created
    }

    /// Generate every expression tree over `numbers[start..=end]`.
    ///
    /// Trees are returned in enumeration order: split index ascending, left
    /// trees outermost, right trees nested, operators in `+ - * /` order.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is malformed (`start > end` or `end`
    /// outside the sequence) or if the node budget is exhausted.
    pub fn generate(
        &mut self,
        numbers: &[i64],
        start: usize,
        end: usize,
    ) -> Result<Vec<Rc<Expression>>, EnumerateError> {
        if start > end || end >= numbers.len() {
            debug!(
                "Invalid range: start={}, end={}, length={}",
                start,
                end,
                numbers.len()
            );
            return Err(EnumerateError::InvalidRange {
                start,
                end,
                length: numbers.len(),
            });
        }

        if start == end {
            return Ok(vec![self.new_node(Expression::Number(numbers[start]))?]);
        }

        let mut result = Vec::new();
        for split in start..end {
            let left_trees = self.generate(numbers, start, split)?;
            let right_trees = self.generate(numbers, split + 1, end)?;

            for left in &left_trees {
                for right in &right_trees {
                    for op in BinOp::ALL {
                        result.push(self.new_node(Expression::Binary(
                            op,
                            Rc::clone(left),
                            Rc::clone(right),
                        ))?);
                    }
                }
            }
        }
        Ok(result)
    }

    fn new_node(&mut self, expr: Expression) -> Result<Rc<Expression>, EnumerateError> {
        self.nodes_created += 1;
        if let Some(limit) = self.node_budget {
            if self.nodes_created > limit {
                debug!("Node budget of {} exhausted", limit);
                return Err(EnumerateError::BudgetExceeded { limit });
            }
        }
        Ok(Rc::new(expr))
    }
}

impl Default for ExpressionGenerator {
    fn default() -> Self {
        Self::new()
    }
}
