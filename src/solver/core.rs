use log::{debug, info};

use crate::enumerate::ExpressionGenerator;
use crate::solver::errors::SolverError;

/// Main solver for finding expressions that match a target value
pub struct ExpressionSolver {
    node_budget: Option<usize>,
}

impl ExpressionSolver {
    /// Create a new expression solver
    pub fn new() -> Self {
        Self { node_budget: None }
    }

    /// A solver whose queries fail with `BudgetExceeded` instead of
    /// materializing more than `limit` tree nodes.
    pub fn with_node_budget(limit: usize) -> Self {
        Self {
            node_budget: Some(limit),
        }
    }

    /// Find every expression over `numbers` that evaluates to `target`,
    /// rendered as fully parenthesized strings in enumeration order.
    ///
    /// Candidates whose evaluation divides by zero or overflows are
    /// excluded from the results, not reported as errors. Duplicate strings
    /// from distinct trees are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if `numbers` is empty or if enumeration exceeds the
    /// configured node budget.
    pub fn find_expressions(&self, numbers: &[i64], target: i64) -> Result<Vec<String>, SolverError> {
        if numbers.is_empty() {
            return Err(SolverError::EmptyInput);
        }

        info!(
            "Searching {} numbers for expressions that equal {}",
            numbers.len(),
            target
        );

        let mut generator = match self.node_budget {
            Some(limit) => ExpressionGenerator::with_node_budget(limit),
            None => ExpressionGenerator::new(),
        };
        let candidates = generator.generate(numbers, 0, numbers.len() - 1)?;

        info!("Generated {} candidate expressions", candidates.len());

        let mut matches = Vec::new();
        for candidate in &candidates {
            match candidate.evaluate() {
                Ok(value) if value == target => matches.push(candidate.to_string()),
                Ok(_) => {}
                Err(err) => debug!("Excluding candidate {}: {}", candidate, err),
            }
        }

        info!("Found {} matching expressions", matches.len());
        Ok(matches)
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new()
    }
}
