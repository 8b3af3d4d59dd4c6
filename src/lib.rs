//! Exprhunt - A library for finding arithmetic expressions over integer sequences
//!
//! This library enumerates every way to combine an ordered sequence of
//! integers with the four basic operators and every binary parenthesization,
//! and returns the string form of every expression that evaluates to a
//! target value.

pub mod enumerate;
pub mod expression;
pub mod solver;

// Re-export the main public API
pub use enumerate::{EnumerateError, ExpressionGenerator};
pub use expression::{BinOp, Expression, ExpressionError};
pub use solver::{ExpressionSolver, SolverError};

/// Find every expression over `numbers` that evaluates to `target`
///
/// This is a convenience function that creates a default solver and returns
/// the matching expressions as fully parenthesized strings, in enumeration
/// order.
///
/// # Errors
///
/// This function will return an error if:
/// * The input sequence is empty
/// * Enumeration exceeds a configured node budget (never, for the default
///   solver used here)
///
/// # Examples
///
/// ```
/// use exprhunt::find_expressions;
///
/// let matches = find_expressions(&[2, 3, 4], 20)?;
/// assert_eq!(matches, vec!["((2+3)*4)"]);
/// # Ok::<(), exprhunt::SolverError>(())
/// ```
pub fn find_expressions(numbers: &[i64], target: i64) -> Result<Vec<String>, SolverError> {
    let solver = ExpressionSolver::new();
    solver.find_expressions(numbers, target)
}
