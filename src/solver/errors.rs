use thiserror::Error;

use crate::enumerate::EnumerateError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Input sequence cannot be empty")]
    EmptyInput,
    #[error("Enumeration error: {0}")]
    Enumerate(#[from] EnumerateError),
}
