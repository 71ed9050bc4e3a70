use thiserror::Error;

use crate::iterator::IteratorError;
use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("At least one number is required")]
    EmptyNumbers,
    #[error("At least one operator is required")]
    EmptyOperators,
    #[error("Unknown operator '{0}', expected one of + - * / %")]
    UnknownOperator(char),
    #[error("Enumeration error: {0}")]
    IteratorError(#[from] IteratorError),
    #[error("Input error: {0}")]
    UtilsError(#[from] UtilsError),
}
