use thiserror::Error;

/// Errors that can occur while reading user-supplied values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Input cannot be empty")]
    EmptyInput,
    #[error("Not a whole number: '{0}'")]
    InvalidNumber(String),
    #[error("No recognized operator (+ - * / %) in '{0}'")]
    NoOperators(String),
}
