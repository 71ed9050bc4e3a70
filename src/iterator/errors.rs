use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IteratorError {
    #[error("At least one operator is required")]
    EmptyOperators,
    #[error("Search space too large: {operators} operators over {gaps} gaps")]
    SearchSpaceOverflow { operators: usize, gaps: usize },
}
