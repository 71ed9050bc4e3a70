use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Malformed token: '{0}'")]
    MalformedToken(String),
    #[error("Unbalanced parenthesis: ')' without matching '('")]
    UnbalancedParenthesis,
    #[error("Stack underflow: operator '{operator}' needs two operands")]
    StackUnderflow { operator: char },
    #[error("Expression did not reduce to a single value ({remaining} left on the stack)")]
    EmptyExpression { remaining: usize },
}
