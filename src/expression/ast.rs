use crate::expression::errors::ExpressionError;
use crate::expression::lexer::tokenize;
use crate::expression::postfix::{Postfix, to_postfix};
use crate::expression::token::{Operator, Token};

/// An infix expression as an ordered sequence of tokens
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    tokens: Vec<Token>,
}

impl Expression {
    /// # Errors
    ///
    /// Returns `MalformedToken` if any word of `text` is not a number,
    /// parenthesis or recognized operator.
    pub fn parse(text: &str) -> Result<Self, ExpressionError> {
        Ok(Self {
            tokens: tokenize(text)?,
        })
    }

    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Interleave operands with operators, left to right, without parentheses.
    ///
    /// Returns `None` unless there is exactly one operator per gap.
    pub fn interleave(operands: &[i64], operators: &[Operator]) -> Option<Self> {
        if operands.is_empty() || operators.len() + 1 != operands.len() {
            return None;
        }

        let mut tokens = Vec::with_capacity(operands.len() * 2);
        for (i, operand) in operands.iter().enumerate() {
            tokens.push(Token::Number(operand.to_string()));
            if let Some(op) = operators.get(i) {
                tokens.push(Token::Operator(*op));
            }
        }
        Some(Self { tokens })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// # Errors
    ///
    /// Returns `UnbalancedParenthesis` for a `)` without a matching `(`.
    pub fn to_postfix(&self) -> Result<Postfix, ExpressionError> {
        to_postfix(self.tokens.clone())
    }
}
