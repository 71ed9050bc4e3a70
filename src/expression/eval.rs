use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::postfix::Postfix;
use crate::expression::token::Token;

impl Postfix {
    /// # Errors
    ///
    /// Returns an error when:
    /// - An operator finds fewer than two values on the stack
    /// - The sequence does not reduce to exactly one value
    /// - A number token does not parse, or a parenthesis is present
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        let mut values: Vec<f64> = Vec::with_capacity(self.tokens().len());

        for token in self.tokens() {
            match token {
                Token::Number(text) => {
                    let value = text
                        .parse::<f64>()
                        .map_err(|_| ExpressionError::MalformedToken(text.clone()))?;
                    values.push(value);
                }
                Token::Operator(op) => {
                    let underflow = ExpressionError::StackUnderflow {
                        operator: op.symbol(),
                    };
                    let right = values.pop().ok_or_else(|| underflow.clone())?;
                    let left = values.pop().ok_or(underflow)?;
                    values.push(op.apply(left, right));
                }
                Token::LeftParen | Token::RightParen => {
                    return Err(ExpressionError::MalformedToken(token.text()));
                }
            }
        }

        match values.as_slice() {
            [value] => Ok(*value),
            rest => {
                debug!("Postfix '{}' left {} values", self, rest.len());
                Err(ExpressionError::EmptyExpression {
                    remaining: rest.len(),
                })
            }
        }
    }
}

impl Expression {
    /// Run the infix tokens through the postfix conversion and evaluate.
    ///
    /// # Errors
    ///
    /// Propagates conversion and evaluation errors.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        let result = self.to_postfix()?.evaluate();

        match &result {
            Ok(value) => debug!("Expression '{}' evaluated to: {}", self, value),
            Err(e) => debug!("Expression '{}' failed: {}", self, e),
        }

        result
    }
}

/// Tokenize, convert and evaluate an infix expression in one step.
///
/// # Errors
///
/// Returns the first error raised by any stage of the pipeline.
pub fn evaluate(text: &str) -> Result<f64, ExpressionError> {
    Expression::parse(text)?.evaluate()
}
