use log::debug;

use crate::expression::constants::SIGNIFICANT_DIGITS;
use crate::expression::errors::ExpressionError;
use crate::expression::token::Token;

/// A token sequence in Reverse Polish order
#[derive(Debug, Clone, PartialEq)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

/// Convert infix tokens to postfix with the shunting-yard algorithm.
///
/// Operators of equal precedence associate to the left. Number literals are
/// rewritten through [`normalize_precision`] on their way to the output.
///
/// # Errors
///
/// Returns `UnbalancedParenthesis` when a `)` has no matching `(`, and
/// `MalformedToken` when a number token does not hold a number.
pub fn to_postfix(tokens: Vec<Token>) -> Result<Postfix, ExpressionError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(text) => {
                let value = text
                    .parse::<f64>()
                    .map_err(|_| ExpressionError::MalformedToken(text.clone()))?;
                output.push(Token::Number(normalize_precision(value)));
            }
            Token::Operator(incoming) => {
                while let Some(Token::Operator(top)) = stack.last()
                    && incoming.precedence() <= top.precedence()
                {
                    output.push(Token::Operator(*top));
                    stack.pop();
                }
                stack.push(Token::Operator(incoming));
            }
            Token::LeftParen => stack.push(Token::LeftParen),
            Token::RightParen => loop {
                match stack.pop() {
                    Some(Token::LeftParen) => break,
                    Some(op) => output.push(op),
                    None => {
                        debug!("Closing parenthesis without an opening one");
                        return Err(ExpressionError::UnbalancedParenthesis);
                    }
                }
            },
        }
    }

    // Unclosed '(' are dropped
    while let Some(token) = stack.pop() {
        if token != Token::LeftParen {
            output.push(token);
        }
    }

    Ok(Postfix::from_tokens(output))
}

/// Render a number with ten significant digits, the way `%.10g` does, so
/// that floating-point noise does not leak into later comparisons.
pub fn normalize_precision(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let max_exponent = i32::try_from(SIGNIFICANT_DIGITS).unwrap_or(i32::MAX);

    if exponent < -4 || exponent >= max_exponent {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = usize::try_from(max_exponent - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
