use log::{debug, warn};

use crate::expression::errors::ExpressionError;
use crate::expression::token::{Operator, Token};

/// Result of classifying one whitespace-delimited word
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lexeme {
    Number(f64),
    Symbol(char),
}

/// Classify a word as a number or a single-character symbol.
///
/// Symbol lookup is only attempted once the word has been rejected as a
/// finite number.
///
/// # Errors
///
/// Returns `MalformedToken` when the word is neither a finite number nor
/// exactly one character long.
pub fn classify(word: &str) -> Result<Lexeme, ExpressionError> {
    if let Ok(value) = word.parse::<f64>()
        && value.is_finite()
    {
        return Ok(Lexeme::Number(value));
    }

    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Ok(Lexeme::Symbol(symbol)),
        _ => Err(ExpressionError::MalformedToken(word.to_string())),
    }
}

/// Split a whitespace-separated expression into tokens.
///
/// # Errors
///
/// Returns `MalformedToken` for any word that is not a finite number, a
/// parenthesis, or one of `+ - * / %`.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ExpressionError> {
    debug!("Tokenizing '{}'", text);

    text.split_whitespace()
        .map(|word| {
            let token = match classify(word)? {
                Lexeme::Number(_) => Token::Number(word.to_string()),
                Lexeme::Symbol('(') => Token::LeftParen,
                Lexeme::Symbol(')') => Token::RightParen,
                Lexeme::Symbol(symbol) => match Operator::from_symbol(symbol) {
                    Some(op) => Token::Operator(op),
                    None => {
                        warn!("Unrecognized symbol '{}' in '{}'", symbol, text);
                        return Err(ExpressionError::MalformedToken(word.to_string()));
                    }
                },
            };
            Ok(token)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_prefers_numbers() {
        assert_eq!(classify("42"), Ok(Lexeme::Number(42.0)));
        assert_eq!(classify("-7"), Ok(Lexeme::Number(-7.0)));
        assert_eq!(classify("2.5e3"), Ok(Lexeme::Number(2500.0)));
        assert_eq!(classify("-"), Ok(Lexeme::Symbol('-')));
        assert_eq!(classify("("), Ok(Lexeme::Symbol('(')));
    }

    #[test]
    fn test_classify_rejects_non_finite() {
        assert_eq!(classify("inf"), Err(ExpressionError::MalformedToken("inf".to_string())));
        assert_eq!(classify("NaN"), Err(ExpressionError::MalformedToken("NaN".to_string())));
    }

    #[test]
    fn test_tokenize_unknown_symbol() {
        assert_eq!(
            tokenize("2 ^ 3"),
            Err(ExpressionError::MalformedToken("^".to_string()))
        );
    }
}
