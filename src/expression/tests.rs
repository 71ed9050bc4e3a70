use crate::expression::{
    Expression, ExpressionError, Operator, Token, evaluate, to_postfix, tokenize,
};

/// Independent recursive-descent evaluator over space-separated words
struct Descent<'a> {
    words: Vec<&'a str>,
    position: usize,
}

impl<'a> Descent<'a> {
    fn run(text: &'a str) -> Option<f64> {
        let mut parser = Descent {
            words: text.split_whitespace().collect(),
            position: 0,
        };
        let value = parser.sum()?;
        (parser.position == parser.words.len()).then_some(value)
    }

    fn peek(&self) -> Option<&'a str> {
        self.words.get(self.position).copied()
    }

    fn sum(&mut self) -> Option<f64> {
        let mut value = self.product()?;
        while let Some(word) = self.peek() {
            match word {
                "+" => {
                    self.position += 1;
                    value += self.product()?;
                }
                "-" => {
                    self.position += 1;
                    value -= self.product()?;
                }
                _ => break,
            }
        }
        Some(value)
    }

    fn product(&mut self) -> Option<f64> {
        let mut value = self.atom()?;
        while let Some(word) = self.peek() {
            match word {
                "*" => {
                    self.position += 1;
                    value *= self.atom()?;
                }
                "/" => {
                    self.position += 1;
                    value /= self.atom()?;
                }
                "%" => {
                    self.position += 1;
                    let divisor = self.atom()?.trunc() as i64;
                    value = ((value.trunc() as i64) % divisor) as f64;
                }
                _ => break,
            }
        }
        Some(value)
    }

    fn atom(&mut self) -> Option<f64> {
        let word = self.peek()?;
        self.position += 1;
        if word == "(" {
            let value = self.sum()?;
            if self.peek()? != ")" {
                return None;
            }
            self.position += 1;
            Some(value)
        } else {
            word.parse().ok()
        }
    }
}

fn assert_evaluates(text: &str, expected: f64) {
    let result = evaluate(text);
    assert!(result.is_ok(), "'{}' failed: {:?}", text, result.err());
    if let Ok(value) = result {
        assert!(
            (value - expected).abs() < 1e-9,
            "'{}' evaluated to {}, expected {}",
            text,
            value,
            expected
        );
    }
}

#[test]
fn test_precedence() {
    assert_evaluates("2 + 3 * 4", 14.0);
    assert_evaluates("( 2 + 3 ) * 4", 20.0);
    assert_evaluates("2 * 3 + 4", 10.0);
    assert_evaluates("10 - 6 / 3", 8.0);
    assert_evaluates("1 + 7 % 4", 4.0);
}

#[test]
fn test_left_associativity() {
    assert_evaluates("8 - 3 - 2", 3.0);
    assert_evaluates("64 / 4 / 2", 8.0);
    assert_evaluates("2 * 9 % 4", 2.0);
    assert_evaluates("9 % 4 * 2", 2.0);
}

#[test]
fn test_modulo_truncation() {
    assert_evaluates("7 % 2", 1.0);
    assert_evaluates("-7 % 2", -1.0);
    assert_evaluates("7.8 % 2.5", 1.0);
}

#[test]
fn test_nested_parentheses() {
    assert_evaluates("( ( 1 + 2 ) * ( 3 + 4 ) ) - 1", 20.0);
    assert_evaluates("2 * ( 3 + ( 4 - 1 ) * 2 )", 18.0);
}

#[test]
fn test_round_trip_against_recursive_descent() {
    let cases = [
        "1 + 2 + 3",
        "6 / 4 * 3 - 2",
        "5 - 3 * 2 + 9 / 3",
        "( 8 - 2 ) * ( 3 + 1 ) / 5",
        "100 % 7 + 3 * ( 4 - 6 )",
        "2.5 * 4 - 1.25 / 5",
        "( ( 9 ) )",
        "1 - ( 2 - ( 3 - ( 4 - 5 ) ) )",
        "17 % 5 % 3 * 11 - 4 / 8",
        "-3 * -4 + 12 % -5",
    ];

    for text in cases {
        let expected = Descent::run(text);
        assert!(expected.is_some(), "reference evaluator rejected '{}'", text);
        if let Some(expected) = expected {
            assert_evaluates(text, expected);
        }
    }
}

#[test]
fn test_postfix_order() {
    let tokens = tokenize("3 + 4 * 2 - 1");
    assert!(tokens.is_ok());
    if let Ok(tokens) = tokens {
        let postfix = to_postfix(tokens);
        assert!(postfix.is_ok());
        if let Ok(postfix) = postfix {
            assert_eq!(postfix.to_string(), "3 4 2 * + 1 -");
        }
    }
}

#[test]
fn test_postfix_normalizes_numbers() {
    let expr = Expression::from_tokens(vec![
        Token::number(0.1 + 0.2),
        Token::Operator(Operator::Mul),
        Token::Number("10".to_string()),
    ]);
    let postfix = expr.to_postfix();
    assert!(postfix.is_ok());
    if let Ok(postfix) = postfix {
        assert_eq!(postfix.to_string(), "0.3 10 *");
    }
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 3.0).abs() < 1e-12);
    }
}

#[test]
fn test_adjacent_symbols_are_not_split() {
    assert_eq!(
        tokenize("3+4"),
        Err(ExpressionError::MalformedToken("3+4".to_string()))
    );
    assert_eq!(
        evaluate("( 1 + 2)"),
        Err(ExpressionError::MalformedToken("2)".to_string()))
    );
}

#[test]
fn test_unbalanced_closing_parenthesis() {
    assert_eq!(
        evaluate("1 + 2 )"),
        Err(ExpressionError::UnbalancedParenthesis)
    );
    assert_eq!(evaluate(")"), Err(ExpressionError::UnbalancedParenthesis));
}

#[test]
fn test_unclosed_parenthesis_is_dropped() {
    assert_evaluates("( 1 + 2", 3.0);
    assert_evaluates("2 * ( 3 + 4", 14.0);
}

#[test]
fn test_structurally_invalid_expressions() {
    assert_eq!(
        evaluate("1 +"),
        Err(ExpressionError::StackUnderflow { operator: '+' })
    );
    assert_eq!(
        evaluate("1 2"),
        Err(ExpressionError::EmptyExpression { remaining: 2 })
    );
    assert_eq!(
        evaluate("   "),
        Err(ExpressionError::EmptyExpression { remaining: 0 })
    );
}

#[test]
fn test_division_by_zero_is_not_an_error() {
    let result = evaluate("1 / 0");
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!(value.is_infinite());
    }

    let result = evaluate("4 % 0");
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!(value.is_nan());
    }
}

#[test]
fn test_interleave_builds_flat_expression() {
    let expr = Expression::interleave(&[1, 2, 3], &[Operator::Add, Operator::Mul]);
    assert!(expr.is_some());
    if let Some(expr) = expr {
        assert_eq!(expr.to_string(), "1 + 2 * 3");
        assert_eq!(expr.evaluate(), Ok(7.0));
    }

    assert!(Expression::interleave(&[1, 2], &[]).is_none());
    assert!(Expression::interleave(&[], &[]).is_none());
}

#[test]
fn test_parse_and_display() {
    let expr = Expression::parse("  ( 1.5   +  -2 ) ");
    assert!(expr.is_ok());
    if let Ok(expr) = expr {
        assert_eq!(expr.tokens().len(), 5);
        assert_eq!(expr.to_string(), "( 1.5 + -2 )");
    }
}
