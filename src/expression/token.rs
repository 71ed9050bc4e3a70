use crate::expression::constants::{ADDITIVE_PRECEDENCE, MULTIPLICATIVE_PRECEDENCE};

/// Binary arithmetic operators understood by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl Operator {
    /// Every recognized operator, in symbol lookup order
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Rem,
    ];

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '%' => Some(Operator::Rem),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Rem => '%',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operator::Mul | Operator::Div | Operator::Rem => MULTIPLICATIVE_PRECEDENCE,
            Operator::Add | Operator::Sub => ADDITIVE_PRECEDENCE,
        }
    }

    /// Apply the operator as `left op right`.
    ///
    /// Division follows `f64` semantics, so a zero divisor yields an infinity
    /// or NaN. Remainder truncates both operands to integers first; where the
    /// integer remainder is undefined (zero divisor, non-finite operand,
    /// overflow) the result is NaN.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => left / right,
            Operator::Rem => truncated_remainder(left, right),
        }
    }
}

fn truncated_remainder(left: f64, right: f64) -> f64 {
    if !left.is_finite() || !right.is_finite() {
        return f64::NAN;
    }

    // `as` saturates out-of-range floats
    let (left, right) = (left.trunc() as i64, right.trunc() as i64);
    left.checked_rem(right).map_or(f64::NAN, |rem| rem as f64)
}

/// Discriminant of a [`Token`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    LeftParen,
    RightParen,
    Operator,
}

/// A single lexical unit of an infix or postfix expression.
///
/// Numbers keep their source text; the value is parsed again when the
/// postfix form is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(String),
    LeftParen,
    RightParen,
    Operator(Operator),
}

impl Token {
    pub fn number(value: f64) -> Self {
        Token::Number(value.to_string())
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::LeftParen => TokenKind::LeftParen,
            Token::RightParen => TokenKind::RightParen,
            Token::Operator(_) => TokenKind::Operator,
        }
    }

    pub fn text(&self) -> String {
        match self {
            Token::Number(text) => text.clone(),
            Token::LeftParen => "(".to_string(),
            Token::RightParen => ")".to_string(),
            Token::Operator(op) => op.symbol().to_string(),
        }
    }

    /// Only operators carry a precedence
    pub fn precedence(&self) -> Option<u8> {
        match self {
            Token::Operator(op) => Some(op.precedence()),
            _ => None,
        }
    }
}
