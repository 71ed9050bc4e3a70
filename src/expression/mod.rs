//! Infix expression pipeline: tokenizer, shunting-yard conversion and
//! postfix evaluation

mod ast;
pub mod constants;
mod display;
mod errors;
mod eval;
mod lexer;
mod postfix;
mod token;

pub use ast::Expression;
pub use errors::ExpressionError;
pub use eval::evaluate;
pub use lexer::{Lexeme, classify, tokenize};
pub use postfix::{Postfix, normalize_precision, to_postfix};
pub use token::{Operator, Token, TokenKind};

#[cfg(test)]
mod tests;
