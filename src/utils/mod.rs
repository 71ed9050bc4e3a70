//! Helpers for turning user-supplied text into search inputs

mod errors;
mod validation;

pub use errors::UtilsError;
pub use validation::{parse_numbers, parse_operator_symbols};
