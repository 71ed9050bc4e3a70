use log::{debug, warn};

use crate::expression::Operator;
use crate::utils::errors::UtilsError;

/// Parse whole numbers separated by whitespace and/or commas.
///
/// # Errors
///
/// Returns an error if the text holds no numbers or any item is not an integer.
pub fn parse_numbers(text: &str) -> Result<Vec<i64>, UtilsError> {
    debug!("Parsing numbers from '{}'", text);

    let numbers = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<i64>().map_err(|_| {
                warn!("Rejecting '{}' as a number", item);
                UtilsError::InvalidNumber(item.to_string())
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if numbers.is_empty() {
        warn!("No numbers given");
        return Err(UtilsError::EmptyInput);
    }

    debug!("Parsed {} numbers", numbers.len());
    Ok(numbers)
}

/// Pick the operator symbols out of free text.
///
/// Unrecognized characters are ignored and repeated symbols are kept once,
/// in order of first appearance.
///
/// # Errors
///
/// Returns an error if no recognized operator symbol appears in the text.
pub fn parse_operator_symbols(text: &str) -> Result<Vec<Operator>, UtilsError> {
    debug!("Parsing operators from '{}'", text);

    let mut operators: Vec<Operator> = Vec::new();
    for op in text.chars().filter_map(Operator::from_symbol) {
        if !operators.contains(&op) {
            operators.push(op);
        }
    }

    if operators.is_empty() {
        warn!("No operators recognized in '{}'", text);
        return Err(UtilsError::NoOperators(text.to_string()));
    }

    Ok(operators)
}
