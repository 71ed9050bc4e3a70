//! Expression Finder - search for arithmetic expressions that hit a target value
//!
//! Every distinct ordering of the given numbers is combined with every choice
//! of operators between them. Each candidate is evaluated through a
//! tokenizer, a shunting-yard conversion to postfix and a postfix evaluator,
//! and reported when it equals the target or lies within a tolerance band.

pub mod expression;
pub mod iterator;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator, evaluate};
pub use solver::{
    ExpressionSolver, MatchKind, MatchReporter, MatchResult, OperandSet, OperatorSet, Search,
    SearchConfig, SolverError,
};
pub use utils::{UtilsError, parse_numbers, parse_operator_symbols};

/// Search for expressions over `numbers` and `operators` that evaluate to
/// `expected_result`
///
/// This is a convenience function that validates the inputs and starts a
/// lazy single-threaded search.
///
/// # Arguments
///
/// * `numbers` - The operands, each used exactly once per candidate
/// * `operators` - Operator symbols drawn from `+ - * / %`
/// * `expected_result` - The target value
/// * `tolerance_percent` - Width of the near-match band, `0` for exact only
/// * `stop_at_first` - End the search after the first exact match
///
/// # Errors
///
/// This function will return an error if:
/// * `numbers` is empty
/// * `operators` is empty or contains an unknown symbol
/// * The number of operator assignments does not fit in a `u64`
///
/// # Examples
///
/// ```
/// use expression_finder::search;
///
/// let mut matches = search(&[3, 1, 2], &['+'], 6, 0, true)?;
/// if let Some(found) = matches.next() {
///     println!("Found: {}", found);
/// }
/// # Ok::<(), expression_finder::SolverError>(())
/// ```
pub fn search(
    numbers: &[i64],
    operators: &[char],
    expected_result: i64,
    tolerance_percent: u32,
    stop_at_first: bool,
) -> Result<Search, SolverError> {
    let operands = OperandSet::new(numbers.to_vec(), OperatorSet::from_symbols(operators)?)?;
    let config = SearchConfig::new(expected_result, tolerance_percent, stop_at_first);

    ExpressionSolver::new(config).search(&operands)
}
