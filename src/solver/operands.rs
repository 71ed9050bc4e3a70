use crate::expression::Operator;
use crate::solver::errors::SolverError;
use crate::utils::{parse_numbers, parse_operator_symbols};

/// Distinct operators in a fixed order
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorSet {
    operators: Vec<Operator>,
}

impl OperatorSet {
    /// Drops repeated operators, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns an error if no operator is given.
    pub fn new(operators: Vec<Operator>) -> Result<Self, SolverError> {
        let mut distinct: Vec<Operator> = Vec::with_capacity(operators.len());
        for op in operators {
            if !distinct.contains(&op) {
                distinct.push(op);
            }
        }

        if distinct.is_empty() {
            return Err(SolverError::EmptyOperators);
        }
        Ok(Self {
            operators: distinct,
        })
    }

    /// # Errors
    ///
    /// Returns an error if a symbol is not one of `+ - * / %` or none is given.
    pub fn from_symbols(symbols: &[char]) -> Result<Self, SolverError> {
        let operators = symbols
            .iter()
            .map(|&symbol| {
                Operator::from_symbol(symbol).ok_or(SolverError::UnknownOperator(symbol))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(operators)
    }

    /// Lenient parse of free text, see [`parse_operator_symbols`].
    ///
    /// # Errors
    ///
    /// Returns an error if the text contains no operator symbol.
    pub fn parse(text: &str) -> Result<Self, SolverError> {
        Self::new(parse_operator_symbols(text)?)
    }

    pub fn as_slice(&self) -> &[Operator] {
        &self.operators
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

/// The numbers to arrange and the operators to place between them
#[derive(Debug, Clone, PartialEq)]
pub struct OperandSet {
    numbers: Vec<i64>,
    operators: OperatorSet,
}

impl OperandSet {
    /// # Errors
    ///
    /// Returns an error if `numbers` is empty.
    pub fn new(numbers: Vec<i64>, operators: OperatorSet) -> Result<Self, SolverError> {
        if numbers.is_empty() {
            return Err(SolverError::EmptyNumbers);
        }
        Ok(Self { numbers, operators })
    }

    /// # Errors
    ///
    /// Returns an error if either text does not describe a valid input.
    pub fn parse(numbers: &str, operators: &str) -> Result<Self, SolverError> {
        Self::new(parse_numbers(numbers)?, OperatorSet::parse(operators)?)
    }

    pub fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    pub fn operators(&self) -> &OperatorSet {
        &self.operators
    }
}
