use crate::expression::{Expression, Operator};
use crate::iterator::assignments::OperatorAssignments;
use crate::iterator::errors::IteratorError;
use crate::iterator::permutations::{Permutations, distinct_permutation_count};

/// Infix text of every candidate: each distinct permutation of the numbers
/// crossed with each operator assignment, permutation-major.
#[derive(Debug, Clone)]
pub struct Candidates {
    permutations: Permutations<i64>,
    assignments: OperatorAssignments,
    current: Option<Vec<i64>>,
    total: Option<u64>,
}

impl Candidates {
    /// # Errors
    ///
    /// Returns an error if `operators` is empty or there are too many
    /// operator assignments to count.
    pub fn new(numbers: Vec<i64>, operators: &[Operator]) -> Result<Self, IteratorError> {
        let assignments = OperatorAssignments::new(operators, numbers.len().saturating_sub(1))?;
        let total = distinct_permutation_count(&numbers)
            .and_then(|count| count.checked_mul(assignments.total()));

        Ok(Self {
            permutations: Permutations::new(numbers),
            assignments,
            current: None,
            total,
        })
    }

    /// Candidates a fresh enumeration yields, when the count fits in a `u64`
    pub fn total(&self) -> Option<u64> {
        self.total
    }
}

impl Iterator for Candidates {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(numbers) = &self.current
                && let Some(operators) = self.assignments.next()
            {
                if let Some(expr) = Expression::interleave(numbers, &operators) {
                    return Some(expr.to_string());
                }
                continue;
            }

            self.current = Some(self.permutations.next()?);
            self.assignments.restart();
        }
    }
}
