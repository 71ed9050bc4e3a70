use log::debug;

use crate::expression::Operator;
use crate::iterator::errors::IteratorError;

/// Mixed-radix counter over operator choices for each gap between operands.
///
/// Index `i` selects `operators[(i / k^j) % k]` for gap `j`, where `k` is the
/// number of operators; gap 0 is the least significant digit.
#[derive(Debug, Clone)]
pub struct OperatorAssignments {
    operators: Vec<Operator>,
    gaps: usize,
    index: u64,
    total: u64,
}

impl OperatorAssignments {
    /// # Errors
    ///
    /// Returns an error if `operators` is empty or `k^gaps` does not fit in a `u64`.
    pub fn new(operators: &[Operator], gaps: usize) -> Result<Self, IteratorError> {
        if operators.is_empty() {
            return Err(IteratorError::EmptyOperators);
        }

        let overflow = IteratorError::SearchSpaceOverflow {
            operators: operators.len(),
            gaps,
        };
        let radix = u64::try_from(operators.len()).map_err(|_| overflow.clone())?;
        let exponent = u32::try_from(gaps).map_err(|_| overflow.clone())?;
        let total = radix.checked_pow(exponent).ok_or(overflow)?;

        debug!(
            "{} operator assignments for {} gaps over {} operators",
            total,
            gaps,
            operators.len()
        );

        Ok(Self {
            operators: operators.to_vec(),
            gaps,
            index: 0,
            total,
        })
    }

    /// Number of assignments a fresh counter yields
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn gaps(&self) -> usize {
        self.gaps
    }

    /// Start counting again from zero
    pub fn restart(&mut self) {
        self.index = 0;
    }

    fn decode(&self, index: u64) -> Option<Vec<Operator>> {
        let radix = self.operators.len() as u64;
        let mut rest = index;
        (0..self.gaps)
            .map(|_| {
                let digit = usize::try_from(rest % radix).ok()?;
                rest /= radix;
                self.operators.get(digit).copied()
            })
            .collect()
    }
}

impl Iterator for OperatorAssignments {
    type Item = Vec<Operator>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.total {
            return None;
        }
        let assignment = self.decode(self.index)?;
        self.index += 1;
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.total - self.index).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}
