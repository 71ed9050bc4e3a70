mod assignments;
mod candidates;
mod errors;
mod permutations;

pub use assignments::OperatorAssignments;
pub use candidates::Candidates;
pub use errors::IteratorError;
pub use permutations::{Permutations, distinct_permutation_count, next_permutation};
