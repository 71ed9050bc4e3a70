mod config;
mod core;
mod errors;
mod matching;
mod operands;
mod report;
mod stats;

pub use config::SearchConfig;
pub use self::core::{ExpressionSolver, Search};
pub use errors::SolverError;
pub use matching::{MatchKind, MatchResult};
pub use operands::{OperandSet, OperatorSet};
pub use report::{MatchReporter, report_all};
pub use stats::SearchStats;
