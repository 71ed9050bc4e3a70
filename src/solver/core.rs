use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info};
use rayon::prelude::*;

use crate::expression::{Expression, ExpressionError, evaluate};
use crate::iterator::{Candidates, OperatorAssignments, Permutations};
use crate::solver::config::SearchConfig;
use crate::solver::errors::SolverError;
use crate::solver::matching::{MatchKind, MatchResult};
use crate::solver::operands::OperandSet;
use crate::solver::stats::SearchStats;

/// Evaluate one candidate's infix text and classify the value
fn evaluate_candidate(
    text: String,
    config: &SearchConfig,
) -> Result<MatchResult, ExpressionError> {
    let value = evaluate(&text)?;
    Ok(MatchResult {
        kind: MatchKind::classify(value, config),
        expression: text,
        value,
    })
}

/// Lazy stream of exact and near matches, in permutation-then-assignment order
#[derive(Debug, Clone)]
pub struct Search {
    candidates: Candidates,
    config: SearchConfig,
    stats: SearchStats,
    finished: bool,
}

impl Search {
    fn new(candidates: Candidates, config: SearchConfig) -> Self {
        Self {
            candidates,
            config,
            stats: SearchStats::default(),
            finished: false,
        }
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Candidates a complete enumeration attempts, when countable
    pub fn total_candidates(&self) -> Option<u64> {
        self.candidates.total()
    }
}

impl Iterator for Search {
    type Item = MatchResult;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        for text in self.candidates.by_ref() {
            self.stats.attempted += 1;

            let result = match evaluate_candidate(text, &self.config) {
                Ok(result) => result,
                Err(e) => {
                    // Never produced by generated candidates; skip and carry on
                    self.stats.failed += 1;
                    debug!("Skipping candidate: {}", e);
                    continue;
                }
            };

            match result.kind {
                MatchKind::Exact => {
                    self.stats.exact += 1;
                    info!("Found exact match: {}", result);
                    if self.config.stop_at_first {
                        self.finished = true;
                    }
                    return Some(result);
                }
                MatchKind::Near => {
                    self.stats.near += 1;
                    debug!("Found near match: {}", result);
                    return Some(result);
                }
                MatchKind::NoMatch => {}
            }
        }

        self.finished = true;
        info!(
            "Search finished: {} candidates, {} exact, {} near",
            self.stats.attempted, self.stats.exact, self.stats.near
        );
        None
    }
}

/// Brute-force search for expressions matching a target value
pub struct ExpressionSolver {
    config: SearchConfig,
}

impl ExpressionSolver {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Start a lazy search over every arrangement of the operands
    ///
    /// # Errors
    ///
    /// Returns an error if the number of operator assignments overflows a `u64`.
    pub fn search(&self, operands: &OperandSet) -> Result<Search, SolverError> {
        let candidates = Candidates::new(
            operands.numbers().to_vec(),
            operands.operators().as_slice(),
        )?;

        info!(
            "Searching {} numbers with {} operators for {} (tolerance {}%, stop at first: {})",
            operands.numbers().len(),
            operands.operators().len(),
            self.config.expected_result,
            self.config.tolerance_percent,
            self.config.stop_at_first
        );
        if let Some(total) = candidates.total() {
            debug!("{} candidates to evaluate", total);
        }

        Ok(Search::new(candidates, self.config))
    }

    /// First exact match in enumeration order, ignoring near matches
    ///
    /// # Errors
    ///
    /// See [`ExpressionSolver::search`].
    pub fn find_first(&self, operands: &OperandSet) -> Result<Option<MatchResult>, SolverError> {
        Ok(self.search(operands)?.find(MatchResult::is_exact))
    }

    /// Same matches as [`ExpressionSolver::search`], spread over the rayon
    /// thread pool one permutation at a time.
    ///
    /// Results come back in no particular order. With `stop_at_first`, workers
    /// stop once any of them finds an exact match, and at most one exact match
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of operator assignments overflows a `u64`.
    pub fn search_parallel(
        &self,
        operands: &OperandSet,
    ) -> Result<Vec<MatchResult>, SolverError> {
        let gaps = operands.numbers().len().saturating_sub(1);
        let assignments = OperatorAssignments::new(operands.operators().as_slice(), gaps)?;
        let config = self.config;
        let found_exact = AtomicBool::new(false);

        info!("Starting parallel search for {}", config.expected_result);

        let mut results: Vec<MatchResult> = Permutations::new(operands.numbers().to_vec())
            .par_bridge()
            .flat_map_iter(|numbers| {
                let found_exact = &found_exact;
                assignments
                    .clone()
                    .take_while(move |_| {
                        !(config.stop_at_first && found_exact.load(Ordering::Relaxed))
                    })
                    .filter_map(move |operators| {
                        let text = Expression::interleave(&numbers, &operators)?.to_string();
                        let result = evaluate_candidate(text, &config).ok()?;
                        match result.kind {
                            MatchKind::NoMatch => None,
                            MatchKind::Exact => {
                                found_exact.store(true, Ordering::Relaxed);
                                Some(result)
                            }
                            MatchKind::Near => Some(result),
                        }
                    })
            })
            .collect();

        if config.stop_at_first
            && let Some(position) = results.iter().position(MatchResult::is_exact)
        {
            results.truncate(position + 1);
        }

        info!("Parallel search finished with {} matches", results.len());
        Ok(results)
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
