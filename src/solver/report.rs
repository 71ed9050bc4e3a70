use crate::solver::matching::MatchResult;

/// Receives every reported match, unmodified
pub trait MatchReporter {
    fn report(&mut self, result: &MatchResult);
}

impl MatchReporter for Vec<MatchResult> {
    fn report(&mut self, result: &MatchResult) {
        self.push(result.clone());
    }
}

/// Feed every result to `reporter`, returning how many were reported
pub fn report_all<I, R>(results: I, reporter: &mut R) -> usize
where
    I: IntoIterator<Item = MatchResult>,
    R: MatchReporter + ?Sized,
{
    let mut count = 0;
    for result in results {
        reporter.report(&result);
        count += 1;
    }
    count
}
