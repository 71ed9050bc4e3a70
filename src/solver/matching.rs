use std::fmt;

use crate::solver::config::SearchConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Near,
    NoMatch,
}

impl MatchKind {
    /// Exact equality first, then strict containment in the tolerance band.
    /// NaN and infinities never match.
    pub fn classify(value: f64, config: &SearchConfig) -> Self {
        if value == config.target() {
            return MatchKind::Exact;
        }

        let (low, high) = config.tolerance_band();
        if value > low && value < high {
            MatchKind::Near
        } else {
            MatchKind::NoMatch
        }
    }
}

/// One evaluated candidate as handed to the reporter
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub expression: String,
    pub value: f64,
    pub kind: MatchKind,
}

impl MatchResult {
    pub fn is_exact(&self) -> bool {
        self.kind == MatchKind::Exact
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_band() {
        let config = SearchConfig::new(100, 10, true);
        assert_eq!(MatchKind::classify(100.0, &config), MatchKind::Exact);
        assert_eq!(MatchKind::classify(95.0, &config), MatchKind::Near);
        assert_eq!(MatchKind::classify(109.5, &config), MatchKind::Near);
        assert_eq!(MatchKind::classify(80.0, &config), MatchKind::NoMatch);
        assert_eq!(MatchKind::classify(120.0, &config), MatchKind::NoMatch);
    }

    #[test]
    fn test_band_bounds_are_exclusive() {
        let config = SearchConfig::new(100, 10, true);
        let (low, high) = config.tolerance_band();
        assert_eq!(MatchKind::classify(low, &config), MatchKind::NoMatch);
        assert_eq!(MatchKind::classify(high, &config), MatchKind::NoMatch);
    }

    #[test]
    fn test_zero_tolerance_only_matches_exactly() {
        let config = SearchConfig::new(6, 0, true);
        assert_eq!(MatchKind::classify(6.0, &config), MatchKind::Exact);
        assert_eq!(MatchKind::classify(6.000_001, &config), MatchKind::NoMatch);
    }

    #[test]
    fn test_negative_target_has_a_band() {
        let config = SearchConfig::new(-50, 10, true);
        assert_eq!(MatchKind::classify(-47.0, &config), MatchKind::Near);
        assert_eq!(MatchKind::classify(47.0, &config), MatchKind::NoMatch);
    }

    #[test]
    fn test_non_finite_values_never_match() {
        let config = SearchConfig::new(10, 100, true);
        assert_eq!(MatchKind::classify(f64::NAN, &config), MatchKind::NoMatch);
        assert_eq!(MatchKind::classify(f64::INFINITY, &config), MatchKind::NoMatch);
    }

    #[test]
    fn test_display() {
        let result = MatchResult {
            expression: "1 + 2 + 3".to_string(),
            value: 6.0,
            kind: MatchKind::Exact,
        };
        assert_eq!(result.to_string(), "1 + 2 + 3 = 6");
        assert!(result.is_exact());
    }
}
