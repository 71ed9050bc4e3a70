/// Parameters of one search, read-only while it runs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    pub expected_result: i64,
    pub tolerance_percent: u32,
    pub stop_at_first: bool,
}

impl SearchConfig {
    pub fn new(expected_result: i64, tolerance_percent: u32, stop_at_first: bool) -> Self {
        Self {
            expected_result,
            tolerance_percent,
            stop_at_first,
        }
    }

    pub fn target(&self) -> f64 {
        self.expected_result as f64
    }

    /// Open interval `(low, high)` of values counted as near matches
    pub fn tolerance_band(&self) -> (f64, f64) {
        let target = self.target();
        let fraction = f64::from(self.tolerance_percent) / 100.0;
        let a = target * (1.0 - fraction);
        let b = target * (1.0 + fraction);
        (a.min(b), a.max(b))
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(0, 0, true)
    }
}
