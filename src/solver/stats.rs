/// Running counters of a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub attempted: u64,
    pub failed: u64,
    pub exact: u64,
    pub near: u64,
}
