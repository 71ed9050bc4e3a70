// Configuration constants for the expression pipeline
pub const SIGNIFICANT_DIGITS: usize = 10;
pub const MULTIPLICATIVE_PRECEDENCE: u8 = 3;
pub const ADDITIVE_PRECEDENCE: u8 = 2;
