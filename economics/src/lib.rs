//! AgroFund Economics Module
//!
//! Pure calculations behind every campaign page and reservation:
//! - Investment return projection (profit-sharing model)
//! - Plant availability accounting
//! - Currency, date and time-remaining formatting
//!
//! Nothing here performs I/O or holds state, so every function is safe to
//! call from any thread.

pub mod availability;
pub mod format;
pub mod returns;

pub use availability::{AvailabilityCalculator, AvailabilityInfo};
pub use format::{funding_progress, CurrencyFormat, DateFormat, TimeRemaining};
pub use returns::{InvestmentCalculation, ReturnCalculator};

/// Economic constants
pub mod constants {
    /// Scale used for every percentage shown to investors
    pub const PERCENT_SCALE: f64 = 100.0;

    /// Upper bound of `expected_return_percentage` (100% of net profit)
    pub const MAX_RETURN_FRACTION: f64 = 1.0;

    pub const SECONDS_PER_MINUTE: i64 = 60;
    pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
    pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_constants() {
        assert_eq!(constants::SECONDS_PER_HOUR, 3_600);
        assert_eq!(constants::SECONDS_PER_DAY, 86_400);
    }
}
