//! Numeric configuration for conversion operations
//!
//! Every conversion in this crate shares a single immutable numeric
//! configuration: working precision for inexact operations (division, square
//! roots, series evaluation), the rounding mode applied when trimming back to
//! that precision, and the exponent threshold past which formatters switch to
//! scientific notation.
//!
//! The configuration is an explicit value rather than a mutable global, so
//! concurrent callers and tests never observe each other's settings.
//!
//! # Example
//!
//! ```rust
//! use web3_precision::PrecisionConfig;
//!
//! let config = PrecisionConfig::default();
//! assert_eq!(config.precision(), 100);
//! ```

use std::num::NonZeroU64;

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::One;

pub mod constants;

/// Extra digits carried through intermediate results so that trimming never
/// eats into the advertised precision.
const GUARD_DIGITS: u64 = 10;

/// Immutable numeric configuration shared by every conversion.
///
/// Defaults match the precision the library guarantees: 100 significant
/// digits of working precision (the same precision `bigdecimal` applies to
/// non-terminating division), round-half-up, and plain decimal notation for
/// first-digit exponents within `[-20, 20]`.
#[derive(Debug, Clone, Copy)]
pub struct PrecisionConfig {
    precision: u64,
    rounding: RoundingMode,
    exp_threshold: i64,
}

impl Default for PrecisionConfig {
    fn default() -> Self {
        Self {
            precision: 100,
            rounding: RoundingMode::HalfUp,
            exp_threshold: 20,
        }
    }
}

impl PrecisionConfig {
    /// Create a configuration with explicit settings.
    pub fn new(precision: u64, rounding: RoundingMode, exp_threshold: i64) -> Self {
        Self {
            precision,
            rounding,
            exp_threshold,
        }
    }

    /// Working precision in significant digits.
    pub fn precision(&self) -> u64 {
        self.precision
    }

    /// Rounding mode applied when trimming intermediate results.
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// First-digit exponent magnitude beyond which formatters emit
    /// scientific notation.
    pub fn exp_threshold(&self) -> i64 {
        self.exp_threshold
    }

    /// Trim an intermediate result back to working precision (plus guard
    /// digits). Exact values shorter than the precision pass through
    /// unchanged.
    pub(crate) fn trim(&self, value: BigDecimal) -> BigDecimal {
        match NonZeroU64::new(self.precision + GUARD_DIGITS) {
            Some(digits) => value.with_precision_round(digits, self.rounding),
            None => value,
        }
    }

    /// Smallest magnitude worth accumulating in a converging series.
    pub(crate) fn epsilon(&self) -> BigDecimal {
        BigDecimal::new(BigInt::one(), (self.precision + GUARD_DIGITS) as i64)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn default_config_values() {
        let config = PrecisionConfig::default();
        assert_eq!(config.precision(), 100);
        assert_eq!(config.exp_threshold(), 20);
    }

    #[test]
    fn trim_leaves_short_values_untouched() {
        let config = PrecisionConfig::default();
        let value = BigDecimal::from_str("1.0001").unwrap();
        assert_eq!(config.trim(value.clone()), value);
    }

    #[test]
    fn trim_rounds_to_working_precision() {
        let config = PrecisionConfig::new(4, RoundingMode::HalfUp, 20);
        // 4 + GUARD_DIGITS = 14 significant digits survive the trim
        let value = BigDecimal::from_str("1.23456789012345678901").unwrap();
        let trimmed = config.trim(value);
        assert_eq!(trimmed, BigDecimal::from_str("1.2345678901235").unwrap());
    }

    #[test]
    fn epsilon_matches_precision() {
        let config = PrecisionConfig::new(10, RoundingMode::HalfUp, 20);
        assert_eq!(
            config.epsilon(),
            BigDecimal::from_str("1e-20").unwrap() // 10 + GUARD_DIGITS
        );
    }
}
