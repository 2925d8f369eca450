//! Protocol constants and derived fixed-point scale factors
//!
//! This module centralizes the magic constants used throughout the crate:
//! default token decimals, display precision, the Uniswap V3 tick domain, and
//! the Q96/Q192 fixed-point scale factors. The `BigDecimal` constants are
//! derived once and immutable afterward.

use std::sync::LazyLock;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

/// Default number of decimals for a token amount (wei scaling for ETH and
/// most ERC-20 tokens).
pub const DEFAULT_DECIMALS: u32 = 18;

/// Default number of fractional digits kept when converting base units back
/// to a display value.
pub const DEFAULT_DISPLAY_DP: i64 = 6;

/// Lowest tick the protocol can represent. The bound is closed: this tick is
/// itself valid.
pub const MIN_TICK: i32 = -887272;

/// Highest tick the protocol can represent (closed bound).
pub const MAX_TICK: i32 = 887272;

/// The ratio between the prices of two consecutive ticks.
pub const TICK_BASE: &str = "1.0001";

/// `2^96`, the scale factor of the sqrtPriceX96 fixed-point encoding.
pub static Q96: LazyLock<BigDecimal> =
    LazyLock::new(|| BigDecimal::from(BigInt::from(2).pow(96)));

/// `2^192`, the scale factor of a squared sqrtPriceX96 value.
pub static Q192: LazyLock<BigDecimal> =
    LazyLock::new(|| BigDecimal::from(BigInt::from(2).pow(192)));

/// `5^192`. Multiplying a squared sqrt price by this and shifting the decimal
/// point 192 places left divides by Q192 exactly, because
/// `2^192 * 5^192 = 10^192`.
pub(crate) static FIVE_POW_192: LazyLock<BigDecimal> =
    LazyLock::new(|| BigDecimal::from(BigInt::from(5).pow(192)));

/// [`TICK_BASE`] as an exact decimal (10001 * 10^-4).
pub(crate) static TICK_BASE_DECIMAL: LazyLock<BigDecimal> =
    LazyLock::new(|| BigDecimal::new(BigInt::from(10_001), 4));

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::math::pow10;

    #[test]
    fn q96_value() {
        assert_eq!(Q96.to_string(), "79228162514264337593543950336");
    }

    #[test]
    fn q192_is_q96_squared() {
        assert_eq!(*Q192, &*Q96 * &*Q96);
    }

    #[test]
    fn five_pow_192_complements_q192() {
        // 2^192 * 5^192 == 10^192
        assert_eq!(&*Q192 * &*FIVE_POW_192, pow10(192));
    }

    #[test]
    fn tick_bounds_are_symmetric() {
        assert_eq!(MIN_TICK, -MAX_TICK);
    }

    #[test]
    fn tick_base_decimal_matches_string() {
        assert_eq!(*TICK_BASE_DECIMAL, BigDecimal::from_str(TICK_BASE).unwrap());
    }
}
