//! Internal arbitrary-precision helpers behind the conversion functions.
//!
//! Nothing here touches native floating point: exponentiation is
//! square-and-multiply on decimals and the logarithm is an atanh series, both
//! carried at the working precision of [`PrecisionConfig`].
//!
//! [`PrecisionConfig`]: crate::PrecisionConfig

mod ln;
mod pow;

pub(crate) use ln::ln;
pub(crate) use pow::decimal_powi;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::One;

/// `10^exp` as an exact decimal, for any sign of `exp`.
pub(crate) fn pow10(exp: i64) -> BigDecimal {
    BigDecimal::new(BigInt::one(), -exp)
}
