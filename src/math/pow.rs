//! Integer-exponent decimal exponentiation.

use bigdecimal::BigDecimal;
use num_traits::One;

use crate::config::PrecisionConfig;

/// `base^exp` by square-and-multiply.
///
/// Intermediate products are trimmed back to working precision after every
/// step, so an exponent as large as the tick domain (~9 * 10^5, about 20
/// squarings) accumulates at most a few units in the guard digits. Negative
/// exponents go through the reciprocal of the positive power.
pub(crate) fn decimal_powi(base: &BigDecimal, exp: i64, config: &PrecisionConfig) -> BigDecimal {
    if exp == 0 {
        return BigDecimal::one();
    }

    let mut result = BigDecimal::one();
    let mut square = config.trim(base.clone());
    let mut remaining = exp.unsigned_abs();
    loop {
        if remaining & 1 == 1 {
            result = config.trim(&result * &square);
        }
        remaining >>= 1;
        if remaining == 0 {
            break;
        }
        square = config.trim(square.square());
    }

    if exp < 0 {
        result.inverse()
    } else {
        result
    }
}
