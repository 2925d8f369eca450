//! High-precision natural logarithm.
//!
//! `ln` decomposes its argument as `m * 2^k * 10^e` with the mantissa in
//! `[1, 2)`, then evaluates `ln m = 2 * atanh((m - 1) / (m + 1))` as a power
//! series. The atanh argument stays below 1/3, so each pair of terms gains
//! roughly a decimal digit and the series converges well inside the working
//! precision.

use std::sync::LazyLock;

use bigdecimal::BigDecimal;
use num_traits::{One, Zero};

use crate::config::PrecisionConfig;

/// `ln 2 = 2 * atanh(1/3)`.
static LN_2: LazyLock<BigDecimal> = LazyLock::new(|| {
    let config = PrecisionConfig::default();
    let third = BigDecimal::one() / BigDecimal::from(3);
    atanh(&third, &config).double()
});

/// `ln 10 = 3 * ln 2 + ln 1.25`, with `ln 1.25 = 2 * atanh(1/9)`.
static LN_10: LazyLock<BigDecimal> = LazyLock::new(|| {
    let config = PrecisionConfig::default();
    let ninth = BigDecimal::one() / BigDecimal::from(9);
    &*LN_2 * BigDecimal::from(3) + atanh(&ninth, &config).double()
});

/// Natural logarithm of a strictly positive decimal.
///
/// Returns `None` for zero or negative input; there is no NaN in decimal
/// arithmetic, so the caller decides how to report the domain error.
pub(crate) fn ln(x: &BigDecimal, config: &PrecisionConfig) -> Option<BigDecimal> {
    if *x <= BigDecimal::zero() {
        return None;
    }

    // x = m * 10^e with m in [1, 10)
    let normalized = x.normalized();
    let digit_count = normalized.digits() as i64;
    let (mantissa_int, scale) = normalized.into_bigint_and_exponent();
    let exponent = digit_count - 1 - scale;
    let mut mantissa = config.trim(BigDecimal::new(mantissa_int, digit_count - 1));

    // halve into [1, 2) so the atanh argument stays below 1/3
    let two = BigDecimal::from(2);
    let mut halvings = 0i64;
    while mantissa >= two {
        mantissa = mantissa.half();
        halvings += 1;
    }

    let z = (&mantissa - BigDecimal::one()) / (&mantissa + BigDecimal::one());
    let ln_mantissa = atanh(&z, config).double();

    Some(
        ln_mantissa
            + &*LN_2 * BigDecimal::from(halvings)
            + &*LN_10 * BigDecimal::from(exponent),
    )
}

/// `atanh(z)` for `|z| < 1` by its power series `z + z^3/3 + z^5/5 + ...`,
/// truncated once a term drops below the configured epsilon.
fn atanh(z: &BigDecimal, config: &PrecisionConfig) -> BigDecimal {
    let epsilon = config.epsilon();
    let z_squared = config.trim(z.square());
    let mut term = z.clone();
    let mut sum = z.clone();
    let mut denominator = 3u64;
    loop {
        term = config.trim(&term * &z_squared);
        let contribution = &term / BigDecimal::from(denominator);
        if contribution.abs() < epsilon {
            break;
        }
        sum += contribution;
        denominator += 2;
    }
    sum
}
