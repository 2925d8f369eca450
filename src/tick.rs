//! Tick encoding: a discretized index into the exponential price grid
//! `price = 1.0001^tick`.
//!
//! Ticks live in the closed range `[MIN_TICK, MAX_TICK]`; anything outside
//! is a domain error, never clamped. `tick_to_price` uses exact decimal
//! exponentiation and `price_to_tick` a full-precision natural logarithm, so
//! `price_to_tick(tick_to_price(t)) == t` holds exactly for every valid
//! tick. The reverse trip is lossy by construction: tick space is discrete,
//! and a decoded price lands within one tick spacing (a factor of 1.0001) of
//! the original.

use std::sync::LazyLock;

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{ToPrimitive, Zero};
use tracing::debug;

use crate::config::constants::{MAX_TICK, MIN_TICK, TICK_BASE_DECIMAL};
use crate::config::PrecisionConfig;
use crate::errors::ConversionError;
use crate::math::{decimal_powi, ln, pow10};
use crate::numeric::parse_positive_decimal;

/// `ln(1.0001)`, the tick spacing in log-price space.
static LN_TICK_BASE: LazyLock<BigDecimal> = LazyLock::new(|| {
    ln(&TICK_BASE_DECIMAL, &PrecisionConfig::default()).expect("tick base is positive")
});

/// Convert a tick to its human-unit price.
///
/// Computes `1.0001^tick * 10^(decimals0 - decimals1)` in arbitrary-precision
/// decimal arithmetic. Tick 0 with an equal decimals pair yields exactly 1.
///
/// # Errors
///
/// [`ConversionError::TickOutOfRange`] if `tick` is outside
/// `[MIN_TICK, MAX_TICK]` (both endpoints valid).
pub fn tick_to_price(
    tick: i32,
    decimals0: u32,
    decimals1: u32,
) -> Result<BigDecimal, ConversionError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(ConversionError::tick_out_of_range(
            "tick_to_price",
            i64::from(tick),
        ));
    }
    let config = PrecisionConfig::default();
    let price = decimal_powi(&TICK_BASE_DECIMAL, i64::from(tick), &config);
    Ok(price * pow10(i64::from(decimals0) - i64::from(decimals1)))
}

/// Convert a human-unit price to the nearest tick.
///
/// Computes `round(ln(price * 10^(decimals1 - decimals0)) / ln(1.0001))`
/// with the logarithm evaluated at full decimal precision; half-way values
/// round away from zero.
///
/// # Errors
///
/// - [`ConversionError::InvalidInput`] if `price` does not parse as a number
///   or is not strictly positive
/// - [`ConversionError::TickOutOfRange`] if the rounded tick falls outside
///   `[MIN_TICK, MAX_TICK]`
pub fn price_to_tick(
    price: &str,
    decimals0: u32,
    decimals1: u32,
) -> Result<i32, ConversionError> {
    let parsed = parse_positive_decimal("price_to_tick", price)?;
    let config = PrecisionConfig::default();
    let adjusted = &parsed * pow10(i64::from(decimals1) - i64::from(decimals0));
    let log_price = ln(&adjusted, &config)
        .ok_or_else(|| ConversionError::invalid_input("price_to_tick", price))?;
    let ratio = log_price / &*LN_TICK_BASE;
    // BigInt has no negative zero, so a rounded -0 is already plain 0
    let rounded = ratio.with_scale_round(0, RoundingMode::HalfUp);
    let tick = saturating_i64(&rounded);
    if tick < i64::from(MIN_TICK) || tick > i64::from(MAX_TICK) {
        return Err(ConversionError::tick_out_of_range("price_to_tick", tick));
    }
    debug!(price, decimals0, decimals1, tick, "computed tick from price");
    Ok(tick as i32)
}

fn saturating_i64(value: &BigDecimal) -> i64 {
    value.to_i64().unwrap_or(if *value < BigDecimal::zero() {
        i64::MIN
    } else {
        i64::MAX
    })
}
