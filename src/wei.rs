//! Base-unit ("wei") scaling.
//!
//! A token amount in human units relates to its smallest indivisible unit by
//! a fixed power-of-ten factor, the token's decimals. `to_wei` is strict and
//! lossless; `from_wei` is a display conversion that rounds to a requested
//! number of fractional digits.
//!
//! # Examples
//!
//! ```rust
//! use web3_precision::{from_wei, to_wei, DEFAULT_DECIMALS, DEFAULT_DISPLAY_DP};
//!
//! let wei = to_wei("1.5", DEFAULT_DECIMALS)?;
//! assert_eq!(wei, "1500000000000000000");
//!
//! let back = from_wei(&wei, DEFAULT_DECIMALS, DEFAULT_DISPLAY_DP)?;
//! assert_eq!(back.to_string(), "1.500000");
//! # Ok::<(), web3_precision::ConversionError>(())
//! ```

use bigdecimal::{BigDecimal, RoundingMode};
use tracing::trace;

use crate::errors::ConversionError;
use crate::math::pow10;
use crate::numeric::parse_decimal;

/// Convert a decimal amount to a base-unit integer string.
///
/// The conversion is strict: an amount with more fractional digits than
/// `decimals` allows is a [`ConversionError::NonIntegerResult`], never
/// silently rounded.
///
/// # Errors
///
/// - [`ConversionError::InvalidInput`] if `amount` does not parse as a number
/// - [`ConversionError::NonIntegerResult`] if `amount * 10^decimals` is not
///   an exact integer
pub fn to_wei(amount: &str, decimals: u32) -> Result<String, ConversionError> {
    let parsed = parse_decimal("to_wei", amount)?;
    let scaled = &parsed * pow10(i64::from(decimals));
    if !scaled.is_integer() {
        return Err(ConversionError::non_integer_result(
            "to_wei",
            scaled.normalized().to_string(),
        ));
    }
    let base_units = scaled.with_scale(0).to_string();
    trace!(amount, decimals, %base_units, "scaled amount to base units");
    Ok(base_units)
}

/// Convert a base-unit string back to a decimal amount, rounded half-up to
/// `display_dp` fractional digits.
///
/// This direction is intentionally lossy for display. Callers needing exact
/// values should pass a `display_dp` at least as large as `decimals`.
///
/// # Errors
///
/// [`ConversionError::InvalidInput`] if `base_units` does not parse as a
/// number.
pub fn from_wei(
    base_units: &str,
    decimals: u32,
    display_dp: i64,
) -> Result<BigDecimal, ConversionError> {
    let parsed = parse_decimal("from_wei", base_units)?;
    let value = &parsed * pow10(-i64::from(decimals));
    Ok(value.with_scale_round(display_dp, RoundingMode::HalfUp))
}
