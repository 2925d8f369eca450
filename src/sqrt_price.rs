//! Square-root fixed-point price encoding (sqrtPriceX96).
//!
//! Concentrated-liquidity pools store the square root of the base-unit price
//! ratio as an integer with 96 fractional binary bits. Encoding truncates
//! (rounds down), matching the protocol convention that the stored price
//! never overstates value; that floor is the only lossy step in the
//! encode/decode pair.
//!
//! A price is always token1 amount divided by token0 amount in human units,
//! so the forward conversion scales by `10^(decimals1 - decimals0)` and the
//! reverse conversion by `10^(decimals0 - decimals1)`. The asymmetry is
//! deliberate and must match the ordering used when the price was expressed.

use bigdecimal::{BigDecimal, RoundingMode};
use tracing::debug;

use crate::config::constants::{FIVE_POW_192, Q96};
use crate::errors::ConversionError;
use crate::math::pow10;
use crate::numeric::parse_positive_decimal;

/// Encode a human-unit price as a sqrtPriceX96 integer string.
///
/// Computes `floor(sqrt(price * 10^(decimals1 - decimals0)) * 2^96)` in
/// arbitrary-precision decimal arithmetic.
///
/// # Errors
///
/// [`ConversionError::InvalidInput`] if `price` does not parse as a number
/// or is not strictly positive.
///
/// # Examples
///
/// ```rust
/// use web3_precision::price_to_sqrt_price_x96;
///
/// // A price of exactly 1 with equal decimals encodes as 2^96
/// let encoded = price_to_sqrt_price_x96("1", 18, 18)?;
/// assert_eq!(encoded, "79228162514264337593543950336");
/// # Ok::<(), web3_precision::ConversionError>(())
/// ```
pub fn price_to_sqrt_price_x96(
    price: &str,
    decimals0: u32,
    decimals1: u32,
) -> Result<String, ConversionError> {
    let parsed = parse_positive_decimal("price_to_sqrt_price_x96", price)?;
    let adjusted = &parsed * pow10(i64::from(decimals1) - i64::from(decimals0));
    let sqrt_price = adjusted
        .sqrt()
        .ok_or_else(|| ConversionError::invalid_input("price_to_sqrt_price_x96", price))?;
    let encoded = (&sqrt_price * &*Q96).with_scale_round(0, RoundingMode::Floor);
    debug!(price, decimals0, decimals1, encoded = %encoded, "encoded price as sqrtPriceX96");
    Ok(encoded.to_string())
}

/// Decode a sqrtPriceX96 integer string back to a human-unit price.
///
/// The division by `2^192` is carried out exactly: multiplying by `5^192`
/// and shifting the decimal point 192 places is the same operation, so the
/// returned price carries full precision with no forced rounding.
///
/// # Errors
///
/// [`ConversionError::InvalidInput`] if the input does not parse as a number
/// or is not strictly positive.
pub fn sqrt_price_x96_to_price(
    sqrt_price_x96: &str,
    decimals0: u32,
    decimals1: u32,
) -> Result<BigDecimal, ConversionError> {
    let parsed = parse_positive_decimal("sqrt_price_x96_to_price", sqrt_price_x96)?;
    let price = parsed.square() * &*FIVE_POW_192 * pow10(-192);
    let adjusted = price * pow10(i64::from(decimals0) - i64::from(decimals1));
    Ok(adjusted.normalized())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn unit_price_encodes_as_q96() {
        assert_eq!(
            price_to_sqrt_price_x96("1", 18, 18).unwrap(),
            "79228162514264337593543950336"
        );
    }

    #[test]
    fn price_two_encodes_as_floor_of_sqrt2_x96() {
        assert_eq!(
            price_to_sqrt_price_x96("2", 18, 18).unwrap(),
            "112045541949572279837463876454"
        );
    }

    #[test]
    fn usdc_per_eth_price_encoding() {
        // 2000 USDC (6 decimals) per ETH (18 decimals)
        assert_eq!(
            price_to_sqrt_price_x96("2000", 18, 6).unwrap(),
            "3543191142285914205922034"
        );
    }

    #[test]
    fn differing_decimals_produce_different_encodings() {
        let equal = price_to_sqrt_price_x96("1", 18, 18).unwrap();
        let skewed = price_to_sqrt_price_x96("1", 6, 18).unwrap();
        assert_ne!(equal, skewed);
    }

    #[test]
    fn encode_rejects_non_positive_and_invalid_prices() {
        for input in ["0", "-1", "invalid", "NaN"] {
            let err = price_to_sqrt_price_x96(input, 18, 18).unwrap_err();
            assert!(matches!(err, ConversionError::InvalidInput { .. }), "{input}");
        }
    }

    #[test]
    fn decode_rejects_non_positive_and_invalid_input() {
        for input in ["0", "-5", "garbage"] {
            let err = sqrt_price_x96_to_price(input, 18, 18).unwrap_err();
            assert!(matches!(err, ConversionError::InvalidInput { .. }), "{input}");
        }
    }

    #[test]
    fn q96_decodes_to_unit_price() {
        let price = sqrt_price_x96_to_price("79228162514264337593543950336", 18, 18).unwrap();
        assert_eq!(price, BigDecimal::from(1));
    }

    #[test]
    fn round_trip_error_is_bounded_by_the_floor_step() {
        let original = BigDecimal::from(2);
        let encoded = price_to_sqrt_price_x96("2", 18, 18).unwrap();
        let decoded = sqrt_price_x96_to_price(&encoded, 18, 18).unwrap();
        let error = (&decoded - &original).abs();
        assert!(error < BigDecimal::from_str("1e-10").unwrap(), "error {error}");
        // floor truncation can only understate the price
        assert!(decoded <= original);
    }

    #[test]
    fn directional_round_trip_with_mixed_decimals() {
        let encoded = price_to_sqrt_price_x96("2000", 18, 6).unwrap();
        let decoded = sqrt_price_x96_to_price(&encoded, 18, 6).unwrap();
        let error = (&decoded - BigDecimal::from(2000)).abs();
        assert!(error < BigDecimal::from_str("1e-9").unwrap(), "error {error}");
    }
}
