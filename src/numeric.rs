//! Shared numeric parsing at the conversion boundary.
//!
//! `BigDecimal` has no NaN or infinity: the strings `"NaN"` and `"Infinity"`
//! simply fail to parse, which is exactly the `InvalidInput` contract the
//! conversion functions promise.

use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::errors::ConversionError;

/// Parse `input` as an arbitrary-precision decimal, labeling failures with
/// the public function that received the input.
pub(crate) fn parse_decimal(
    function: &'static str,
    input: &str,
) -> Result<BigDecimal, ConversionError> {
    input
        .trim()
        .parse::<BigDecimal>()
        .map_err(|_| ConversionError::invalid_input(function, input))
}

/// Parse a value that must be strictly positive (prices, sqrt prices).
pub(crate) fn parse_positive_decimal(
    function: &'static str,
    input: &str,
) -> Result<BigDecimal, ConversionError> {
    let value = parse_decimal(function, input)?;
    if value <= BigDecimal::zero() {
        return Err(ConversionError::invalid_input(function, input));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn parses_plain_and_scientific_notation() {
        assert_eq!(
            parse_decimal("test", "1.5").unwrap(),
            BigDecimal::from_str("1.5").unwrap()
        );
        assert_eq!(
            parse_decimal("test", "2e-9").unwrap(),
            BigDecimal::from_str("0.000000002").unwrap()
        );
        assert_eq!(
            parse_decimal("test", " -42 ").unwrap(),
            BigDecimal::from(-42)
        );
    }

    #[test]
    fn rejects_nan_and_infinity() {
        for input in ["NaN", "Infinity", "-Infinity", "not a number", ""] {
            let err = parse_decimal("test", input).unwrap_err();
            assert!(matches!(err, ConversionError::InvalidInput { .. }), "{input}");
        }
    }

    #[test]
    fn positive_parse_rejects_zero_and_negative() {
        assert!(parse_positive_decimal("test", "1").is_ok());
        assert!(parse_positive_decimal("test", "0").is_err());
        assert!(parse_positive_decimal("test", "-0.001").is_err());
    }
}
