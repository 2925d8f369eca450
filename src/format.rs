//! Best-effort display formatting to a fixed number of significant digits.
//!
//! Unlike the conversion functions these helpers never fail: the literal
//! strings `NaN`, `Infinity`, and `-Infinity` are echoed back, and any other
//! unparseable input degrades to the sentinel `"Error"`. Significant digits
//! are counted from the first non-zero digit, independent of the decimal
//! point, and trailing zeros pad the output up to the digit budget exactly
//! like `toPrecision` in the EVM tooling these strings are shown next to.

use std::num::NonZeroU64;

use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::config::PrecisionConfig;

/// Format a native-token amount to 4 significant digits.
///
/// ```rust
/// use web3_precision::format_native;
///
/// assert_eq!(format_native("1.23456789"), "1.235");
/// assert_eq!(format_native("0"), "0.000");
/// assert_eq!(format_native("NaN"), "NaN");
/// ```
pub fn format_native(value: &str) -> String {
    format_significant(value, 4)
}

/// Format a USD amount to 8 significant digits.
///
/// ```rust
/// use web3_precision::format_usd;
///
/// assert_eq!(format_usd("1.23456789012"), "1.2345679");
/// ```
pub fn format_usd(value: &str) -> String {
    format_significant(value, 8)
}

fn format_significant(value: &str, significant_digits: u64) -> String {
    let trimmed = value.trim();
    match trimmed {
        "NaN" => return "NaN".to_string(),
        "Infinity" | "+Infinity" => return "Infinity".to_string(),
        "-Infinity" => return "-Infinity".to_string(),
        _ => {}
    }
    let parsed: BigDecimal = match trimmed.parse() {
        Ok(v) => v,
        Err(_) => return "Error".to_string(),
    };
    let digits = match NonZeroU64::new(significant_digits) {
        Some(d) => d,
        None => return "Error".to_string(),
    };
    if parsed.is_zero() {
        return zero_body(significant_digits);
    }

    let config = PrecisionConfig::default();
    let rounded = parsed
        .with_precision_round(digits, config.rounding())
        .normalized();
    let negative = rounded < BigDecimal::zero();
    let (mantissa, scale) = rounded.abs().into_bigint_and_exponent();
    let mut digit_chars = mantissa.to_string();
    // exponent of the first significant digit
    let first_exponent = digit_chars.len() as i64 - 1 - scale;
    while (digit_chars.len() as u64) < significant_digits {
        digit_chars.push('0');
    }

    let body = if first_exponent > config.exp_threshold()
        || first_exponent < -config.exp_threshold()
    {
        scientific(&digit_chars, first_exponent)
    } else if first_exponent >= significant_digits as i64 - 1 {
        // wider than the digit budget: pad out to an integer, no point
        let padding = (first_exponent + 1) as usize - significant_digits as usize;
        digit_chars.extend(std::iter::repeat('0').take(padding));
        digit_chars
    } else if first_exponent >= 0 {
        let split = (first_exponent + 1) as usize;
        format!("{}.{}", &digit_chars[..split], &digit_chars[split..])
    } else {
        let leading_zeros = (-first_exponent - 1) as usize;
        format!("0.{}{}", "0".repeat(leading_zeros), digit_chars)
    };

    if negative {
        format!("-{body}")
    } else {
        body
    }
}

fn zero_body(significant_digits: u64) -> String {
    if significant_digits <= 1 {
        "0".to_string()
    } else {
        format!("0.{}", "0".repeat(significant_digits as usize - 1))
    }
}

fn scientific(digit_chars: &str, exponent: i64) -> String {
    let (head, tail) = digit_chars.split_at(1);
    let mantissa = if tail.is_empty() {
        head.to_string()
    } else {
        format!("{head}.{tail}")
    };
    if exponent < 0 {
        format!("{mantissa}e{exponent}")
    } else {
        format!("{mantissa}e+{exponent}")
    }
}
