//! Error type for conversion functions.
//!
//! Every failure reflects a caller contract violation (malformed numeric
//! string, out-of-domain value), never a transient condition, so there is no
//! retry path: errors always propagate.

use crate::config::constants::{MAX_TICK, MIN_TICK};

/// Errors raised by the conversion functions.
///
/// Each variant records the public function that failed alongside the typed
/// cause, mirroring the error text a caller would want in a log line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The input could not be parsed as a finite number, or was outside the
    /// function's numeric domain (for prices: zero or negative).
    #[error("{function} failed: invalid numeric input `{input}`")]
    InvalidInput {
        /// Name of the conversion function that rejected the input
        function: &'static str,
        /// The offending input, verbatim
        input: String,
    },

    /// Scaling produced a fractional number of base units.
    ///
    /// `to_wei` is strict: an amount with more fractional digits than the
    /// token's decimals is an error, never silently rounded.
    #[error("{function} failed: `{value}` is not a whole number of base units")]
    NonIntegerResult {
        /// Name of the conversion function that failed
        function: &'static str,
        /// The scaled value that still carried a fractional part
        value: String,
    },

    /// A tick was supplied or computed outside the protocol's domain.
    ///
    /// The bound is a protocol-level invariant; out-of-range ticks are
    /// rejected, never clamped.
    #[error("{function} failed: tick {tick} outside [{min}, {max}]", min = MIN_TICK, max = MAX_TICK)]
    TickOutOfRange {
        /// Name of the conversion function that failed
        function: &'static str,
        /// The offending tick
        tick: i64,
    },
}

impl ConversionError {
    /// Create an `InvalidInput` error for a specific function.
    pub fn invalid_input(function: &'static str, input: impl Into<String>) -> Self {
        ConversionError::InvalidInput {
            function,
            input: input.into(),
        }
    }

    /// Create a `NonIntegerResult` error for a specific function.
    pub fn non_integer_result(function: &'static str, value: impl Into<String>) -> Self {
        ConversionError::NonIntegerResult {
            function,
            value: value.into(),
        }
    }

    /// Create a `TickOutOfRange` error for a specific function.
    pub fn tick_out_of_range(function: &'static str, tick: i64) -> Self {
        ConversionError::TickOutOfRange { function, tick }
    }

    /// Name of the conversion function that produced this error.
    pub fn function(&self) -> &'static str {
        match self {
            ConversionError::InvalidInput { function, .. }
            | ConversionError::NonIntegerResult { function, .. }
            | ConversionError::TickOutOfRange { function, .. } => function,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_display_names_function_and_input() {
        let err = ConversionError::invalid_input("to_wei", "abc");
        assert_eq!(err.to_string(), "to_wei failed: invalid numeric input `abc`");
        assert_eq!(err.function(), "to_wei");
    }

    #[test]
    fn non_integer_result_display() {
        let err = ConversionError::non_integer_result("to_wei", "0.1");
        assert_eq!(
            err.to_string(),
            "to_wei failed: `0.1` is not a whole number of base units"
        );
    }

    #[test]
    fn tick_out_of_range_display_includes_bounds() {
        let err = ConversionError::tick_out_of_range("tick_to_price", 887273);
        assert_eq!(
            err.to_string(),
            "tick_to_price failed: tick 887273 outside [-887272, 887272]"
        );
    }

    #[test]
    fn errors_compare_by_value() {
        assert_eq!(
            ConversionError::invalid_input("from_wei", "x"),
            ConversionError::invalid_input("from_wei", "x")
        );
        assert_ne!(
            ConversionError::invalid_input("from_wei", "x"),
            ConversionError::invalid_input("to_wei", "x")
        );
    }
}
