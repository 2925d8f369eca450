//! Error types for the web3-precision library.
//!
//! The conversion functions (`to_wei`, `from_wei`, the sqrt-price pair, and
//! the tick pair) all fail with [`ConversionError`], which carries the name
//! of the failing function and a typed cause so callers can match on the
//! reason without parsing strings.
//!
//! The formatting functions never fail: malformed input degrades to a
//! sentinel string (`"NaN"`, `"Infinity"`, `"-Infinity"`, or `"Error"`)
//! because they are best-effort display helpers.
//!
//! # Example
//!
//! ```rust
//! use web3_precision::{to_wei, ConversionError};
//!
//! match to_wei("not a number", 18) {
//!     Ok(wei) => println!("wei: {wei}"),
//!     Err(ConversionError::InvalidInput { function, input }) => {
//!         eprintln!("{function} rejected `{input}`");
//!     }
//!     Err(e) => eprintln!("other error: {e}"),
//! }
//! ```

mod conversion;

pub use conversion::ConversionError;
