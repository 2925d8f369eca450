//! Arbitrary-precision conversions for token-economics quantities.
//!
//! This crate converts between human-readable decimal amounts and the
//! integer encodings used on-chain, without ever rounding through native
//! floating point:
//!
//! - [`to_wei`] / [`from_wei`] — base-unit ("wei") scaling by a token's
//!   decimals
//! - [`price_to_sqrt_price_x96`] / [`sqrt_price_x96_to_price`] — the Q64.96
//!   square-root price encoding used by concentrated-liquidity pools
//! - [`tick_to_price`] / [`price_to_tick`] — the discretized `1.0001^tick`
//!   price grid
//! - [`format_native`] / [`format_usd`] — significant-digit display strings
//!
//! Every function is synchronous and pure; the only shared state is a set of
//! lazily derived constants, so calls may run concurrently from any number
//! of threads with no coordination.
//!
//! # Example
//!
//! ```rust
//! use web3_precision::{price_to_tick, tick_to_price, to_wei};
//!
//! // 2000 USDC (6 decimals) per ETH (18 decimals)
//! let tick = price_to_tick("2000", 18, 6)?;
//! let price = tick_to_price(tick, 18, 6)?;
//!
//! let wei = to_wei("0.25", 18)?;
//! assert_eq!(wei, "250000000000000000");
//! # Ok::<(), web3_precision::ConversionError>(())
//! ```

mod config;
mod errors;
mod format;
mod math;
mod numeric;
mod sqrt_price;
mod tick;
mod wei;

pub use bigdecimal::BigDecimal;

pub use config::constants::{
    DEFAULT_DECIMALS, DEFAULT_DISPLAY_DP, MAX_TICK, MIN_TICK, Q192, Q96, TICK_BASE,
};
pub use config::PrecisionConfig;
pub use errors::ConversionError;
pub use format::*;
pub use sqrt_price::*;
pub use tick::*;
pub use wei::*;
