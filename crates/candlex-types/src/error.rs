//! Error types for candlex.

use thiserror::Error;

use crate::Timeframe;

/// Result type alias for candlex operations.
pub type Result<T> = std::result::Result<T, ResampleError>;

/// Errors raised by the resampling engine.
///
/// Anything not listed here degrades gracefully to zero-valued fields
/// instead of erroring; presentation is left to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResampleError {
    /// Candle resampling was called with zero candles.
    #[error("input OHLCV data has no candles")]
    EmptyInput,

    /// The target timeframe is not an integer multiple (>= 2) of the base.
    #[error("new timeframe {new} must be an integer multiple (>= 2) of base timeframe {base}")]
    InvalidConfig {
        /// The base (source) timeframe.
        base: Timeframe,
        /// The requested (target) timeframe.
        new: Timeframe,
    },

    /// The tick count for count-bucketed resampling is below one.
    #[error("tick count cannot be smaller than 1 (got {count})")]
    InvalidCount {
        /// The rejected tick count.
        count: usize,
    },
}
