//! OHLCV resampling library for candles and tick data.
//!
//! This is a facade crate that re-exports functionality from the candlex
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use candlex_lib::prelude::*;
//!
//! let ticks = vec![
//!     Tick::new(0, 10.0, 1.0),
//!     Tick::new(500, 12.0, 2.0),
//!     Tick::new(65_000, 9.0, 1.0),
//! ];
//!
//! let candles = resample_ticks_by_time(&ticks, &TimeBucketConfig::default());
//! assert_eq!(candles.len(), 2);
//! assert_eq!(candles[0].time, 0);
//! assert_eq!(candles[0].volume, 3.0);
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/candlex/candlex/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use candlex_types::*;

// Re-export the resampling engine
#[cfg(feature = "resample")]
pub use candlex_resample::{
    DEFAULT_TICK_COUNT, TimeBucketConfig, aggregate_group, gap_candles, resample_rows,
    resample_series, resample_ticks_by_count, resample_ticks_by_time,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use candlex_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, read_candles,
    read_ticks,
};

/// Prelude module for convenient imports.
///
/// ```
/// use candlex_lib::prelude::*;
/// ```
pub mod prelude {
    pub use candlex_types::{
        Candle, CandleRow, CandleSeries, ResampleError, Result, Tick, Timeframe,
    };

    #[cfg(feature = "resample")]
    pub use candlex_resample::{
        DEFAULT_TICK_COUNT, TimeBucketConfig, resample_series, resample_ticks_by_count,
        resample_ticks_by_time,
    };

    #[cfg(feature = "format")]
    pub use candlex_format::{
        CsvFormatter, Formatter, JsonFormatter, OutputFormat, read_candles, read_ticks,
    };
}
