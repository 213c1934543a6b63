//! Core types for the candlex OHLCV resampling toolkit.
//!
//! This crate provides the fundamental data structures used throughout
//! candlex:
//!
//! - [`Candle`] - An OHLCV bar keyed by its opening timestamp
//! - [`CandleRow`] - The positional `[time, open, high, low, close, volume]` form
//! - [`CandleSeries`] - A candle sequence tagged with its representation
//! - [`Tick`] - A single trade with timestamp, price, and quantity
//! - [`Timeframe`] - Bucket width in seconds

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/candlex/candlex/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod candle;
mod coerce;
mod error;
mod series;
mod tick;
mod timeframe;

pub use candle::{Candle, CandleRow};
pub use error::{ResampleError, Result};
pub use series::CandleSeries;
pub use tick::Tick;
pub use timeframe::{Timeframe, TimeframeParseError};
