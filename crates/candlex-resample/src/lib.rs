//! OHLCV and tick resampling engine for candlex.
//!
//! This crate provides the core aggregation algorithms:
//!
//! - [`resample_series`] / [`resample_rows`] - re-bucket a candle series to a coarser timeframe
//! - [`resample_ticks_by_time`] - fold ticks into fixed-width time buckets
//! - [`resample_ticks_by_count`] - fold ticks into fixed-size linear chunks
//! - [`aggregate_group`] - fold one group of ticks into a single candle
//! - [`gap_candles`] - synthesize flat candles for silent buckets
//!
//! Every operation is a pure, synchronous function: inputs are borrowed,
//! never mutated, and outputs are newly allocated.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/candlex/candlex/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bucket;
mod by_count;
mod by_time;
mod candles;
mod gaps;
mod group;

pub use by_count::{DEFAULT_TICK_COUNT, resample_ticks_by_count};
pub use by_time::{TimeBucketConfig, resample_ticks_by_time};
pub use candles::{resample_rows, resample_series};
pub use gaps::gap_candles;
pub use group::aggregate_group;
