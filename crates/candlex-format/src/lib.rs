//! CSV and JSON readers/writers for candlex candle and tick data.
//!
//! This crate is the I/O shell around the resampling engine:
//!
//! - [`CsvFormatter`] - CSV output (configurable delimiter, optional header)
//! - [`JsonFormatter`] - JSON array or NDJSON output
//! - [`read_candles`] / [`read_ticks`] - lenient file readers dispatching
//!   on the file extension
//!
//! The engine itself never touches files; it consumes and produces the
//! in-memory sequences these functions decode and encode.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/candlex/candlex/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod reader;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
pub use reader::{read_candles, read_ticks};
