//! CLI command implementations.

pub(crate) mod info;
pub(crate) mod ohlcv;
pub(crate) mod tick_chart;
pub(crate) mod ticks;
