//! Ohlcv command implementation.

use anyhow::{Context, Result};
use candlex_lib::prelude::*;
use std::path::Path;

use crate::display::{self, Format};

/// Resamples a candle file from `base` to the coarser `new` timeframe.
pub(crate) fn resample(
    input: &Path,
    base: Timeframe,
    new: Timeframe,
    output: Option<&Path>,
    format: Format,
    quiet: bool,
) -> Result<()> {
    let series = read_candles(input)
        .with_context(|| format!("Failed to read candles from {}", input.display()))?;
    let count_in = series.len();

    let resampled = resample_series(&series, base, new)?;
    let count_out = resampled.len();

    display::write_series(&resampled, output, format)?;

    if !quiet {
        eprintln!(
            "Resampled {count_in} candles ({base}) into {count_out} candles ({new}), wrote {} to {}",
            format,
            display::destination(output)
        );
    }
    Ok(())
}
