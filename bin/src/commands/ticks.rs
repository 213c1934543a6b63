//! Ticks command implementation.

use anyhow::{Context, Result};
use candlex_lib::prelude::*;
use std::path::Path;

use crate::display::{self, Format};

/// Aggregates a tick file into time-bucketed candles.
pub(crate) fn aggregate(
    input: &Path,
    timeframe: Timeframe,
    drop_latest: bool,
    fill_gaps: bool,
    output: Option<&Path>,
    format: Format,
    quiet: bool,
) -> Result<()> {
    let ticks = read_ticks(input)
        .with_context(|| format!("Failed to read ticks from {}", input.display()))?;

    let config = TimeBucketConfig {
        timeframe,
        include_latest: !drop_latest,
        fill_gaps,
    };
    let candles = resample_ticks_by_time(&ticks, &config);
    let count_out = candles.len();

    display::write_candles(candles, output, format)?;

    if !quiet {
        eprintln!(
            "Aggregated {} ticks into {count_out} candles ({timeframe}), wrote {format} to {}",
            ticks.len(),
            display::destination(output)
        );
    }
    Ok(())
}
