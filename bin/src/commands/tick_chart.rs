//! Tick-chart command implementation.

use anyhow::{Context, Result};
use candlex_lib::prelude::*;
use std::path::Path;

use crate::display::{self, Format};

/// Aggregates a tick file into fixed-count candles.
pub(crate) fn aggregate(
    input: &Path,
    count: usize,
    output: Option<&Path>,
    format: Format,
    quiet: bool,
) -> Result<()> {
    let ticks = read_ticks(input)
        .with_context(|| format!("Failed to read ticks from {}", input.display()))?;

    let candles = resample_ticks_by_count(&ticks, count)?;
    let count_out = candles.len();

    display::write_candles(candles, output, format)?;

    if !quiet {
        eprintln!(
            "Aggregated {} ticks into {count_out} candles of {count} ticks each, wrote {format} to {}",
            ticks.len(),
            display::destination(output)
        );
    }
    Ok(())
}
