//! Info command implementation.
//!
//! This module prints a summary of a candle file: how many candles it
//! holds, their representation, the covered time range, and a rough
//! breakdown of the price action.

use anyhow::{Context, Result};
use candlex_lib::prelude::*;
use chrono::DateTime;
use std::path::Path;

/// Shows a summary of a candle file.
pub(crate) fn show_info(input: &Path) -> Result<()> {
    let series = read_candles(input)
        .with_context(|| format!("Failed to read candles from {}", input.display()))?;

    let form = match &series {
        CandleSeries::Records(_) => "records (keyed objects)",
        CandleSeries::Rows(_) => "rows (positional arrays)",
    };
    let candles = series.to_records();

    println!("File:       {}", input.display());
    println!("Candles:    {}", candles.len());
    println!("Form:       {form}");

    if candles.is_empty() {
        return Ok(());
    }

    let first = candles.iter().map(|c| c.time).min().unwrap_or(0);
    let last = candles.iter().map(|c| c.time).max().unwrap_or(0);
    println!("From:       {}", format_millis(first));
    println!("To:         {}", format_millis(last));

    let bullish = candles.iter().filter(|c| c.is_bullish()).count();
    let bearish = candles.iter().filter(|c| c.is_bearish()).count();
    let flat = candles.len() - bullish - bearish;
    let volume: f64 = candles.iter().map(|c| c.volume).sum();
    let widest = candles
        .iter()
        .map(Candle::range)
        .fold(0.0_f64, f64::max);

    println!("Bullish:    {bullish}");
    println!("Bearish:    {bearish}");
    println!("Flat:       {flat}");
    println!("Volume:     {volume}");
    println!("Max range:  {widest}");

    Ok(())
}

/// Renders a millisecond timestamp as UTC, falling back to the raw number
/// for values outside chrono's range.
fn format_millis(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis).map_or_else(
        || format!("{millis} ms"),
        |dt| format!("{} ({millis} ms)", dt.format("%Y-%m-%d %H:%M:%S%.3f UTC")),
    )
}
