//! Folding one group of ticks into a single candle.

use candlex_types::{Candle, Tick};

use crate::bucket::finite_or_zero;

/// Aggregates a group of ticks into one candle opening at `time_open`.
///
/// `open` and `close` follow input order, not time order; `high`/`low`/
/// `volume` are order-independent. An empty group degrades to a candle with
/// all fields zero rather than erroring.
#[must_use]
pub fn aggregate_group(time_open: i64, ticks: &[Tick]) -> Candle {
    let prices: Vec<f64> = ticks.iter().map(|t| finite_or_zero(t.price)).collect();
    let volume: f64 = ticks.iter().map(|t| finite_or_zero(t.quantity)).sum();

    Candle::new(
        time_open,
        prices.first().copied().unwrap_or(0.0),
        prices.iter().copied().reduce(f64::max).unwrap_or(0.0),
        prices.iter().copied().reduce(f64::min).unwrap_or(0.0),
        prices.last().copied().unwrap_or(0.0),
        volume,
    )
}
