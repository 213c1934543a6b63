//! Synthetic candles for buckets with no trading activity.

use candlex_types::Candle;

/// Synthesizes flat candles for the silent buckets strictly between two
/// real candles.
///
/// One candle is emitted per missing bucket, carrying the prior close as
/// all four prices and zero volume. Adjacent or overlapping candles yield
/// an empty result.
#[must_use]
pub fn gap_candles(last: &Candle, next: &Candle, width_ms: i64) -> Vec<Candle> {
    let missing = (next.time - last.time - width_ms) / width_ms;
    if missing <= 0 {
        return Vec::new();
    }

    (1..=missing)
        .map(|i| Candle::flat(last.time + i * width_ms, last.close))
        .collect()
}
