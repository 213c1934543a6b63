//! Count-bucketed tick resampling ("tick charts").

use candlex_types::{Candle, ResampleError, Result, Tick};

use crate::group::aggregate_group;

/// Default number of ticks per candle.
pub const DEFAULT_TICK_COUNT: usize = 5;

/// Folds ticks into consecutive chunks of `tick_count` and returns one
/// candle per chunk, in chunk order.
///
/// Chunking follows call order, so ties go to arrival rather than
/// timestamp, and no time sort is applied. Each candle is stamped with the
/// time of its chunk's *last* tick. The final chunk may be shorter.
///
/// # Errors
///
/// Returns [`ResampleError::InvalidCount`] when `tick_count` is zero.
pub fn resample_ticks_by_count(ticks: &[Tick], tick_count: usize) -> Result<Vec<Candle>> {
    if tick_count < 1 {
        return Err(ResampleError::InvalidCount { count: tick_count });
    }

    Ok(ticks
        .chunks(tick_count)
        .map(|chunk| {
            let time = chunk.last().map_or(0, |tick| tick.time);
            aggregate_group(time, chunk)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn five_ticks() -> Vec<Tick> {
        vec![
            Tick::new(100, 10.0, 1.0),
            Tick::new(200, 12.0, 1.0),
            Tick::new(300, 11.0, 1.0),
            Tick::new(400, 13.0, 1.0),
            Tick::new(500, 9.0, 1.0),
        ]
    }

    #[test]
    fn test_five_ticks_in_pairs_make_three_candles() {
        let candles = resample_ticks_by_count(&five_ticks(), 2).unwrap();

        assert_eq!(candles.len(), 3);
        // Candle time is the last tick of each chunk.
        assert_eq!(candles[0].time, 200);
        assert_eq!(candles[1].time, 400);
        assert_eq!(candles[2].time, 500);
        // Final short chunk holds a single tick.
        assert_abs_diff_eq!(candles[2].open, 9.0);
        assert_abs_diff_eq!(candles[2].volume, 1.0);
    }

    #[test]
    fn test_chunk_aggregation() {
        let candles = resample_ticks_by_count(&five_ticks(), 5).unwrap();
        assert_eq!(candles.len(), 1);
        assert_abs_diff_eq!(candles[0].open, 10.0);
        assert_abs_diff_eq!(candles[0].high, 13.0);
        assert_abs_diff_eq!(candles[0].low, 9.0);
        assert_abs_diff_eq!(candles[0].close, 9.0);
        assert_abs_diff_eq!(candles[0].volume, 5.0);
    }

    #[test]
    fn test_zero_count_rejected() {
        let err = resample_ticks_by_count(&five_ticks(), 0).unwrap_err();
        assert_eq!(err, ResampleError::InvalidCount { count: 0 });
    }

    #[test]
    fn test_empty_input() {
        let candles = resample_ticks_by_count(&[], DEFAULT_TICK_COUNT).unwrap();
        assert!(candles.is_empty());
    }
}
