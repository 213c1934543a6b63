//! Time-bucketed tick resampling.

use std::collections::HashMap;

use candlex_types::{Candle, Tick, Timeframe};

use crate::bucket::bucket_key;
use crate::gaps::gap_candles;
use crate::group::aggregate_group;

/// Configuration for [`resample_ticks_by_time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBucketConfig {
    /// Bucket width. Defaults to one minute.
    pub timeframe: Timeframe,
    /// Whether to keep the chronologically latest candle. The newest bucket
    /// is usually still open; set this to `false` to exclude it. Defaults
    /// to `true`.
    pub include_latest: bool,
    /// Whether to insert flat zero-volume candles for buckets with no
    /// trades. Defaults to `false`.
    pub fill_gaps: bool,
}

impl Default for TimeBucketConfig {
    fn default() -> Self {
        Self {
            timeframe: Timeframe::M1,
            include_latest: true,
            fill_gaps: false,
        }
    }
}

/// Folds ticks into fixed-width time buckets and returns the candles in
/// ascending time order.
///
/// Ticks may arrive in any order. Within a bucket, `open`/`close` follow
/// tick input order, not timestamp order. Gap candles, when requested, are
/// synthesized between each bucket and the one grouped before it, prior to
/// the final sort. Never errors; empty input yields empty output.
#[must_use]
pub fn resample_ticks_by_time(ticks: &[Tick], config: &TimeBucketConfig) -> Vec<Candle> {
    let width = config.timeframe.millis();

    // Group by bucket key, keeping first-occurrence order.
    let mut keys: Vec<i64> = Vec::new();
    let mut groups: HashMap<i64, Vec<Tick>> = HashMap::new();
    for tick in ticks {
        let key = bucket_key(tick.time, width);
        groups
            .entry(key)
            .or_insert_with(|| {
                keys.push(key);
                Vec::new()
            })
            .push(*tick);
    }

    let mut candles: Vec<Candle> = Vec::with_capacity(keys.len());
    for key in keys {
        let candle = aggregate_group(key, &groups[&key]);
        if config.fill_gaps {
            let gaps = candles
                .last()
                .map(|last| gap_candles(last, &candle, width))
                .unwrap_or_default();
            candles.extend(gaps);
        }
        candles.push(candle);
    }

    candles.sort_by_key(|candle| candle.time);

    if !config.include_latest {
        candles.pop();
    }
    candles
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn spec_ticks() -> Vec<Tick> {
        vec![
            Tick::new(0, 10.0, 1.0),
            Tick::new(500, 12.0, 2.0),
            Tick::new(65_000, 9.0, 1.0),
        ]
    }

    #[test]
    fn test_two_buckets_from_spec_ticks() {
        let candles = resample_ticks_by_time(&spec_ticks(), &TimeBucketConfig::default());

        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].time, 0);
        assert_abs_diff_eq!(candles[0].open, 10.0);
        assert_abs_diff_eq!(candles[0].high, 12.0);
        assert_abs_diff_eq!(candles[0].low, 10.0);
        assert_abs_diff_eq!(candles[0].close, 12.0);
        assert_abs_diff_eq!(candles[0].volume, 3.0);
        assert_eq!(candles[1].time, 60_000);
    }

    #[test]
    fn test_drop_latest_leaves_closed_buckets() {
        let config = TimeBucketConfig {
            include_latest: false,
            ..Default::default()
        };
        let candles = resample_ticks_by_time(&spec_ticks(), &config);

        assert_eq!(candles.len(), 1);
        assert_eq!(
            candles[0],
            Candle::new(0, 10.0, 12.0, 10.0, 12.0, 3.0)
        );
    }

    #[test]
    fn test_drop_latest_on_single_bucket_yields_empty() {
        let config = TimeBucketConfig {
            include_latest: false,
            ..Default::default()
        };
        let candles = resample_ticks_by_time(&[Tick::new(0, 10.0, 1.0)], &config);
        assert!(candles.is_empty());
    }

    #[test]
    fn test_output_ascending_regardless_of_input_order() {
        let ticks = vec![
            Tick::new(185_000, 8.0, 1.0),
            Tick::new(5_000, 10.0, 1.0),
            Tick::new(65_000, 9.0, 1.0),
        ];
        let candles = resample_ticks_by_time(&ticks, &TimeBucketConfig::default());
        let times: Vec<i64> = candles.iter().map(|c| c.time).collect();
        assert_eq!(times, vec![0, 60_000, 180_000]);
    }

    #[test]
    fn test_fill_gaps_closes_every_hole() {
        let ticks = vec![
            Tick::new(0, 10.0, 1.0),
            Tick::new(250_000, 14.0, 2.0), // bucket 240000, three silent buckets between
        ];
        let config = TimeBucketConfig {
            fill_gaps: true,
            ..Default::default()
        };
        let candles = resample_ticks_by_time(&ticks, &config);

        assert_eq!(candles.len(), 5);
        for pair in candles.windows(2) {
            assert_eq!(pair[1].time - pair[0].time, 60_000);
        }
        // Gap candles are flat at the prior close with no volume.
        for gap in &candles[1..4] {
            assert_eq!(*gap, Candle::flat(gap.time, 10.0));
        }
    }

    #[test]
    fn test_empty_input() {
        let candles = resample_ticks_by_time(&[], &TimeBucketConfig::default());
        assert!(candles.is_empty());
    }

    #[test]
    fn test_bucket_boundary_tick_opens_new_bucket() {
        let ticks = vec![Tick::new(59_999, 10.0, 1.0), Tick::new(60_000, 11.0, 1.0)];
        let candles = resample_ticks_by_time(&ticks, &TimeBucketConfig::default());
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].time, 0);
        assert_eq!(candles[1].time, 60_000);
    }
}
