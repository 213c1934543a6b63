//! Re-bucketing an existing candle series to a coarser timeframe.

use candlex_types::{Candle, CandleRow, CandleSeries, ResampleError, Result, Timeframe};

use crate::bucket::{bucket_key, finite_or_zero};

/// Accumulator for the bucket currently being folded.
#[derive(Debug)]
struct BucketAcc {
    time_open: i64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
    count: i64,
}

impl BucketAcc {
    /// Opens a bucket at `time_open` seeded with the first row's prices.
    const fn start(time_open: i64, row: &CandleRow) -> Self {
        Self {
            time_open,
            open: row.0[CandleRow::OPEN],
            high: row.0[CandleRow::HIGH],
            low: row.0[CandleRow::LOW],
            close: row.0[CandleRow::CLOSE],
            volume: 0.0,
            count: 0,
        }
    }

    /// Folds a row into the bucket. The close is always overwritten, so the
    /// last row folded wins.
    fn fold(&mut self, row: &CandleRow) {
        self.high = self.high.max(row.high());
        self.low = self.low.min(row.low());
        self.close = row.close();
        self.volume += row.volume();
        self.count += 1;
    }

    fn finish(&self) -> CandleRow {
        CandleRow([
            self.time_open as f64,
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
        ])
    }
}

fn coerced(row: &CandleRow) -> CandleRow {
    CandleRow(row.0.map(finite_or_zero))
}

/// Re-buckets row-form candles from `base` to the coarser `new` timeframe.
///
/// The input is left untouched; a coerced copy is sorted ascending by time
/// and folded in a single pass. A trailing bucket with fewer than `ratio`
/// source candles is still emitted, with two deliberate exceptions kept
/// from the observed behavior: it is dropped when no complete bucket ever
/// formed, and when its key equals the last emitted candle's time (which
/// can occur when one target bucket receives more than `ratio` source
/// candles).
///
/// Returns an empty result when the input holds fewer candles than `ratio`.
///
/// # Errors
///
/// Returns [`ResampleError::InvalidConfig`] unless `new` is an exact
/// multiple of `base` with a ratio of at least 2.
pub fn resample_rows(
    rows: &[CandleRow],
    base: Timeframe,
    new: Timeframe,
) -> Result<Vec<CandleRow>> {
    let base_ms = base.millis();
    let new_ms = new.millis();
    if new_ms % base_ms != 0 || new_ms / base_ms < 2 {
        return Err(ResampleError::InvalidConfig { base, new });
    }
    let ratio = new_ms / base_ms;

    let mut result = Vec::new();
    if (rows.len() as i64) < ratio {
        return Ok(result);
    }

    let mut sorted: Vec<CandleRow> = rows.iter().map(coerced).collect();
    sorted.sort_by(|a, b| a.0[CandleRow::TIME].total_cmp(&b.0[CandleRow::TIME]));

    let mut acc: Option<BucketAcc> = None;
    for row in &sorted {
        let key = bucket_key(row.time(), new_ms);

        let mut bucket = match acc.take() {
            Some(bucket) if bucket.time_open == key => bucket,
            Some(bucket) => {
                result.push(bucket.finish());
                BucketAcc::start(key, row)
            }
            None => BucketAcc::start(key, row),
        };

        bucket.fold(row);
        if bucket.count == ratio {
            result.push(bucket.finish());
        } else {
            acc = Some(bucket);
        }
    }

    if let Some(bucket) = acc {
        let emit = result
            .last()
            .is_some_and(|last| last.time() != bucket.time_open);
        if emit {
            result.push(bucket.finish());
        }
    }

    Ok(result)
}

/// Re-buckets a candle series from `base` to the coarser `new` timeframe,
/// preserving the input representation.
///
/// # Errors
///
/// Returns [`ResampleError::EmptyInput`] for an empty series and
/// [`ResampleError::InvalidConfig`] for an invalid timeframe pair.
pub fn resample_series(
    series: &CandleSeries,
    base: Timeframe,
    new: Timeframe,
) -> Result<CandleSeries> {
    if series.is_empty() {
        return Err(ResampleError::EmptyInput);
    }

    match series {
        CandleSeries::Rows(rows) => Ok(CandleSeries::Rows(resample_rows(rows, base, new)?)),
        CandleSeries::Records(candles) => {
            let rows: Vec<CandleRow> = candles.iter().copied().map(CandleRow::from).collect();
            let resampled = resample_rows(&rows, base, new)?;
            Ok(CandleSeries::Records(
                resampled.into_iter().map(Candle::from).collect(),
            ))
        }
    }
}
