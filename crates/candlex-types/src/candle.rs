//! OHLCV candle representations.

use serde::{Deserialize, Serialize};

use crate::coerce;

/// An OHLCV bar in record (keyed) form.
///
/// `time` is the bucket's opening timestamp in milliseconds, aligned to the
/// bucket width. For a synthesized gap candle all four prices are equal and
/// the volume is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Bucket opening timestamp in milliseconds.
    #[serde(default, deserialize_with = "coerce::lenient_i64")]
    pub time: i64,
    /// Opening price (first trade in the bucket).
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub open: f64,
    /// Highest price during the bucket.
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub high: f64,
    /// Lowest price during the bucket.
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub low: f64,
    /// Closing price (last trade in the bucket).
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub close: f64,
    /// Total traded volume.
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub volume: f64,
}

impl Candle {
    /// Creates a new candle.
    #[must_use]
    pub const fn new(time: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Creates a flat zero-volume candle, as inserted for silent buckets.
    #[must_use]
    pub const fn flat(time: i64, price: f64) -> Self {
        Self::new(time, price, price, price, price, 0.0)
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the body size (|close - open|).
    #[must_use]
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Returns true if this is a bullish (green) candle.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Returns true if this is a bearish (red) candle.
    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}

/// An OHLCV bar in row (positional) form.
///
/// The field order is a stable contract: index 0..=5 holds
/// `time, open, high, low, close, volume`. The timestamp is carried as an
/// `f64`, which is exact for millisecond epochs well past any market data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandleRow(pub [f64; 6]);

impl CandleRow {
    /// Index of the opening timestamp.
    pub const TIME: usize = 0;
    /// Index of the opening price.
    pub const OPEN: usize = 1;
    /// Index of the high price.
    pub const HIGH: usize = 2;
    /// Index of the low price.
    pub const LOW: usize = 3;
    /// Index of the closing price.
    pub const CLOSE: usize = 4;
    /// Index of the volume.
    pub const VOLUME: usize = 5;

    /// Bucket opening timestamp in milliseconds.
    #[must_use]
    pub fn time(&self) -> i64 {
        self.0[Self::TIME] as i64
    }

    /// Opening price.
    #[must_use]
    pub fn open(&self) -> f64 {
        self.0[Self::OPEN]
    }

    /// Highest price.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.0[Self::HIGH]
    }

    /// Lowest price.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.0[Self::LOW]
    }

    /// Closing price.
    #[must_use]
    pub fn close(&self) -> f64 {
        self.0[Self::CLOSE]
    }

    /// Total traded volume.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.0[Self::VOLUME]
    }
}

impl From<Candle> for CandleRow {
    fn from(candle: Candle) -> Self {
        Self([
            candle.time as f64,
            candle.open,
            candle.high,
            candle.low,
            candle.close,
            candle.volume,
        ])
    }
}

impl From<CandleRow> for Candle {
    fn from(row: CandleRow) -> Self {
        Self::new(
            row.time(),
            row.open(),
            row.high(),
            row.low(),
            row.close(),
            row.volume(),
        )
    }
}
