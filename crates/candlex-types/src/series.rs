//! Candle sequences tagged with their representation.

use serde::{Deserialize, Serialize};

use crate::{Candle, CandleRow};

/// A candle sequence in either record or row form.
///
/// The representation is fixed once, at the decode boundary: a JSON array
/// of objects becomes [`CandleSeries::Records`], an array of 6-element
/// arrays becomes [`CandleSeries::Rows`]. Resampling preserves the variant,
/// so callers get their data back in the shape they supplied it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CandleSeries {
    /// Candles in record (keyed) form.
    Records(Vec<Candle>),
    /// Candles in row (positional) form.
    Rows(Vec<CandleRow>),
}

impl CandleSeries {
    /// Returns the number of candles in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Records(candles) => candles.len(),
            Self::Rows(rows) => rows.len(),
        }
    }

    /// Returns true if the series holds no candles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the candles as records, converting row form if needed.
    #[must_use]
    pub fn to_records(&self) -> Vec<Candle> {
        match self {
            Self::Records(candles) => candles.clone(),
            Self::Rows(rows) => rows.iter().copied().map(Candle::from).collect(),
        }
    }
}

impl From<Vec<Candle>> for CandleSeries {
    fn from(candles: Vec<Candle>) -> Self {
        Self::Records(candles)
    }
}

impl From<Vec<CandleRow>> for CandleSeries {
    fn from(rows: Vec<CandleRow>) -> Self {
        Self::Rows(rows)
    }
}
