//! Trade tick representation.

use serde::{Deserialize, Serialize};

use crate::coerce;

/// A single trade event.
///
/// Ticks are not required to be sorted by time or unique; the resamplers
/// handle ordering themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Trade timestamp in milliseconds.
    #[serde(default, deserialize_with = "coerce::lenient_i64")]
    pub time: i64,
    /// Trade price.
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub price: f64,
    /// Traded quantity.
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub quantity: f64,
}

impl Tick {
    /// Creates a new tick.
    #[must_use]
    pub const fn new(time: i64, price: f64, quantity: f64) -> Self {
        Self {
            time,
            price,
            quantity,
        }
    }
}
