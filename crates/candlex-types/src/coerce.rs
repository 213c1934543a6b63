//! Lenient numeric deserialization.
//!
//! Candle and tick files in the wild carry numbers as JSON numbers, quoted
//! strings, or nulls. Fields decoded through these helpers coerce anything
//! non-numeric to zero instead of failing the whole document.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum MaybeNumber {
    Num(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl MaybeNumber {
    fn to_f64(&self) -> f64 {
        let value = match self {
            Self::Num(n) => *n,
            Self::Text(s) => s.trim().parse().unwrap_or(0.0),
            Self::Other(_) => 0.0,
        };
        if value.is_finite() { value } else { 0.0 }
    }
}

/// Deserializes an `f64`, coercing strings, nulls, and non-finite values to zero.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(MaybeNumber::deserialize(deserializer)?.to_f64())
}

/// Deserializes an `i64` millisecond timestamp with the same leniency as [`lenient_f64`].
pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(MaybeNumber::deserialize(deserializer)?.to_f64() as i64)
}

#[cfg(test)]
mod tests {
    use crate::Tick;

    #[test]
    fn test_string_numbers_coerce() {
        let tick: Tick = serde_json::from_str(r#"{"time":"1000","price":"1.5","quantity":"2"}"#)
            .unwrap();
        assert_eq!(tick.time, 1000);
        assert!((tick.price - 1.5).abs() < 1e-10);
        assert!((tick.quantity - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_junk_coerces_to_zero() {
        let tick: Tick =
            serde_json::from_str(r#"{"time":1000,"price":"n/a","quantity":null}"#).unwrap();
        assert_eq!(tick.time, 1000);
        assert_eq!(tick.price, 0.0);
        assert_eq!(tick.quantity, 0.0);
    }

    #[test]
    fn test_absent_field_coerces_to_zero() {
        let tick: Tick = serde_json::from_str(r#"{"time":1000,"price":9.5}"#).unwrap();
        assert_eq!(tick.quantity, 0.0);
    }
}
