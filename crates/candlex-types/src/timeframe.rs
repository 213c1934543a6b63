//! Bucket width (timeframe) definitions.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;
use std::str::FromStr;

/// Bucket width in whole seconds.
///
/// Interfaces speak seconds; bucket alignment happens on milliseconds via
/// [`Timeframe::millis`]. A zero width is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeframe(NonZeroU64);

impl Timeframe {
    /// 1-second buckets.
    pub const S1: Self = Self::of(1);
    /// 1-minute buckets.
    pub const M1: Self = Self::of(60);
    /// 5-minute buckets.
    pub const M5: Self = Self::of(300);
    /// 15-minute buckets.
    pub const M15: Self = Self::of(900);
    /// 30-minute buckets.
    pub const M30: Self = Self::of(1800);
    /// 1-hour buckets.
    pub const H1: Self = Self::of(3600);
    /// 4-hour buckets.
    pub const H4: Self = Self::of(14400);
    /// Daily buckets.
    pub const D1: Self = Self::of(86400);

    const fn of(secs: u64) -> Self {
        match NonZeroU64::new(secs) {
            Some(secs) => Self(secs),
            None => panic!("timeframe must be non-zero"),
        }
    }

    /// Creates a timeframe from a width in seconds, or `None` for zero.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Option<Self> {
        match NonZeroU64::new(secs) {
            Some(secs) => Some(Self(secs)),
            None => None,
        }
    }

    /// Returns the width in seconds.
    #[must_use]
    pub const fn secs(&self) -> u64 {
        self.0.get()
    }

    /// Returns the width in milliseconds.
    #[must_use]
    pub const fn millis(&self) -> i64 {
        (self.0.get() * 1000) as i64
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let secs = self.secs();
        if secs % 86400 == 0 {
            write!(f, "{}d", secs / 86400)
        } else if secs % 3600 == 0 {
            write!(f, "{}h", secs / 3600)
        } else if secs % 60 == 0 {
            write!(f, "{}m", secs / 60)
        } else {
            write!(f, "{secs}s")
        }
    }
}

impl FromStr for Timeframe {
    type Err = TimeframeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        let err = || TimeframeParseError(s.clone());

        // Bare number means seconds.
        if let Ok(secs) = s.parse::<u64>() {
            return Self::from_secs(secs).ok_or_else(err);
        }

        let Some((split, _)) = s.char_indices().last() else {
            return Err(err());
        };
        let (digits, unit) = s.split_at(split);
        let count: u64 = digits.parse().map_err(|_| err())?;
        let multiplier = match unit {
            "s" => 1,
            "m" => 60,
            "h" => 3600,
            "d" => 86400,
            _ => return Err(err()),
        };
        count
            .checked_mul(multiplier)
            .and_then(Self::from_secs)
            .ok_or_else(err)
    }
}

/// Error returned when parsing an invalid timeframe string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeframeParseError(String);

impl std::fmt::Display for TimeframeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid timeframe '{}', expected seconds or <n><s|m|h|d> (e.g. 60, 5m, 1h)",
            self.0
        )
    }
}

impl std::error::Error for TimeframeParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis() {
        assert_eq!(Timeframe::M1.millis(), 60_000);
        assert_eq!(Timeframe::H1.millis(), 3_600_000);
        assert_eq!(Timeframe::from_secs(90).unwrap().millis(), 90_000);
    }

    #[test]
    fn test_zero_rejected() {
        assert_eq!(Timeframe::from_secs(0), None);
        assert!("0".parse::<Timeframe>().is_err());
        assert!("0m".parse::<Timeframe>().is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!("60".parse::<Timeframe>().unwrap(), Timeframe::M1);
        assert_eq!("5m".parse::<Timeframe>().unwrap(), Timeframe::M5);
        assert_eq!("4H".parse::<Timeframe>().unwrap(), Timeframe::H4);
        assert_eq!("1d".parse::<Timeframe>().unwrap(), Timeframe::D1);
        assert_eq!(
            "90s".parse::<Timeframe>().unwrap(),
            Timeframe::from_secs(90).unwrap()
        );
        assert!("abc".parse::<Timeframe>().is_err());
        assert!("".parse::<Timeframe>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Timeframe::M5.to_string(), "5m");
        assert_eq!(Timeframe::H4.to_string(), "4h");
        assert_eq!(Timeframe::D1.to_string(), "1d");
        assert_eq!(Timeframe::from_secs(90).unwrap().to_string(), "90s");
    }
}
