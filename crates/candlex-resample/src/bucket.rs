//! Bucket key math and numeric guards shared by the resamplers.

/// Returns the opening timestamp of the bucket containing `time_ms`.
///
/// Keys align to `floor(time / width) * width`, so negative timestamps land
/// in the bucket that opens at or before them.
pub(crate) const fn bucket_key(time_ms: i64, width_ms: i64) -> i64 {
    time_ms - time_ms.rem_euclid(width_ms)
}

/// Maps NaN and infinities to zero, the residue of lenient decoding.
pub(crate) const fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_key_alignment() {
        assert_eq!(bucket_key(0, 60_000), 0);
        assert_eq!(bucket_key(59_999, 60_000), 0);
        assert_eq!(bucket_key(60_000, 60_000), 60_000);
        assert_eq!(bucket_key(65_000, 60_000), 60_000);
        assert_eq!(bucket_key(125_000, 60_000), 120_000);
    }

    #[test]
    fn test_bucket_key_negative_floors() {
        assert_eq!(bucket_key(-1, 60_000), -60_000);
        assert_eq!(bucket_key(-60_000, 60_000), -60_000);
    }

    #[test]
    fn test_finite_or_zero() {
        assert_eq!(finite_or_zero(1.5), 1.5);
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(f64::NEG_INFINITY), 0.0);
    }
}
