//! Brightness scaling of luminance values.
//!
//! Luminance itself is computed in fixed point by [`dualpng_core::luma`].
//! This module adds the per-input brightness multiplier applied before the
//! value is written to the alpha channel.
//!
//! # Example
//!
//! ```rust
//! use dualpng_ops::{scale_intensity, Brightness};
//!
//! assert_eq!(scale_intensity(100, Brightness::BLACK_DEFAULT), 50);
//! assert_eq!(scale_intensity(200, Brightness::new(2.0).unwrap()), 255);
//! ```

use crate::{OpsError, OpsResult};
use serde::Deserialize;
use std::fmt;

/// Nonnegative, finite multiplier applied to a luminance value.
///
/// Negative and non-finite values are rejected at construction, so a scaled
/// intensity never needs a lower clamp.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(try_from = "f64")]
pub struct Brightness(f64);

impl Brightness {
    /// Default multiplier for the image shown over black.
    pub const BLACK_DEFAULT: Self = Self(0.5);

    /// Default multiplier for the image shown over white.
    pub const WHITE_DEFAULT: Self = Self(1.0);

    /// Leaves luminance unchanged.
    pub const IDENTITY: Self = Self(1.0);

    /// Creates a brightness multiplier.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidParameter`] if `value` is negative, NaN or infinite.
    pub fn new(value: f64) -> OpsResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(OpsError::InvalidParameter(format!(
                "brightness must be a finite number >= 0, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the multiplier.
    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Brightness {
    type Error = OpsError;

    fn try_from(value: f64) -> OpsResult<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Multiplies a luminance value by `brightness`, saturating at 255.
///
/// The product is truncated toward zero, not rounded.
#[inline]
pub fn scale_intensity(gray: u8, brightness: Brightness) -> u8 {
    (gray as f64 * brightness.get()).min(255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Brightness::BLACK_DEFAULT.get(), 0.5);
        assert_eq!(Brightness::WHITE_DEFAULT.get(), 1.0);
    }

    #[test]
    fn test_rejects_invalid() {
        for bad in [-0.01, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(Brightness::new(bad), Err(OpsError::InvalidParameter(_))), "{bad}");
        }
        assert!(Brightness::new(0.0).is_ok());
        assert!(Brightness::try_from(3.5).is_ok());
    }

    #[test]
    fn test_truncates() {
        assert_eq!(scale_intensity(101, Brightness::BLACK_DEFAULT), 50);
        assert_eq!(scale_intensity(3, Brightness::new(0.33).unwrap()), 0);
        assert_eq!(scale_intensity(255, Brightness::new(0.999).unwrap()), 254);
    }

    #[test]
    fn test_clamp_law() {
        let factors = [0.0, 0.25, 0.5, 1.0, 1.3, 2.0, 17.0];
        for g in 0..=255u8 {
            for &b in &factors {
                let expected = (g as f64 * b).floor().min(255.0) as u8;
                let got = scale_intensity(g, Brightness::new(b).unwrap());
                assert_eq!(got, expected, "g={g} b={b}");
            }
        }
    }

    #[test]
    fn test_zero_brightness() {
        assert_eq!(scale_intensity(255, Brightness::new(0.0).unwrap()), 0);
    }
}
