//! 8-bit color values and fixed-point luminance.
//!
//! [`Color`] is the pixel type stored in a [`Canvas`](crate::Canvas). Its
//! [`gray`](Color::gray) value uses integer BT.601 weights so the result is
//! bit-exact on every platform:
//!
//! ```text
//! gray = (R * 19595 + G * 38469 + B * 7472) >> 16
//! ```
//!
//! The three weights sum to 65536, so white maps to 255 and black to 0.

/// Red luma weight in 16-bit fixed point (~0.299).
pub const LUMA_R: u32 = 19595;
/// Green luma weight in 16-bit fixed point (~0.587).
pub const LUMA_G: u32 = 38469;
/// Blue luma weight in 16-bit fixed point (~0.114).
pub const LUMA_B: u32 = 7472;

/// Computes the 8-bit luminance of an RGB triple.
///
/// # Example
///
/// ```
/// use dualpng_core::luma;
///
/// assert_eq!(luma(255, 255, 255), 255);
/// assert_eq!(luma(100, 100, 100), 100);
/// assert_eq!(luma(255, 0, 0), 76);
/// ```
#[inline]
pub const fn luma(r: u8, g: u8, b: u8) -> u8 {
    let sum = r as u32 * LUMA_R + g as u32 * LUMA_G + b as u32 * LUMA_B;
    // sum <= 255 * 65536, so the shift always fits in a byte
    (sum >> 16) as u8
}

/// An 8-bit color with alpha, red, green and blue channels.
///
/// Colors are plain values: build a new one instead of mutating.
///
/// # Example
///
/// ```
/// use dualpng_core::Color;
///
/// let c = Color::new(128, 255, 255, 255);
/// assert_eq!(c.alpha, 128);
/// assert_eq!(c.gray(), 255);
/// assert_eq!(c.to_rgba(), [255, 255, 255, 128]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Alpha (coverage), 0 = transparent.
    pub alpha: u8,
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl Color {
    /// Fully transparent black, the value of an unwritten canvas pixel.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Creates a color from alpha, red, green and blue.
    #[inline]
    pub const fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            alpha,
            red,
            green,
            blue,
        }
    }

    /// Creates a fully opaque color.
    #[inline]
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(255, red, green, blue)
    }

    /// Creates a color from `[r, g, b, a]` bytes.
    #[inline]
    pub const fn from_rgba(rgba: [u8; 4]) -> Self {
        Self::new(rgba[3], rgba[0], rgba[1], rgba[2])
    }

    /// Returns the channels as `[r, g, b, a]` bytes.
    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Fixed-point luminance of the color channels (alpha is ignored).
    #[inline]
    pub const fn gray(self) -> u8 {
        luma(self.red, self.green, self.blue)
    }

    /// Returns `true` if alpha is zero.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.alpha == 0
    }
}

impl From<[u8; 4]> for Color {
    fn from(rgba: [u8; 4]) -> Self {
        Self::from_rgba(rgba)
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        color.to_rgba()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        assert_eq!(LUMA_R + LUMA_G + LUMA_B, 1 << 16);
    }

    #[test]
    fn test_luma_gray_is_identity() {
        for v in 0..=255u8 {
            assert_eq!(luma(v, v, v), v);
        }
    }

    #[test]
    fn test_luma_bounds() {
        // Extremes plus a coarse sweep of the cube
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(255, 255, 255), 255);
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let l = luma(r, g, b);
                    let lo = r.min(g).min(b);
                    let hi = r.max(g).max(b);
                    assert!(l >= lo && l <= hi, "luma({r},{g},{b}) = {l}");
                }
            }
        }
    }

    #[test]
    fn test_luma_primaries() {
        assert_eq!(luma(255, 0, 0), 76);
        assert_eq!(luma(0, 255, 0), 149);
        assert_eq!(luma(0, 0, 255), 29);
    }

    #[test]
    fn test_gray_ignores_alpha() {
        assert_eq!(Color::new(0, 200, 200, 200).gray(), 200);
        assert_eq!(Color::opaque(200, 200, 200).gray(), 200);
    }

    #[test]
    fn test_rgba_roundtrip() {
        let c = Color::new(10, 20, 30, 40);
        assert_eq!(c.to_rgba(), [20, 30, 40, 10]);
        assert_eq!(Color::from(c.to_rgba()), c);
    }

    #[test]
    fn test_transparent_default() {
        assert_eq!(Color::default(), Color::TRANSPARENT);
        assert!(Color::TRANSPARENT.is_transparent());
    }
}
