//! Checkerboard packing of two images into one alpha-encoded raster.
//!
//! Each output pixel carries exactly one of the two inputs, chosen by the
//! parity of `x + y`:
//!
//! ```text
//!   x: 0 1 2 3
//! y 0  B W B W      B: (0, 0, 0, 255 - scaled black luma)
//!   1  W B W B      W: (255, 255, 255, scaled white luma)
//!   2  B W B W
//! ```
//!
//! Over a white background the `B` cells darken by the black image's
//! luminance; over black the `W` cells lighten by the white image's.
//!
//! # Example
//!
//! ```rust
//! use dualpng_core::{Color, Raster};
//! use dualpng_ops::{pack, PackOptions};
//!
//! let black = Raster::filled(4, 4, Color::opaque(100, 100, 100));
//! let white = Raster::filled(4, 4, Color::opaque(200, 200, 200));
//! let out = pack(&black, &white, &PackOptions::default()).unwrap();
//!
//! assert_eq!(out.pixel(0, 0), [0, 0, 0, 205]);
//! assert_eq!(out.pixel(1, 0), [255, 255, 255, 200]);
//! ```

use crate::config::PackOptions;
use crate::luma::{scale_intensity, Brightness};
use crate::resample::ResampleRasterizer;
use crate::OpsResult;
use dualpng_core::{Canvas, Color, Error, Raster, Rasterizer};
use tracing::debug;

/// Which input a pixel position is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    /// `(x + y)` even: carries the black-background image.
    Black,
    /// `(x + y)` odd: carries the white-background image.
    White,
}

impl Parity {
    /// Returns the parity of a coordinate.
    #[inline]
    pub fn at(x: u32, y: u32) -> Self {
        // x % 2 + y % 2 avoids overflow of x + y at u32::MAX
        if (x % 2 + y % 2) % 2 == 0 {
            Parity::Black
        } else {
            Parity::White
        }
    }
}

/// Encodes one source color for the given parity.
///
/// Black parity gives black with `alpha = 255 - scaled`; white parity gives
/// white with `alpha = scaled`, where `scaled` is the brightness-scaled luma.
#[inline]
pub fn encode_pixel(parity: Parity, source: Color, brightness: Brightness) -> Color {
    let scaled = scale_intensity(source.gray(), brightness);
    match parity {
        Parity::Black => Color::new(255 - scaled, 0, 0, 0),
        Parity::White => Color::new(scaled, 255, 255, 255),
    }
}

/// Runs the packing pass over two equally sized canvases.
///
/// Every output pixel is written exactly once.
///
/// # Errors
///
/// - [`Error::DimensionMismatch`] if the canvases differ in size
/// - [`Error::AllocationFailed`] if the output cannot be allocated
pub fn pack_canvases(
    black: &Canvas,
    white: &Canvas,
    black_brightness: Brightness,
    white_brightness: Brightness,
) -> OpsResult<Canvas> {
    if black.dimensions() != white.dimensions() {
        return Err(Error::dimension_mismatch(black.dimensions(), white.dimensions()).into());
    }

    let mut out = Canvas::new(black.width(), black.height())?;
    for y in 0..out.height() {
        for x in 0..out.width() {
            let parity = Parity::at(x, y);
            let encoded = match parity {
                Parity::Black => encode_pixel(parity, black.get(x, y), black_brightness),
                Parity::White => encode_pixel(parity, white.get(x, y), white_brightness),
            };
            out.set(x, y, encoded);
        }
    }
    Ok(out)
}

/// Packs two rasters using [`ResampleRasterizer`] with the configured filter.
///
/// The output is `max(widths) x max(heights)`; each input is aspect-fit
/// and centered on that grid before packing.
pub fn pack(black: &Raster, white: &Raster, options: &PackOptions) -> OpsResult<Raster> {
    pack_with(black, white, options, &ResampleRasterizer::new(options.filter))
}

/// Packs two rasters, drawing them onto the output grid with `rasterizer`.
///
/// `options.filter` is ignored; the rasterizer decides the filtering.
pub fn pack_with<R: Rasterizer + ?Sized>(
    black: &Raster,
    white: &Raster,
    options: &PackOptions,
    rasterizer: &R,
) -> OpsResult<Raster> {
    let width = black.width().max(white.width());
    let height = black.height().max(white.height());
    debug!(
        black = ?black.dimensions(),
        white = ?white.dimensions(),
        width,
        height,
        black_brightness = %options.black_brightness,
        white_brightness = %options.white_brightness,
        "packing"
    );

    let black_canvas = Canvas::with_raster(black, width, height, rasterizer)?;
    let white_canvas = Canvas::with_raster(white, width, height, rasterizer)?;
    let packed = pack_canvases(
        &black_canvas,
        &white_canvas,
        options.black_brightness,
        options.white_brightness,
    )?;
    Ok(packed.to_raster()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resample::Filter;
    use crate::OpsError;
    use dualpng_core::{luma, Placement};

    /// Copies source pixels 1:1 from the origin, ignoring the placement.
    struct Blit;

    impl Rasterizer for Blit {
        fn draw(&self, source: &Raster, _: &Placement, canvas: &mut Canvas) {
            for (x, y, px) in source.pixels() {
                canvas.set(x, y, Color::from_rgba(px));
            }
        }
    }

    fn noise(width: u32, height: u32, seed: u32) -> Raster {
        let mut state = seed;
        let mut data = Vec::new();
        for _ in 0..width * height {
            let mut px = [0u8; 4];
            for c in px.iter_mut().take(3) {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                *c = (state >> 16) as u8;
            }
            px[3] = 255;
            data.extend_from_slice(&px);
        }
        Raster::from_rgba8(width, height, data).unwrap()
    }

    #[test]
    fn test_parity() {
        assert_eq!(Parity::at(0, 0), Parity::Black);
        assert_eq!(Parity::at(1, 0), Parity::White);
        assert_eq!(Parity::at(1, 1), Parity::Black);
        assert_eq!(Parity::at(u32::MAX, 0), Parity::White);
        assert_eq!(Parity::at(u32::MAX, u32::MAX), Parity::Black);
    }

    #[test]
    fn test_encode_pixel() {
        let gray = Color::opaque(100, 100, 100);
        assert_eq!(
            encode_pixel(Parity::Black, gray, Brightness::BLACK_DEFAULT),
            Color::new(205, 0, 0, 0)
        );
        assert_eq!(
            encode_pixel(Parity::White, gray, Brightness::WHITE_DEFAULT),
            Color::new(100, 255, 255, 255)
        );
        // Transparent letterbox pixels have zero luma
        assert_eq!(
            encode_pixel(Parity::Black, Color::TRANSPARENT, Brightness::IDENTITY),
            Color::new(255, 0, 0, 0)
        );
        assert_eq!(
            encode_pixel(Parity::White, Color::TRANSPARENT, Brightness::IDENTITY),
            Color::new(0, 255, 255, 255)
        );
    }

    #[test]
    fn test_end_to_end_scenario() {
        let black = Raster::filled(6, 5, Color::opaque(100, 100, 100));
        let white = Raster::filled(6, 5, Color::opaque(200, 200, 200));
        for filter in [Filter::Nearest, Filter::Bilinear, Filter::Lanczos3] {
            let out = pack(&black, &white, &PackOptions::default().with_filter(filter)).unwrap();
            for (x, y, px) in out.pixels() {
                let expected = if (x + y) % 2 == 0 { [0, 0, 0, 205] } else { [255, 255, 255, 200] };
                assert_eq!(px, expected, "{filter} at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_parity_law() {
        let black = noise(7, 6, 1);
        let white = noise(7, 6, 2);
        let opts = PackOptions::default()
            .with_black_brightness(Brightness::new(0.8).unwrap())
            .with_white_brightness(Brightness::new(1.2).unwrap());
        let out = pack_with(&black, &white, &opts, &Blit).unwrap();

        for (x, y, px) in out.pixels() {
            if (x + y) % 2 == 0 {
                let [r, g, b, _] = black.pixel(x, y);
                let scaled = (luma(r, g, b) as f64 * 0.8).min(255.0) as u8;
                assert_eq!(px, [0, 0, 0, 255 - scaled]);
            } else {
                let [r, g, b, _] = white.pixel(x, y);
                let scaled = (luma(r, g, b) as f64 * 1.2).min(255.0) as u8;
                assert_eq!(px, [255, 255, 255, scaled]);
            }
        }
    }

    #[test]
    fn test_dimension_law() {
        let cases = [((3, 5), (4, 2)), ((10, 1), (1, 10)), ((8, 8), (8, 8)), ((1, 1), (17, 3))];
        for ((bw, bh), (ww, wh)) in cases {
            let black = noise(bw, bh, 3);
            let white = noise(ww, wh, 4);
            let out = pack(&black, &white, &PackOptions::default()).unwrap();
            assert_eq!(out.dimensions(), (bw.max(ww), bh.max(wh)));
        }
    }

    #[test]
    fn test_letterbox_margins() {
        // Wide black input letterboxed vertically in a square output
        let black = Raster::filled(8, 2, Color::opaque(255, 255, 255));
        let white = Raster::filled(2, 8, Color::opaque(255, 255, 255));
        let out = pack(&black, &white, &PackOptions::default()).unwrap();
        assert_eq!(out.dimensions(), (8, 8));

        // Top-left: black margin (luma 0) and white margin (luma 0)
        assert_eq!(out.pixel(0, 0), [0, 0, 0, 255]);
        assert_eq!(out.pixel(1, 0), [255, 255, 255, 0]);
        // Center row carries the black image; center column the white one
        assert_eq!(out.pixel(4, 4), [0, 0, 0, 255 - 127]);
        assert_eq!(out.pixel(3, 4), [255, 255, 255, 255]);
    }

    #[test]
    fn test_deterministic() {
        let black = noise(31, 17, 5);
        let white = noise(12, 40, 6);
        let opts = PackOptions::default().with_filter(Filter::Bicubic);
        let a = pack(&black, &white, &opts).unwrap();
        let b = pack(&black, &white, &opts).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_mismatched_canvases() {
        let a = Canvas::new(3, 3).unwrap();
        let b = Canvas::new(3, 4).unwrap();
        let err = pack_canvases(&a, &b, Brightness::BLACK_DEFAULT, Brightness::WHITE_DEFAULT)
            .unwrap_err();
        assert!(matches!(err, OpsError::Canvas(Error::DimensionMismatch { .. })));
    }

    #[test]
    fn test_pack_canvases_writes_every_pixel() {
        let a = Canvas::new(5, 3).unwrap();
        let b = Canvas::new(5, 3).unwrap();
        let out =
            pack_canvases(&a, &b, Brightness::BLACK_DEFAULT, Brightness::WHITE_DEFAULT).unwrap();
        for (x, y, c) in out.pixels() {
            let expected = match Parity::at(x, y) {
                Parity::Black => Color::new(255, 0, 0, 0),
                Parity::White => Color::new(0, 255, 255, 255),
            };
            assert_eq!(c, expected);
        }
    }
}
