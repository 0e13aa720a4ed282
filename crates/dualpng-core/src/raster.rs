//! Immutable RGBA8 rasters and the rasterizer seam.
//!
//! [`Raster`] is the image type that crosses crate boundaries: decoders in
//! `dualpng-io` produce it, the packer consumes two and returns one, and the
//! PNG encoder writes it. Pixels are row-major `[R, G, B, A]` bytes.
//!
//! [`Rasterizer`] is the seam between the core and a 2D drawing backend: it
//! draws a raster, scaled, into a [`Placement`] on a [`Canvas`].

use crate::{Canvas, Color, Error, Placement, Result};
use std::sync::Arc;

/// Immutable 8-bit RGBA image.
///
/// The pixel buffer is shared through an [`Arc`], so clones are cheap.
/// Dimensions are always non-zero and the buffer length is exactly
/// `width * height * 4`.
///
/// # Example
///
/// ```rust
/// use dualpng_core::{Color, Raster};
///
/// let raster = Raster::filled(2, 2, Color::opaque(10, 20, 30));
/// assert_eq!(raster.pixel(1, 1), [10, 20, 30, 255]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Raster {
    data: Arc<Vec<u8>>,
    width: u32,
    height: u32,
}

impl Raster {
    /// Bytes per pixel.
    pub const CHANNELS: usize = 4;

    /// Creates a raster from row-major RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for a zero-sized raster or a
    /// buffer whose length is not `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data: Arc::new(data),
            width,
            height,
        })
    }

    /// Creates a raster from row-major RGB bytes with opaque alpha.
    pub fn from_rgb8(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        let expected = byte_len(width, height)? / Self::CHANNELS * 3;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} RGB bytes, got {}", expected, data.len()),
            ));
        }
        let rgba = data
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect();
        Self::from_rgba8(width, height, rgba)
    }

    /// Creates a raster where every pixel is `color`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        assert!(width > 0 && height > 0, "raster must not be empty");
        let count = width as usize * height as usize;
        let data = color.to_rgba().repeat(count);
        Self {
            data: Arc::new(data),
            width,
            height,
        }
    }

    /// Returns the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGBA bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the `[R, G, B, A]` bytes at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for raster {}x{}",
            self.width,
            self.height
        );
        let offset = (y as usize * self.width as usize + x as usize) * Self::CHANNELS;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.data[offset..offset + Self::CHANNELS]);
        px
    }

    /// Iterates over all pixels row by row as `(x, y, [r, g, b, a])`.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, [u8; 4])> + '_ {
        let width = self.width;
        self.data
            .chunks_exact(Self::CHANNELS)
            .enumerate()
            .map(move |(i, p)| {
                let x = (i % width as usize) as u32;
                let y = (i / width as usize) as u32;
                (x, y, [p[0], p[1], p[2], p[3]])
            })
    }
}

impl std::fmt::Debug for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// Byte length of a `width x height` RGBA buffer.
pub(crate) fn byte_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_dimensions(width, height, "zero-sized raster"));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(Raster::CHANNELS))
        .ok_or_else(|| Error::invalid_dimensions(width, height, "byte size overflows usize"))
}

/// Draws a source raster into a placement on a canvas.
///
/// Implementations decide the filtering policy but must be deterministic and
/// must only write pixels inside
/// [`placement.pixel_bounds(canvas.width(), canvas.height())`](Placement::pixel_bounds).
/// Written colors are premultiplied by alpha, the same result as drawing
/// onto a transparent surface.
pub trait Rasterizer {
    /// Draws `source`, scaled to `placement`, onto `canvas`.
    fn draw(&self, source: &Raster, placement: &Placement, canvas: &mut Canvas);
}

impl<R: Rasterizer + ?Sized> Rasterizer for &R {
    fn draw(&self, source: &Raster, placement: &Placement, canvas: &mut Canvas) {
        (**self).draw(source, placement, canvas)
    }
}
