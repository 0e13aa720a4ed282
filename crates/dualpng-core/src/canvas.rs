//! Owned, fixed-size pixel buffers.
//!
//! A [`Canvas`] stores `width * height` [`Color`] values in row-major order.
//! Every pixel is defined from the moment the canvas exists: unwritten
//! pixels are [`Color::TRANSPARENT`].
//!
//! # Memory Layout
//!
//! ```text
//! index(x, y) = y * width + x
//! ```
//!
//! Accessors come in two flavors:
//! - [`get`](Canvas::get) / [`set`](Canvas::set) panic on out-of-bounds
//!   coordinates, since a bad coordinate is a bug in the caller
//! - [`get_checked`](Canvas::get_checked) / [`set_checked`](Canvas::set_checked)
//!   return [`Error::OutOfBounds`] instead
//!
//! # Usage
//!
//! ```rust
//! use dualpng_core::{Canvas, Color};
//!
//! let mut canvas = Canvas::new(3, 2).unwrap();
//! assert_eq!(canvas.get(2, 1), Color::TRANSPARENT);
//!
//! canvas.set(2, 1, Color::opaque(1, 2, 3));
//! let raster = canvas.to_raster().unwrap();
//! assert_eq!(raster.pixel(2, 1), [1, 2, 3, 255]);
//! ```

use crate::raster::byte_len;
use crate::{aspect_fit, Color, Error, Raster, Rasterizer, Rect, Result};

/// Owned RGBA pixel buffer with fixed dimensions.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    data: Vec<Color>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Allocates a zero-initialized canvas.
    ///
    /// A zero width or height gives an empty canvas; it can be read from no
    /// coordinate and cannot be turned into a raster.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimensions`] if the pixel count overflows `usize`
    /// - [`Error::AllocationFailed`] if the buffer cannot be allocated
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let count = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| {
                Error::invalid_dimensions(width, height, "pixel count overflows usize")
            })?;

        let mut data = Vec::new();
        data.try_reserve_exact(count).map_err(|e| {
            let bytes = count.saturating_mul(std::mem::size_of::<Color>());
            Error::allocation_failed(bytes, e.to_string())
        })?;
        data.resize(count, Color::TRANSPARENT);

        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Allocates a canvas and draws `source` into it, aspect-fit and centered.
    ///
    /// The placement comes from [`aspect_fit`]; `rasterizer` decides how the
    /// source is resampled. Pixels outside the placement stay transparent.
    ///
    /// # Errors
    ///
    /// Same as [`Canvas::new`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use dualpng_core::{Canvas, Color, Placement, Raster, Rasterizer};
    ///
    /// // Fills the covered pixels with the source's first pixel
    /// struct Flat;
    /// impl Rasterizer for Flat {
    ///     fn draw(&self, src: &Raster, p: &Placement, canvas: &mut Canvas) {
    ///         let color = Color::from_rgba(src.pixel(0, 0));
    ///         canvas.fill_rect(p.pixel_bounds(canvas.width(), canvas.height()), color);
    ///     }
    /// }
    ///
    /// let src = Raster::filled(2, 1, Color::opaque(9, 9, 9));
    /// let canvas = Canvas::with_raster(&src, 4, 4, &Flat).unwrap();
    /// assert_eq!(canvas.get(0, 0), Color::TRANSPARENT);
    /// assert_eq!(canvas.get(0, 1), Color::opaque(9, 9, 9));
    /// ```
    pub fn with_raster<R: Rasterizer + ?Sized>(
        source: &Raster,
        width: u32,
        height: u32,
        rasterizer: &R,
    ) -> Result<Self> {
        let mut canvas = Self::new(width, height)?;
        if canvas.is_empty() {
            return Ok(canvas);
        }
        let placement = aspect_fit(source.dimensions(), (width, height));
        rasterizer.draw(source, &placement, &mut canvas);
        Ok(canvas)
    }

    /// Returns the canvas width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the canvas height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns a rectangle covering the whole canvas.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Returns `true` if the canvas has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for canvas {}x{}",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.data[self.index(x, y)]
    }

    /// Writes the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.data[i] = color;
    }

    /// Returns the pixel at (x, y), or [`Error::OutOfBounds`].
    pub fn get_checked(&self, x: u32, y: u32) -> Result<Color> {
        if self.bounds().contains(x, y) {
            Ok(self.get(x, y))
        } else {
            Err(Error::out_of_bounds(x, y, self.width, self.height))
        }
    }

    /// Writes the pixel at (x, y), or returns [`Error::OutOfBounds`].
    pub fn set_checked(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        if self.bounds().contains(x, y) {
            self.set(x, y, color);
            Ok(())
        } else {
            Err(Error::out_of_bounds(x, y, self.width, self.height))
        }
    }

    /// Fills the part of `rect` that lies on the canvas with `color`.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(rect) = rect.intersect(&self.bounds()) else {
            return;
        };
        for y in rect.y..rect.bottom() {
            let start = self.index(rect.x, y);
            self.data[start..start + rect.width as usize].fill(color);
        }
    }

    /// Iterates over all pixels row by row as `(x, y, color)`.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
        self.bounds().iter_coords().map(move |(x, y)| (x, y, self.get(x, y)))
    }

    /// Copies the canvas into an immutable [`Raster`].
    ///
    /// Channels are copied verbatim in `[R, G, B, A]` order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Materialize`] if the canvas is empty or the raster
    /// buffer cannot be built.
    pub fn to_raster(&self) -> Result<Raster> {
        let len = byte_len(self.width, self.height).map_err(|e| Error::materialize(e.to_string()))?;
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(len)
            .map_err(|e| Error::materialize(format!("{len} byte buffer: {e}")))?;
        bytes.extend(self.data.iter().flat_map(|c| c.to_rgba()));
        Raster::from_rgba8(self.width, self.height, bytes)
            .map_err(|e| Error::materialize(e.to_string()))
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Placement;
    use std::cell::RefCell;

    /// Records the placement it receives and paints covered pixels opaque.
    #[derive(Default)]
    struct Recorder {
        seen: RefCell<Vec<Placement>>,
    }

    impl Rasterizer for Recorder {
        fn draw(&self, src: &Raster, placement: &Placement, canvas: &mut Canvas) {
            self.seen.borrow_mut().push(*placement);
            let color = Color::from_rgba(src.pixel(0, 0));
            canvas.fill_rect(placement.pixel_bounds(canvas.width(), canvas.height()), color);
        }
    }

    #[test]
    fn test_canvas_new_is_zeroed() {
        let canvas = Canvas::new(5, 3).unwrap();
        assert_eq!(canvas.dimensions(), (5, 3));
        assert!(canvas.pixels().all(|(_, _, c)| c == Color::TRANSPARENT));
        assert_eq!(canvas.pixels().count(), 15);
    }

    #[test]
    fn test_canvas_set_get() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.set(3, 1, Color::opaque(1, 2, 3));
        assert_eq!(canvas.get(3, 1), Color::opaque(1, 2, 3));
        assert_eq!(canvas.get(1, 3), Color::TRANSPARENT);
        assert_eq!(canvas.pixels().nth(7), Some((3, 1, Color::opaque(1, 2, 3))));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_canvas_get_out_of_bounds() {
        // x past the row end must not wrap into the next row
        let canvas = Canvas::new(4, 4).unwrap();
        canvas.get(4, 0);
    }

    #[test]
    fn test_canvas_checked_access() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        assert!(canvas.get_checked(1, 1).is_ok());
        let err = canvas.get_checked(2, 1).unwrap_err();
        assert!(err.is_bounds_error());
        assert!(canvas.set_checked(0, 2, Color::opaque(0, 0, 0)).is_err());
        canvas.set_checked(0, 1, Color::opaque(7, 7, 7)).unwrap();
        assert_eq!(canvas.get(0, 1), Color::opaque(7, 7, 7));
    }

    #[test]
    fn test_canvas_overflow_rejected() {
        if usize::BITS == 32 {
            let err = Canvas::new(u32::MAX, u32::MAX).unwrap_err();
            assert!(matches!(err, Error::InvalidDimensions { .. }));
        }
    }

    #[test]
    fn test_canvas_allocation_failure() {
        if usize::BITS == 64 {
            let err = Canvas::new(u32::MAX, u32::MAX).unwrap_err();
            assert!(err.is_allocation_error());
        }
    }

    #[test]
    fn test_fill_rect_clipped() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.fill_rect(Rect::new(2, 2, 10, 10), Color::opaque(5, 5, 5));
        assert_eq!(canvas.get(3, 3), Color::opaque(5, 5, 5));
        assert_eq!(canvas.get(1, 3), Color::TRANSPARENT);
        canvas.fill_rect(Rect::new(8, 8, 2, 2), Color::opaque(1, 1, 1));
        canvas.fill_rect(Rect::new(u32::MAX, 0, 2, 2), Color::opaque(1, 1, 1));
        canvas.fill_rect(Rect::new(0, u32::MAX - 1, 9, 9), Color::opaque(1, 1, 1));
        assert_eq!(canvas.pixels().filter(|&(_, _, c)| c == Color::opaque(1, 1, 1)).count(), 0);
    }

    #[test]
    fn test_with_raster_letterboxes() {
        let src = Raster::filled(4, 2, Color::opaque(50, 60, 70));
        let rec = Recorder::default();
        let canvas = Canvas::with_raster(&src, 4, 4, &rec).unwrap();

        assert_eq!(rec.seen.borrow().as_slice(), &[Placement::new(0.0, 1.0, 4.0, 2.0)]);
        for x in 0..4 {
            assert_eq!(canvas.get(x, 0), Color::TRANSPARENT);
            assert_eq!(canvas.get(x, 1), Color::opaque(50, 60, 70));
            assert_eq!(canvas.get(x, 2), Color::opaque(50, 60, 70));
            assert_eq!(canvas.get(x, 3), Color::TRANSPARENT);
        }
    }

    #[test]
    fn test_with_raster_empty_canvas_skips_draw() {
        let src = Raster::filled(1, 1, Color::opaque(1, 1, 1));
        let rec = Recorder::default();
        let canvas = Canvas::with_raster(&src, 0, 3, &rec).unwrap();
        assert!(canvas.is_empty());
        assert!(rec.seen.borrow().is_empty());
    }

    #[test]
    fn test_to_raster() {
        let mut canvas = Canvas::new(2, 1).unwrap();
        canvas.set(0, 0, Color::new(205, 0, 0, 0));
        canvas.set(1, 0, Color::new(200, 255, 255, 255));
        let raster = canvas.to_raster().unwrap();
        assert_eq!(raster.as_bytes(), &[0, 0, 0, 205, 255, 255, 255, 200]);
    }

    #[test]
    fn test_to_raster_empty_fails() {
        let canvas = Canvas::new(0, 0).unwrap();
        let err = canvas.to_raster().unwrap_err();
        assert!(matches!(err, Error::Materialize { .. }));
    }
}
