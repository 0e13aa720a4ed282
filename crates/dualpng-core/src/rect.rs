//! Rectangle types for pixel regions and source placements.
//!
//! - [`Rect`] - integer pixel region (origin + size)
//! - [`Placement`] - floating-point rectangle a source raster is drawn into
//!
//! # Coordinate System
//!
//! All coordinates use the standard image convention:
//! - Origin (0, 0) is at the **top-left** corner
//! - X increases to the right
//! - Y increases downward
//!
//! ```text
//! (0,0) ────────► X
//!   │
//!   │   ┌──────────┐
//!   │   │ Placement│
//!   │   └──────────┘
//!   ▼
//!   Y
//! ```
//!
//! A pixel `(px, py)` covers the unit square `[px, px+1) x [py, py+1)`; its
//! center is at `(px + 0.5, py + 0.5)`.

/// A rectangle defined by origin (x, y) and dimensions (width, height).
///
/// The rectangle is inclusive on the left/top edges and exclusive on the
/// right/bottom edges.
///
/// # Example
///
/// ```rust
/// use dualpng_core::Rect;
///
/// let rect = Rect::new(10, 20, 100, 50);
/// assert_eq!(rect.right(), 110);
/// assert_eq!(rect.bottom(), 70);
/// assert_eq!(rect.area(), 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate of the left edge (inclusive)
    pub x: u32,
    /// Y coordinate of the top edge (inclusive)
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle with the given origin and dimensions.
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from origin (0, 0) with given dimensions.
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Returns the X coordinate of the right edge (exclusive), saturating
    /// at `u32::MAX`.
    #[inline]
    pub const fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Returns the Y coordinate of the bottom edge (exclusive), saturating
    /// at `u32::MAX`.
    #[inline]
    pub const fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Returns the area of the rectangle in pixels.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns `true` if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if the point (px, py) is inside this rectangle.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dualpng_core::Rect;
    ///
    /// let rect = Rect::new(10, 10, 100, 100);
    /// assert!(rect.contains(10, 10));
    /// assert!(rect.contains(109, 109));
    /// assert!(!rect.contains(110, 110));
    /// ```
    #[inline]
    pub const fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Returns the intersection of this rectangle with another.
    ///
    /// Returns `None` if the rectangles don't overlap.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dualpng_core::Rect;
    ///
    /// let a = Rect::new(0, 0, 100, 100);
    /// let b = Rect::new(50, 50, 100, 100);
    /// assert_eq!(a.intersect(&b), Some(Rect::new(50, 50, 50, 50)));
    /// ```
    #[inline]
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Returns an iterator over all (x, y) coordinates in this rectangle.
    ///
    /// Iterates row by row, left to right, top to bottom.
    #[inline]
    pub fn iter_coords(self) -> impl Iterator<Item = (u32, u32)> {
        let (x0, x1) = (self.x, self.right());
        (self.y..self.bottom()).flat_map(move |y| (x0..x1).map(move |x| (x, y)))
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect({}, {}, {}x{})",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Floating-point rectangle that a source raster is drawn into.
///
/// Produced by [`aspect_fit`](crate::aspect_fit) and consumed by a
/// [`Rasterizer`](crate::Rasterizer). It is not stored anywhere: a new one is
/// computed for every composite.
///
/// # Example
///
/// ```rust
/// use dualpng_core::{Placement, Rect};
///
/// // 2x4 source letterboxed into a 4x4 canvas
/// let p = Placement::new(1.0, 0.0, 2.0, 4.0);
/// assert_eq!(p.pixel_bounds(4, 4), Rect::new(1, 0, 2, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Placement {
    /// Creates a placement from origin and size.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Width divided by height.
    #[inline]
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    /// Integer pixels whose centers lie inside this placement, clipped to a
    /// `width x height` canvas.
    ///
    /// Returns an empty rectangle when no pixel center is covered.
    pub fn pixel_bounds(&self, width: u32, height: u32) -> Rect {
        let (x0, x1) = center_span(self.x, self.right(), width);
        let (y0, y1) = center_span(self.y, self.bottom(), height);
        if x0 >= x1 || y0 >= y1 {
            return Rect::default();
        }
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }
}

/// Half-open index range `[ceil(lo - 0.5), ceil(hi - 0.5))` clipped to `[0, limit)`.
fn center_span(lo: f64, hi: f64, limit: u32) -> (u32, u32) {
    let clip = |v: f64| v.clamp(0.0, limit as f64) as u32;
    (clip((lo - 0.5).ceil()), clip((hi - 0.5).ceil()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_basic() {
        let rect = Rect::new(10, 20, 100, 50);
        assert_eq!(rect.right(), 110);
        assert_eq!(rect.bottom(), 70);
        assert_eq!(rect.area(), 5000);
        assert!(!rect.is_empty());
        assert!(Rect::new(0, 0, 0, 10).is_empty());
    }

    #[test]
    fn test_rect_intersect() {
        let a = Rect::new(0, 0, 100, 100);
        assert_eq!(a.intersect(&Rect::new(50, 50, 100, 100)), Some(Rect::new(50, 50, 50, 50)));
        assert_eq!(a.intersect(&Rect::new(200, 200, 10, 10)), None);
    }

    #[test]
    fn test_rect_edges_saturate() {
        let rect = Rect::new(u32::MAX, 0, 2, 2);
        assert_eq!(rect.right(), u32::MAX);
        assert_eq!(rect.bottom(), 2);
        assert!(!rect.contains(u32::MAX, 0));
        assert_eq!(rect.intersect(&Rect::from_size(4, 4)), None);
        assert_eq!(Rect::new(0, u32::MAX - 1, 1, 5).bottom(), u32::MAX);
    }

    #[test]
    fn test_rect_iter_coords() {
        let coords: Vec<_> = Rect::new(1, 1, 2, 2).iter_coords().collect();
        assert_eq!(coords, vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_pixel_bounds_full() {
        let p = Placement::new(0.0, 0.0, 8.0, 6.0);
        assert_eq!(p.pixel_bounds(8, 6), Rect::from_size(8, 6));
    }

    #[test]
    fn test_pixel_bounds_letterbox() {
        // Center at 1.5 is inside [1.4, 4.6); center at 4.5 is inside too
        let p = Placement::new(1.4, 0.0, 3.2, 4.0);
        assert_eq!(p.pixel_bounds(6, 4), Rect::new(1, 0, 4, 4));
        // Narrow placement that misses every center
        let thin = Placement::new(2.6, 0.0, 0.8, 4.0);
        assert!(thin.pixel_bounds(6, 4).is_empty());
    }

    #[test]
    fn test_pixel_bounds_clipped() {
        let p = Placement::new(-3.0, -1.0, 20.0, 20.0);
        assert_eq!(p.pixel_bounds(5, 5), Rect::from_size(5, 5));
    }

    #[test]
    fn test_placement_center() {
        let p = Placement::new(1.0, 2.0, 4.0, 6.0);
        assert_eq!(p.center(), (3.0, 5.0));
        assert_eq!(p.aspect(), 4.0 / 6.0);
    }
}
