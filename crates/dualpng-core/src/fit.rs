//! Aspect-fit (letterbox) placement.
//!
//! Computes where a source raster lands inside a destination canvas: the
//! largest rectangle with the source's aspect ratio that fits entirely in the
//! destination, centered on both axes. No rotation and no cropping.
//!
//! ```rust
//! use dualpng_core::{aspect_fit, Placement};
//!
//! // 200x100 source in a 100x100 canvas: width-constrained, centered vertically
//! let p = aspect_fit((200, 100), (100, 100));
//! assert_eq!(p, Placement::new(0.0, 25.0, 100.0, 50.0));
//! ```

use crate::Placement;

/// Scale factor that fits `source` inside `dest` without changing its aspect ratio.
///
/// Tries the width-constrained scale first and falls back to the
/// height-constrained one when the scaled height would overflow.
///
/// # Panics
///
/// Zero source or destination dimensions violate the contract. Debug builds
/// assert on them; release builds return a meaningless value.
pub fn scale_to_fit(source: (u32, u32), dest: (u32, u32)) -> f64 {
    debug_assert!(
        source.0 > 0 && source.1 > 0 && dest.0 > 0 && dest.1 > 0,
        "aspect fit of {}x{} into {}x{} needs non-zero sizes",
        source.0,
        source.1,
        dest.0,
        dest.1
    );
    let (sw, sh) = (source.0 as f64, source.1 as f64);
    let (dw, dh) = (dest.0 as f64, dest.1 as f64);

    let s = dw / sw;
    if sh * s <= dh {
        return s;
    }
    dh / sh
}

/// Centered aspect-fit placement of `source` inside a `dest` canvas.
///
/// # Panics
///
/// Same contract as [`scale_to_fit`].
pub fn aspect_fit(source: (u32, u32), dest: (u32, u32)) -> Placement {
    let s = scale_to_fit(source, dest);
    let w = source.0 as f64 * s;
    let h = source.1 as f64 * s;
    let x = dest.0 as f64 / 2.0 - w / 2.0;
    let y = dest.1 as f64 / 2.0 - h / 2.0;
    Placement::new(x, y, w, h)
}
