//! # dualpng-core
//!
//! Core types for building dual-background images.
//!
//! A dual-background image is a single RGBA raster whose alpha and color
//! values are chosen so that one picture shows over a black background and
//! another over a white one. This crate holds the pieces every other
//! dualpng crate builds on:
//!
//! - [`Color`] - 8-bit ARGB value type with fixed-point [`gray`](Color::gray)
//! - [`Rect`], [`Placement`] - integer pixel regions and floating placements
//! - [`aspect_fit`] - centered, aspect-preserving placement of a source
//! - [`Canvas`] - owned, bounds-checked pixel buffer
//! - [`Raster`] - immutable RGBA8 image exchanged with codecs
//! - [`Rasterizer`] - seam for drawing a raster into a placement
//!
//! ## Crate Structure
//!
//! ```text
//! dualpng-core (this crate)
//!    ^
//!    |
//!    +-- dualpng-io (decode PNG/JPEG, encode PNG)
//!    +-- dualpng-ops (resampling, luminance encoding, packing)
//!    +-- dualpng-cli
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use dualpng_core::{Canvas, Color};
//!
//! let mut canvas = Canvas::new(4, 4).unwrap();
//! canvas.set(1, 2, Color::opaque(100, 100, 100));
//! assert_eq!(canvas.get(1, 2).gray(), 100);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod canvas;
pub mod error;
pub mod fit;
pub mod pixel;
pub mod raster;
pub mod rect;

pub use canvas::Canvas;
pub use error::{Error, Result};
pub use fit::{aspect_fit, scale_to_fit};
pub use pixel::{luma, Color, LUMA_B, LUMA_G, LUMA_R};
pub use raster::{Raster, Rasterizer};
pub use rect::{Placement, Rect};

/// Prelude module for convenient imports.
///
/// ```
/// use dualpng_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::error::{Error, Result};
    pub use crate::fit::{aspect_fit, scale_to_fit};
    pub use crate::pixel::{luma, Color};
    pub use crate::raster::{Raster, Rasterizer};
    pub use crate::rect::{Placement, Rect};
}
