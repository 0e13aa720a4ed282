//! # dualpng-ops
//!
//! Packing two images into one dual-background PNG.
//!
//! The packer fits both inputs onto a common grid, then interleaves them on
//! a checkerboard, storing each cell's luminance in alpha: black cells for
//! the image seen over a black background, white cells for the one seen
//! over white.
//!
//! # Modules
//!
//! - [`luma`] - Brightness scaling of fixed-point luminance
//! - [`resample`] - Filtered [`Rasterizer`](dualpng_core::Rasterizer) implementation
//! - [`pack`] - Checkerboard packing pass
//! - [`reveal`] - Compositing a packed image over black or white
//! - [`config`] - [`PackOptions`] and YAML loading
//! - [`pipeline`] - File-to-file packing
//!
//! # Example
//!
//! ```rust,ignore
//! use dualpng_ops::{pipeline::pack_files, PackOptions, Filter};
//!
//! let opts = PackOptions::default().with_filter(Filter::Lanczos3);
//! pack_files("night.jpg", "day.jpg", "packed.png", &opts)?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
mod error;
pub mod luma;
pub mod pack;
pub mod pipeline;
pub mod resample;
pub mod reveal;

pub use config::PackOptions;
pub use error::{InputRole, OpsError, OpsResult};
pub use luma::{scale_intensity, Brightness};
pub use pack::{encode_pixel, pack, pack_canvases, pack_with, Parity};
pub use pipeline::{pack_files, PackReport};
pub use resample::{Filter, ResampleRasterizer};
pub use reveal::{reveal, Background};
