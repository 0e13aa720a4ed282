//! Drawing a raster into a canvas placement with filtered resampling.
//!
//! [`ResampleRasterizer`] is the workspace's [`Rasterizer`]. It maps each
//! covered canvas pixel back into source space and resamples separably,
//! horizontal pass first, in premultiplied `f32`.
//!
//! # Filters
//!
//! - [`Filter::Nearest`] - Fastest, no interpolation (blocky)
//! - [`Filter::Bilinear`] - Linear interpolation (default)
//! - [`Filter::Bicubic`] - Mitchell-Netravali cubic (sharper than bilinear)
//! - [`Filter::Lanczos3`] - Sinc-based (best for downscaling)
//!
//! # Example
//!
//! ```rust
//! use dualpng_core::{Canvas, Color, Raster};
//! use dualpng_ops::resample::{Filter, ResampleRasterizer};
//!
//! let src = Raster::filled(8, 4, Color::opaque(10, 20, 30));
//! let rasterizer = ResampleRasterizer::new(Filter::Lanczos3);
//! let canvas = Canvas::with_raster(&src, 16, 16, &rasterizer).unwrap();
//! assert_eq!(canvas.get(8, 8), Color::opaque(10, 20, 30));
//! assert_eq!(canvas.get(8, 0), Color::TRANSPARENT);
//! ```

use crate::{OpsError, OpsResult};
use dualpng_core::{Canvas, Color, Placement, Raster, Rasterizer};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Resampling filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Nearest-neighbor (fastest, no interpolation).
    Nearest,
    /// Bilinear interpolation (smooth, fast).
    #[default]
    Bilinear,
    /// Bicubic interpolation (sharper than bilinear).
    Bicubic,
    /// Lanczos-3 (high quality, best for downscaling).
    Lanczos3,
}

impl Filter {
    /// All filters, in order of increasing support.
    pub const ALL: [Filter; 4] =
        [Filter::Nearest, Filter::Bilinear, Filter::Bicubic, Filter::Lanczos3];

    /// Returns the support radius for this filter.
    #[inline]
    pub fn support(&self) -> f32 {
        match self {
            Filter::Nearest => 0.5,
            Filter::Bilinear => 1.0,
            Filter::Bicubic => 2.0,
            Filter::Lanczos3 => 3.0,
        }
    }

    /// Evaluates the filter kernel at position x.
    #[inline]
    pub fn weight(&self, x: f32) -> f32 {
        match self {
            Filter::Nearest => nearest_weight(x),
            Filter::Bilinear => bilinear_weight(x),
            Filter::Bicubic => bicubic_weight(x),
            Filter::Lanczos3 => lanczos_weight(x, 3.0),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`] and config files.
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Nearest => "nearest",
            Filter::Bilinear => "bilinear",
            Filter::Bicubic => "bicubic",
            Filter::Lanczos3 => "lanczos3",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Filter {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        match s.to_lowercase().as_str() {
            "nearest" => Ok(Filter::Nearest),
            "bilinear" | "linear" => Ok(Filter::Bilinear),
            "bicubic" | "cubic" | "mitchell" => Ok(Filter::Bicubic),
            "lanczos" | "lanczos3" => Ok(Filter::Lanczos3),
            other => Err(OpsError::InvalidParameter(format!(
                "unknown filter '{other}' (expected nearest, bilinear, bicubic or lanczos3)"
            ))),
        }
    }
}

#[inline]
fn nearest_weight(x: f32) -> f32 {
    if x.abs() < 0.5 { 1.0 } else { 0.0 }
}

#[inline]
fn bilinear_weight(x: f32) -> f32 {
    let ax = x.abs();
    if ax < 1.0 { 1.0 - ax } else { 0.0 }
}

/// Mitchell-Netravali with B = C = 1/3.
#[inline]
fn bicubic_weight(x: f32) -> f32 {
    const B: f32 = 1.0 / 3.0;
    const C: f32 = 1.0 / 3.0;

    let ax = x.abs();
    if ax < 1.0 {
        ((12.0 - 9.0 * B - 6.0 * C) * ax * ax * ax
            + (-18.0 + 12.0 * B + 6.0 * C) * ax * ax
            + (6.0 - 2.0 * B))
            / 6.0
    } else if ax < 2.0 {
        ((-B - 6.0 * C) * ax * ax * ax
            + (6.0 * B + 30.0 * C) * ax * ax
            + (-12.0 * B - 48.0 * C) * ax
            + (8.0 * B + 24.0 * C))
            / 6.0
    } else {
        0.0
    }
}

#[inline]
fn lanczos_weight(x: f32, a: f32) -> f32 {
    let ax = x.abs();
    if ax < 1e-8 {
        1.0
    } else if ax < a {
        let pi_x = std::f32::consts::PI * ax;
        let pi_x_a = pi_x / a;
        (pi_x.sin() / pi_x) * (pi_x_a.sin() / pi_x_a)
    } else {
        0.0
    }
}

/// Normalized filter taps for one destination column or row.
#[derive(Debug, Clone)]
struct Taps {
    start: usize,
    weights: Vec<f32>,
}

/// Computes taps for destination indices `dst_start..dst_end`.
///
/// `offset` and `extent` are the placement's origin and size along the axis,
/// `src_len` the source length. Destination pixel centers are mapped into
/// source pixel-center space; the kernel is widened by the downscale factor.
fn compute_taps(
    filter: Filter,
    dst_start: u32,
    dst_end: u32,
    offset: f64,
    extent: f64,
    src_len: u32,
) -> Vec<Taps> {
    let scale = (src_len as f64 / extent) as f32;
    let stretch = scale.max(1.0);
    let support = filter.support() * stretch;
    let last = src_len as isize - 1;

    (dst_start..dst_end)
        .map(|d| {
            let center = ((d as f64 + 0.5 - offset) * src_len as f64 / extent - 0.5) as f32;
            let left = ((center - support).floor() as isize).clamp(0, last) as usize;
            let right = ((center + support).ceil() as isize).clamp(0, last) as usize;

            let mut weights: Vec<f32> = (left..=right)
                .map(|s| filter.weight((s as f32 - center) / stretch))
                .collect();
            let sum: f32 = weights.iter().sum();

            if sum.abs() > f32::EPSILON {
                weights.iter_mut().for_each(|w| *w /= sum);
                Taps { start: left, weights }
            } else {
                // Kernel missed every sample: fall back to the closest one
                let nearest = (center.round() as isize).clamp(0, last) as usize;
                Taps {
                    start: nearest,
                    weights: vec![1.0],
                }
            }
        })
        .collect()
}

/// [`Rasterizer`] backed by separable filtered resampling.
///
/// Output pixels are premultiplied, as if drawn onto a transparent surface.
/// Only pixels whose centers fall inside the placement are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResampleRasterizer {
    /// Filter used for both passes.
    pub filter: Filter,
}

impl ResampleRasterizer {
    /// Creates a rasterizer with the given filter.
    pub fn new(filter: Filter) -> Self {
        Self { filter }
    }
}

impl Rasterizer for ResampleRasterizer {
    fn draw(&self, source: &Raster, placement: &Placement, canvas: &mut Canvas) {
        let bounds = placement.pixel_bounds(canvas.width(), canvas.height());
        if bounds.is_empty() || placement.width <= 0.0 || placement.height <= 0.0 {
            return;
        }
        let (sw, sh) = source.dimensions();
        trace!(filter = %self.filter, %bounds, src_w = sw, src_h = sh, "resampling");

        let (px, pw) = (placement.x, placement.width);
        let (py, ph) = (placement.y, placement.height);
        let columns = compute_taps(self.filter, bounds.x, bounds.right(), px, pw, sw);
        let rows = compute_taps(self.filter, bounds.y, bounds.bottom(), py, ph, sh);

        let premul: Vec<[f32; 4]> = source
            .as_bytes()
            .chunks_exact(4)
            .map(|p| {
                let a = p[3] as f32 / 255.0;
                [p[0] as f32 * a, p[1] as f32 * a, p[2] as f32 * a, p[3] as f32]
            })
            .collect();

        // Horizontal pass over the source rows the vertical taps will read
        let row_lo = rows.iter().map(|t| t.start).min().unwrap_or(0);
        let row_hi = rows
            .iter()
            .map(|t| t.start + t.weights.len())
            .max()
            .unwrap_or(0);
        let out_w = columns.len();
        let mut temp = vec![[0.0f32; 4]; out_w * (row_hi - row_lo)];

        for sy in row_lo..row_hi {
            let src_row = &premul[sy * sw as usize..(sy + 1) * sw as usize];
            let dst_row = &mut temp[(sy - row_lo) * out_w..(sy - row_lo + 1) * out_w];
            for (dst, taps) in dst_row.iter_mut().zip(&columns) {
                *dst = convolve(&src_row[taps.start..], &taps.weights, |p| *p);
            }
        }

        // Vertical pass, written straight into the canvas
        for (ry, taps) in rows.iter().enumerate() {
            let y = bounds.y + ry as u32;
            for rx in 0..out_w {
                let px = convolve_column(&temp, out_w, taps.start - row_lo, rx, &taps.weights);
                canvas.set(bounds.x + rx as u32, y, quantize(px));
            }
        }
    }
}

#[inline]
fn convolve<T>(samples: &[T], weights: &[f32], get: impl Fn(&T) -> [f32; 4]) -> [f32; 4] {
    let mut sum = [0.0f32; 4];
    for (s, &w) in samples.iter().zip(weights) {
        let v = get(s);
        for c in 0..4 {
            sum[c] += v[c] * w;
        }
    }
    sum
}

#[inline]
fn convolve_column(
    temp: &[[f32; 4]],
    stride: usize,
    first_row: usize,
    x: usize,
    weights: &[f32],
) -> [f32; 4] {
    let mut sum = [0.0f32; 4];
    for (i, &w) in weights.iter().enumerate() {
        let v = temp[(first_row + i) * stride + x];
        for c in 0..4 {
            sum[c] += v[c] * w;
        }
    }
    sum
}

/// Rounds a premultiplied sample to 8 bits, keeping color within alpha.
#[inline]
fn quantize(px: [f32; 4]) -> Color {
    let alpha = px[3].round().clamp(0.0, 255.0) as u8;
    let ch = |v: f32| (v.round().clamp(0.0, 255.0) as u8).min(alpha);
    Color::new(alpha, ch(px[0]), ch(px[1]), ch(px[2]))
}
