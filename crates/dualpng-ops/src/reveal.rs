//! Previewing a packed image over a solid background.
//!
//! Compositing a packed raster "over" black shows the white-input image on
//! the odd checkerboard cells; over white, the black-input image on the even
//! cells. The other cells stay at the background.

use crate::{OpsError, OpsResult};
use dualpng_core::Raster;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Solid background to composite over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Background {
    /// RGB (0, 0, 0).
    Black,
    /// RGB (255, 255, 255).
    White,
}

impl Background {
    /// Channel value of the background.
    #[inline]
    pub fn level(self) -> u8 {
        match self {
            Background::Black => 0,
            Background::White => 255,
        }
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Background::Black => "black",
            Background::White => "white",
        })
    }
}

impl FromStr for Background {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        match s.to_lowercase().as_str() {
            "black" => Ok(Background::Black),
            "white" => Ok(Background::White),
            other => Err(OpsError::InvalidParameter(format!(
                "unknown background '{other}' (expected black or white)"
            ))),
        }
    }
}

/// Porter-Duff "over" of one straight-alpha channel onto an opaque level.
#[inline]
pub fn over_channel(fg: u8, alpha: u8, bg: u8) -> u8 {
    let a = alpha as u32;
    ((fg as u32 * a + bg as u32 * (255 - a) + 127) / 255) as u8
}

/// Composites `raster` over a solid `background`, giving an opaque raster.
pub fn reveal(raster: &Raster, background: Background) -> OpsResult<Raster> {
    let bg = background.level();
    let data: Vec<u8> = raster
        .as_bytes()
        .chunks_exact(4)
        .flat_map(|p| {
            let a = p[3];
            [over_channel(p[0], a, bg), over_channel(p[1], a, bg), over_channel(p[2], a, bg), 255]
        })
        .collect();

    debug!(%background, width = raster.width(), height = raster.height(), "revealed");
    Ok(Raster::from_rgba8(raster.width(), raster.height(), data)?)
}
