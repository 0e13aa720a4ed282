//! File-to-file packing.
//!
//! [`pack_files`] reads both sources, packs them and writes the PNG. Errors
//! say which stage failed and, for inputs, which image. The output file is
//! only created once the packed image has been fully encoded.

use crate::error::InputRole;
use crate::{pack, OpsError, OpsResult, PackOptions};
use dualpng_core::Raster;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Summary of a completed [`pack_files`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackReport {
    /// Black input `(width, height)`.
    pub black: (u32, u32),
    /// White input `(width, height)`.
    pub white: (u32, u32),
    /// Output `(width, height)`.
    pub output: (u32, u32),
}

/// Reads one input, tagging failures with its role.
pub fn load_input(path: impl AsRef<Path>, role: InputRole) -> OpsResult<Raster> {
    dualpng_io::read(path).map_err(|e| OpsError::input(role, e))
}

/// Packs two image files into a PNG at `output`.
///
/// # Errors
///
/// - [`OpsError::Input`] if either source cannot be read or decoded
/// - [`OpsError::Canvas`] if the working canvases cannot be allocated
/// - [`OpsError::Output`] if the PNG cannot be encoded or written
///
/// # Example
///
/// ```rust,ignore
/// use dualpng_ops::{pipeline::pack_files, PackOptions};
///
/// let report = pack_files("dark.jpg", "light.png", "packed.png", &PackOptions::default())?;
/// println!("{:?}", report.output);
/// ```
pub fn pack_files(
    black_path: impl AsRef<Path>,
    white_path: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &PackOptions,
) -> OpsResult<PackReport> {
    let start = Instant::now();
    let black = load_input(black_path, InputRole::Black)?;
    let white = load_input(white_path, InputRole::White)?;

    let packed = pack(&black, &white, options)?;
    dualpng_io::write_png(output.as_ref(), &packed).map_err(OpsError::Output)?;

    let report = PackReport {
        black: black.dimensions(),
        white: white.dimensions(),
        output: packed.dimensions(),
    };
    info!(
        output = %output.as_ref().display(),
        width = report.output.0,
        height = report.output.1,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "packed"
    );
    Ok(report)
}
