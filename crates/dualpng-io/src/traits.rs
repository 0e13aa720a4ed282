//! I/O traits for image readers and writers.
//!
//! These traits define the interface for format-specific implementations.
//! Readers work on bytes already in memory, since the format is sniffed
//! from those bytes before a reader is chosen. Writers encode fully before
//! touching the file, so a failed encode never leaves a partial file behind.

use crate::IoResult;
use dualpng_core::Raster;
use std::path::Path;

/// Trait for image format readers.
///
/// # Example
///
/// ```rust,ignore
/// use dualpng_io::{ImageReader, png::PngReader};
///
/// let raster = PngReader::new().read_from_memory(&std::fs::read("input.png")?)?;
/// ```
pub trait ImageReader {
    /// Decodes an image held in memory.
    fn read_from_memory(&self, data: &[u8]) -> IoResult<Raster>;
}

/// Trait for image format writers.
pub trait ImageWriter {
    /// Encodes an image into memory.
    fn write_to_memory(&self, raster: &Raster) -> IoResult<Vec<u8>>;

    /// Encodes an image and writes it to a file.
    fn write<P: AsRef<Path>>(&self, path: P, raster: &Raster) -> IoResult<()> {
        let bytes = self.write_to_memory(raster)?;
        crate::write_bytes(path.as_ref(), &bytes)
    }
}
