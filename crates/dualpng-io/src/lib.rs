//! # dualpng-io
//!
//! Image I/O for dualpng.
//!
//! Sources may be PNG or JPEG and are always normalized to 8-bit RGBA
//! [`Raster`]s. Output is always PNG, since packed images carry their
//! signal in the alpha channel.
//!
//! # Architecture
//!
//! - [`ImageReader`] - Trait for format readers
//! - [`ImageWriter`] - Trait for format writers
//! - [`read`] / [`write_png`] - High-level functions
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dualpng_io::{read, write_png};
//!
//! // Format is sniffed from the file contents, not the extension
//! let image = read("photo.jpg")?;
//! write_png("copy.png", &image)?;
//! ```
//!
//! # Supported Formats
//!
//! | Format | Read | Write | Bit Depths |
//! |--------|------|-------|------------|
//! | PNG | Yes | Yes | 1-16 in, 8 out |
//! | JPEG | Yes | No | 8, 16 gray |
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `jpeg` - JPEG support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;
mod traits;

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "jpeg")]
pub mod jpeg;

pub use detect::Format;
pub use error::{IoError, IoResult};
pub use traits::{ImageReader, ImageWriter};

use dualpng_core::Raster;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads an image file, detecting the format from its leading bytes.
///
/// # Errors
///
/// - [`IoError::Open`] if the file cannot be read
/// - [`IoError::UnrecognizedFormat`] if it is neither PNG nor JPEG
/// - [`IoError::Decode`] / [`IoError::MissingFrame`] if decoding fails
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| IoError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = data.len(), "read source");

    decode(&data).map_err(|e| match e {
        IoError::UnrecognizedFormat { .. } => IoError::UnrecognizedFormat {
            path: path.to_path_buf(),
        },
        other => other,
    })
}

/// Decodes an in-memory image, detecting the format from its leading bytes.
pub fn decode(data: &[u8]) -> IoResult<Raster> {
    match Format::from_bytes(data) {
        #[cfg(feature = "png")]
        Format::Png => png::PngReader::new().read_from_memory(data),
        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::JpegReader::new().read_from_memory(data),
        Format::Unknown => Err(IoError::UnrecognizedFormat { path: PathBuf::new() }),
        #[allow(unreachable_patterns)]
        disabled => Err(IoError::FormatDisabled(disabled)),
    }
}

/// Returns the format and `(width, height)` of an image file without
/// decoding its pixels.
pub fn probe<P: AsRef<Path>>(path: P) -> IoResult<(Format, u32, u32)> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| IoError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let format = Format::from_bytes(&data);
    let (width, height) = match format {
        #[cfg(feature = "png")]
        Format::Png => png::probe(&data)?,
        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::probe(&data)?,
        Format::Unknown => {
            return Err(IoError::UnrecognizedFormat {
                path: path.to_path_buf(),
            });
        }
        #[allow(unreachable_patterns)]
        disabled => return Err(IoError::FormatDisabled(disabled)),
    };
    Ok((format, width, height))
}

/// Encodes a raster as PNG and writes it to `path`.
///
/// The image is fully encoded before the file is created, so an encoding
/// failure leaves nothing on disk.
#[cfg(feature = "png")]
pub fn write_png<P: AsRef<Path>>(path: P, raster: &Raster) -> IoResult<()> {
    png::write(path, raster)
}

pub(crate) fn write_bytes(path: &Path, bytes: &[u8]) -> IoResult<()> {
    std::fs::write(path, bytes).map_err(|source| IoError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dualpng_core::Color;

    #[test]
    fn test_read_missing_file() {
        let err = read("/definitely/not/here.png").unwrap_err();
        assert!(matches!(err, IoError::Open { .. }));
        assert!(err.is_source_error());
    }

    #[test]
    fn test_read_not_an_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"just some text").unwrap();

        match read(&path).unwrap_err() {
            IoError::UnrecognizedFormat { path: p } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_extension_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("misnamed.jpg");
        let raster = Raster::filled(3, 2, Color::opaque(9, 8, 7));
        write_png(&path, &raster).unwrap();

        assert_eq!(read(&path).unwrap(), raster);
        assert_eq!(probe(&path).unwrap(), (Format::Png, 3, 2));
    }

    #[test]
    fn test_decode_dispatches_by_content() {
        let raster = Raster::filled(4, 3, Color::opaque(40, 80, 120));
        let png_bytes = png::encode(&raster).unwrap();
        let readers: [(Format, &dyn ImageReader); 2] =
            [(Format::Png, &png::PngReader), (Format::Jpeg, &jpeg::JpegReader)];
        for (format, reader) in readers {
            let result = reader.read_from_memory(&png_bytes);
            assert_eq!(result.is_ok(), format == Format::Png, "{format}");
        }
        assert_eq!(decode(&png_bytes).unwrap(), raster);

        let mut jpeg_bytes = Vec::new();
        jpeg_encoder::Encoder::new(&mut jpeg_bytes, 100)
            .encode(&[90u8; 8 * 8 * 3], 8, 8, jpeg_encoder::ColorType::Rgb)
            .unwrap();
        assert_eq!(decode(&jpeg_bytes).unwrap().dimensions(), (8, 8));

        assert!(matches!(decode(b"GIF89a"), Err(IoError::UnrecognizedFormat { .. })));
    }

    #[test]
    fn test_write_into_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.png");
        let err = write_png(&path, &Raster::filled(1, 1, Color::TRANSPARENT)).unwrap_err();
        assert!(matches!(err, IoError::Create { .. }));
    }
}
