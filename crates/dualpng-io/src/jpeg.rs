//! JPEG input support.
//!
//! JPEG sources are decoded to opaque RGBA. Grayscale is replicated to RGB,
//! 16-bit grayscale keeps its high byte and CMYK is folded to RGB with the
//! usual `(1 - c)(1 - k)` approximation. There is no JPEG writer: packed
//! output needs an alpha channel.

use crate::{Format, ImageReader, IoError, IoResult};
use dualpng_core::Raster;
use jpeg_decoder::PixelFormat;
use tracing::debug;

/// JPEG file reader.
#[derive(Debug, Clone, Default)]
pub struct JpegReader;

impl JpegReader {
    /// Creates a new reader.
    pub fn new() -> Self {
        Self
    }
}

impl ImageReader for JpegReader {
    fn read_from_memory(&self, data: &[u8]) -> IoResult<Raster> {
        decode(data)
    }
}

/// Decodes JPEG bytes into an opaque RGBA raster.
pub fn decode(data: &[u8]) -> IoResult<Raster> {
    let mut decoder = jpeg_decoder::Decoder::new(data);
    let pixels = decoder.decode().map_err(map_decoding_error)?;
    let info = decoder
        .info()
        .ok_or(IoError::MissingFrame { format: Format::Jpeg })?;

    let width = info.width as u32;
    let height = info.height as u32;

    debug!(width, height, format = ?info.pixel_format, "decoded JPEG");
    let rgba: Vec<u8> = match info.pixel_format {
        PixelFormat::RGB24 => return Ok(Raster::from_rgb8(width, height, &pixels)?),
        PixelFormat::L8 => pixels.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        PixelFormat::L16 => pixels
            .chunks_exact(2)
            .flat_map(|l| [l[0], l[0], l[0], 255])
            .collect(),
        PixelFormat::CMYK32 => pixels
            .chunks_exact(4)
            .flat_map(|cmyk| {
                let k = 255 - cmyk[3] as u32;
                let ch = |v: u8| ((255 - v as u32) * k / 255) as u8;
                [ch(cmyk[0]), ch(cmyk[1]), ch(cmyk[2]), 255]
            })
            .collect(),
    };

    Ok(Raster::from_rgba8(width, height, rgba)?)
}

/// Reads only the JPEG headers and returns `(width, height)`.
pub fn probe(data: &[u8]) -> IoResult<(u32, u32)> {
    let mut decoder = jpeg_decoder::Decoder::new(data);
    decoder.read_info().map_err(map_decoding_error)?;
    let info = decoder
        .info()
        .ok_or(IoError::MissingFrame { format: Format::Jpeg })?;
    Ok((info.width as u32, info.height as u32))
}

fn map_decoding_error(err: jpeg_decoder::Error) -> IoError {
    match err {
        jpeg_decoder::Error::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
            IoError::MissingFrame { format: Format::Jpeg }
        }
        e => IoError::decode(Format::Jpeg, e.to_string()),
    }
}
