//! PNG format support.
//!
//! Reading accepts every PNG color type and bit depth and normalizes to
//! 8-bit RGBA: palettes and `tRNS` transparency are expanded, 16-bit
//! samples are reduced to their high byte, grayscale is replicated to RGB.
//!
//! Writing always produces 8-bit RGBA with an sRGB chunk.
//!
//! # Example
//!
//! ```rust,ignore
//! use dualpng_io::png;
//!
//! let raster = png::decode(&std::fs::read("input.png")?)?;
//! png::write("output.png", &raster)?;
//! ```

use crate::{Format, ImageReader, ImageWriter, IoError, IoResult};
use dualpng_core::Raster;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, trace};

/// PNG file reader.
#[derive(Debug, Clone, Default)]
pub struct PngReader;

impl PngReader {
    /// Creates a new reader.
    pub fn new() -> Self {
        Self
    }
}

impl ImageReader for PngReader {
    fn read_from_memory(&self, data: &[u8]) -> IoResult<Raster> {
        decode(data)
    }
}

/// PNG file writer.
#[derive(Debug, Clone, Default)]
pub struct PngWriter;

impl PngWriter {
    /// Creates a writer.
    pub fn new() -> Self {
        Self
    }
}

impl ImageWriter for PngWriter {
    fn write_to_memory(&self, raster: &Raster) -> IoResult<Vec<u8>> {
        let mut out = Vec::new();
        let mut encoder = png::Encoder::new(&mut out, raster.width(), raster.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

        let mut writer = encoder
            .write_header()
            .map_err(|e| IoError::Encode(e.to_string()))?;
        writer
            .write_image_data(raster.as_bytes())
            .map_err(|e| IoError::Encode(e.to_string()))?;
        writer.finish().map_err(|e| IoError::Encode(e.to_string()))?;

        debug!(width = raster.width(), height = raster.height(), bytes = out.len(), "encoded PNG");
        Ok(out)
    }
}

/// Writes a raster to a PNG file.
pub fn write<P: AsRef<Path>>(path: P, raster: &Raster) -> IoResult<()> {
    PngWriter::new().write(path, raster)
}

/// Encodes a raster as PNG bytes.
pub fn encode(raster: &Raster) -> IoResult<Vec<u8>> {
    PngWriter::new().write_to_memory(raster)
}

/// Decodes PNG bytes into an RGBA raster.
pub fn decode(data: &[u8]) -> IoResult<Raster> {
    let mut decoder = png::Decoder::new(Cursor::new(data));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info().map_err(map_decoding_error)?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::decode(Format::Png, "cannot determine output buffer size"))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader.next_frame(&mut buf).map_err(map_decoding_error)?;
    trace!(color = ?info.color_type, depth = ?info.bit_depth, "PNG frame");

    if info.bit_depth != png::BitDepth::Eight {
        return Err(IoError::decode(
            Format::Png,
            format!("unexpected output bit depth {:?}", info.bit_depth),
        ));
    }

    let samples = &buf[..info.buffer_size()];
    let rgba: Vec<u8> = match info.color_type {
        png::ColorType::Rgba => samples.to_vec(),
        png::ColorType::Rgb => {
            debug!(width = info.width, height = info.height, "decoded PNG");
            return Ok(Raster::from_rgb8(info.width, info.height, samples)?);
        }
        png::ColorType::Grayscale => samples.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        png::ColorType::GrayscaleAlpha => samples
            .chunks_exact(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
            .collect(),
        png::ColorType::Indexed => {
            return Err(IoError::decode(Format::Png, "palette was not expanded"));
        }
    };

    debug!(width = info.width, height = info.height, "decoded PNG");
    Ok(Raster::from_rgba8(info.width, info.height, rgba)?)
}

/// Reads only the PNG header and returns `(width, height)`.
pub fn probe(data: &[u8]) -> IoResult<(u32, u32)> {
    let reader = png::Decoder::new(Cursor::new(data))
        .read_info()
        .map_err(map_decoding_error)?;
    let info = reader.info();
    Ok((info.width, info.height))
}

fn map_decoding_error(err: png::DecodingError) -> IoError {
    match err {
        png::DecodingError::IoError(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
            IoError::MissingFrame { format: Format::Png }
        }
        e => IoError::decode(Format::Png, e.to_string()),
    }
}
