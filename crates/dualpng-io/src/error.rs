//! Error types for I/O operations.
//!
//! Variants keep "the file could not be opened" apart from "the bytes are not
//! an image we understand", and carry the path where one is known.

use crate::Format;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// The source file could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    Open {
        /// File that was requested.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The bytes do not start with the signature of any supported format.
    #[error("{} is not a recognizable image", path.display())]
    UnrecognizedFormat {
        /// File that was inspected (empty for in-memory data).
        path: PathBuf,
    },

    /// The format was recognized but its support is compiled out.
    #[error("{0} support is not enabled")]
    FormatDisabled(Format),

    /// The data is not a valid image of the detected format.
    #[error("{format} decode error: {reason}")]
    Decode {
        /// Detected format.
        format: Format,
        /// Decoder message.
        reason: String,
    },

    /// The stream ends before the first image frame is complete.
    #[error("{format} stream ends before a complete image frame")]
    MissingFrame {
        /// Detected format.
        format: Format,
    },

    /// The destination file could not be created.
    #[error("cannot create {}: {source}", path.display())]
    Create {
        /// Destination path.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// Serializing or finalizing the output failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Decoded pixels could not form a raster.
    #[error("invalid raster: {0}")]
    Raster(#[from] dualpng_core::Error),
}

impl IoError {
    /// Creates an [`IoError::Decode`] error.
    pub fn decode(format: Format, reason: impl Into<String>) -> Self {
        Self::Decode {
            format,
            reason: reason.into(),
        }
    }

    /// Returns `true` if the source could not be opened or was not an image.
    pub fn is_source_error(&self) -> bool {
        matches!(self, Self::Open { .. } | Self::UnrecognizedFormat { .. })
    }
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
