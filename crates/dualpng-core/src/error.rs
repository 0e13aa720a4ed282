//! Error types for dualpng-core operations.
//!
//! The [`Error`] enum covers the failure modes of buffer handling:
//! - Bounds checking on canvases ([`OutOfBounds`](Error::OutOfBounds))
//! - Buffer sizing and allocation ([`InvalidDimensions`](Error::InvalidDimensions),
//!   [`AllocationFailed`](Error::AllocationFailed))
//! - Pairing canvases of different sizes ([`DimensionMismatch`](Error::DimensionMismatch))
//! - Turning a canvas into an encodable raster ([`Materialize`](Error::Materialize))
//!
//! # Usage
//!
//! ```rust
//! use dualpng_core::{Error, Result};
//!
//! fn check(x: u32, y: u32, width: u32, height: u32) -> Result<()> {
//!     if x >= width || y >= height {
//!         return Err(Error::out_of_bounds(x, y, width, height));
//!     }
//!     Ok(())
//! }
//! assert!(check(3, 0, 2, 2).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or reading pixel buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel coordinates are outside the buffer.
    ///
    /// Returned by the checked accessors; the unchecked ones panic instead.
    #[error("pixel ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Buffer width
        width: u32,
        /// Buffer height
        height: u32,
    },

    /// Memory allocation failed.
    ///
    /// Canvas allocation reports this instead of aborting the process, so
    /// long-running callers can reject oversized inputs.
    #[error("failed to allocate {requested} bytes: {reason}")]
    AllocationFailed {
        /// Bytes requested
        requested: usize,
        /// Failure reason
        reason: String,
    },

    /// Two buffers that must share a size do not.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First buffer width
        a_width: u32,
        /// First buffer height
        a_height: u32,
        /// Second buffer width
        b_width: u32,
        /// Second buffer height
        b_height: u32,
    },

    /// Invalid image dimensions.
    ///
    /// Zero-sized rasters, data of the wrong length, or sizes whose byte
    /// count overflows `usize`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// A canvas could not be turned into a raster.
    #[error("cannot materialize image: {reason}")]
    Materialize {
        /// Failure reason
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::AllocationFailed`] error.
    #[inline]
    pub fn allocation_failed(requested: usize, reason: impl Into<String>) -> Self {
        Self::AllocationFailed {
            requested,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (u32, u32), b: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }

    /// Creates an [`Error::Materialize`] error.
    #[inline]
    pub fn materialize(reason: impl Into<String>) -> Self {
        Self::Materialize {
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a bounds error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// Returns `true` if this is an allocation error.
    #[inline]
    pub fn is_allocation_error(&self) -> bool {
        matches!(self, Self::AllocationFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds() {
        let err = Error::out_of_bounds(100, 50, 80, 60);
        let msg = err.to_string();
        assert!(msg.contains("(100, 50)"));
        assert!(msg.contains("80x60"));
        assert!(err.is_bounds_error());
        assert!(!err.is_allocation_error());
    }

    #[test]
    fn test_allocation_failed() {
        let err = Error::allocation_failed(1 << 40, "out of memory");
        assert!(err.to_string().contains("out of memory"));
        assert!(err.is_allocation_error());
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = Error::dimension_mismatch((100, 100), (200, 50));
        let msg = err.to_string();
        assert!(msg.contains("100x100"));
        assert!(msg.contains("200x50"));
    }

    #[test]
    fn test_materialize() {
        let err = Error::materialize("empty canvas");
        assert_eq!(err.to_string(), "cannot materialize image: empty canvas");
    }
}
