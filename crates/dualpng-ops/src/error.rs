//! Error types for packing operations.

use dualpng_io::IoError;
use std::fmt;
use thiserror::Error;

/// Which of the two source images an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputRole {
    /// The image revealed over a black background.
    Black,
    /// The image revealed over a white background.
    White,
}

impl fmt::Display for InputRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputRole::Black => "black",
            InputRole::White => "white",
        })
    }
}

/// Error type for packing operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// A source image could not be read or decoded.
    #[error("cannot load {role} image")]
    Input {
        /// Which input failed.
        role: InputRole,
        /// Underlying I/O error.
        #[source]
        source: IoError,
    },

    /// The packed image could not be encoded or written.
    #[error("cannot write output")]
    Output(#[source] IoError),

    /// Canvas allocation, bounds or materialization failure.
    #[error(transparent)]
    Canvas(#[from] dualpng_core::Error),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The options file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl OpsError {
    /// Wraps an I/O error as a failure of the given input.
    pub fn input(role: InputRole, source: IoError) -> Self {
        Self::Input { role, source }
    }

    /// Returns the failing input, if the error is about one.
    pub fn role(&self) -> Option<InputRole> {
        match self {
            Self::Input { role, .. } => Some(*role),
            _ => None,
        }
    }
}

/// Result type for packing operations.
pub type OpsResult<T> = Result<T, OpsError>;
