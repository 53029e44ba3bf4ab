//! Crate-wide error taxonomy.
//!
//! Every failure aborts the running pass; there are no retries and no
//! partial-result recovery beyond the generation pass's skip set.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the analysis passes.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing, unreadable or unsupported image file.
    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Failure while writing an output image.
    #[error("Failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Images of incompatible dimensions fed to tiling or differencing.
    #[error("{what}: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        what: &'static str,
        /// Expected (width, height).
        expected: (usize, usize),
        /// Actual (width, height).
        got: (usize, usize),
    },

    /// Normalization against an all-zero maximum.
    #[error("Cannot normalize: maximum value is zero")]
    ZeroMax,

    /// Model restore or inference failure.
    #[error("Inference failed: {0}")]
    Inference(String),

    /// Directory listing or plain file I/O failure.
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
