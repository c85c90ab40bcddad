//! Error types for frame encoding

use std::io;
use thiserror::Error;

/// Frame encoding error.
///
/// Fatal for the frame being encoded only; the caller drops that frame.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// The deflate stream could not be produced
    #[error("compression failed: {0}")]
    Compress(#[from] io::Error),

    /// Pixel buffer shorter than `width * height * 4`
    #[error("pixel buffer too short: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Zero-sized or oversized image
    #[error("invalid image dimensions {width}x{height}")]
    Dimensions { width: u32, height: u32 },
}

/// Result type for encoding operations
pub type Result<T> = std::result::Result<T, EncodeError>;
