//! Error types for boxblur-core
//!
//! Provides a unified error type for grid construction, sample access and
//! signal generation. Each variant carries the offending values so callers
//! can report them without re-deriving context.

use thiserror::Error;

/// Boxblur core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Width or height is not strictly positive
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: i64, height: i64 },

    /// Sample buffer length does not match `width * height`
    #[error("shape mismatch: expected {expected} samples, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for boxblur core operations
pub type Result<T> = std::result::Result<T, Error>;
