//! Error types for boxblur-filter
//!
//! Every check runs before a blur touches its input, so an error always
//! means no output was produced.

use thiserror::Error;

/// Errors that can occur during blur operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] boxblur_core::Error),

    /// Width or height is not strictly positive
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimension {
        /// Requested width
        width: i64,
        /// Requested height
        height: i64,
    },

    /// Kernel radius is negative
    #[error("invalid radius: {0}")]
    InvalidRadius(i64),

    /// Sample buffer length does not match `width * height`
    #[error("shape mismatch: expected {expected} samples, got {actual}")]
    ShapeMismatch {
        /// `width * height`
        expected: usize,
        /// Length of the buffer supplied
        actual: usize,
    },

    /// Unknown blur method name
    #[error("unknown blur method: {0}")]
    UnknownMethod(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
