//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build a test grid
    #[error("failed to build test grid: {0}")]
    Core(#[from] boxblur_core::Error),

    /// Grid shapes differ
    #[error("grid shape mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    ShapeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Grid comparison failed
    #[error("grid mismatch at ({x}, {y}): expected {expected}, got {actual}")]
    GridMismatch {
        x: u32,
        y: u32,
        expected: u8,
        actual: u8,
    },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
