//! Boxblur Core - Sample grids and input signals
//!
//! This crate provides the data model shared by every blur implementation:
//!
//! - [`Grid`] - A row-major 2D array of 8-bit grayscale samples
//! - [`SignalOptions`] / [`random_grid`] - Reproducible synthetic input
//! - [`Error`] / [`Result`] - Validation errors
//!
//! Grids are plain owned buffers. Filters read an input grid and allocate
//! a fresh output grid; nothing is shared between calls.

pub mod error;
pub mod grid;
pub mod signal;

pub use error::{Error, Result};
pub use grid::Grid;
pub use signal::{SignalOptions, random_grid};

/// Largest value a sample can hold
pub const MAX_SAMPLE: u8 = u8::MAX;
