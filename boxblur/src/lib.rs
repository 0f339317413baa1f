//! Boxblur - Box blur (mean filter) over grayscale sample grids
//!
//! # Overview
//!
//! Two interchangeable implementations of the same truncated box blur:
//!
//! - A brute-force reference that sums every neighborhood directly
//! - A separable sliding-window blur that runs in time independent of the
//!   radius and matches the reference exactly
//!
//! plus an edge-replicated sliding-window variant with a fixed divisor.
//!
//! # Example
//!
//! ```
//! use boxblur::{Grid, filter::BlurMethod};
//!
//! let grid = Grid::from_data(3, 1, vec![10, 20, 30]).unwrap();
//! let out = BlurMethod::Separable.blur(&grid, 1).unwrap();
//! assert_eq!(out.data(), &[15, 20, 25]);
//! ```

pub mod report;

// Re-export core types (primary data structures used everywhere)
pub use boxblur_core::*;

// Re-export the filter crate as a module
pub use boxblur_filter as filter;
