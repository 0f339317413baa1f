//! boxblur-test - Regression test framework for boxblur
//!
//! This crate provides a small regression harness in the style of
//! `regutils`: each check bumps an index, failures are collected rather
//! than aborting, and [`RegParams::cleanup`] reports the outcome.
//!
//! # Usage
//!
//! ```ignore
//! use boxblur_test::{RegParams, test_grid};
//!
//! let mut rp = RegParams::new("separable");
//! let grid = test_grid(64, 48, 1).unwrap();
//! rp.compare_grids(&expected, &actual);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode, check_grids};

use boxblur_core::{Grid, SignalOptions, random_grid};

/// Build a reproducible random grid over the full sample range
pub fn test_grid(width: u32, height: u32, seed: u64) -> TestResult<Grid> {
    let opts = SignalOptions::new(width, height).with_seed(seed);
    Ok(random_grid(&opts)?)
}

/// Build a deterministic diagonal ramp, `(x + 3y) mod 256`
pub fn ramp_grid(width: u32, height: u32) -> TestResult<Grid> {
    let mut grid = Grid::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            grid.set_sample_unchecked(x, y, ((x + 3 * y) % 256) as u8);
        }
    }
    Ok(grid)
}
