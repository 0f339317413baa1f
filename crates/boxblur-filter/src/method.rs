//! Interchangeable blur implementations
//!
//! Every blur takes a grid and a radius and returns a grid of the same
//! shape, so callers can swap implementations or cross-check one against
//! another.

use crate::{FilterError, FilterResult};
use crate::{box_blur_reference, box_blur_replicated, box_blur_separable};
use boxblur_core::Grid;
use std::fmt;
use std::str::FromStr;

/// A box blur over a sample grid
pub trait BoxBlur {
    /// Short name used in logs and on the command line
    fn name(&self) -> &'static str;

    /// Blur `grid` with a square window of the given radius
    fn blur(&self, grid: &Grid, radius: u32) -> FilterResult<Grid>;
}

/// Brute-force truncated box blur, see [`box_blur_reference`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceBlur;

/// Sliding-window truncated box blur, see [`box_blur_separable`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SeparableBlur;

/// Sliding-window edge-replicated box blur, see [`box_blur_replicated`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplicatedBlur;

impl BoxBlur for ReferenceBlur {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn blur(&self, grid: &Grid, radius: u32) -> FilterResult<Grid> {
        box_blur_reference(grid, radius)
    }
}

impl BoxBlur for SeparableBlur {
    fn name(&self) -> &'static str {
        "separable"
    }

    fn blur(&self, grid: &Grid, radius: u32) -> FilterResult<Grid> {
        box_blur_separable(grid, radius)
    }
}

impl BoxBlur for ReplicatedBlur {
    fn name(&self) -> &'static str {
        "replicated"
    }

    fn blur(&self, grid: &Grid, radius: u32) -> FilterResult<Grid> {
        box_blur_replicated(grid, radius)
    }
}

/// Blur implementation selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlurMethod {
    /// Direct O(W·H·r²) summation
    Reference,
    /// Two sliding-window passes, O(W·H)
    #[default]
    Separable,
    /// Two sliding-window passes with replicated edges
    Replicated,
}

impl BlurMethod {
    /// All methods, in menu order
    pub const ALL: [BlurMethod; 3] = [
        BlurMethod::Reference,
        BlurMethod::Separable,
        BlurMethod::Replicated,
    ];

    /// The implementation behind this method
    pub fn implementation(self) -> &'static dyn BoxBlur {
        match self {
            BlurMethod::Reference => &ReferenceBlur,
            BlurMethod::Separable => &SeparableBlur,
            BlurMethod::Replicated => &ReplicatedBlur,
        }
    }

    /// Short name of this method
    pub fn name(self) -> &'static str {
        self.implementation().name()
    }

    /// Whether border cells are averaged over in-grid cells only
    pub fn is_truncated(self) -> bool {
        !matches!(self, BlurMethod::Replicated)
    }

    /// Blur `grid` with this method
    pub fn blur(self, grid: &Grid, radius: u32) -> FilterResult<Grid> {
        self.implementation().blur(grid, radius)
    }
}

impl fmt::Display for BlurMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlurMethod {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlurMethod::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FilterError::UnknownMethod(s.to_string()))
    }
}
