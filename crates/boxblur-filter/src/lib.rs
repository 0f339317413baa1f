//! boxblur-filter - Box blur (mean filter) operations
//!
//! This crate provides three box blurs over 8-bit sample grids:
//!
//! - [`box_blur_reference`]: direct summation over every neighborhood,
//!   O(W·H·r²); border cells average over in-grid cells only
//! - [`box_blur_separable`]: horizontal then vertical sliding-window
//!   passes, O(W·H); identical output to the reference
//! - [`box_blur_replicated`]: sliding-window passes with a fixed
//!   `(2r + 1)²` divisor and clamp-to-edge borders
//!
//! All three round to the nearest integer with ties away from zero.
//! [`BoxBlur`] and [`BlurMethod`] let callers swap between them.

pub mod band;
mod error;
pub mod method;
pub mod reference;
pub mod replicated;
pub mod separable;
pub mod window;

pub use error::{FilterError, FilterResult};

// Re-export commonly used functions
pub use band::{BlurParams, blur_band};
pub use method::{BlurMethod, BoxBlur, ReferenceBlur, ReplicatedBlur, SeparableBlur};
pub use reference::box_blur_reference;
pub use replicated::box_blur_replicated;
pub use separable::{HorizontalPass, box_blur_separable, horizontal_pass, vertical_pass};
pub use window::{WindowState, mean_filter_1d};
