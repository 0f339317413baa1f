//! Flat-buffer entry points
//!
//! Callers that hold a bare row-major sample buffer and signed dimensions
//! go through [`blur_band`]. All parameters are validated before any work
//! starts, so a failure never leaves a partial result behind.

use crate::method::BlurMethod;
use crate::{FilterError, FilterResult};
use boxblur_core::Grid;

/// Validated blur parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlurParams {
    /// Width in samples, > 0
    pub width: u32,
    /// Height in samples, > 0
    pub height: u32,
    /// Kernel radius, >= 0
    pub radius: u32,
}

impl BlurParams {
    /// Validate raw dimensions and radius.
    ///
    /// # Errors
    ///
    /// - `FilterError::InvalidDimension` if `width <= 0` or `height <= 0`
    ///   (or either exceeds `u32::MAX`)
    /// - `FilterError::InvalidRadius` if `radius < 0` (or exceeds `u32::MAX`)
    pub fn new(width: i64, height: i64, radius: i64) -> FilterResult<Self> {
        let (w, h) = match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
            _ => return Err(FilterError::InvalidDimension { width, height }),
        };
        let radius = u32::try_from(radius).map_err(|_| FilterError::InvalidRadius(radius))?;

        Ok(BlurParams {
            width: w,
            height: h,
            radius,
        })
    }

    /// Validate raw dimensions and radius against a buffer of `len` samples.
    ///
    /// # Errors
    ///
    /// As [`BlurParams::new`], plus `FilterError::ShapeMismatch` if
    /// `len != width * height`.
    pub fn validate(width: i64, height: i64, radius: i64, len: usize) -> FilterResult<Self> {
        let params = Self::new(width, height, radius)?;

        let expected = params.sample_count();
        if len != expected {
            return Err(FilterError::ShapeMismatch {
                expected,
                actual: len,
            });
        }

        Ok(params)
    }

    /// `width * height`
    pub fn sample_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// Blur a row-major sample buffer.
///
/// # Errors
///
/// See [`BlurParams::validate`].
///
/// # Examples
///
/// ```
/// use boxblur_filter::{BlurMethod, blur_band};
///
/// let out = blur_band(BlurMethod::Separable, &[10, 20, 30], 3, 1, 1).unwrap();
/// assert_eq!(out, vec![15, 20, 25]);
/// assert!(blur_band(BlurMethod::Separable, &[10, 20, 30], 3, 1, -1).is_err());
/// ```
pub fn blur_band(
    method: BlurMethod,
    band: &[u8],
    width: i64,
    height: i64,
    radius: i64,
) -> FilterResult<Vec<u8>> {
    let params = BlurParams::validate(width, height, radius, band.len())?;
    let grid = Grid::from_data(params.width, params.height, band.to_vec())?;
    let out = method.blur(&grid, params.radius)?;
    Ok(out.into_data())
}
