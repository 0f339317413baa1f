//! Grid - 2D array of grayscale samples
//!
//! `Grid` is the input and output type of every blur. It stores one `u8`
//! per cell in a flat row-major buffer.
//!
//! # Examples
//!
//! ```
//! use boxblur_core::Grid;
//!
//! // Create a 3x2 grid from raw samples
//! let grid = Grid::from_data(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
//!
//! assert_eq!(grid.get_sample(2, 1).unwrap(), 6);
//! assert_eq!(grid.row(0), &[1, 2, 3]);
//! assert_eq!(grid.sum(), 21);
//! ```

use crate::error::{Error, Result};

/// Grayscale sample grid
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The sample at
/// column `x`, row `y` is at index `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Width in samples
    width: u32,
    /// Height in samples
    height: u32,
    /// Sample data (row-major, no padding)
    data: Vec<u8>,
}

impl Grid {
    /// Create a new Grid with all samples set to zero
    ///
    /// # Arguments
    ///
    /// * `width` - Width in samples (must be > 0)
    /// * `height` - Height in samples (must be > 0)
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, 0)
    }

    /// Create a new Grid with all samples set to `value`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxblur_core::Grid;
    ///
    /// let grid = Grid::new_with_value(4, 4, 128).unwrap();
    /// assert!(grid.data().iter().all(|&v| v == 128));
    /// ```
    pub fn new_with_value(width: u32, height: u32, value: u8) -> Result<Self> {
        check_dimensions(width, height)?;

        let size = (width as usize) * (height as usize);
        Ok(Grid {
            width,
            height,
            data: vec![value; size],
        })
    }

    /// Create a Grid from raw row-major samples
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0, and
    /// `Error::ShapeMismatch` if `data.len() != width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        check_dimensions(width, height)?;

        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Grid {
            width,
            height,
            data,
        })
    }

    /// Create a zeroed grid with the same dimensions as this one
    pub fn create_template(&self) -> Grid {
        Grid {
            width: self.width,
            height: self.height,
            data: vec![0; self.data.len()],
        }
    }

    /// Get the grid width in samples
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height in samples
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the grid dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of samples (`width * height`)
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.data.len()
    }

    /// Flat index of the sample at (x, y)
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Get the sample at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get_sample(&self, x: u32, y: u32) -> Result<u8> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: self.index(x, y),
                len: self.data.len(),
            });
        }
        Ok(self.data[self.index(x, y)])
    }

    /// Set the sample at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set_sample(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: self.index(x, y),
                len: self.data.len(),
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = value;
        Ok(())
    }

    /// Get the sample at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if the flat index falls outside the buffer.
    #[inline]
    pub fn get_sample_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data[self.index(x, y)]
    }

    /// Set the sample at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if the flat index falls outside the buffer.
    #[inline]
    pub fn set_sample_unchecked(&mut self, x: u32, y: u32, value: u8) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Get raw access to the sample data
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable access to the sample data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the grid and return its row-major buffer
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get a row of sample data
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = (y as usize) * (self.width as usize);
        &self.data[start..start + self.width as usize]
    }

    /// Get a mutable row of sample data
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = (y as usize) * (self.width as usize);
        &mut self.data[start..start + self.width as usize]
    }

    /// Sum of all samples
    pub fn sum(&self) -> u64 {
        self.data.iter().map(|&v| u64::from(v)).sum()
    }

    /// Arithmetic mean of all samples
    pub fn mean(&self) -> f64 {
        self.sum() as f64 / self.data.len() as f64
    }

    /// Count the cells where this grid and `other` differ
    ///
    /// # Errors
    ///
    /// Returns `Error::ShapeMismatch` if the grids have different sizes.
    pub fn count_differences(&self, other: &Grid) -> Result<usize> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::ShapeMismatch {
                expected: self.data.len(),
                actual: other.data.len(),
            });
        }
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .filter(|(a, b)| a != b)
            .count())
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension {
            width: i64::from(width),
            height: i64::from(height),
        });
    }
    Ok(())
}
