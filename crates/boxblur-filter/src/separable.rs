//! Separable sliding-window box blur
//!
//! A uniform square box average is the composition of a horizontal and a
//! vertical 1-D box average. Each pass slides a running `(sum, count)`
//! window one cell at a time, so the whole blur is O(W·H) regardless of
//! radius.
//!
//! The horizontal pass keeps exact integer window sums instead of rounded
//! means. The window around (x, y) is the rectangle
//! `[x0, x1] x [y0, y1]` whose horizontal extent depends only on `x` and
//! vertical extent only on `y`, so the vertical sum of horizontal sums
//! divided by `count_h(x) * count_v(y)` is exactly the 2-D mean. Rounding
//! happens once, at the end, and the result matches
//! [`box_blur_reference`](crate::box_blur_reference) cell for cell.

use crate::FilterResult;
use crate::window::{round_div, slide_truncated};
use boxblur_core::Grid;

/// Intermediate result of the horizontal pass
#[derive(Debug, Clone)]
pub struct HorizontalPass {
    width: u32,
    height: u32,
    /// Row-major window sums
    sums: Vec<u64>,
    /// Horizontal cell count per column (identical for every row)
    counts: Vec<u64>,
}

impl HorizontalPass {
    /// Window sum centred on (x, y)
    #[inline]
    pub fn sum(&self, x: u32, y: u32) -> u64 {
        self.sums[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Number of cells in the horizontal window of column `x`
    #[inline]
    pub fn count(&self, x: u32) -> u64 {
        self.counts[x as usize]
    }

    /// Dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Slide a truncated window along every row.
pub fn horizontal_pass(grid: &Grid, radius: u32) -> HorizontalPass {
    let (w, h) = grid.dimensions();
    let width = w as usize;
    let mut sums = vec![0u64; grid.sample_count()];
    let mut counts = vec![0u64; width];

    for y in 0..h {
        let row = grid.row(y);
        let out = &mut sums[(y as usize) * width..(y as usize + 1) * width];
        slide_truncated(
            width,
            radius as usize,
            |i| u64::from(row[i]),
            |x, window| {
                out[x] = window.sum();
                counts[x] = window.count();
            },
        );
    }
    log::trace!("horizontal pass done: {} rows", h);

    HorizontalPass {
        width: w,
        height: h,
        sums,
        counts,
    }
}

/// Slide a truncated window down every column of the horizontal sums and
/// normalise by the composed cell count.
pub fn vertical_pass(pass: &HorizontalPass, radius: u32) -> FilterResult<Grid> {
    let (w, h) = pass.dimensions();
    let width = w as usize;
    let mut out = Grid::new(w, h)?;
    let data = out.data_mut();

    for x in 0..width {
        let count_h = pass.counts[x];
        slide_truncated(
            h as usize,
            radius as usize,
            |y| pass.sums[y * width + x],
            |y, window| {
                data[y * width + x] = round_div(window.sum(), count_h * window.count()) as u8;
            },
        );
    }
    log::trace!("vertical pass done: {} columns", w);

    Ok(out)
}

/// Box blur as a horizontal then a vertical sliding-window pass.
///
/// Produces the same output as
/// [`box_blur_reference`](crate::box_blur_reference) for every input, in
/// O(W·H) time. A radius of 0 returns a copy of the input.
///
/// # Examples
///
/// ```
/// use boxblur_core::Grid;
/// use boxblur_filter::box_blur_separable;
///
/// let grid = Grid::from_data(3, 1, vec![10, 20, 30]).unwrap();
/// let out = box_blur_separable(&grid, 1).unwrap();
/// assert_eq!(out.data(), &[15, 20, 25]);
/// ```
pub fn box_blur_separable(grid: &Grid, radius: u32) -> FilterResult<Grid> {
    let (w, h) = grid.dimensions();
    log::debug!("separable box blur: {}x{} radius {}", w, h, radius);

    if radius == 0 {
        return Ok(grid.clone());
    }

    let pass = horizontal_pass(grid, radius);
    vertical_pass(&pass, radius)
}
