//! Fixed-divisor box blur with replicated edges
//!
//! Same two-pass sliding-window structure as the separable blur, but every
//! window holds exactly `(2r + 1)²` cells: positions past the grid edge
//! read the nearest edge sample. The divisor is a constant, so the final
//! normalisation is a single division by `(2r + 1)²`. Sums are held in
//! `u128` since that divisor outgrows `u64` for radii near `u32::MAX`.

use crate::FilterResult;
use crate::window::{round_div_wide, slide_replicated};
use boxblur_core::Grid;

/// Box blur with a constant `(2r + 1)²` divisor and clamp-to-edge borders.
///
/// Interior cells agree with the truncated blurs. Border cells weight the
/// edge sample more heavily instead of averaging over fewer cells. A
/// radius of 0 returns a copy of the input.
///
/// # Examples
///
/// ```
/// use boxblur_core::Grid;
/// use boxblur_filter::box_blur_replicated;
///
/// let grid = Grid::from_data(3, 1, vec![10, 20, 30]).unwrap();
/// let out = box_blur_replicated(&grid, 1).unwrap();
/// // (10 + 10 + 20) / 3, (10 + 20 + 30) / 3, (20 + 30 + 30) / 3
/// assert_eq!(out.data(), &[13, 20, 27]);
/// ```
pub fn box_blur_replicated(grid: &Grid, radius: u32) -> FilterResult<Grid> {
    let (w, h) = grid.dimensions();
    log::debug!("replicated box blur: {}x{} radius {}", w, h, radius);

    if radius == 0 {
        return Ok(grid.clone());
    }

    let width = w as usize;
    let r = radius as usize;

    // Horizontal pass: row sums with replicated ends
    let mut sums = vec![0u128; grid.sample_count()];
    for y in 0..h {
        let row = grid.row(y);
        let out = &mut sums[(y as usize) * width..(y as usize + 1) * width];
        slide_replicated(width, r, |i| u128::from(row[i]), |x, sum| out[x] = sum);
    }

    // Vertical pass over the row sums
    let side = 2 * u128::from(radius) + 1;
    let divisor = side * side;
    let mut out = Grid::new(w, h)?;
    let data = out.data_mut();
    for x in 0..width {
        slide_replicated(
            h as usize,
            r,
            |y| sums[y * width + x],
            |y, sum| data[y * width + x] = round_div_wide(sum, divisor) as u8,
        );
    }

    Ok(out)
}
