//! Brute-force box blur
//!
//! Sums the `(2r + 1) x (2r + 1)` neighborhood of every cell, clipped to
//! the grid. Cells outside the grid are not counted, so border cells
//! average over a smaller neighborhood. Runs in O(W·H·min(r, W)·min(r, H))
//! and serves as the baseline the sliding-window filters are checked
//! against.

use crate::FilterResult;
use crate::window::round_div;
use boxblur_core::Grid;

/// Sum and count of the in-grid cells within `radius` of (x, y).
///
/// The count is always at least 1 since (x, y) itself is in the grid.
///
/// # Examples
///
/// ```
/// use boxblur_core::Grid;
/// use boxblur_filter::reference::neighborhood;
///
/// let grid = Grid::new_with_value(10, 10, 1).unwrap();
/// // Corner cell sees a (r+1) x (r+1) quarter of its window
/// assert_eq!(neighborhood(&grid, 0, 0, 2), (9, 9));
/// ```
pub fn neighborhood(grid: &Grid, x: u32, y: u32, radius: u32) -> (u64, u64) {
    let (w, h) = grid.dimensions();
    let (x0, x1) = clip_span(x, radius, w);
    let (y0, y1) = clip_span(y, radius, h);

    let mut sum = 0u64;
    for sy in y0..=y1 {
        sum += grid.row(sy)[x0 as usize..=x1 as usize]
            .iter()
            .map(|&v| u64::from(v))
            .sum::<u64>();
    }
    let count = u64::from(x1 - x0 + 1) * u64::from(y1 - y0 + 1);

    (sum, count)
}

/// In-line part of `[pos - radius, pos + radius]` on a line of `len` cells.
fn clip_span(pos: u32, radius: u32, len: u32) -> (u32, u32) {
    (pos.saturating_sub(radius), pos.saturating_add(radius).min(len - 1))
}

/// Box blur by direct summation over each neighborhood.
///
/// Each output cell is `round(sum / count)` over the in-grid cells of its
/// window, rounding ties away from zero. A radius of 0 returns a copy of
/// the input.
///
/// # Examples
///
/// ```
/// use boxblur_core::Grid;
/// use boxblur_filter::box_blur_reference;
///
/// let grid = Grid::from_data(3, 1, vec![10, 20, 30]).unwrap();
/// let out = box_blur_reference(&grid, 1).unwrap();
/// assert_eq!(out.data(), &[15, 20, 25]);
/// ```
pub fn box_blur_reference(grid: &Grid, radius: u32) -> FilterResult<Grid> {
    let (w, h) = grid.dimensions();
    log::debug!("reference box blur: {}x{} radius {}", w, h, radius);

    let mut out = grid.create_template();
    if radius == 0 {
        out.data_mut().copy_from_slice(grid.data());
        return Ok(out);
    }

    for y in 0..h {
        for x in 0..w {
            let (sum, count) = neighborhood(grid, x, y, radius);
            out.set_sample_unchecked(x, y, round_div(sum, count) as u8);
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_grid(w: u32, h: u32) -> Grid {
        let mut grid = Grid::new(w, h).unwrap();
        for y in 0..h {
            for x in 0..w {
                grid.set_sample_unchecked(x, y, ((x * 50 + y * 10) % 256) as u8);
            }
        }
        grid
    }

    #[test]
    fn test_reference_concrete_row() {
        let grid = Grid::from_data(3, 1, vec![10, 20, 30]).unwrap();
        let out = box_blur_reference(&grid, 1).unwrap();
        assert_eq!(out.data(), &[15, 20, 25]);
    }

    #[test]
    fn test_reference_radius_zero_is_identity() {
        let grid = create_test_grid(5, 5);
        let out = box_blur_reference(&grid, 0).unwrap();
        assert_eq!(out, grid);
    }

    #[test]
    fn test_reference_uniform_grid() {
        let grid = Grid::new_with_value(7, 4, 93).unwrap();
        for radius in [1, 2, 5, 20] {
            let out = box_blur_reference(&grid, radius).unwrap();
            assert!(out.data().iter().all(|&v| v == 93), "radius {}", radius);
        }
    }

    #[test]
    fn test_neighborhood_counts() {
        let grid = create_test_grid(6, 6);
        // Corner: (r+1)^2
        assert_eq!(neighborhood(&grid, 0, 0, 1).1, 4);
        assert_eq!(neighborhood(&grid, 5, 5, 2).1, 9);
        // Edge: (r+1)(2r+1)
        assert_eq!(neighborhood(&grid, 0, 3, 1).1, 6);
        // Interior: (2r+1)^2
        assert_eq!(neighborhood(&grid, 3, 3, 2).1, 25);
        // Window larger than the grid covers the whole grid
        assert_eq!(neighborhood(&grid, 2, 2, 10).1, 36);
    }

    #[test]
    fn test_neighborhood_huge_radius() {
        let grid = Grid::new_with_value(10, 10, 1).unwrap();
        assert_eq!(neighborhood(&grid, 0, 0, u32::MAX), (100, 100));
        assert_eq!(neighborhood(&grid, 9, 4, 1_000_000), (100, 100));

        let grid = create_test_grid(4, 3);
        let out = box_blur_reference(&grid, 1_000_000).unwrap();
        let mean = round_div(grid.sum(), 12) as u8;
        assert!(out.data().iter().all(|&v| v == mean));
    }

    #[test]
    fn test_reference_center_value() {
        // 3x3 with a single bright cell in the middle
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_sample_unchecked(1, 1, 90);
        let out = box_blur_reference(&grid, 1).unwrap();
        assert_eq!(out.get_sample_unchecked(1, 1), 10); // 90 / 9
        assert_eq!(out.get_sample_unchecked(0, 0), 23); // 90 / 4 = 22.5
        assert_eq!(out.get_sample_unchecked(1, 0), 15); // 90 / 6
    }
}
