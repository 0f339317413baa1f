//! Replicated-edge box blur regression test
//!
//! Away from the border every window lies inside the grid, so the
//! replicated blur must agree with the truncated blurs there. On the
//! border it weights the edge sample instead of shrinking the divisor.

use boxblur_core::Grid;
use boxblur_filter::{BlurMethod, box_blur_replicated, box_blur_separable};
use boxblur_test::{RegParams, test_grid};

#[test]
fn replicated_reg_interior() {
    let mut rp = RegParams::new("replicated_interior");

    let grid = test_grid(48, 36, 31).expect("random grid");
    for radius in [1, 2, 5, 9] {
        let replicated = box_blur_replicated(&grid, radius).expect("replicated");
        let truncated = box_blur_separable(&grid, radius).expect("separable");

        let (w, h) = grid.dimensions();
        let mut mismatches = 0;
        for y in radius..h - radius {
            for x in radius..w - radius {
                if replicated.get_sample_unchecked(x, y) != truncated.get_sample_unchecked(x, y) {
                    mismatches += 1;
                }
            }
        }
        rp.compare_values(0.0, mismatches as f64, 0.0);
    }

    assert!(rp.cleanup(), "replicated interior regression test failed");
}

#[test]
fn replicated_reg_edges() {
    let mut rp = RegParams::new("replicated_edges");

    // Step edge: left half 0, right half 240
    let mut grid = Grid::new(8, 3).expect("grid");
    for y in 0..3 {
        grid.row_mut(y)[4..].fill(240);
    }

    let out = BlurMethod::Replicated.blur(&grid, 2).expect("replicated");
    // x = 7 window: columns 5, 6, 7, 7, 7 -> all 240
    rp.compare_values(240.0, out.get_sample_unchecked(7, 1) as f64, 0.0);
    // x = 0 window: columns 0, 0, 0, 1, 2 -> all 0
    rp.compare_values(0.0, out.get_sample_unchecked(0, 1) as f64, 0.0);
    // x = 3 window: columns 1..=5 -> 2 of 5 lit = 96
    rp.compare_values(96.0, out.get_sample_unchecked(3, 0) as f64, 0.0);

    let uniform = Grid::new_with_value(6, 6, 222).expect("uniform");
    let out = box_blur_replicated(&uniform, 40).expect("wide radius");
    rp.compare_grids(&uniform, &out);

    assert!(rp.cleanup(), "replicated edges regression test failed");
}
