//! Grid and signal regression test
//!
//! Tests Grid construction, row-major access and statistics, and the
//! reproducibility of generated input signals.

use boxblur_core::{Error, Grid, SignalOptions, random_grid};
use boxblur_test::{RegParams, ramp_grid};

// ==========================================================================
// Test 1: Grid creation and layout
// ==========================================================================

#[test]
fn grid_reg_creation() {
    let mut rp = RegParams::new("grid_creation");

    let grid = Grid::new(640, 480).expect("Grid::new failed");
    rp.compare_values(640.0, grid.width() as f64, 0.0);
    rp.compare_values(480.0, grid.height() as f64, 0.0);
    rp.compare_values(307_200.0, grid.sample_count() as f64, 0.0);

    let data: Vec<u8> = (0..12).collect();
    let grid = Grid::from_data(4, 3, data).expect("Grid::from_data failed");
    // index(h, w) = h * width + w
    for y in 0..3u32 {
        for x in 0..4u32 {
            let expected = (y * 4 + x) as f64;
            rp.compare_values(expected, grid.get_sample(x, y).unwrap() as f64, 0.0);
        }
    }

    let bad = Grid::from_data(4, 3, vec![0; 11]);
    rp.compare_values(
        1.0,
        if matches!(bad, Err(Error::ShapeMismatch { .. })) { 1.0 } else { 0.0 },
        0.0,
    );
    let bad = Grid::new(0, 3);
    rp.compare_values(
        1.0,
        if matches!(bad, Err(Error::InvalidDimension { .. })) { 1.0 } else { 0.0 },
        0.0,
    );

    assert!(rp.cleanup(), "grid creation regression test failed");
}

// ==========================================================================
// Test 2: Statistics
// ==========================================================================

#[test]
fn grid_reg_statistics() {
    let mut rp = RegParams::new("grid_statistics");

    let grid = ramp_grid(10, 10).expect("ramp grid");
    let expected: u64 = (0..10u64)
        .flat_map(|y| (0..10u64).map(move |x| x + 3 * y))
        .sum();
    rp.compare_values(expected as f64, grid.sum() as f64, 0.0);
    rp.compare_values(expected as f64 / 100.0, grid.mean(), 1e-9);

    let template = grid.create_template();
    rp.compare_values(0.0, template.sum() as f64, 0.0);
    // Only (0, 0) of the ramp is zero
    rp.compare_values(
        99.0,
        grid.count_differences(&template).expect("same shape") as f64,
        0.0,
    );

    assert!(rp.cleanup(), "grid statistics regression test failed");
}

// ==========================================================================
// Test 3: Random signal
// ==========================================================================

#[test]
fn grid_reg_signal() {
    let mut rp = RegParams::new("grid_signal");

    let opts = SignalOptions::new(200, 100).with_seed(99);
    let a = random_grid(&opts).expect("signal a");
    let b = random_grid(&opts).expect("signal b");
    rp.compare_grids(&a, &b);

    // A uniform [0, 255] signal should have a mean near 127.5
    rp.compare_values(127.5, a.mean(), 5.0);

    let narrow = random_grid(&opts.clone().with_range(100, 110)).expect("narrow signal");
    let in_range = narrow.data().iter().all(|&v| (100..=110).contains(&v));
    rp.compare_values(1.0, if in_range { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "grid signal regression test failed");
}
