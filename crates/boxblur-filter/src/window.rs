//! Sliding-window accumulation along one axis
//!
//! A window of radius `r` centred on position `p` covers `[p - r, p + r]`.
//! Moving the centre one step retires the cell at `p - r - 1` and admits the
//! cell at `p + r`, so each position costs two updates regardless of `r`.
//!
//! Two boundary treatments are provided:
//!
//! - [`slide_truncated`]: out-of-line cells are excluded, so the cell count
//!   grows from `r + 1` to `2r + 1` and shrinks back near the far end.
//! - [`slide_replicated`]: out-of-line cells take the value of the nearest
//!   edge cell and the count is fixed at `2r + 1`.

/// Round `sum / count` to the nearest integer, ties away from zero.
///
/// Computed exactly in integer arithmetic. `count` must be non-zero.
///
/// # Examples
///
/// ```
/// use boxblur_filter::window::round_div;
///
/// assert_eq!(round_div(3, 2), 2); // 1.5
/// assert_eq!(round_div(7, 3), 2); // 2.33
/// assert_eq!(round_div(8, 3), 3); // 2.67
/// ```
#[inline]
pub fn round_div(sum: u64, count: u64) -> u64 {
    (2 * sum + count) / (2 * count)
}

/// [`round_div`] over 128-bit sums.
///
/// Edge-replicated windows hold `(2r + 1)²` cells for any `u32` radius,
/// which overflows `u64` once `r` reaches about 2^27.
#[inline]
pub fn round_div_wide(sum: u128, count: u128) -> u128 {
    (2 * sum + count) / (2 * count)
}

/// True when moving the centre to `pos` retires a cell that lies inside the
/// line, i.e. `pos - radius - 1 >= 0`.
#[inline]
pub fn trailing_in_bounds(pos: usize, radius: usize) -> bool {
    pos > radius
}

/// True when moving the centre to `pos` admits a cell that lies inside a
/// line of `len` cells, i.e. `pos + radius < len`.
///
/// `pos` must be less than `len`.
#[inline]
pub fn leading_in_bounds(pos: usize, radius: usize, len: usize) -> bool {
    radius < len - pos
}

/// Number of cells in the truncated window at position 0.
#[inline]
pub fn initial_extent(radius: usize, len: usize) -> usize {
    radius.min(len.saturating_sub(1)) + 1
}

/// Running `(sum, count)` of a truncated window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowState {
    sum: u64,
    count: u64,
}

impl WindowState {
    /// Create an empty window
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of the cells currently in the window
    #[inline]
    pub fn sum(&self) -> u64 {
        self.sum
    }

    /// Number of cells currently in the window
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Add a cell entering at the leading edge
    #[inline]
    pub fn admit(&mut self, value: u64) {
        self.sum += value;
        self.count += 1;
    }

    /// Remove a cell leaving at the trailing edge
    #[inline]
    pub fn retire(&mut self, value: u64) {
        self.sum -= value;
        self.count -= 1;
    }

    /// Rounded mean of the window
    ///
    /// An empty window has mean 0.
    #[inline]
    pub fn mean(&self) -> u64 {
        if self.count == 0 {
            return 0;
        }
        round_div(self.sum, self.count)
    }
}

/// Slide a truncated window along a line of `len` cells.
///
/// `sample(i)` reads cell `i` of the line. `emit(pos, window)` is called
/// once per position, in order, with the window centred on `pos`.
pub fn slide_truncated<F, E>(len: usize, radius: usize, sample: F, mut emit: E)
where
    F: Fn(usize) -> u64,
    E: FnMut(usize, &WindowState),
{
    if len == 0 {
        return;
    }

    let mut window = WindowState::new();
    for i in 0..initial_extent(radius, len) {
        window.admit(sample(i));
    }
    emit(0, &window);

    for pos in 1..len {
        if trailing_in_bounds(pos, radius) {
            window.retire(sample(pos - radius - 1));
        }
        if leading_in_bounds(pos, radius, len) {
            window.admit(sample(pos + radius));
        }
        emit(pos, &window);
    }
}

/// Slide an edge-replicated window along a line of `len` cells.
///
/// Positions outside `[0, len)` read the nearest edge cell, so every window
/// holds exactly `2 * radius + 1` cells. `emit(pos, sum)` receives the
/// window sum centred on `pos`. Overhang past either end is added as a
/// single multiple of the edge cell, so the setup costs
/// O(min(radius, len)) whatever the radius.
pub fn slide_replicated<F, E>(len: usize, radius: usize, sample: F, mut emit: E)
where
    F: Fn(usize) -> u128,
    E: FnMut(usize, u128),
{
    if len == 0 {
        return;
    }

    let last = len - 1;
    let at = |p: i64| -> u128 {
        if p <= 0 {
            sample(0)
        } else if p as usize >= last {
            sample(last)
        } else {
            sample(p as usize)
        }
    };

    // Initial window [-r, r]: r copies of cell 0 on the left, the in-line
    // cells, and copies of the last cell for whatever overhangs the end.
    let inside = radius.min(last);
    let mut sum = radius as u128 * sample(0);
    for i in 0..=inside {
        sum += sample(i);
    }
    sum += (radius - inside) as u128 * sample(last);
    emit(0, sum);

    let r = radius as i64;
    for pos in 1..len {
        let p = pos as i64;
        sum -= at(p - r - 1);
        sum += at(p + r);
        emit(pos, sum);
    }
}

/// One-dimensional truncated mean filter.
///
/// # Examples
///
/// ```
/// use boxblur_filter::window::mean_filter_1d;
///
/// assert_eq!(mean_filter_1d(&[10, 20, 30], 1), vec![15, 20, 25]);
/// ```
pub fn mean_filter_1d(line: &[u8], radius: u32) -> Vec<u8> {
    let mut out = vec![0u8; line.len()];
    slide_truncated(
        line.len(),
        radius as usize,
        |i| u64::from(line[i]),
        |pos, window| out[pos] = window.mean() as u8,
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(len: usize, radius: usize) -> Vec<u64> {
        let mut counts = Vec::new();
        slide_truncated(len, radius, |_| 1, |_, w| counts.push(w.count()));
        counts
    }

    #[test]
    fn test_round_div_ties_away_from_zero() {
        assert_eq!(round_div(1, 2), 1);
        assert_eq!(round_div(3, 2), 2);
        assert_eq!(round_div(5, 2), 3);
        assert_eq!(round_div(0, 7), 0);
        assert_eq!(round_div(255 * 9, 9), 255);
    }

    #[test]
    fn test_trailing_predicate() {
        assert!(!trailing_in_bounds(0, 0));
        assert!(trailing_in_bounds(1, 0));
        assert!(!trailing_in_bounds(2, 2));
        assert!(trailing_in_bounds(3, 2));
    }

    #[test]
    fn test_leading_predicate() {
        // len = 5, radius = 2: cell pos + 2 exists for pos 1 and 2
        assert!(leading_in_bounds(1, 2, 5));
        assert!(leading_in_bounds(2, 2, 5));
        assert!(!leading_in_bounds(3, 2, 5));
        assert!(!leading_in_bounds(4, 2, 5));
        // Radius wider than the line never admits
        assert!(!leading_in_bounds(1, 10, 5));
    }

    #[test]
    fn test_initial_extent() {
        assert_eq!(initial_extent(0, 5), 1);
        assert_eq!(initial_extent(2, 5), 3);
        assert_eq!(initial_extent(4, 5), 5);
        assert_eq!(initial_extent(100, 5), 5);
    }

    #[test]
    fn test_window_counts_grow_then_shrink() {
        assert_eq!(counts(7, 2), vec![3, 4, 5, 5, 5, 4, 3]);
        assert_eq!(counts(5, 1), vec![2, 3, 3, 3, 2]);
        assert_eq!(counts(4, 0), vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_window_counts_radius_exceeds_line() {
        assert_eq!(counts(3, 3), vec![3, 3, 3]);
        assert_eq!(counts(4, 2), vec![3, 4, 4, 3]);
        assert_eq!(counts(1, 5), vec![1]);
    }

    #[test]
    fn test_window_state() {
        let mut w = WindowState::new();
        assert_eq!(w.mean(), 0);
        w.admit(10);
        w.admit(21);
        assert_eq!((w.sum(), w.count()), (31, 2));
        assert_eq!(w.mean(), 16);
        w.retire(10);
        assert_eq!((w.sum(), w.count()), (21, 1));
    }

    #[test]
    fn test_mean_filter_1d() {
        assert_eq!(mean_filter_1d(&[10, 20, 30], 1), vec![15, 20, 25]);
        assert_eq!(mean_filter_1d(&[1, 2], 1), vec![2, 2]);
        assert_eq!(mean_filter_1d(&[9, 8, 7], 0), vec![9, 8, 7]);
        assert!(mean_filter_1d(&[], 3).is_empty());
    }

    #[test]
    fn test_slide_replicated_matches_brute_force() {
        let line = [5u128, 0, 9, 3, 250, 17];
        let len = line.len() as i64;
        for radius in 0..9usize {
            let mut sums = Vec::new();
            slide_replicated(line.len(), radius, |i| line[i], |_, s| sums.push(s));

            let r = radius as i64;
            let expected: Vec<u128> = (0..len)
                .map(|p| (p - r..=p + r).map(|q| line[q.clamp(0, len - 1) as usize]).sum())
                .collect();
            assert_eq!(sums, expected, "radius {}", radius);
        }
    }

    #[test]
    fn test_slide_replicated_huge_radius() {
        // Nested passes: row sums of (2r + 1) * 255 fed back in as samples
        let radius = u32::MAX as usize;
        let side = 2 * radius as u128 + 1;
        let mut row_sums = Vec::new();
        slide_replicated(3, radius, |_| 255, |_, s| row_sums.push(s));
        assert_eq!(row_sums, vec![side * 255; 3]);

        let mut totals = Vec::new();
        slide_replicated(3, radius, |i| row_sums[i], |_, s| totals.push(s));
        assert_eq!(totals, vec![side * side * 255; 3]);
        assert_eq!(round_div_wide(totals[0], side * side), 255);
    }

    #[test]
    fn test_round_div_wide_matches_narrow() {
        for (sum, count) in [(1u64, 2u64), (3, 2), (7, 3), (8, 3), (255 * 9, 9)] {
            assert_eq!(
                round_div_wide(u128::from(sum), u128::from(count)),
                u128::from(round_div(sum, count))
            );
        }
    }
}
