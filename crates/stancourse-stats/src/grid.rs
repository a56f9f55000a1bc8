//! Evenly spaced evaluation grids

/// `n` evenly spaced values from `start` to `end`, both endpoints included.
///
/// The last value is pinned to `end` so that it matches exactly even when
/// `start + (n - 1) * step` would round differently.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut grid: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            grid[n - 1] = end;
            grid
        }
    }
}
