// File: crates/stockline-core/src/grid.rs
// Summary: Evenly spaced tick layout helper.

/// `steps` evenly spaced values from `start` to `end`, both ends included.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps - 1) as f64;
    (0..steps).map(|i| start + step * i as f64).collect()
}
