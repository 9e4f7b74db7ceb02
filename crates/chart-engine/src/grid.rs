// File: crates/chart-engine/src/grid.rs
// Summary: Tick layout helpers for gridlines and x-axis labels.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Indices of samples that receive an x-axis label: roughly `target`
/// evenly spaced ticks, first and last sample always included, whatever
/// the series length.
pub fn tick_indices(len: usize, target: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    if target <= 1 || len <= target {
        return (0..len).collect();
    }
    let step = (len - 1) as f64 / (target - 1) as f64;
    let mut out: Vec<usize> = (0..target)
        .map(|i| (i as f64 * step).round() as usize)
        .collect();
    out.dedup();
    out
}
