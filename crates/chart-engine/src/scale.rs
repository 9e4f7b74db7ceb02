// File: crates/chart-engine/src/scale.rs
// Summary: "Nice" Y-axis maximum and gridline values.

/// Axis ceiling used when the series is empty or all zero.
pub const DEFAULT_MAX: f64 = 100.0;

/// Steps between gridlines (five lines at 0/25/50/75/100%).
pub const GRID_STEPS: usize = 4;

// Snap candidates for the normalized step, ascending.
const SNAP: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Compute the nice axis maximum for a raw metric maximum.
///
/// Pure function of `raw_max`: the result is deterministic, always
/// >= `raw_max`, and divides into `GRID_STEPS` even steps whose size is
/// one of {1, 2, 2.5, 5, 10} times a power of ten.
pub fn nice_max(raw_max: f64) -> f64 {
    if !raw_max.is_finite() || raw_max <= 0.0 {
        return DEFAULT_MAX;
    }
    // 5% headroom above the data maximum.
    let target = raw_max * 1.05;
    let step = target / GRID_STEPS as f64;
    let magnitude = 10f64.powf(step.log10().floor());
    let normalized = step / magnitude;
    let snapped = SNAP.iter().copied().find(|&s| s >= normalized).unwrap_or(10.0);
    snapped * magnitude * GRID_STEPS as f64
}

/// Gridline values at 100/75/50/25/0% of the nice maximum, ordered
/// top-to-bottom as drawn.
pub fn gridline_values(nice_max: f64) -> [f64; GRID_STEPS + 1] {
    let step = nice_max / GRID_STEPS as f64;
    [nice_max, step * 3.0, step * 2.0, step, 0.0]
}
