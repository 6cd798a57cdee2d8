// File: crates/pulse-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

use crate::domain::Domain;
use crate::scale::ValueScale;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Evenly spaced axis ticks: (pixel y, value) pairs, top to bottom.
pub fn value_ticks(domain: Domain, height: f32, count: usize) -> Vec<(f32, f64)> {
    let scale = ValueScale::new(height, domain);
    linspace(domain.max, domain.min, count.max(2))
        .into_iter()
        .map(|v| (scale.to_px(v), v))
        .collect()
}
