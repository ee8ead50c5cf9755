// File: crates/graph-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

/// Tolerance for deciding that `max` is (within float error) a multiple of `step`.
const TICK_EPS: f64 = 1e-9;

/// Multiples of `step` from 0 to `max` inclusive (`floor(max / step) + 1` values).
/// Values are computed as `k * step` so long axes do not accumulate drift.
pub fn ticks(max: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !(max >= 0.0) || !max.is_finite() {
        return vec![0.0];
    }
    let count = (max / step + TICK_EPS).floor() as usize + 1;
    (0..count).map(|k| k as f64 * step).collect()
}

/// `steps` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Format a tick/coordinate value the way it reads on a hand-drawn graph:
/// whole numbers without a decimal point, others with their shortest form.
pub fn format_value(v: f64) -> String {
    let rounded = (v * 1e6).round() / 1e6;
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{rounded}")
}
