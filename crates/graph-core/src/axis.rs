// File: crates/graph-core/src/axis.rs
// Summary: Axis configuration (visible extent, tick interval, titles) for both axes of a graph.

use crate::error::{GraphError, Result};
use crate::grid::ticks;

/// Upper bound on `max / step` for either axis, so tick layout stays small.
pub const MAX_TICKS: f64 = 10_000.0;

#[derive(Clone, Debug, PartialEq)]
pub struct AxisConfig {
    pub max_x: f64,
    pub max_y: f64,
    pub x_step: f64,
    pub y_step: f64,
    pub x_label: String,
    pub y_label: String,
}

impl AxisConfig {
    pub fn new(max_x: f64, max_y: f64, x_step: f64, y_step: f64) -> Self {
        Self {
            max_x,
            max_y,
            x_step,
            y_step,
            x_label: String::new(),
            y_label: String::new(),
        }
    }

    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    /// Check the extent/step invariants: every bound and step strictly positive and finite,
    /// and at most `MAX_TICKS` steps along each axis.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("maxX", self.max_x),
            ("maxY", self.max_y),
            ("xStep", self.x_step),
            ("yStep", self.y_step),
        ];
        for (name, v) in fields {
            if !(v.is_finite() && v > 0.0) {
                return Err(GraphError::InvalidAxis(format!("{name} must be > 0, got {v}")));
            }
        }
        for (name, max, step) in [("x", self.max_x, self.x_step), ("y", self.max_y, self.y_step)] {
            let steps = max / step;
            if !(steps <= MAX_TICKS) {
                return Err(GraphError::InvalidAxis(format!(
                    "{name} axis has {steps} ticks, limit is {MAX_TICKS}"
                )));
            }
        }
        Ok(())
    }

    /// Tick positions along X: `0, xStep, 2*xStep, ..` up to `maxX` inclusive.
    pub fn x_ticks(&self) -> Vec<f64> {
        ticks(self.max_x, self.x_step)
    }

    /// Tick positions along Y: `0, yStep, 2*yStep, ..` up to `maxY` inclusive.
    pub fn y_ticks(&self) -> Vec<f64> {
        ticks(self.max_y, self.y_step)
    }
}
