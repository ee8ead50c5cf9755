// File: crates/graph-core/src/dataset.rs
// Summary: Dataset model: sample points, axis configuration and the hand-authored fit line/curve.
// Notes:
// - Fit shapes are literal coordinates picked by the lesson author. Nothing here
//   computes a regression; the tool teaches reading a given line, not deriving one.

use skia_safe as skia;

use crate::axis::AxisConfig;

/// A sample in data-space units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

impl SamplePoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for SamplePoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Geometry of the fit overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FitShape {
    /// Straight segment from `(0, line_start_y)` to the last sample.
    Straight,
    /// Smoothed path through every sample in order; each span is a quadratic whose
    /// control point sits halfway along X at the previous sample's height.
    Curve,
    /// Explicit straight segment between two data-space points.
    Segment { from: SamplePoint, to: SamplePoint },
    /// Single cubic from the first sample through two control points.
    Bezier { c1: SamplePoint, c2: SamplePoint, to: SamplePoint },
}

#[derive(Clone, Copy, Debug)]
pub struct FitSpec {
    pub color: skia::Color,
    pub line_start_y: f64,
    pub shape: FitShape,
}

impl FitSpec {
    pub fn straight(color: skia::Color, line_start_y: f64) -> Self {
        Self { color, line_start_y, shape: FitShape::Straight }
    }

    pub fn curve(color: skia::Color, line_start_y: f64) -> Self {
        Self { color, line_start_y, shape: FitShape::Curve }
    }

    pub fn segment(color: skia::Color, from: impl Into<SamplePoint>, to: impl Into<SamplePoint>) -> Self {
        let from = from.into();
        Self { color, line_start_y: from.y, shape: FitShape::Segment { from, to: to.into() } }
    }

    pub fn bezier(
        color: skia::Color,
        c1: impl Into<SamplePoint>,
        c2: impl Into<SamplePoint>,
        to: impl Into<SamplePoint>,
    ) -> Self {
        Self {
            color,
            line_start_y: 0.0,
            shape: FitShape::Bezier { c1: c1.into(), c2: c2.into(), to: to.into() },
        }
    }

    pub fn is_curve(&self) -> bool {
        matches!(self.shape, FitShape::Curve | FitShape::Bezier { .. })
    }
}

#[derive(Clone, Debug)]
pub struct Dataset {
    pub samples: Vec<SamplePoint>,
    pub axis: AxisConfig,
    pub fit: FitSpec,
}

impl Dataset {
    pub fn new(samples: Vec<SamplePoint>, axis: AxisConfig, fit: FitSpec) -> Self {
        Self { samples, axis, fit }
    }

    /// Build from `(x, y)` tuples; keeps the literal tables in the registry compact.
    pub fn from_pairs(pairs: &[(f64, f64)], axis: AxisConfig, fit: FitSpec) -> Self {
        Self::new(pairs.iter().copied().map(SamplePoint::from).collect(), axis, fit)
    }

    /// Sample highlighted as the intercept callout (the origin-adjacent first sample).
    pub fn intercept(&self) -> Option<SamplePoint> {
        self.samples.first().copied()
    }

    pub fn last(&self) -> Option<SamplePoint> {
        self.samples.last().copied()
    }
}
