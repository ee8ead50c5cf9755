// File: crates/graph-core/src/scale.rs
// Summary: Coordinate mapper; data-space (x, y) to pixel-space transforms for one graph surface.

use crate::axis::AxisConfig;
use crate::dataset::SamplePoint;
use crate::geometry::PlotRect;
use crate::types::{Margins, PixelPoint};

/// Linear mapping of `[0, max]` data units onto `[origin_px, origin_px ± len_px]`.
/// `inverted` flips direction so data-up becomes pixel-up (decreasing Y).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub origin_px: f32,
    pub px_per_unit: f64,
    pub inverted: bool,
}

impl LinearScale {
    pub fn new(origin_px: f32, len_px: f32, max: f64, inverted: bool) -> Self {
        Self { origin_px, px_per_unit: len_px as f64 / max, inverted }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let d = (v * self.px_per_unit) as f32;
        if self.inverted { self.origin_px - d } else { self.origin_px + d }
    }
}

/// Maps data-space points onto a surface given its axis extents and margins.
///
/// Horizontal scale is `(width - left - right) / maxX`, vertical scale is
/// `(height - bottom - top) / maxY`. Pixel X grows from the left margin; pixel Y
/// is measured up from `height - bottom`. Out-of-range points are mapped the same
/// way and simply land outside the plot area.
#[derive(Clone, Copy, Debug)]
pub struct PlotMapper {
    pub x: LinearScale,
    pub y: LinearScale,
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
}

impl PlotMapper {
    pub fn new(axis: &AxisConfig, surface_size: (f32, f32), margins: Margins) -> Self {
        let (width, height) = surface_size;
        let plot_w = width - margins.hsum() as f32;
        let plot_h = height - margins.vsum() as f32;
        Self {
            x: LinearScale::new(margins.left as f32, plot_w, axis.max_x, false),
            y: LinearScale::new(height - margins.bottom as f32, plot_h, axis.max_y, true),
            width,
            height,
            margins,
        }
    }

    #[inline]
    pub fn to_pixel(&self, p: SamplePoint) -> PixelPoint {
        PixelPoint::new(self.x.to_px(p.x), self.y.to_px(p.y))
    }

    #[inline]
    pub fn xy(&self, x: f64, y: f64) -> PixelPoint {
        self.to_pixel(SamplePoint::new(x, y))
    }

    /// Pixel position of the data origin (axis corner).
    pub fn origin(&self) -> PixelPoint {
        PixelPoint::new(self.margins.left as f32, self.height - self.margins.bottom as f32)
    }

    /// Top end of the Y axis line.
    pub fn y_axis_end(&self) -> PixelPoint {
        PixelPoint::new(self.margins.left as f32, self.margins.axis_top as f32)
    }

    /// Right end of the X axis line.
    pub fn x_axis_end(&self) -> PixelPoint {
        PixelPoint::new(self.width - self.margins.axis_right as f32, self.origin().y)
    }

    /// Pixel Y where vertical gridlines start.
    pub fn grid_top(&self) -> f32 {
        self.margins.grid_top as f32
    }

    /// Pixel X where horizontal gridlines end.
    pub fn grid_right(&self) -> f32 {
        self.width - self.margins.grid_right as f32
    }

    /// Interior of the plot (inside the margins) used for hit testing clicks.
    pub fn interior(&self) -> PlotRect {
        PlotRect::interior(self.width, self.height, &self.margins)
    }
}

/// One-shot form of [`PlotMapper::to_pixel`].
pub fn to_pixel(p: SamplePoint, axis: &AxisConfig, surface_size: (f32, f32), margins: Margins) -> PixelPoint {
    PlotMapper::new(axis, surface_size, margins).to_pixel(p)
}
