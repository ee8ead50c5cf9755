// File: crates/graph-core/src/types.rs
// Summary: Shared types and constants (surface sizes, margins, pixel points).

/// Default surface width in pixels.
pub const WIDTH: i32 = 560;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 360;

/// A point in pixel space (origin top-left, Y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset by `(dx, dy)` pixels.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

impl From<(f32, f32)> for PixelPoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Reserved pixel border around the plot area.
///
/// `left`/`bottom` hold the y-axis and x-axis label gutters, `right`/`top` are the
/// small padding that bounds the data scale. The `axis_*` and `grid_*` fields are
/// how close to the top and right surface edges the axis lines and gridlines reach;
/// `arrow_gap` leaves a gap between an axis end and its arrowhead tip.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Margins {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
    pub axis_top: u32,
    pub axis_right: u32,
    pub grid_top: u32,
    pub grid_right: u32,
    pub arrow_gap: u32,
}

impl Margins {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom, axis_top: 15, axis_right: 15, grid_top: 15, grid_right: 15, arrow_gap: 0 }
    }

    /// Axis lines and gridlines both stop `edge` pixels from the top and right edges.
    pub const fn with_edge(self, edge: u32) -> Self {
        self.with_axis_reach(edge, edge).with_grid_reach(edge, edge)
    }

    pub const fn with_axis_reach(mut self, top: u32, right: u32) -> Self {
        self.axis_top = top;
        self.axis_right = right;
        self
    }

    pub const fn with_grid_reach(mut self, top: u32, right: u32) -> Self {
        self.grid_top = top;
        self.grid_right = right;
        self
    }

    pub const fn with_arrow_gap(mut self, gap: u32) -> Self {
        self.arrow_gap = gap;
        self
    }

    /// Total horizontal margin (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(50, 20, 30, 50)
    }
}
