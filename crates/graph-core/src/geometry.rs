// File: crates/graph-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (plot rectangles, arrowheads, X markers).

use crate::types::{Margins, PixelPoint};

/// Arrowhead stroke length in pixels.
pub const ARROW_HEAD_LEN: f32 = 8.0;
/// Angle between each arrowhead stroke and the axis direction.
pub const ARROW_HEAD_ANGLE: f32 = std::f32::consts::PI / 6.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Interior of a `width` x `height` surface once the margins are removed.
    pub fn interior(width: f32, height: f32, m: &Margins) -> Self {
        Self::from_ltrb(
            m.left as f32,
            m.top as f32,
            width - m.right as f32,
            height - m.bottom as f32,
        )
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    /// Strict containment; points on the border are outside.
    pub fn contains(&self, p: PixelPoint) -> bool {
        p.x > self.left && p.x < self.right && p.y > self.top && p.y < self.bottom
    }
}

/// The two stroke end points of an arrowhead drawn at `to`, pointing away from `from`.
pub fn arrow_head(from: PixelPoint, to: PixelPoint) -> [PixelPoint; 2] {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    let wing = |a: f32| PixelPoint::new(to.x - ARROW_HEAD_LEN * a.cos(), to.y - ARROW_HEAD_LEN * a.sin());
    [wing(angle - ARROW_HEAD_ANGLE), wing(angle + ARROW_HEAD_ANGLE)]
}

/// The two diagonal strokes of an X marker centered at `c`.
pub fn x_mark(c: PixelPoint, half: f32) -> [(PixelPoint, PixelPoint); 2] {
    [
        (c.offset(-half, -half), c.offset(half, half)),
        (c.offset(half, -half), c.offset(-half, half)),
    ]
}
