// File: crates/graph-core/src/surface.rs
// Summary: Drawing-surface abstraction the renderer paints through, plus a recording backend.
// Notes:
// - Backends only need a handful of canvas-like primitives; layout decisions
//   (where ticks go, which way Y grows) all live in the renderer.
// - `RecordingSurface` keeps every call as a `DrawCommand` so output can be
//   inspected without rasterizing.

use skia_safe as skia;

use crate::geometry::PlotRect;
use crate::types::PixelPoint;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: skia::Color,
    pub width: f32,
    /// On/off dash lengths in pixels; `None` draws a solid stroke.
    pub dash: Option<[f32; 2]>,
}

impl Stroke {
    pub const fn solid(color: skia::Color, width: f32) -> Self {
        Self { color, width, dash: None }
    }

    pub const fn dashed(color: skia::Color, width: f32, on: f32, off: f32) -> Self {
        Self { color, width, dash: Some([on, off]) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    None,
    /// 90° counter-clockwise; text reads bottom-to-top.
    Ccw90,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: skia::Color,
    pub bold: bool,
    pub align: TextAlign,
    pub rotation: Rotation,
}

impl TextStyle {
    pub const fn new(size: f32, color: skia::Color) -> Self {
        Self { size, color, bold: false, align: TextAlign::Left, rotation: Rotation::None }
    }
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
    pub const fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
    pub const fn rotated(mut self) -> Self {
        self.rotation = Rotation::Ccw90;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    Line(PixelPoint),
    Quad { ctrl: PixelPoint, to: PixelPoint },
    Cubic { c1: PixelPoint, c2: PixelPoint, to: PixelPoint },
}

impl Segment {
    pub fn end(&self) -> PixelPoint {
        match *self {
            Segment::Line(to) | Segment::Quad { to, .. } | Segment::Cubic { to, .. } => to,
        }
    }
}

/// Open path in pixel space.
#[derive(Clone, Debug, PartialEq)]
pub struct PathSpec {
    pub start: PixelPoint,
    pub segments: Vec<Segment>,
}

impl PathSpec {
    pub fn new(start: PixelPoint) -> Self {
        Self { start, segments: Vec::new() }
    }
    pub fn line_to(mut self, to: PixelPoint) -> Self {
        self.segments.push(Segment::Line(to));
        self
    }
    pub fn quad_to(mut self, ctrl: PixelPoint, to: PixelPoint) -> Self {
        self.segments.push(Segment::Quad { ctrl, to });
        self
    }
    pub fn cubic_to(mut self, c1: PixelPoint, c2: PixelPoint, to: PixelPoint) -> Self {
        self.segments.push(Segment::Cubic { c1, c2, to });
        self
    }

    /// Start point followed by every segment end point, i.e. the on-curve points.
    pub fn vertices(&self) -> Vec<PixelPoint> {
        std::iter::once(self.start).chain(self.segments.iter().map(Segment::end)).collect()
    }
}

/// Canvas-like drawing target. Coordinates are pixels, origin top-left.
pub trait Surface {
    fn size(&self) -> (f32, f32);
    fn clear(&mut self, color: skia::Color);
    fn line(&mut self, from: PixelPoint, to: PixelPoint, stroke: Stroke);
    fn path(&mut self, path: &PathSpec, stroke: Stroke);
    fn fill_circle(&mut self, center: PixelPoint, radius: f32, color: skia::Color);
    fn stroke_rect(&mut self, rect: PlotRect, stroke: Stroke);
    /// Draw `text` with its baseline anchored at `at`, aligned per `style.align`.
    fn text(&mut self, text: &str, at: PixelPoint, style: &TextStyle);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(skia::Color),
    Line { from: PixelPoint, to: PixelPoint, stroke: Stroke },
    Path { path: PathSpec, stroke: Stroke },
    Circle { center: PixelPoint, radius: f32, color: skia::Color },
    Rect { rect: PlotRect, stroke: Stroke },
    Text { text: String, at: PixelPoint, style: TextStyle },
}

/// Surface that records draw calls instead of rasterizing them.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, commands: Vec::new() }
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, PixelPoint, &TextStyle)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, at, style } => Some((text.as_str(), *at, style)),
            _ => None,
        })
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|(t, _, _)| t == needle)
    }

    pub fn paths(&self) -> impl Iterator<Item = (&PathSpec, &Stroke)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Path { path, stroke } => Some((path, stroke)),
            _ => None,
        })
    }

    pub fn lines_with(&self, color: skia::Color) -> impl Iterator<Item = (PixelPoint, PixelPoint)> + '_ {
        self.commands.iter().filter_map(move |c| match c {
            DrawCommand::Line { from, to, stroke } if stroke.color == color => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (PixelPoint, f32, skia::Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle { center, radius, color } => Some((*center, *radius, *color)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
    fn clear(&mut self, color: skia::Color) {
        // A clear wipes the canvas, so older commands are no longer visible.
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }
    fn line(&mut self, from: PixelPoint, to: PixelPoint, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }
    fn path(&mut self, path: &PathSpec, stroke: Stroke) {
        self.commands.push(DrawCommand::Path { path: path.clone(), stroke });
    }
    fn fill_circle(&mut self, center: PixelPoint, radius: f32, color: skia::Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }
    fn stroke_rect(&mut self, rect: PlotRect, stroke: Stroke) {
        self.commands.push(DrawCommand::Rect { rect, stroke });
    }
    fn text(&mut self, text: &str, at: PixelPoint, style: &TextStyle) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), at, style: *style });
    }
}
