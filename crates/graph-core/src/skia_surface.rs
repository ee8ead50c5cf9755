// File: crates/graph-core/src/skia_surface.rs
// Summary: Skia CPU raster backend for `Surface`, with PNG and RGBA8 export.

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;

use crate::error::{GraphError, Result};
use crate::geometry::PlotRect;
use crate::surface::{PathSpec, Segment, Stroke, Surface, TextStyle};
use crate::text::TextShaper;
use crate::types::PixelPoint;

pub struct SkiaSurface {
    surface: skia::Surface,
    shaper: TextShaper,
    width: i32,
    height: i32,
}

impl SkiaSurface {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| GraphError::Surface(format!("failed to create {width}x{height} raster surface")))?;
        Ok(Self { surface, shaper: TextShaper::new(), width, height })
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }

    /// Read back the canvas as tightly packed, unpremultiplied RGBA8.
    /// Returns `(pixels, width, height, row_bytes)`.
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = self.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(GraphError::Surface("pixel readback failed".into()));
        }
        Ok((pixels, self.width as u32, self.height as u32, row_bytes))
    }

    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.to_rgba8()?;
        let img = image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| GraphError::Surface("pixel buffer does not match surface size".into()))?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)
            .map_err(|e| GraphError::Surface(format!("encode PNG failed: {e}")))?;
        Ok(out.into_inner())
    }

    pub fn save_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

fn stroke_paint(stroke: Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width);
    paint.set_color(stroke.color);
    if let Some([on, off]) = stroke.dash {
        paint.set_path_effect(skia::PathEffect::dash(&[on, off], 0.0));
    }
    paint
}

fn pt(p: PixelPoint) -> skia::Point {
    skia::Point::new(p.x, p.y)
}

impl Surface for SkiaSurface {
    fn size(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    fn clear(&mut self, color: skia::Color) {
        self.surface.canvas().clear(color);
    }

    fn line(&mut self, from: PixelPoint, to: PixelPoint, stroke: Stroke) {
        self.surface.canvas().draw_line(pt(from), pt(to), &stroke_paint(stroke));
    }

    fn path(&mut self, path: &PathSpec, stroke: Stroke) {
        let mut p = skia::Path::new();
        p.move_to(pt(path.start));
        for seg in &path.segments {
            match *seg {
                Segment::Line(to) => { p.line_to(pt(to)); }
                Segment::Quad { ctrl, to } => { p.quad_to(pt(ctrl), pt(to)); }
                Segment::Cubic { c1, c2, to } => { p.cubic_to(pt(c1), pt(c2), pt(to)); }
            }
        }
        let mut paint = stroke_paint(stroke);
        paint.set_stroke_join(skia::paint::Join::Round);
        paint.set_stroke_cap(skia::paint::Cap::Round);
        self.surface.canvas().draw_path(&p, &paint);
    }

    fn fill_circle(&mut self, center: PixelPoint, radius: f32, color: skia::Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(color);
        self.surface.canvas().draw_circle(pt(center), radius, &paint);
    }

    fn stroke_rect(&mut self, rect: PlotRect, stroke: Stroke) {
        let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
        self.surface.canvas().draw_rect(r, &stroke_paint(stroke));
    }

    fn text(&mut self, text: &str, at: PixelPoint, style: &TextStyle) {
        let canvas = self.surface.canvas();
        self.shaper.draw(canvas, text, at, style);
    }
}
