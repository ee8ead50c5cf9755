// File: crates/graph-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; handles alignment, bold and rotated titles.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle as SkTextStyle};

use crate::surface::{Rotation, TextAlign, TextStyle};
use crate::types::PixelPoint;

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(style: &TextStyle) -> SkTextStyle {
        let mut ts = SkTextStyle::new();
        ts.set_font_size(style.size.max(1.0));
        ts.set_color(style.color);
        ts.set_font_families(&["Poppins", "Segoe UI", "Arial", "Helvetica", "DejaVu Sans", "sans-serif"]);
        if style.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, style: &TextStyle) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, self.fonts.clone());
        builder.push_style(&Self::make_style(style));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw with the baseline at `at`; horizontal alignment is relative to the
    /// text direction, so a rotated title centers along the vertical axis.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, at: PixelPoint, style: &TextStyle) {
        let p = self.layout(text, style);
        let w = p.longest_line();
        let dx = match style.align {
            TextAlign::Left => 0.0,
            TextAlign::Center => -w * 0.5,
            TextAlign::Right => -w,
        };
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        let dy = -style.size * 0.8;
        match style.rotation {
            Rotation::None => p.paint(canvas, (at.x + dx, at.y + dy)),
            Rotation::Ccw90 => {
                canvas.save();
                canvas.translate((at.x, at.y));
                canvas.rotate(-90.0, None);
                p.paint(canvas, (dx, dy));
                canvas.restore();
            }
        }
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
