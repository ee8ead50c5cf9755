// File: crates/graph-core/src/theme.rs
// Summary: Named color themes for graph rendering, plus hex color parsing.

use skia_safe as skia;

use crate::error::{GraphError, Result};

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub tick_label: skia::Color,
    pub axis_title: skia::Color,
    pub marker: skia::Color,
    pub placeholder: skia::Color,
    pub user_mark: skia::Color,
    /// Titles and default fit color of the illustration figures.
    pub accent: skia::Color,
    /// Origin / intercept dots in the illustration figures.
    pub highlight: skia::Color,
}

impl Theme {
    pub fn classroom() -> Self {
        Self {
            name: "classroom",
            background: skia::Color::from_rgb(0xff, 0xff, 0xff),
            grid: skia::Color::from_rgb(0xe2, 0xe8, 0xf0),
            axis_line: skia::Color::from_rgb(0x1e, 0x29, 0x3b),
            tick_label: skia::Color::from_rgb(0x64, 0x74, 0x8b),
            axis_title: skia::Color::from_rgb(0x64, 0x74, 0x8b),
            marker: skia::Color::from_rgb(0xef, 0x44, 0x44),
            placeholder: skia::Color::from_rgb(0x94, 0xa3, 0xb8),
            user_mark: skia::Color::from_rgb(0x10, 0xb9, 0x81),
            accent: skia::Color::from_rgb(0x66, 0x7e, 0xea),
            highlight: skia::Color::from_rgb(0xf5, 0x9e, 0x0b),
        }
    }

    /// Off-white variant used behind the step and FAQ figures.
    pub fn paper() -> Self {
        Self {
            name: "paper",
            background: skia::Color::from_rgb(0xf8, 0xfa, 0xfc),
            ..Self::classroom()
        }
    }

    pub fn chalkboard() -> Self {
        Self {
            name: "chalkboard",
            background: skia::Color::from_rgb(0x1f, 0x2a, 0x24),
            grid: skia::Color::from_rgb(0x33, 0x42, 0x3a),
            axis_line: skia::Color::from_rgb(0xf1, 0xf5, 0xf9),
            tick_label: skia::Color::from_rgb(0xcb, 0xd5, 0xe1),
            axis_title: skia::Color::from_rgb(0xe2, 0xe8, 0xf0),
            marker: skia::Color::from_rgb(0xfc, 0xa5, 0xa5),
            placeholder: skia::Color::from_rgb(0x94, 0xa3, 0xb8),
            user_mark: skia::Color::from_rgb(0x6e, 0xe7, 0xb7),
            accent: skia::Color::from_rgb(0xa5, 0xb4, 0xfc),
            highlight: skia::Color::from_rgb(0xfc, 0xd3, 0x4d),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classroom()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classroom(), Theme::paper(), Theme::chalkboard()]
}

/// Find a theme by its `name`, falling back to classroom.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    log::debug!("unknown theme '{name}', using classroom");
    Theme::classroom()
}

/// Parse `#rrggbb` or `#rgb` into an opaque color.
pub fn parse_hex_color(s: &str) -> Result<skia::Color> {
    let invalid = || GraphError::InvalidColor(s.to_string());
    let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    match hex.len() {
        6 => Ok(skia::Color::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        3 => {
            let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17).map_err(|_| invalid());
            Ok(skia::Color::from_rgb(nib(0)?, nib(1)?, nib(2)?))
        }
        _ => Err(invalid()),
    }
}

/// Same color with alpha scaled to `opacity` (0..=1).
pub fn with_opacity(c: skia::Color, opacity: f32) -> skia::Color {
    let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    skia::Color::from_argb(a, c.r(), c.g(), c.b())
}
