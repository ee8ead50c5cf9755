// File: crates/graph-core/src/illustrations.rs
// Summary: Step-by-step and FAQ figures, described as registry datasets plus layout flags and annotations.

use skia_safe as skia;

use crate::dataset::SamplePoint;
use crate::error::Result;
use crate::geometry::PlotRect;
use crate::registry::Registry;
use crate::render::{render, GridMode, RenderOptions, VisibilityState};
use crate::scale::PlotMapper;
use crate::surface::{Stroke, Surface, TextAlign, TextStyle};
use crate::theme::Theme;
use crate::types::{Margins, PixelPoint};

/// Where an annotation is anchored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Place {
    /// Data-space point, then a pixel offset.
    Data { x: f64, y: f64, dx: f32, dy: f32 },
    /// Fraction of the surface size, then a pixel offset.
    Frac { fx: f32, fy: f32, dx: f32, dy: f32 },
}

impl Place {
    pub const fn data(x: f64, y: f64) -> Self {
        Self::Data { x, y, dx: 0.0, dy: 0.0 }
    }

    pub const fn data_offset(x: f64, y: f64, dx: f32, dy: f32) -> Self {
        Self::Data { x, y, dx, dy }
    }

    pub const fn frac(fx: f32, fy: f32, dx: f32, dy: f32) -> Self {
        Self::Frac { fx, fy, dx, dy }
    }

    pub fn resolve(&self, m: &PlotMapper) -> PixelPoint {
        match *self {
            Place::Data { x, y, dx, dy } => m.to_pixel(SamplePoint::new(x, y)).offset(dx, dy),
            Place::Frac { fx, fy, dx, dy } => PixelPoint::new(m.width * fx + dx, m.height * fy + dy),
        }
    }
}

/// Theme slot an annotation is painted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ink {
    Accent,
    Highlight,
    Muted,
    Label,
    Secondary,
    White,
}

impl Ink {
    pub fn color(self, theme: &Theme) -> skia::Color {
        match self {
            Ink::Accent => theme.accent,
            Ink::Highlight => theme.highlight,
            Ink::Muted => theme.placeholder,
            Ink::Label => theme.tick_label,
            Ink::Secondary => theme.user_mark,
            Ink::White => skia::Color::WHITE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Annotation {
    Note { text: String, at: Place, size: f32, bold: bool, ink: Ink, align: TextAlign },
    Dot { at: Place, radius: f32, ink: Ink },
    DashedBox { from: Place, to: Place, ink: Ink },
}

impl Annotation {
    pub fn note(text: impl Into<String>, at: Place, size: f32, ink: Ink) -> Self {
        Self::Note { text: text.into(), at, size, bold: false, ink, align: TextAlign::Left }
    }

    pub fn bold(mut self) -> Self {
        if let Self::Note { bold, .. } = &mut self {
            *bold = true;
        }
        self
    }

    pub fn centered(mut self) -> Self {
        if let Self::Note { align, .. } = &mut self {
            *align = TextAlign::Center;
        }
        self
    }
}

#[derive(Clone, Debug)]
pub struct Illustration {
    pub id: &'static str,
    /// Registry id of the dataset supplying samples, axis extents and fit.
    pub dataset: &'static str,
    pub visibility: VisibilityState,
    pub options: RenderOptions,
    pub annotations: Vec<Annotation>,
}

/// Figure options: no placeholder, no intercept callout, no grid/ticks/titles/arrows
/// unless a figure turns them back on.
fn figure(theme: Theme, margins: Margins) -> RenderOptions {
    RenderOptions {
        margins,
        theme,
        placeholder: None,
        grid: GridMode::Off,
        draw_tick_labels: false,
        draw_tick_marks: false,
        draw_titles: false,
        accent_titles: true,
        draw_arrows: false,
        highlight_intercept: false,
        marker_half: 5.0,
    }
}

/// Every built-in figure, in page order.
pub fn catalogue(theme: Theme) -> Vec<Illustration> {
    let fig = |margins| figure(theme, margins);
    let points = VisibilityState::new(true, false);
    let all = VisibilityState::ALL;
    let none = VisibilityState::HIDDEN;

    vec![
        Illustration {
            id: "step1",
            dataset: "step1",
            visibility: none,
            options: RenderOptions {
                draw_titles: true,
                draw_arrows: true,
                ..fig(Margins::new(40, 40, 40, 40).with_edge(40))
            },
            annotations: Vec::new(),
        },
        Illustration {
            id: "step2",
            dataset: "step2",
            visibility: none,
            options: RenderOptions {
                draw_tick_marks: true,
                draw_tick_labels: true,
                ..fig(Margins::new(40, 40, 40, 40).with_edge(40))
            },
            annotations: Vec::new(),
        },
        Illustration {
            id: "step3",
            dataset: "step3",
            visibility: none,
            options: RenderOptions { draw_titles: true, ..fig(Margins::new(50, 20, 20, 50).with_edge(20)) },
            annotations: vec![
                Annotation::DashedBox {
                    from: Place::frac(0.5, 1.0, -50.0, -25.0),
                    to: Place::frac(0.5, 1.0, 80.0, -5.0),
                    ink: Ink::Secondary,
                },
                Annotation::DashedBox {
                    from: Place::frac(0.0, 0.5, 5.0, -55.0),
                    to: Place::frac(0.0, 0.5, 25.0, 35.0),
                    ink: Ink::Secondary,
                },
            ],
        },
        Illustration {
            id: "step4",
            dataset: "step4",
            visibility: points,
            options: fig(Margins::new(40, 30, 30, 40).with_edge(20)),
            annotations: Vec::new(),
        },
        Illustration {
            id: "step5",
            dataset: "step5",
            visibility: all,
            options: fig(Margins::new(40, 30, 30, 40).with_edge(20)),
            annotations: Vec::new(),
        },
        Illustration {
            id: "faq1",
            dataset: "faq1",
            visibility: all,
            options: RenderOptions { grid: GridMode::Divisions(10), ..fig(Margins::new(50, 40, 50, 50).with_edge(20)) },
            annotations: Vec::new(),
        },
        Illustration {
            id: "faq2a",
            dataset: "faq2a",
            visibility: all,
            options: fig(Margins::new(30, 20, 20, 30).with_edge(10)),
            annotations: vec![Annotation::note("Balanced", Place::frac(0.5, 0.0, 0.0, 14.0), 10.0, Ink::Label).centered()],
        },
        Illustration {
            id: "faq2b",
            dataset: "faq2b",
            visibility: all,
            options: fig(Margins::new(30, 20, 20, 30).with_edge(10)),
            annotations: vec![Annotation::note("Unbalanced", Place::frac(0.5, 0.0, 0.0, 14.0), 10.0, Ink::Label).centered()],
        },
        Illustration {
            id: "faq3",
            dataset: "faq3",
            visibility: all,
            options: fig(Margins::new(50, 40, 50, 50).with_edge(20)),
            annotations: vec![
                Annotation::note("Line doesn't pass through (0,0)", Place::data_offset(2.0, 0.0, 0.0, 15.0), 10.0, Ink::Accent),
                Annotation::Dot { at: Place::data(0.0, 0.0), radius: 8.0, ink: Ink::Highlight },
                Annotation::note("0,0", Place::data_offset(0.0, 0.0, 0.0, 3.0), 8.0, Ink::White).bold().centered(),
            ],
        },
        Illustration {
            id: "faq4a",
            dataset: "faq4a",
            visibility: none,
            options: fig(Margins::new(40, 10, 20, 40).with_edge(10)),
            annotations: vec![
                Annotation::note("X (unit)", Place::frac(1.0, 1.0, -45.0, -25.0), 10.0, Ink::Accent).bold(),
                Annotation::note("Y", Place::frac(0.0, 0.0, 35.0, 15.0), 10.0, Ink::Accent).bold(),
                Annotation::note("(unit)", Place::frac(0.0, 0.0, 25.0, 28.0), 10.0, Ink::Accent).bold(),
            ],
        },
        Illustration {
            id: "faq4b",
            dataset: "faq4b",
            visibility: none,
            options: RenderOptions { draw_titles: true, ..fig(Margins::new(50, 10, 20, 50).with_edge(10)) },
            annotations: Vec::new(),
        },
        Illustration {
            id: "faq5",
            dataset: "faq5",
            visibility: all,
            options: fig(Margins::new(50, 40, 50, 50).with_edge(20)),
            annotations: vec![Annotation::note("Smooth curve of best fit", Place::frac(0.5, 0.0, 0.0, 45.0), 11.0, Ink::Accent)],
        },
        Illustration {
            id: "faq6",
            dataset: "faq6",
            visibility: all,
            options: RenderOptions {
                grid: GridMode::Divisions(8),
                draw_titles: true,
                accent_titles: false,
                ..fig(Margins::new(50, 50, 50, 50).with_edge(20))
            },
            annotations: vec![
                Annotation::Dot { at: Place::data(0.0, 4.0), radius: 8.0, ink: Ink::Highlight },
                Annotation::note("Starts at $4", Place::data_offset(0.0, 4.0, 10.0, 0.0), 10.0, Ink::Accent),
                Annotation::note("(flag-down fee)", Place::data_offset(0.0, 4.0, 10.0, 12.0), 10.0, Ink::Accent),
                Annotation::note("(0,0)", Place::data_offset(0.0, 0.0, 0.0, 12.0), 9.0, Ink::Muted).centered(),
            ],
        },
    ]
}

/// Paint `ill` onto `surface`. A missing surface is skipped and reported as `Ok(false)`.
pub fn render_illustration<S: Surface + ?Sized>(
    surface: Option<&mut S>,
    registry: &Registry,
    ill: &Illustration,
) -> Result<bool> {
    let dataset = registry.get(ill.dataset)?;
    let Some(surface) = surface else {
        log::debug!("no surface for illustration '{}', skipping", ill.id);
        return Ok(false);
    };
    render(surface, dataset, ill.visibility, &ill.options);

    let mapper = PlotMapper::new(&dataset.axis, surface.size(), ill.options.margins);
    let theme = &ill.options.theme;
    for a in &ill.annotations {
        match a {
            Annotation::Note { text, at, size, bold, ink, align } => {
                let mut style = TextStyle::new(*size, ink.color(theme)).align(*align);
                if *bold {
                    style = style.bold();
                }
                surface.text(text, at.resolve(&mapper), &style);
            }
            Annotation::Dot { at, radius, ink } => {
                surface.fill_circle(at.resolve(&mapper), *radius, ink.color(theme));
            }
            Annotation::DashedBox { from, to, ink } => {
                let (a, b) = (from.resolve(&mapper), to.resolve(&mapper));
                let rect = PlotRect::from_ltrb(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y));
                surface.stroke_rect(rect, Stroke::dashed(ink.color(theme), 2.0, 4.0, 4.0));
            }
        }
    }
    Ok(true)
}
