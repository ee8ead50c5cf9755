// File: crates/graph-core/src/render.rs
// Summary: Scenario graph renderer; paints grid, axes, ticks, titles, fit overlay and point markers onto a Surface.
// Notes:
// - Paint order is fixed: background, gridlines, axes, tick labels, axis titles,
//   fit line, point markers, placeholder. Markers go after the fit line so they
//   stay visible on top of it.

use crate::controller::UserMark;
use crate::dataset::{Dataset, FitShape};
use crate::geometry::{arrow_head, x_mark};
use crate::grid::{format_value, linspace};
use crate::scale::PlotMapper;
use crate::surface::{PathSpec, Stroke, Surface, TextAlign, TextStyle};
use crate::theme::{with_opacity, Theme};
use crate::types::{Margins, PixelPoint};

/// Placeholder shown while neither points nor the fit line are visible.
pub const DEFAULT_PLACEHOLDER: &str = "Click \"Show Points\" to start!";

const GRID_WIDTH: f32 = 1.0;
const AXIS_WIDTH: f32 = 2.0;
const FIT_WIDTH: f32 = 3.0;
const MARKER_WIDTH: f32 = 2.0;
const TICK_LEN: f32 = 5.0;
const INTERCEPT_RADIUS: f32 = 12.0;
const INTERCEPT_OPACITY: f32 = 0.3;
const USER_MARK_RADIUS: f32 = 5.0;

/// What the learner has chosen to reveal for one scenario.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityState {
    pub show_points: bool,
    pub show_line: bool,
}

impl VisibilityState {
    pub const HIDDEN: Self = Self { show_points: false, show_line: false };
    pub const ALL: Self = Self { show_points: true, show_line: true };

    pub const fn new(show_points: bool, show_line: bool) -> Self {
        Self { show_points, show_line }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridMode {
    Off,
    /// A gridline at every axis tick.
    Ticks,
    /// `n` equal divisions of the plot interior, independent of the data scale.
    Divisions(usize),
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub margins: Margins,
    pub theme: Theme,
    pub placeholder: Option<String>,
    pub grid: GridMode,
    pub draw_tick_labels: bool,
    /// Short tick strokes outside the axes.
    pub draw_tick_marks: bool,
    pub draw_titles: bool,
    /// Titles in the accent color, bold.
    pub accent_titles: bool,
    pub draw_arrows: bool,
    pub highlight_intercept: bool,
    /// Half-length of each X marker stroke, in pixels.
    pub marker_half: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            theme: Theme::classroom(),
            placeholder: Some(DEFAULT_PLACEHOLDER.to_string()),
            grid: GridMode::Ticks,
            draw_tick_labels: true,
            draw_tick_marks: false,
            draw_titles: true,
            accent_titles: false,
            draw_arrows: true,
            highlight_intercept: true,
            marker_half: 5.0,
        }
    }
}

/// Paint `dataset` onto `surface`, showing points / fit line per `visibility`.
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    dataset: &Dataset,
    visibility: VisibilityState,
    opts: &RenderOptions,
) {
    let mapper = PlotMapper::new(&dataset.axis, surface.size(), opts.margins);
    let theme = &opts.theme;

    surface.clear(theme.background);
    draw_grid(surface, &mapper, dataset, opts);
    draw_axes(surface, &mapper, opts);
    if opts.draw_tick_marks {
        draw_tick_marks(surface, &mapper, dataset, theme);
    }
    if opts.draw_tick_labels {
        draw_tick_labels(surface, &mapper, dataset, theme);
    }
    if opts.draw_titles {
        draw_titles(surface, &mapper, dataset, opts);
    }
    if visibility.show_line {
        draw_fit(surface, &mapper, dataset, opts);
    }
    if visibility.show_points {
        draw_points(surface, &mapper, dataset, opts);
    }
    if !visibility.show_points && !visibility.show_line {
        if let Some(text) = &opts.placeholder {
            let (w, h) = surface.size();
            let style = TextStyle::new(12.0, theme.placeholder).align(TextAlign::Center);
            surface.text(text, PixelPoint::new(w * 0.5, h * 0.5), &style);
        }
    }
}

/// Paint learner-placed marks at their raw pixel positions.
pub fn render_marks<S: Surface + ?Sized>(surface: &mut S, marks: &[UserMark], theme: &Theme) {
    for m in marks {
        surface.fill_circle(m.at, USER_MARK_RADIUS, theme.user_mark);
    }
}

/// Pixel path of the dataset's fit overlay, or `None` when there is nothing to anchor it to.
pub fn fit_path(dataset: &Dataset, mapper: &PlotMapper) -> Option<PathSpec> {
    let fit = &dataset.fit;
    match fit.shape {
        FitShape::Straight => {
            let last = dataset.last()?;
            Some(PathSpec::new(mapper.xy(0.0, fit.line_start_y)).line_to(mapper.to_pixel(last)))
        }
        FitShape::Curve => {
            let first = dataset.samples.first()?;
            let mut path = PathSpec::new(mapper.to_pixel(*first));
            for pair in dataset.samples.windows(2) {
                let prev = mapper.to_pixel(pair[0]);
                let cur = mapper.to_pixel(pair[1]);
                let ctrl = PixelPoint::new(prev.x + (cur.x - prev.x) * 0.5, prev.y);
                path = path.quad_to(ctrl, cur);
            }
            Some(path)
        }
        FitShape::Segment { from, to } => {
            Some(PathSpec::new(mapper.to_pixel(from)).line_to(mapper.to_pixel(to)))
        }
        FitShape::Bezier { c1, c2, to } => {
            let first = dataset.samples.first()?;
            Some(PathSpec::new(mapper.to_pixel(*first)).cubic_to(
                mapper.to_pixel(c1),
                mapper.to_pixel(c2),
                mapper.to_pixel(to),
            ))
        }
    }
}

/// Text of the intercept callout, e.g. `(0, 4)`.
pub fn intercept_label(x: f64, y: f64) -> String {
    format!("({}, {})", format_value(x), format_value(y))
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid<S: Surface + ?Sized>(surface: &mut S, m: &PlotMapper, ds: &Dataset, opts: &RenderOptions) {
    let stroke = Stroke::solid(opts.theme.grid, GRID_WIDTH);
    let origin = m.origin();
    match opts.grid {
        GridMode::Off => {}
        GridMode::Ticks => {
            let top = m.grid_top();
            let right = m.grid_right();
            for x in ds.axis.x_ticks() {
                let px = m.x.to_px(x);
                surface.line(PixelPoint::new(px, top), PixelPoint::new(px, origin.y), stroke);
            }
            for y in ds.axis.y_ticks() {
                let py = m.y.to_px(y);
                surface.line(PixelPoint::new(origin.x, py), PixelPoint::new(right, py), stroke);
            }
        }
        GridMode::Divisions(n) => {
            let r = m.interior();
            for x in linspace(r.left as f64, r.right as f64, n + 1) {
                surface.line(PixelPoint::new(x as f32, r.top), PixelPoint::new(x as f32, r.bottom), stroke);
            }
            for y in linspace(r.top as f64, r.bottom as f64, n + 1) {
                surface.line(PixelPoint::new(r.left, y as f32), PixelPoint::new(r.right, y as f32), stroke);
            }
        }
    }
}

fn draw_axes<S: Surface + ?Sized>(surface: &mut S, m: &PlotMapper, opts: &RenderOptions) {
    let stroke = Stroke::solid(opts.theme.axis_line, AXIS_WIDTH);
    let origin = m.origin();
    let y_end = m.y_axis_end();
    let x_end = m.x_axis_end();

    // Y axis then X axis, forming the L
    surface.line(origin, y_end, stroke);
    surface.line(origin, x_end, stroke);

    if opts.draw_arrows {
        let gap = m.margins.arrow_gap as f32;
        for tip in [y_end.offset(0.0, -gap), x_end.offset(gap, 0.0)] {
            for wing in arrow_head(origin, tip) {
                surface.line(tip, wing, stroke);
            }
        }
    }
}

fn draw_tick_marks<S: Surface + ?Sized>(surface: &mut S, m: &PlotMapper, ds: &Dataset, theme: &Theme) {
    let stroke = Stroke::solid(theme.axis_line, AXIS_WIDTH);
    let origin = m.origin();
    for x in ds.axis.x_ticks() {
        let px = m.x.to_px(x);
        surface.line(PixelPoint::new(px, origin.y), PixelPoint::new(px, origin.y + TICK_LEN), stroke);
    }
    for y in ds.axis.y_ticks() {
        let py = m.y.to_px(y);
        surface.line(PixelPoint::new(origin.x, py), PixelPoint::new(origin.x - TICK_LEN, py), stroke);
    }
}

fn draw_tick_labels<S: Surface + ?Sized>(surface: &mut S, m: &PlotMapper, ds: &Dataset, theme: &Theme) {
    let origin = m.origin();
    let below = TextStyle::new(10.0, theme.tick_label).align(TextAlign::Center);
    for x in ds.axis.x_ticks() {
        surface.text(&format_value(x), PixelPoint::new(m.x.to_px(x), origin.y + 18.0), &below);
    }
    let left = TextStyle::new(10.0, theme.tick_label).align(TextAlign::Right);
    for y in ds.axis.y_ticks() {
        surface.text(&format_value(y), PixelPoint::new(origin.x - 8.0, m.y.to_px(y) + 4.0), &left);
    }
}

fn draw_titles<S: Surface + ?Sized>(surface: &mut S, m: &PlotMapper, ds: &Dataset, opts: &RenderOptions) {
    let mut style = if opts.accent_titles {
        TextStyle::new(12.0, opts.theme.accent).bold()
    } else {
        TextStyle::new(11.0, opts.theme.axis_title)
    };
    style = style.align(TextAlign::Center);
    let plot_w = m.width - m.margins.hsum() as f32;

    if !ds.axis.x_label.is_empty() {
        let at = PixelPoint::new(m.margins.left as f32 + plot_w * 0.5, m.height - 5.0);
        surface.text(&ds.axis.x_label, at, &style);
    }
    if !ds.axis.y_label.is_empty() {
        let at = PixelPoint::new(14.0, m.height * 0.5);
        surface.text(&ds.axis.y_label, at, &style.rotated());
    }
}

fn draw_fit<S: Surface + ?Sized>(surface: &mut S, m: &PlotMapper, ds: &Dataset, opts: &RenderOptions) {
    let color = ds.fit.color;
    if let Some(path) = fit_path(ds, m) {
        surface.path(&path, Stroke::solid(color, FIT_WIDTH));
    }
    if !opts.highlight_intercept {
        return;
    }
    if let Some(p) = ds.intercept() {
        let at = m.to_pixel(p);
        surface.fill_circle(at, INTERCEPT_RADIUS, with_opacity(color, INTERCEPT_OPACITY));
        let style = TextStyle::new(10.0, color).bold();
        surface.text(&intercept_label(p.x, p.y), at.offset(15.0, 4.0), &style);
    }
}

fn draw_points<S: Surface + ?Sized>(surface: &mut S, m: &PlotMapper, ds: &Dataset, opts: &RenderOptions) {
    let stroke = Stroke::solid(opts.theme.marker, MARKER_WIDTH);
    for p in &ds.samples {
        for (a, b) in x_mark(m.to_pixel(*p), opts.marker_half) {
            surface.line(a, b, stroke);
        }
    }
}
