// File: crates/graph-core/tests/render_scenarios.rs
// Purpose: End-to-end scenario rendering through the recording surface.
// Behavior:
// - Checks fit geometry (straight line and smoothed curve) in pixel space.
// - Checks placeholder, intercept callout, markers and paint order.
// - Checks gridlines, arrowheads and the rotated Y title.

use graph_core::render::fit_path;
use graph_core::geometry::{arrow_head, ARROW_HEAD_LEN};
use graph_core::surface::{DrawCommand, Rotation, Segment};
use graph_core::{
    render, Margins, PixelPoint, PlotMapper, RecordingSurface, Registry, RenderOptions, Theme,
    VisibilityState,
};

const W: f32 = 560.0;
const H: f32 = 360.0;

fn draw(id: &str, vis: VisibilityState) -> RecordingSurface {
    let reg = Registry::builtin();
    let ds = reg.get(id).expect("builtin scenario");
    let mut s = RecordingSurface::new(W, H);
    render(&mut s, ds, vis, &RenderOptions::default());
    s
}

fn mapper(id: &str) -> PlotMapper {
    let reg = Registry::builtin();
    PlotMapper::new(&reg.get(id).unwrap().axis, (W, H), Margins::default())
}

#[test]
fn taxi_line_runs_from_intercept_to_last_sample() {
    let s = draw("taxi", VisibilityState::new(false, true));
    let m = mapper("taxi");
    let paths: Vec<_> = s.paths().collect();
    assert_eq!(paths.len(), 1);
    let (path, stroke) = paths[0];
    assert_eq!(path.start, m.xy(0.0, 4.0));
    assert_eq!(path.segments, vec![Segment::Line(m.xy(10.0, 16.0))]);
    assert_eq!(stroke.width, 3.0);
    assert!(s.has_text("(0, 4)"), "intercept callout missing");
}

#[test]
fn cooling_curve_passes_through_every_sample() {
    let s = draw("cooling", VisibilityState::new(false, true));
    let m = mapper("cooling");
    let (path, _) = s.paths().next().expect("curve drawn");
    assert_eq!(path.segments.len(), 5);
    assert!(path.segments.iter().all(|seg| matches!(seg, Segment::Quad { .. })));

    let reg = Registry::builtin();
    let want: Vec<PixelPoint> = reg.get("cooling").unwrap().samples.iter().map(|p| m.to_pixel(*p)).collect();
    assert_eq!(path.vertices(), want);

    // first span: control halfway along X at the previous sample's height
    let (a, b) = (want[0], want[1]);
    match path.segments[0] {
        Segment::Quad { ctrl, .. } => assert_eq!(ctrl, PixelPoint::new(a.x + (b.x - a.x) * 0.5, a.y)),
        other => panic!("unexpected segment {other:?}"),
    }
}

#[test]
fn placeholder_only_when_nothing_is_visible() {
    let hidden = draw("study", VisibilityState::HIDDEN);
    let (_, at, _) = hidden
        .texts()
        .find(|(t, _, _)| *t == "Click \"Show Points\" to start!")
        .expect("placeholder drawn");
    assert_eq!(at, PixelPoint::new(W / 2.0, H / 2.0));
    assert_eq!(hidden.paths().count(), 0);

    for vis in [VisibilityState::new(true, false), VisibilityState::new(false, true), VisibilityState::ALL] {
        let s = draw("study", vis);
        assert!(!s.has_text("Click \"Show Points\" to start!"), "placeholder with {vis:?}");
    }
}

#[test]
fn one_marker_per_sample_drawn_after_the_fit() {
    let s = draw("spring", VisibilityState::ALL);
    let marker = Theme::classroom().marker;
    assert_eq!(s.lines_with(marker).count(), 6 * 2);

    let path_idx = s.commands.iter().position(|c| matches!(c, DrawCommand::Path { .. })).unwrap();
    let first_marker = s
        .commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Line { stroke, .. } if stroke.color == marker))
        .unwrap();
    assert!(first_marker > path_idx, "markers must be painted over the fit line");
}

#[test]
fn markers_are_centered_on_samples() {
    let s = draw("taxi", VisibilityState::new(true, false));
    let m = mapper("taxi");
    let c = m.xy(6.0, 11.2);
    let marker = Theme::classroom().marker;
    assert!(s
        .lines_with(marker)
        .any(|(a, b)| a == c.offset(-5.0, -5.0) && b == c.offset(5.0, 5.0)));
}

#[test]
fn tick_labels_cover_the_axis_extent() {
    let s = draw("taxi", VisibilityState::HIDDEN);
    for label in ["0", "2", "10", "12", "4", "16"] {
        assert!(s.has_text(label), "missing tick label {label}");
    }
    assert!(!s.has_text("14"), "14 is not a y tick or an x tick");
    assert!(s.has_text("Distance (km)") && s.has_text("Fare ($)"));
}

#[test]
fn render_starts_from_a_clear() {
    let mut s = draw("taxi", VisibilityState::ALL);
    let reg = Registry::builtin();
    render(&mut s, reg.get("taxi").unwrap(), VisibilityState::HIDDEN, &RenderOptions::default());
    assert!(matches!(s.commands[0], DrawCommand::Clear(_)));
    assert_eq!(s.paths().count(), 0, "stale fit line survived a redraw");
}

#[test]
fn segment_fit_uses_its_own_endpoints() {
    let reg = Registry::builtin();
    let ds = reg.get("practice").unwrap();
    let m = PlotMapper::new(&ds.axis, (W, H), Margins::default());
    let path = fit_path(ds, &m).unwrap();
    assert_eq!(path.vertices(), vec![m.xy(0.0, -0.1), m.xy(32.0, 6.2)]);
}

#[test]
fn axes_end_in_two_winged_arrowheads() {
    let s = draw("taxi", VisibilityState::HIDDEN);
    let m = mapper("taxi");
    let axis: Vec<_> = s.lines_with(Theme::classroom().axis_line).collect();
    for tip in [m.y_axis_end(), m.x_axis_end()] {
        let wings: Vec<_> = axis.iter().filter(|(a, _)| *a == tip).map(|(_, b)| *b).collect();
        assert_eq!(wings, arrow_head(m.origin(), tip).to_vec());
        for w in wings {
            let len = (w.x - tip.x).hypot(w.y - tip.y);
            assert!((len - ARROW_HEAD_LEN).abs() < 1e-3, "wing length {len}");
        }
    }
    // Y wings point down and away from the tip, X wings point left
    let y_tip = m.y_axis_end();
    assert!(arrow_head(m.origin(), y_tip).iter().all(|w| w.y > y_tip.y));
    let x_tip = m.x_axis_end();
    assert!(arrow_head(m.origin(), x_tip).iter().all(|w| w.x < x_tip.x));
}

#[test]
fn taxi_grid_has_one_line_per_tick() {
    let s = draw("taxi", VisibilityState::HIDDEN);
    let m = mapper("taxi");
    let grid: Vec<_> = s.lines_with(Theme::classroom().grid).collect();
    let verticals: Vec<_> = grid.iter().filter(|(a, b)| a.x == b.x).collect();
    let horizontals: Vec<_> = grid.iter().filter(|(a, b)| a.y == b.y).collect();
    assert_eq!(verticals.len(), 7);
    assert_eq!(horizontals.len(), 5);
    assert_eq!(verticals.len() + horizontals.len(), grid.len());
    assert_eq!(verticals[6].0.x, m.xy(12.0, 0.0).x);
    assert_eq!(horizontals[4].0.y, m.xy(0.0, 16.0).y);
    assert!(verticals.iter().all(|(a, _)| a.y == 15.0));
    assert!(horizontals.iter().all(|(_, b)| b.x == W - 15.0));
}

#[test]
fn y_title_is_rotated_and_x_title_is_not() {
    let s = draw("taxi", VisibilityState::HIDDEN);
    let (_, at, style) = s.texts().find(|(t, _, _)| *t == "Fare ($)").expect("y title");
    assert_eq!(style.rotation, Rotation::Ccw90);
    assert_eq!(at.y, H / 2.0);
    let (_, _, style) = s.texts().find(|(t, _, _)| *t == "Distance (km)").expect("x title");
    assert_eq!(style.rotation, Rotation::None);
}

#[test]
fn intercept_highlight_is_a_faint_disc_on_the_intercept() {
    let s = draw("taxi", VisibilityState::new(false, true));
    let m = mapper("taxi");
    let fit = Registry::builtin().get("taxi").unwrap().fit.color;
    let discs: Vec<_> = s.circles().collect();
    assert_eq!(discs.len(), 1);
    let (center, radius, color) = discs[0];
    assert_eq!(center, m.xy(0.0, 4.0));
    assert_eq!(radius, 12.0);
    assert_eq!(color.a(), (0.3f32 * 255.0).round() as u8);
    assert_eq!((color.r(), color.g(), color.b()), (fit.r(), fit.g(), fit.b()));

    let hidden = draw("taxi", VisibilityState::new(true, false));
    assert!(!hidden.circles().any(|(_, r, _)| r == 12.0));
}
