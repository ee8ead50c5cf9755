// File: crates/graph-core/tests/controller.rs
// Purpose: Interaction controller state: toggles, labels, reset, practice clicks and dispatch.

use std::sync::Arc;

use graph_core::{
    Control, ControlAction, Controller, GraphError, PixelPoint, RecordingSurface, Registry,
    RenderOptions, Theme, VisibilityState, PRACTICE, SCENARIOS,
};

fn controller() -> Controller<RecordingSurface> {
    let mut c = Controller::new(Arc::new(Registry::builtin()), RenderOptions::default());
    for id in SCENARIOS.iter().copied().chain([PRACTICE]) {
        c.mount(id, RecordingSurface::new(560.0, 360.0)).unwrap();
    }
    c
}

#[test]
fn every_scenario_starts_hidden() {
    let c = controller();
    for id in SCENARIOS {
        assert_eq!(c.visibility(id).unwrap(), VisibilityState::HIDDEN);
        let labels = c.labels(id).unwrap();
        assert_eq!(labels.points, "Show Points");
        assert_eq!(labels.line, "Show Best-Fit Line");
        assert!(c.surface(id).unwrap().has_text("Click \"Show Points\" to start!"));
    }
}

#[test]
fn toggle_twice_restores_state_and_label() {
    let mut c = controller();
    assert!(c.toggle_show_points("taxi").unwrap());
    assert_eq!(c.labels("taxi").unwrap().points, "Hide Points");
    assert!(!c.toggle_show_points("taxi").unwrap());
    assert_eq!(c.labels("taxi").unwrap().points, "Show Points");
    assert_eq!(c.visibility("taxi").unwrap(), VisibilityState::HIDDEN);

    assert!(c.toggle_show_line("study").unwrap());
    assert_eq!(c.labels("study").unwrap().line, "Hide Best-Fit Line");
    assert!(!c.toggle_show_line("study").unwrap());
    assert_eq!(c.labels("study").unwrap().line, "Show Best-Fit Line");
}

#[test]
fn toggles_leave_other_scenarios_alone() {
    let mut c = controller();
    c.toggle_show_points("spring").unwrap();
    assert!(c.visibility("spring").unwrap().show_points);
    assert_eq!(c.visibility("cooling").unwrap(), VisibilityState::HIDDEN);
}

#[test]
fn toggle_redraws_the_mounted_surface() {
    let mut c = controller();
    c.toggle_show_points("taxi").unwrap();
    let marker = Theme::classroom().marker;
    let s = c.surface("taxi").unwrap();
    assert_eq!(s.lines_with(marker).count(), 12);
    assert!(!s.has_text("Click \"Show Points\" to start!"));
}

#[test]
fn reset_returns_to_initial_state_for_all_scenarios() {
    let mut c = controller();
    for id in SCENARIOS {
        c.toggle_show_points(id).unwrap();
        c.toggle_show_line(id).unwrap();
        c.reset(id).unwrap();
        assert_eq!(c.visibility(id).unwrap(), VisibilityState::HIDDEN);
        assert_eq!(c.labels(id).unwrap().points, "Show Points");
        assert_eq!(c.labels(id).unwrap().line, "Show Best-Fit Line");
        assert_eq!(c.surface(id).unwrap().paths().count(), 0);
    }
}

#[test]
fn practice_uses_short_line_label() {
    let mut c = controller();
    c.toggle_show_line(PRACTICE).unwrap();
    assert_eq!(c.labels(PRACTICE).unwrap().line, "Hide Line");
    assert!(!c.surface(PRACTICE).unwrap().has_text("Click \"Show Points\" to start!"));
}

#[test]
fn practice_clicks_inside_the_plot_are_kept() {
    let mut c = controller();
    assert!(c.add_user_mark(PRACTICE, PixelPoint::new(100.0, 100.0)).unwrap());
    assert!(c.add_user_mark(PRACTICE, PixelPoint::new(400.0, 250.0)).unwrap());
    assert_eq!(c.marks(PRACTICE).unwrap().len(), 2);

    let green = Theme::classroom().user_mark;
    let dots: Vec<_> = c.surface(PRACTICE).unwrap().circles().filter(|(_, _, col)| *col == green).collect();
    assert_eq!(dots.len(), 2);
    assert_eq!(dots[0].0, PixelPoint::new(100.0, 100.0));
    assert_eq!(dots[0].1, 5.0);
}

#[test]
fn practice_clicks_outside_or_on_the_border_are_ignored() {
    let mut c = controller();
    // click area is (60, 60) .. (540, 300), exclusive
    for p in [
        (10.0f32, 10.0f32),
        (100.0, 45.0),
        (100.0, 60.0),
        (60.0, 100.0),
        (100.0, 300.0),
        (540.0, 100.0),
        (545.0, 100.0),
        (100.0, 330.0),
    ] {
        assert!(!c.add_user_mark(PRACTICE, PixelPoint::from(p)).unwrap(), "{p:?} accepted");
    }
    assert!(c.marks(PRACTICE).unwrap().is_empty());
}

#[test]
fn practice_click_area_reaches_past_the_data_scale() {
    let mut c = controller();
    // right of the x = 35 gridline at 530 but left of the 20 px edge gutter
    assert!(c.add_user_mark(PRACTICE, PixelPoint::new(535.0, 100.0)).unwrap());
    assert!(c.add_user_mark(PRACTICE, PixelPoint::new(61.0, 61.0)).unwrap());
    assert!(c.add_user_mark(PRACTICE, PixelPoint::new(539.0, 299.0)).unwrap());
    assert_eq!(c.marks(PRACTICE).unwrap().len(), 3);
}

#[test]
fn practice_axes_stop_short_of_their_arrows() {
    let c = controller();
    let s = c.surface(PRACTICE).unwrap();
    let theme = Theme::classroom();
    let axes: Vec<_> = s.lines_with(theme.axis_line).collect();
    assert!(axes.contains(&(PixelPoint::new(60.0, 300.0), PixelPoint::new(60.0, 50.0))));
    assert!(axes.contains(&(PixelPoint::new(60.0, 300.0), PixelPoint::new(550.0, 300.0))));

    // arrowhead wings leave from tips 10 px beyond the axis ends
    let from_tip = |tip: PixelPoint| axes.iter().filter(|(a, _)| *a == tip).count();
    assert_eq!(from_tip(PixelPoint::new(60.0, 40.0)), 2);
    assert_eq!(from_tip(PixelPoint::new(560.0, 300.0)), 2);

    let grid: Vec<_> = s.lines_with(theme.grid).collect();
    let verticals: Vec<_> = grid.iter().filter(|(a, b)| a.x == b.x).collect();
    let horizontals: Vec<_> = grid.iter().filter(|(a, b)| a.y == b.y).collect();
    assert!(!verticals.is_empty() && !horizontals.is_empty());
    assert!(verticals.iter().all(|(a, b)| a.y.min(b.y) == 60.0 && a.y.max(b.y) == 300.0));
    assert!(horizontals.iter().all(|(a, b)| a.x.min(b.x) == 60.0 && a.x.max(b.x) == 540.0));
}

#[test]
fn reset_clears_practice_marks() {
    let mut c = controller();
    c.add_user_mark(PRACTICE, PixelPoint::new(200.0, 200.0)).unwrap();
    c.reset(PRACTICE).unwrap();
    assert!(c.marks(PRACTICE).unwrap().is_empty());
    assert_eq!(c.surface(PRACTICE).unwrap().circles().count(), 0);
}

#[test]
fn scenario_tabs_do_not_take_marks() {
    let mut c = controller();
    assert!(!c.add_user_mark("taxi", PixelPoint::new(200.0, 200.0)).unwrap());
    assert!(c.marks("taxi").unwrap().is_empty());
}

#[test]
fn unknown_scenario_is_not_found() {
    let mut c = controller();
    assert!(matches!(c.toggle_show_points("rocket"), Err(GraphError::NotFound(id)) if id == "rocket"));
    assert!(matches!(c.reset("rocket"), Err(GraphError::NotFound(_))));
}

#[test]
fn missing_surface_skips_drawing_but_tracks_state() {
    let mut c: Controller<RecordingSurface> =
        Controller::new(Arc::new(Registry::builtin()), RenderOptions::default());
    assert!(c.toggle_show_points("cooling").unwrap());
    assert!(!c.redraw("cooling").unwrap());
    assert!(c.surface("cooling").is_none());
    assert!(!c.add_user_mark(PRACTICE, PixelPoint::new(100.0, 100.0)).unwrap());

    c.mount("cooling", RecordingSurface::new(560.0, 360.0)).unwrap();
    let marker = Theme::classroom().marker;
    assert_eq!(c.surface("cooling").unwrap().lines_with(marker).count(), 12);
}

#[test]
fn dispatch_routes_parsed_controls() {
    let mut c = controller();
    c.dispatch(&Control::parse("points", "taxi").unwrap()).unwrap();
    c.dispatch(&Control::parse("line", "taxi").unwrap()).unwrap();
    assert_eq!(c.visibility("taxi").unwrap(), VisibilityState::ALL);
    c.dispatch(&Control::new(ControlAction::Reset, "taxi")).unwrap();
    assert_eq!(c.visibility("taxi").unwrap(), VisibilityState::HIDDEN);

    assert!(matches!(Control::parse("zoom", "taxi"), Err(GraphError::UnknownAction(_))));
    assert!(c.dispatch(&Control::new(ControlAction::Points, "nowhere")).is_err());
}
