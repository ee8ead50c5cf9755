// File: crates/graph-core/tests/registry_config.rs
// Purpose: Built-in registry contents, color parsing and TOML configuration.

use graph_core::theme::parse_hex_color;
use graph_core::{AxisConfig, Dataset, FitShape, FitSpec, GraphConfig, GraphError, Registry, PRACTICE, SCENARIOS};
use skia_safe::Color;

#[test]
fn builtin_registry_has_scenarios_in_order() {
    let reg = Registry::builtin();
    let ids: Vec<_> = reg.ids().take(5).collect();
    assert_eq!(ids, vec!["taxi", "study", "spring", "cooling", "practice"]);
    for id in SCENARIOS.iter().chain([&PRACTICE]) {
        let ds = reg.get(id).unwrap();
        assert!(ds.axis.validate().is_ok(), "{id} axis");
        assert!(!ds.samples.is_empty(), "{id} has samples");
    }
}

#[test]
fn scenario_fit_shapes() {
    let reg = Registry::builtin();
    assert_eq!(reg.get("taxi").unwrap().fit.shape, FitShape::Straight);
    assert_eq!(reg.get("taxi").unwrap().fit.line_start_y, 4.0);
    assert!(reg.get("cooling").unwrap().fit.is_curve());
    assert!(matches!(reg.get("faq5").unwrap().fit.shape, FitShape::Bezier { .. }));
    assert_eq!(reg.get("study").unwrap().samples.len(), 6);
}

#[test]
fn fit_colors_stand_apart_from_markers() {
    let reg = Registry::builtin();
    let theme = graph_core::Theme::classroom();
    for id in SCENARIOS {
        let fit = reg.get(id).unwrap().fit.color;
        assert_ne!(fit, theme.marker, "{id} fit matches the marker color");
    }
    assert_eq!(reg.get("cooling").unwrap().fit.color, Color::from_rgb(0x0e, 0xa5, 0xe9));
}

#[test]
fn missing_dataset_is_not_found() {
    let reg = Registry::builtin();
    assert!(matches!(reg.get("volcano"), Err(GraphError::NotFound(_))));
    assert!(!reg.contains("volcano"));
}

#[test]
fn register_rejects_bad_axis() {
    let mut reg = Registry::new();
    let fit = FitSpec::straight(Color::BLACK, 0.0);
    let bad = Dataset::from_pairs(&[(1.0, 1.0)], AxisConfig::new(10.0, 0.0, 1.0, 1.0), fit);
    assert!(matches!(reg.register("bad", bad), Err(GraphError::InvalidAxis(_))));
    assert!(reg.is_empty());

    let ok = Dataset::from_pairs(&[(1.0, 1.0)], AxisConfig::new(10.0, 10.0, 1.0, 1.0), fit);
    reg.register("ok", ok).unwrap();
    assert_eq!(reg.len(), 1);
}

#[test]
fn hex_colors() {
    assert_eq!(parse_hex_color("#ef4444").unwrap(), Color::from_rgb(0xef, 0x44, 0x44));
    assert_eq!(parse_hex_color("#fff").unwrap(), Color::WHITE);
    for bad in ["ef4444", "#ef44", "#gg0000", ""] {
        assert!(matches!(parse_hex_color(bad), Err(GraphError::InvalidColor(_))), "{bad:?}");
    }
}

#[test]
fn empty_config_uses_defaults() {
    let cfg = GraphConfig::from_toml_str("").unwrap();
    assert_eq!((cfg.width, cfg.height), (560, 360));
    assert_eq!(cfg.theme().name, "classroom");
    assert!(cfg.wants("cooling"));
    assert_eq!(cfg.render_options().margins, graph_core::Margins::default());
}

#[test]
fn config_overrides_apply() {
    let cfg = GraphConfig::from_toml_str(
        r##"
width = 800
height = 500
theme = "chalkboard"
output_dir = "out/pngs"
scenarios = ["taxi", "cooling"]

[margins]
left = 40
right = 10
top = 10
bottom = 40

[colors]
taxi = "#ff0000"
"##,
    )
    .unwrap();
    assert_eq!(cfg.size(), (800.0, 500.0));
    assert_eq!(cfg.output_dir, std::path::PathBuf::from("out/pngs"));
    assert!(cfg.wants("taxi") && !cfg.wants("study"));

    let opts = cfg.render_options();
    assert_eq!(opts.theme.name, "chalkboard");
    assert_eq!((opts.margins.left, opts.margins.bottom, opts.margins.axis_top), (40, 40, 15));

    let reg = cfg.apply_colors(Registry::builtin()).unwrap();
    assert_eq!(reg.get("taxi").unwrap().fit.color, Color::from_rgb(255, 0, 0));
}

#[test]
fn config_errors_surface() {
    assert!(matches!(GraphConfig::from_toml_str("width = \"wide\""), Err(GraphError::Config(_))));

    let cfg = GraphConfig::from_toml_str("[colors]\ntaxi = \"red\"").unwrap();
    assert!(matches!(cfg.apply_colors(Registry::builtin()), Err(GraphError::InvalidColor(_))));

    let cfg = GraphConfig::from_toml_str("[colors]\nrocket = \"#000\"").unwrap();
    assert!(matches!(cfg.apply_colors(Registry::builtin()), Err(GraphError::NotFound(_))));

    assert!(matches!(GraphConfig::load("does/not/exist.toml"), Err(GraphError::Io(_))));
}
