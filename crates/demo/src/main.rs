// File: crates/demo/src/main.rs
// Summary: Renders each scenario in all four visibility states, every figure, and a scripted practice session to PNGs.

use anyhow::{Context, Result};
use graph_core::{
    catalogue, render, render_illustration, Control, Controller, GraphConfig, PixelPoint, PlotMapper, Registry,
    SkiaSurface, Theme, VisibilityState, PRACTICE, SCENARIOS,
};
use std::path::Path;
use std::sync::Arc;

const STATES: [(VisibilityState, &str); 4] = [
    (VisibilityState::HIDDEN, "blank"),
    (VisibilityState::new(true, false), "points"),
    (VisibilityState::new(false, true), "line"),
    (VisibilityState::ALL, "all"),
];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional config path as first argument
    let cfg = match std::env::args().nth(1) {
        Some(p) => GraphConfig::load(&p).with_context(|| format!("failed to load config '{p}'"))?,
        None => GraphConfig::default(),
    };
    let registry = Arc::new(cfg.apply_colors(Registry::builtin())?);
    let opts = cfg.render_options();
    let out = cfg.output_dir.clone();
    std::fs::create_dir_all(&out).with_context(|| format!("create {}", out.display()))?;
    log::info!("rendering {}x{} with theme '{}' into {}", cfg.width, cfg.height, opts.theme.name, out.display());

    // 1) Scenarios, one PNG per visibility state
    for id in SCENARIOS.iter().copied().filter(|id| cfg.wants(id)) {
        let ds = registry.get(id)?;
        for (vis, tag) in STATES {
            let mut s = SkiaSurface::new(cfg.width, cfg.height)?;
            render(&mut s, ds, vis, &opts);
            write(&mut s, &out, &format!("{id}_{tag}.png"))?;
        }
    }

    // 2) Step and FAQ figures
    for ill in catalogue(Theme::paper()) {
        let mut s = SkiaSurface::new(cfg.width, cfg.height)?;
        render_illustration(Some(&mut s), &registry, &ill)?;
        write(&mut s, &out, &format!("{}.png", ill.id))?;
    }

    // 3) Practice: a learner plots the points, then reveals the suggested line
    if cfg.wants(PRACTICE) {
        practice_session(&cfg, registry.clone(), &out)?;
    }
    Ok(())
}

fn practice_session(cfg: &GraphConfig, registry: Arc<Registry>, out: &Path) -> Result<()> {
    let ds = registry.get(PRACTICE)?.clone();
    let mut ctl: Controller<SkiaSurface> = Controller::new(registry, cfg.render_options());
    ctl.mount(PRACTICE, SkiaSurface::new(cfg.width, cfg.height)?)?;

    // Click where each sample sits on the practice layout, plus one stray click off the plot.
    let m = PlotMapper::new(&ds.axis, cfg.size(), ctl.slot(PRACTICE)?.options.margins);
    let mut clicks: Vec<PixelPoint> = ds.samples.iter().map(|p| m.to_pixel(*p)).collect();
    clicks.push(PixelPoint::new(2.0, 2.0));
    let mut kept = 0;
    for at in clicks {
        if ctl.add_user_mark(PRACTICE, at)? {
            kept += 1;
        }
    }
    log::info!("practice: kept {kept} marks");
    snapshot(&mut ctl, out, "practice_marks.png")?;

    ctl.dispatch(&Control::parse("line", PRACTICE)?)?;
    log::info!("practice line control now reads '{}'", ctl.labels(PRACTICE)?.line);
    snapshot(&mut ctl, out, "practice_line.png")?;

    ctl.dispatch(&Control::parse("reset", PRACTICE)?)?;
    snapshot(&mut ctl, out, "practice_reset.png")
}

fn snapshot(ctl: &mut Controller<SkiaSurface>, out: &Path, name: &str) -> Result<()> {
    let s = ctl.surface_mut(PRACTICE).context("practice surface not mounted")?;
    write(s, out, name)
}

fn write(s: &mut SkiaSurface, dir: &Path, name: &str) -> Result<()> {
    let path = dir.join(name);
    s.save_png(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}
