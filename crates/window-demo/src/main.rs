// File: crates/window-demo/src/main.rs
// Summary: Windowed demo: scenario tabs plus the practice exercise, rendered on the CPU and blitted via winit + softbuffer.
// Keys: 1-5 or Tab switch panels, P toggles points, L toggles the line, R resets.
// A left click on the practice panel places a mark.

use anyhow::{Context, Result};
use graph_core::{
    Control, ControlAction, Controller, GraphConfig, PixelPoint, Registry, SkiaSurface, TabGroup,
    PRACTICE, SCENARIOS,
};
use std::num::NonZeroU32;
use std::sync::Arc;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = match std::env::args().nth(1) {
        Some(p) => GraphConfig::load(&p).with_context(|| format!("failed to load config '{p}'"))?,
        None => GraphConfig::default(),
    };
    let registry = Arc::new(cfg.apply_colors(Registry::builtin())?);

    let panels: Vec<&str> = SCENARIOS.iter().copied().chain([PRACTICE]).collect();
    let mut tabs = TabGroup::with_first_active(panels.iter().copied());
    let mut ctl: Controller<SkiaSurface> = Controller::new(registry, cfg.render_options());
    mount_all(&mut ctl, &panels, cfg.width, cfg.height)?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Graph Skills")
        .with_inner_size(winit::dpi::PhysicalSize::new(cfg.width as u32, cfg.height as u32))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e:?}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e:?}"))?;

    let mut size = window.inner_size();
    let mut cursor: Option<(f64, f64)> = None;
    update_title(&window, &tabs, &ctl);

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    let (w, h) = (size.width.max(1) as i32, size.height.max(1) as i32);
                    if let Err(e) = mount_all(&mut ctl, &panels, w, h) {
                        log::error!("resize to {w}x{h} failed: {e}");
                    }
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => cursor = Some((position.x, position.y)),
                WindowEvent::CursorLeft { .. } => cursor = None,
                WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                    if let (Some((x, y)), Some(PRACTICE)) = (cursor, tabs.active()) {
                        match ctl.add_user_mark(PRACTICE, PixelPoint::new(x as f32, y as f32)) {
                            Ok(true) => window.request_redraw(),
                            Ok(false) => {}
                            Err(e) => log::warn!("click ignored: {e}"),
                        }
                    }
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    if on_key(key, &mut tabs, &mut ctl) {
                        update_title(&window, &tabs, &ctl);
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&mut surface, &mut ctl, &tabs, size.width, size.height) {
                    log::error!("present failed: {e}");
                }
            }
            _ => {}
        }
    });
}

fn mount_all(ctl: &mut Controller<SkiaSurface>, panels: &[&str], w: i32, h: i32) -> Result<()> {
    for id in panels {
        ctl.mount(id, SkiaSurface::new(w, h)?)?;
    }
    Ok(())
}

/// Returns whether the window needs repainting.
fn on_key(key: VirtualKeyCode, tabs: &mut TabGroup, ctl: &mut Controller<SkiaSurface>) -> bool {
    let pick = |i: usize, tabs: &mut TabGroup| {
        let id = tabs.panels().get(i).cloned();
        id.map(|id| tabs.activate(&id)).unwrap_or(false)
    };
    let action = match key {
        VirtualKeyCode::Key1 => return pick(0, tabs),
        VirtualKeyCode::Key2 => return pick(1, tabs),
        VirtualKeyCode::Key3 => return pick(2, tabs),
        VirtualKeyCode::Key4 => return pick(3, tabs),
        VirtualKeyCode::Key5 => return pick(4, tabs),
        VirtualKeyCode::Tab => return tabs.cycle(1).is_some(),
        VirtualKeyCode::P => ControlAction::Points,
        VirtualKeyCode::L => ControlAction::Line,
        VirtualKeyCode::R => ControlAction::Reset,
        _ => return false,
    };
    let Some(active) = tabs.active() else { return false };
    match ctl.dispatch(&Control::new(action, active)) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{action:?} on '{active}' failed: {e}");
            false
        }
    }
}

fn update_title(window: &Window, tabs: &TabGroup, ctl: &Controller<SkiaSurface>) {
    let Some(active) = tabs.active() else { return };
    if let Ok(labels) = ctl.labels(active) {
        window.set_title(&format!("Graph Skills [{active}]  P: {}  L: {}  R: Reset", labels.points, labels.line));
    }
}

/// Copy the active panel's pixels into the window as 0RGB.
fn present(
    surface: &mut softbuffer::Surface,
    ctl: &mut Controller<SkiaSurface>,
    tabs: &TabGroup,
    width: u32,
    height: u32,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
        return Ok(());
    };
    let active = tabs.active().context("no active panel")?;
    let skia = ctl.surface_mut(active).context("active panel has no surface")?;
    let (rgba, pw, ph, stride) = skia.to_rgba8()?;

    surface.resize(w, h).map_err(|e| anyhow::anyhow!("resize: {e:?}"))?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("frame: {e:?}"))?;
    let rows = ph.min(height) as usize;
    let cols = pw.min(width) as usize;
    for y in 0..rows {
        let src = &rgba[y * stride..y * stride + cols * 4];
        let dst = &mut frame[y * width as usize..y * width as usize + cols];
        for (d, px) in dst.iter_mut().zip(src.chunks_exact(4)) {
            *d = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
        }
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e:?}"))?;
    Ok(())
}
