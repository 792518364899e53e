// File: crates/window-demo/src/main.rs
// Summary: Windowed iris dashboard: CPU-rendered charts blitted via softbuffer, mouse brushing and click toggling via winit.

use std::num::NonZeroU32;

use anyhow::{anyhow, Result};
use linkplot_core::{ChartId, CsvSource, Dashboard, Interaction, PointF, PointerEvent};
use linkplot_demo::{data_dir_from_args, init_tracing, iris_dashboard, iris_declarations};
use linkplot_render_skia::{render_row_to_rgba8, RenderOptions, Theme};
use winit::event::{ElementState, Event, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const TITLE: &str = "Linkplot: iris";

fn main() -> Result<()> {
    init_tracing();
    let data_dir = data_dir_from_args();
    let mut dash = iris_dashboard();
    let report = dash.build_all(&iris_declarations(&data_dir), &CsvSource);
    for (id, err) in &report.failed {
        tracing::error!("{}: {}", id, err);
    }
    if dash.charts().is_empty() {
        anyhow::bail!("no charts built from '{}'", data_dir.display());
    }

    let (width, height) = row_size(&dash);
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(winit::dpi::PhysicalSize::new(width, height))
        .with_resizable(false)
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut opts = RenderOptions::default();
    let mut cursor: Option<(f64, f64)> = None;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Some((position.x, position.y));
                    // Moves belong to the chart that took the press, even outside its frame.
                    if let Some((id, p)) = owner_point(&dash, position.x, position.y) {
                        deliver(&mut dash, &id, PointerEvent::Move(p), &window);
                    }
                }
                WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                    let Some((x, y)) = cursor else { return };
                    let target = match state {
                        ElementState::Pressed => locate(&dash, x, y).map(|(id, p)| (id, PointerEvent::Down(p))),
                        ElementState::Released => owner_point(&dash, x, y)
                            .or_else(|| locate(&dash, x, y))
                            .map(|(id, p)| (id, PointerEvent::Up(p))),
                    };
                    if let Some((id, event)) = target {
                        deliver(&mut dash, &id, event, &window);
                    }
                }
                WindowEvent::KeyboardInput { input, .. } if input.state == ElementState::Pressed => {
                    // T cycles themes.
                    if input.virtual_keycode == Some(VirtualKeyCode::T) {
                        opts.theme = next_theme(&opts.theme);
                        tracing::info!("Theme: {}", opts.theme.name);
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(&dash, &opts, &mut surface) {
                    tracing::error!("draw failed: {e:#}");
                    *cf = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    })
}

/// Charts sit left to right with no gap.
fn row_size(dash: &Dashboard) -> (u32, u32) {
    let charts = dash.charts();
    let width = charts.iter().map(|c| c.frame.width()).sum();
    let height = charts.iter().map(|c| c.frame.height()).max().unwrap_or(0);
    (width, height)
}

/// Left edge of `chart` in window pixels.
fn chart_left(dash: &Dashboard, chart: &ChartId) -> Option<f64> {
    let mut left = 0.0;
    for c in dash.charts() {
        if &c.id == chart {
            return Some(left);
        }
        left += c.frame.width() as f64;
    }
    None
}

/// Window pixel in the frame of the chart owning the current press, if any.
fn owner_point(dash: &Dashboard, x: f64, y: f64) -> Option<(ChartId, PointF)> {
    let owner = dash.gesture_chart()?;
    let left = chart_left(dash, owner)?;
    Some((owner.clone(), PointF::new(x - left, y)))
}

/// Window pixel to (chart, frame-pixel point).
fn locate(dash: &Dashboard, x: f64, y: f64) -> Option<(ChartId, PointF)> {
    let mut left = 0.0;
    for chart in dash.charts() {
        let w = chart.frame.width() as f64;
        if x >= left && x < left + w {
            return Some((chart.id.clone(), PointF::new(x - left, y)));
        }
        left += w;
    }
    None
}

fn deliver(dash: &mut Dashboard, chart: &ChartId, event: PointerEvent, window: &winit::window::Window) {
    match dash.dispatch(chart, event) {
        Ok(Interaction::None) => {}
        Ok(outcome) => {
            tracing::debug!("{}: {:?}", chart, outcome);
            if let Some(text) = dash.display().text() {
                window.set_title(&format!("{TITLE} | {text}"));
            }
            window.request_redraw();
        }
        Err(e) => tracing::warn!("{}: {}", chart, e),
    }
}

fn next_theme(current: &Theme) -> Theme {
    let presets = linkplot_render_skia::theme::presets();
    let i = presets.iter().position(|t| t.name == current.name).unwrap_or(0);
    presets[(i + 1) % presets.len()]
}

fn draw(dash: &Dashboard, opts: &RenderOptions, surface: &mut softbuffer::Surface) -> Result<()> {
    let scenes: Vec<_> = dash.charts().iter().map(|c| c.frame.scene()).collect();
    let (rgba, w, h, _) = render_row_to_rgba8(&scenes, opts)?;
    let (nw, nh) = match (NonZeroU32::new(w), NonZeroU32::new(h)) {
        (Some(nw), Some(nh)) => (nw, nh),
        _ => anyhow::bail!("empty surface {}x{}", w, h),
    };
    surface.resize(nw, nh).map_err(|e| anyhow!("resize: {e}"))?;
    let mut buffer = surface.buffer_mut().map_err(|e| anyhow!("buffer: {e}"))?;
    // softbuffer wants 0RGB.
    for (dst, px) in buffer.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
    buffer.present().map_err(|e| anyhow!("present: {e}"))
}
