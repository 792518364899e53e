// File: crates/demo/src/main.rs
// Summary: Headless iris dashboard: builds the charts, scripts a brush and a click, writes PNGs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use linkplot_core::{AxisScale, Chart, ChartId, CsvSource, Dashboard, Interaction, PointF, PointerEvent, RectF};
use linkplot_demo::{data_dir_from_args, init_tracing, iris_dashboard, iris_declarations};
use linkplot_render_skia::{render_row_to_png, RenderOptions, RenderScene};

fn main() -> Result<()> {
    init_tracing();
    let data_dir = data_dir_from_args();
    let out_dir = std::env::args().nth(2).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out"));
    tracing::info!("Using data from {}", data_dir.display());

    let mut dash = iris_dashboard();
    let report = dash.build_all(&iris_declarations(&data_dir), &CsvSource);
    for (id, err) in &report.failed {
        tracing::error!("{}: {}", id, err);
    }
    if report.built.is_empty() {
        anyhow::bail!("no charts built; check the data directory '{}'", data_dir.display());
    }

    let opts = RenderOptions { gap: 20, ..RenderOptions::default() };
    write_all(&dash, &opts, &out_dir, "initial")?;

    // Drag a box over the short-petal cluster of the first scatter.
    let vis1 = ChartId::from("vis1");
    if dash.chart(&vis1).is_some() {
        let path = [(100.0, 150.0), (120.0, 180.0), (170.0, 240.0)];
        dash.dispatch(&vis1, PointerEvent::Down(PointF::new(path[0].0, path[0].1)))?;
        for &(x, y) in &path[1..] {
            if let Interaction::Brushed { selected, in_source } = dash.dispatch(&vis1, PointerEvent::Move(PointF::new(x, y)))? {
                tracing::info!("Brushing vis1: {} selected ({} in vis1)", selected, in_source);
            }
        }
        let (x, y) = path[path.len() - 1];
        let outcome = dash.dispatch(&vis1, PointerEvent::Up(PointF::new(x, y)))?;
        tracing::info!("Brush released: {:?}", outcome);
        if let Some(chart) = dash.chart(&vis1) {
            log_extent_in_data_units(chart, RectF::from_corners(PointF::new(path[0].0, path[0].1), PointF::new(x, y)));
        }
        write_all(&dash, &opts, &out_dir, "brushed")?;
    }

    // Click the first flower of the second scatter.
    let vis2 = ChartId::from("vis2");
    let first = dash.chart(&vis2).and_then(|c| c.frame.marks().first()).map(|m| m.position());
    if let Some(at) = first {
        let outcome = dash.dispatch(&vis2, PointerEvent::Click(at))?;
        tracing::info!("Click on vis2: {:?}", outcome);
        tracing::info!("Coordinates display: {}", dash.display().text().unwrap_or("-"));
        write_all(&dash, &opts, &out_dir, "clicked")?;
    }

    if !report.is_complete() {
        anyhow::bail!("{} of {} charts failed to build", report.failed.len(), report.failed.len() + report.built.len());
    }
    Ok(())
}

/// One PNG per chart plus the whole dashboard side by side.
fn write_all(dash: &Dashboard, opts: &RenderOptions, out_dir: &std::path::Path, stage: &str) -> Result<()> {
    for chart in dash.charts() {
        let out = out_dir.join(format!("{}_{}.png", chart.id, stage));
        chart
            .render_to_png(opts, &out)
            .with_context(|| format!("failed to render '{}'", chart.id))?;
    }
    let scenes: Vec<_> = dash.charts().iter().map(|c| c.frame.scene()).collect();
    render_row_to_png(&scenes, opts, out_dir.join(format!("dashboard_{stage}.png")))
}

fn log_extent_in_data_units(chart: &Chart, extent: RectF) {
    let local = extent.translate(-chart.frame.origin().x, -chart.frame.origin().y);
    if let AxisScale::Linear(x) = &chart.scales.x {
        let y = &chart.scales.y;
        tracing::info!(
            "Brush covers x [{:.2}, {:.2}], y [{:.2}, {:.2}]",
            x.invert(local.left),
            x.invert(local.right),
            y.invert(local.bottom),
            y.invert(local.top)
        );
    }
}
