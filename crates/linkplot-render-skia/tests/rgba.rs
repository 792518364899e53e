// File: crates/linkplot-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use std::sync::Arc;

use linkplot_core::{ChartBuilder, Dataset, Row, ScatterSpec};
use linkplot_render_skia::{render_row_to_rgba8, RenderOptions, RenderScene, Theme};

fn chart() -> linkplot_core::Chart {
    let rows = vec![
        Row::from_pairs([("x", "1"), ("y", "2"), ("Species", "setosa")]),
        Row::from_pairs([("x", "4"), ("y", "4"), ("Species", "virginica")]),
    ];
    let spec = ScatterSpec::new("", "x", "y").classify(|r| format!("point {}", r.get("Species").unwrap_or_default()));
    ChartBuilder::default()
        .build("rgba", &spec.into(), Arc::new(Dataset::new("rgba", rows)))
        .expect("build")
}

fn pixel(px: &[u8], stride: usize, x: f64, y: f64) -> [u8; 4] {
    let i = y.round() as usize * stride + x.round() as usize * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart().render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (500, 500));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Check background alpha in top-left pixel (RGBA)
    assert_eq!(px[3], 255);
    assert_eq!(pixel(&px, stride, 0.0, 0.0), [255, 255, 255, 255]);
}

#[test]
fn marks_use_palette_then_selection_color() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let theme = Theme::light();
    let mut chart = chart();
    let center = chart.frame.marks()[1].position();

    let (px, _, _, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    let c = theme.palette[2].1;
    assert_eq!(pixel(&px, stride, center.x, center.y), [c.r(), c.g(), c.b(), 255]);

    chart.frame.marks_mut()[1].selected = true;
    let (px, _, _, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    let s = theme.selected;
    assert_eq!(pixel(&px, stride, center.x, center.y), [s.r(), s.g(), s.b(), 255]);
}

#[test]
fn row_layout_places_frames_side_by_side() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.gap = 10;
    let scene = chart().frame.scene();
    let (px, w, h, _) = render_row_to_rgba8(&[scene.clone(), scene], &opts).expect("row render");
    assert_eq!((w, h), (1010, 500));
    assert_eq!(px.len(), 1010 * 500 * 4);
}

#[test]
fn empty_row_is_an_error() {
    assert!(render_row_to_rgba8(&[], &RenderOptions::default()).is_err());
}
