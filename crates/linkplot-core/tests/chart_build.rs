// File: crates/linkplot-core/tests/chart_build.rs
// Purpose: Scatter and bar chart construction: mark placement, axes, titles and build errors.

use std::sync::Arc;

use linkplot_core::{
    AxisEdge, AxisScale, BarSpec, ChartBuilder, ChartError, ChartKind, ChartSpec, Dataset, DomainFloor,
    DomainPadding, Layout, PointF, Row, ScatterSpec, Shape,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn assert_point(p: PointF, x: f64, y: f64) {
    assert!(approx(p.x, x) && approx(p.y, y), "expected ({x}, {y}), got ({}, {})", p.x, p.y);
}

fn assert_rect(shape: Shape, x: f64, y: f64, w: f64, h: f64) {
    match shape {
        Shape::Rect { x: rx, y: ry, width, height } => assert!(
            approx(rx, x) && approx(ry, y) && approx(width, w) && approx(height, h),
            "expected rect ({x}, {y}, {w}, {h}), got {shape:?}"
        ),
        other => panic!("expected rect, got {other:?}"),
    }
}

fn xy(rows: &[(&str, &str)]) -> Arc<Dataset> {
    let rows = rows.iter().map(|(x, y)| Row::from_pairs([("x", *x), ("y", *y)])).collect();
    Arc::new(Dataset::new("xy", rows))
}

fn scatter() -> ChartSpec {
    ScatterSpec::new("X vs Y", "x", "y").into()
}

#[test]
fn scatter_corners_with_data_min_floor() {
    let layout = Layout::default().with_domain_floor(DomainFloor::DataMin);
    let chart = ChartBuilder::new(layout)
        .build("xy", &scatter(), xy(&[("1", "2"), ("3", "4")]))
        .expect("build");

    let marks = chart.frame.marks();
    assert_eq!(marks.len(), 2);
    assert_point(marks[0].position(), 50.0, 450.0);
    assert_point(marks[1].position(), 450.0, 50.0);
}

#[test]
fn scatter_zero_anchored_domain() {
    let chart = ChartBuilder::default()
        .build("xy", &scatter(), xy(&[("1", "2"), ("3", "4")]))
        .expect("build");

    let marks = chart.frame.marks();
    assert_point(marks[0].position(), 50.0 + 400.0 / 3.0, 250.0);
    assert_point(marks[1].position(), 450.0, 50.0);
    // Plot-local anchors drop the margin.
    assert_point(marks[1].anchor(), 400.0, 0.0);
    assert!(matches!(marks[0].shape, Shape::Circle { r, .. } if r == 5.0));
}

#[test]
fn scatter_default_identity_and_classification() {
    let chart = ChartBuilder::default()
        .build("xy", &scatter(), xy(&[("1", "2"), ("3", "4")]))
        .expect("build");

    let m = &chart.frame.marks()[0];
    assert_eq!(m.identity, "(1, 2)");
    assert_eq!(m.classification, "point");
    assert!(!m.selected && !m.bordered);
    assert_eq!(chart.kind, ChartKind::Scatter);
    assert!(chart.clickable());
}

#[test]
fn scatter_custom_classify_and_identify() {
    let rows = vec![
        Row::from_pairs([("x", "1"), ("y", "1"), ("Species", "setosa")]),
        Row::from_pairs([("x", "2"), ("y", "2"), ("Species", "virginica")]),
    ];
    let spec = ScatterSpec::new("Iris", "x", "y")
        .classify(|r| format!("point {}", r.get("Species").unwrap_or("unknown")))
        .identify(|r| r.get("Species").unwrap_or_default().to_uppercase());
    let chart = ChartBuilder::default()
        .build("iris", &spec.into(), Arc::new(Dataset::new("iris", rows)))
        .expect("build");

    let m = &chart.frame.marks()[1];
    assert_eq!(m.identity, "VIRGINICA");
    assert_eq!(m.classes(), vec!["point", "virginica"]);
}

#[test]
fn scatter_places_axes_and_title() {
    let chart = ChartBuilder::default()
        .build("xy", &scatter(), xy(&[("1", "2"), ("3", "4")]))
        .expect("build");

    assert_eq!(chart.frame.title(), Some("X vs Y"));
    let axes = chart.frame.axes();
    assert_eq!(axes.len(), 2);
    assert_eq!(axes[0].edge, AxisEdge::Bottom);
    assert_eq!(axes[1].edge, AxisEdge::Left);
    assert_eq!(axes[1].labels(), vec!["0", "1", "2", "3", "4"]);
    assert_eq!(axes[0].span, (0.0, 400.0));
}

#[test]
fn bar_geometry_from_band_and_value_scales() {
    let rows = [("a", "40"), ("b", "20"), ("c", "10")]
        .iter()
        .map(|(s, n)| Row::from_pairs([("Species", *s), ("Count", *n)]))
        .collect();
    let spec: ChartSpec = BarSpec::new("Counts", "Species", "Count").into();
    let chart = ChartBuilder::default()
        .build("bars", &spec, Arc::new(Dataset::new("counts", rows)))
        .expect("build");

    let marks = chart.frame.marks();
    assert_rect(marks[0].shape, 25.0, 0.0, 100.0, 400.0);
    assert_rect(marks[1].shape, 150.0, 200.0, 100.0, 200.0);
    assert_rect(marks[2].shape, 275.0, 300.0, 100.0, 100.0);
    assert_point(marks[0].position(), 75.0, 50.0);
    // Bars anchor on the middle of their top edge.
    assert_point(marks[1].anchor(), 200.0, 200.0);

    assert_eq!(marks[2].identity, "c: 10");
    assert_eq!(marks[2].classification, "bar");
    assert!(!chart.clickable());

    assert_eq!(chart.frame.axes()[0].labels(), vec!["a", "b", "c"]);
    assert_eq!(chart.frame.axes()[1].labels(), vec!["0", "10", "20", "30", "40"]);
    assert!(matches!(chart.scales.x, AxisScale::Band(_)));
}

#[test]
fn non_numeric_value_fails_the_build() {
    let err = ChartBuilder::default()
        .build("xy", &scatter(), xy(&[("1", "2"), ("abc", "4")]))
        .unwrap_err();
    match err {
        ChartError::InvalidAttributeValue { attribute, value, row } => {
            assert_eq!(attribute, "x");
            assert_eq!(value, "abc");
            assert_eq!(row, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_attribute_fails_the_build() {
    let spec: ChartSpec = ScatterSpec::new("t", "x", "z").into();
    let err = ChartBuilder::default().build("xy", &spec, xy(&[("1", "2")])).unwrap_err();
    assert!(matches!(err, ChartError::MissingAttribute { ref attribute, row: 0 } if attribute == "z"));
}

#[test]
fn empty_dataset_fails_the_build() {
    let err = ChartBuilder::default()
        .build("xy", &scatter(), Arc::new(Dataset::new("empty", Vec::new())))
        .unwrap_err();
    assert!(matches!(err, ChartError::EmptyDataset));
}

#[test]
fn degenerate_domain_is_substituted_not_fatal() {
    let chart = ChartBuilder::default()
        .build("xy", &scatter(), xy(&[("0", "1"), ("0", "2")]))
        .expect("build");

    match &chart.scales.x {
        AxisScale::Linear(s) => assert_eq!(s.domain(), (0.0, 1.0)),
        other => panic!("unexpected scale {other:?}"),
    }
    for m in chart.frame.marks() {
        assert!(m.position().x.is_finite() && m.position().y.is_finite());
        assert!(approx(m.position().x, 50.0));
    }
}

#[test]
fn fixed_domain_padding_adds_headroom() {
    let layout = Layout::default().with_domain_padding(DomainPadding::Fixed(1.0));
    let chart = ChartBuilder::new(layout)
        .build("xy", &scatter(), xy(&[("1", "2"), ("3", "3")]))
        .expect("build");

    // x domain [0, 4], y domain [0, 4]
    assert_point(chart.frame.marks()[1].position(), 350.0, 150.0);
}

#[test]
fn custom_frame_size_shrinks_plot_area() {
    let layout = Layout::with_size(300, 200);
    let chart = ChartBuilder::new(layout)
        .build("xy", &scatter(), xy(&[("1", "2"), ("3", "4")]))
        .expect("build");

    assert_eq!(chart.frame.width(), 300);
    assert_eq!(chart.frame.plot_rect().width(), 200.0);
    assert_eq!(chart.frame.plot_rect().height(), 100.0);
    assert_point(chart.frame.marks()[1].position(), 250.0, 50.0);
}
