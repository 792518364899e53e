// File: crates/linkplot-core/tests/scene.rs
// Purpose: Frame display lists: paint order, style classes, title placement and brush overlay.

use std::sync::Arc;

use linkplot_core::selection::ControllerId;
use linkplot_core::{ChartBuilder, Dataset, Primitive, RectF, Row, ScatterSpec, TextAnchor};

fn chart() -> linkplot_core::Chart {
    let rows = vec![
        Row::from_pairs([("x", "1"), ("y", "2"), ("Species", "setosa")]),
        Row::from_pairs([("x", "3"), ("y", "4"), ("Species", "virginica")]),
    ];
    let spec = ScatterSpec::new("Petal vs Sepal", "x", "y")
        .classify(|r| format!("point {}", r.get("Species").unwrap_or_default()));
    ChartBuilder::default()
        .build("s", &spec.into(), Arc::new(Dataset::new("s", rows)))
        .expect("build")
}

#[test]
fn marks_come_first_with_their_classes() {
    let mut c = chart();
    c.frame.marks_mut()[1].selected = true;
    c.frame.marks_mut()[1].bordered = true;
    let scene = c.frame.scene();

    assert_eq!((scene.width, scene.height), (500, 500));
    match &scene.primitives[1] {
        Primitive::Circle { radius, classes, .. } => {
            assert_eq!(*radius, 5.0);
            assert_eq!(classes, &vec!["mark", "point", "virginica", "selected", "border"]);
        }
        other => panic!("expected circle, got {other:?}"),
    }
    assert_eq!(scene.with_class("mark").count(), 2);
    assert_eq!(scene.with_class("setosa").count(), 1);
}

#[test]
fn axes_and_title_are_emitted() {
    let scene = chart().frame.scene();
    assert_eq!(scene.with_class("axis").count(), 2);
    assert!(scene.with_class("tick").count() > 0);

    let labels: Vec<&str> = scene
        .with_class("tick-label")
        .filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert!(labels.contains(&"4"));

    let title = scene.with_class("title").next().expect("title");
    match title {
        Primitive::Text { at, text, anchor, size, .. } => {
            assert_eq!(text, "Petal vs Sepal");
            assert_eq!(*anchor, TextAnchor::Middle);
            assert_eq!(*size, 20.0);
            assert_eq!(at.x, 250.0);
            assert!(at.y < 50.0);
        }
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn brush_overlay_follows_active_extent() {
    let mut c = chart();
    assert_eq!(c.frame.scene().with_class("brush").count(), 0);

    let plot = c.frame.plot_rect();
    c.frame.register_brush_region(plot, ControllerId(0));
    c.frame.set_active_brush(Some(RectF::from_ltwh(60.0, 60.0, 30.0, 30.0)));
    let scene = c.frame.scene();
    let last = scene.primitives.last().expect("primitive");
    assert!(last.has_class("brush"));
    assert!(matches!(last, Primitive::Rect { rect, .. } if rect.width() == 30.0));

    c.frame.set_active_brush(None);
    assert_eq!(c.frame.scene().with_class("brush").count(), 0);
}
