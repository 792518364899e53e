// File: crates/linkplot-core/tests/click.rs
// Purpose: Click toggling of mark borders and the shared display region.

use std::sync::Arc;

use linkplot_core::click::{click_at, toggle_mark};
use linkplot_core::{BarSpec, Chart, ChartBuilder, Dataset, DisplayRegion, MarkId, PointF, Row, ScatterSpec};

fn points(rows: &[(&str, &str)]) -> Chart {
    let rows = rows.iter().map(|(x, y)| Row::from_pairs([("x", *x), ("y", *y)])).collect();
    ChartBuilder::default()
        .build("pts", &ScatterSpec::new("Points", "x", "y").into(), Arc::new(Dataset::new("pts", rows)))
        .expect("build")
}

#[test]
fn double_click_restores_border_and_keeps_identity() {
    let mut chart = points(&[("1", "2"), ("3", "4")]);
    let mut display = DisplayRegion::new();
    let at = chart.frame.marks()[1].position();

    let first = click_at(&mut chart, at, &mut display).expect("hit");
    assert!(first.bordered);
    assert_eq!(first.identity, "(3, 4)");
    assert_eq!(display.text(), Some("(3, 4)"));

    let second = click_at(&mut chart, at, &mut display).expect("hit");
    assert!(!second.bordered);
    assert!(!chart.frame.marks()[1].bordered);
    assert_eq!(display.text(), Some("(3, 4)"));
}

#[test]
fn click_near_edge_of_circle_hits() {
    let mut chart = points(&[("1", "2"), ("3", "4")]);
    let mut display = DisplayRegion::new();
    let c = chart.frame.marks()[0].position();

    assert!(click_at(&mut chart, PointF::new(c.x + 4.0, c.y), &mut display).is_some());
    assert!(click_at(&mut chart, PointF::new(c.x + 6.0, c.y), &mut display).is_none());
}

#[test]
fn borders_are_independent_and_display_is_last_click() {
    let mut chart = points(&[("1", "2"), ("3", "4"), ("2", "1")]);
    let mut display = DisplayRegion::new();

    toggle_mark(&mut chart, MarkId(0), &mut display).expect("mark 0");
    toggle_mark(&mut chart, MarkId(2), &mut display).expect("mark 2");

    let bordered: Vec<bool> = chart.frame.marks().iter().map(|m| m.bordered).collect();
    assert_eq!(bordered, vec![true, false, true]);
    assert_eq!(display.text(), Some("(2, 1)"));
}

#[test]
fn click_on_empty_space_changes_nothing() {
    let mut chart = points(&[("1", "2"), ("3", "4")]);
    let mut display = DisplayRegion::new();

    assert!(click_at(&mut chart, PointF::new(5.0, 5.0), &mut display).is_none());
    assert_eq!(display.text(), None);
    assert!(chart.frame.marks().iter().all(|m| !m.bordered));
}

#[test]
fn border_is_orthogonal_to_selection() {
    let mut chart = points(&[("1", "2")]);
    let mut display = DisplayRegion::new();
    chart.frame.marks_mut()[0].selected = true;

    toggle_mark(&mut chart, MarkId(0), &mut display).expect("mark 0");
    let m = &chart.frame.marks()[0];
    assert!(m.selected && m.bordered);
    assert_eq!(m.classes(), vec!["point", "selected", "border"]);
}

#[test]
fn overlapping_marks_hit_the_topmost() {
    let mut chart = points(&[("2", "2"), ("2", "2")]);
    let mut display = DisplayRegion::new();
    let at = chart.frame.marks()[0].position();

    let hit = click_at(&mut chart, at, &mut display).expect("hit");
    assert_eq!(hit.mark, MarkId(1));
    assert!(!chart.frame.marks()[0].bordered);
}

#[test]
fn bar_charts_do_not_toggle() {
    let rows = vec![Row::from_pairs([("Species", "setosa"), ("Count", "50")])];
    let mut chart = ChartBuilder::default()
        .build("bars", &BarSpec::new("Counts", "Species", "Count").into(), Arc::new(Dataset::new("c", rows)))
        .expect("build");
    let mut display = DisplayRegion::new();
    let r = chart.frame.marks()[0].frame_rect().expect("rect");

    let center = PointF::new(r.left + r.width() / 2.0, r.top + r.height() / 2.0);
    assert!(click_at(&mut chart, center, &mut display).is_none());
    assert_eq!(display.text(), None);
}

#[test]
fn unknown_mark_id_is_ignored() {
    let mut chart = points(&[("1", "2")]);
    let mut display = DisplayRegion::new();
    assert!(toggle_mark(&mut chart, MarkId(7), &mut display).is_none());
}
