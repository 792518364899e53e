// File: crates/linkplot-core/src/click.rs
// Summary: Click-toggle handling: flip a mark's border and publish its identity to the display region.

use crate::chart::Chart;
use crate::geometry::PointF;
use crate::mark::MarkId;

/// Single shared text region; each click overwrites it (no history).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayRegion {
    text: Option<String>,
}

impl DisplayRegion {
    pub fn new() -> Self { Self::default() }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn text(&self) -> Option<&str> { self.text.as_deref() }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickOutcome {
    pub mark: MarkId,
    pub identity: String,
    /// Border state after the toggle.
    pub bordered: bool,
}

/// Toggle the mark with `id`: identity goes to `display`, then `bordered` flips.
/// Other marks are untouched; `selected` is independent.
pub fn toggle_mark(chart: &mut Chart, id: MarkId, display: &mut DisplayRegion) -> Option<ClickOutcome> {
    let mark = chart.frame.mark_mut(id)?;
    display.set(mark.identity.clone());
    let bordered = mark.toggle_border();
    tracing::debug!("Clicked '{}' in '{}': bordered={}", mark.identity, chart.id, bordered);
    Some(ClickOutcome { mark: id, identity: mark.identity.clone(), bordered })
}

/// Hit-test a frame-pixel click and toggle the topmost mark under it.
/// Empty space and non-clickable charts leave everything unchanged.
pub fn click_at(chart: &mut Chart, at: PointF, display: &mut DisplayRegion) -> Option<ClickOutcome> {
    if !chart.clickable() {
        return None;
    }
    let id = chart.frame.hit_test(at)?;
    toggle_mark(chart, id, display)
}
