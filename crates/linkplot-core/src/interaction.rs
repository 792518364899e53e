// File: crates/linkplot-core/src/interaction.rs
// Summary: Pointer events from the drawing surface and the press/drag/release gesture tracker.

use crate::chart::ChartId;
use crate::geometry::{PointF, RectF};

/// Movement (pixels) below which a press/release pair counts as a click.
pub const CLICK_SLOP: f64 = 3.0;

/// Pointer event in frame pixels of the chart it was delivered to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down(PointF),
    Move(PointF),
    Up(PointF),
    /// A surface that detects clicks itself.
    Click(PointF),
}

/// What the dashboard did with an event.
#[derive(Clone, Debug, PartialEq)]
pub enum Interaction {
    None,
    /// Brush extent updated; counts from the controller.
    Brushed { selected: usize, in_source: usize },
    /// Brush finished with an extent still drawn.
    BrushEnded { selected: usize },
    /// Brush finished empty; selection cleared (or retained, per policy).
    BrushCleared,
    Clicked { identity: String, bordered: bool },
}

/// Phase of a programmatic brush update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrushPhase {
    Start,
    Drag,
    End,
}

/// Press-to-release tracking for one pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct Gesture {
    pub chart: ChartId,
    pub anchor: PointF,
    /// Brush bounds when the press landed inside a brush region.
    pub bounds: Option<RectF>,
    pub moved: bool,
    /// Latest pointer position delivered for this gesture, in the owning chart's frame pixels.
    pub last: PointF,
}

impl Gesture {
    pub fn new(chart: ChartId, anchor: PointF, bounds: Option<RectF>) -> Self {
        let anchor = match bounds {
            Some(b) => PointF::new(anchor.x.clamp(b.left, b.right), anchor.y.clamp(b.top, b.bottom)),
            None => anchor,
        };
        Self { chart, anchor, bounds, moved: false, last: anchor }
    }

    pub fn brushing(&self) -> bool { self.bounds.is_some() }

    /// Extent from the anchor to `to`, clamped into the brush bounds.
    pub fn extent_to(&self, to: PointF) -> RectF {
        let extent = RectF::from_corners(self.anchor, to);
        match self.bounds {
            Some(b) => extent.clamp_to(&b),
            None => extent,
        }
    }

    /// Marks the gesture as a drag once it leaves the click slop. Returns true on the first such move.
    pub fn note_move(&mut self, to: PointF) -> bool {
        self.last = to;
        if self.moved {
            return false;
        }
        let (dx, dy) = (to.x - self.anchor.x, to.y - self.anchor.y);
        if dx * dx + dy * dy >= CLICK_SLOP * CLICK_SLOP {
            self.moved = true;
            return true;
        }
        false
    }
}
