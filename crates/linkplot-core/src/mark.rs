// File: crates/linkplot-core/src/mark.rs
// Summary: Mark model (one glyph per row) with plot-local geometry and selection/border flags.

use crate::geometry::{PointF, RectF};

/// Index of a mark within its frame, assigned by `Frame::place_mark`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub usize);

/// Glyph geometry in plot-local pixels (origin at the plot area's top-left).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle { cx: f64, cy: f64, r: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    pub id: MarkId,
    /// Index of the bound row in the chart's dataset.
    pub row: usize,
    /// Display key; not unique when rows share coordinates.
    pub identity: String,
    pub classification: String,
    pub shape: Shape,
    /// Frame-pixel offset of the plot area.
    pub origin: PointF,
    pub selected: bool,
    pub bordered: bool,
}

impl Mark {
    pub fn new(row: usize, identity: impl Into<String>, classification: impl Into<String>, shape: Shape) -> Self {
        Self {
            id: MarkId(0),
            row,
            identity: identity.into(),
            classification: classification.into(),
            shape,
            origin: PointF::default(),
            selected: false,
            bordered: false,
        }
    }

    /// Position in frame pixels: circle center, or rect top-left.
    pub fn position(&self) -> PointF {
        match self.shape {
            Shape::Circle { cx, cy, .. } => PointF::new(cx, cy),
            Shape::Rect { x, y, .. } => PointF::new(x, y),
        }
        .offset(self.origin.x, self.origin.y)
    }

    /// Bar geometry in frame pixels, `None` for circles.
    pub fn frame_rect(&self) -> Option<RectF> {
        match self.shape {
            Shape::Rect { x, y, width, height } => {
                Some(RectF::from_ltwh(x + self.origin.x, y + self.origin.y, width, height))
            }
            Shape::Circle { .. } => None,
        }
    }

    /// Plot-local point tested against brush extents.
    /// Circles use their center; bars use the midpoint of their top edge (the data value).
    pub fn anchor(&self) -> PointF {
        match self.shape {
            Shape::Circle { cx, cy, .. } => PointF::new(cx, cy),
            Shape::Rect { x, y, width, .. } => PointF::new(x + width * 0.5, y),
        }
    }

    /// Hit test for a frame-pixel point.
    pub fn contains(&self, p: PointF) -> bool {
        let local = PointF::new(p.x - self.origin.x, p.y - self.origin.y);
        match self.shape {
            Shape::Circle { cx, cy, r } => {
                let (dx, dy) = (local.x - cx, local.y - cy);
                dx * dx + dy * dy <= r * r
            }
            Shape::Rect { x, y, width, height } => RectF::from_ltwh(x, y, width, height).contains(local),
        }
    }

    /// Style classes: classification words, then `selected` / `border` when set.
    pub fn classes(&self) -> Vec<String> {
        let mut out: Vec<String> = self.classification.split_whitespace().map(str::to_string).collect();
        if self.selected {
            out.push("selected".into());
        }
        if self.bordered {
            out.push("border".into());
        }
        out
    }

    /// Flip the click-toggle border; returns the new state.
    pub fn toggle_border(&mut self) -> bool {
        self.bordered = !self.bordered;
        self.bordered
    }
}
