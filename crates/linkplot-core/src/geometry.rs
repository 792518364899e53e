// File: crates/linkplot-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (points, rectangles, containment).

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(f64, f64)> for PointF {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned rectangle stored as top-left / bottom-right corners.
/// Contract: `left <= right` and `top <= bottom` after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl RectF {
    /// Build from any two opposite corners; corners are normalized.
    pub fn from_corners(a: PointF, b: PointF) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::from_corners(PointF::new(left, top), PointF::new(left + width, top + height))
    }
    pub fn top_left(&self) -> PointF { PointF::new(self.left, self.top) }
    pub fn bottom_right(&self) -> PointF { PointF::new(self.right, self.bottom) }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }

    /// Zero width or zero height.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, p: PointF) -> bool {
        self.left <= p.x && p.x <= self.right && self.top <= p.y && p.y <= self.bottom
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// Restrict to `bounds`; an extent entirely outside collapses onto the nearest edge.
    pub fn clamp_to(&self, bounds: &RectF) -> Self {
        Self {
            left: clamp(self.left, bounds.left, bounds.right),
            top: clamp(self.top, bounds.top, bounds.bottom),
            right: clamp(self.right, bounds.left, bounds.right),
            bottom: clamp(self.bottom, bounds.top, bounds.bottom),
        }
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// `tl.x <= x <= br.x && tl.y <= y <= br.y`
#[inline]
pub fn is_within(extent: &RectF, x: f64, y: f64) -> bool {
    extent.contains(PointF::new(x, y))
}
