// File: crates/linkplot-core/src/frame.rs
// Summary: Fixed-size drawing frame: margins, title, axes, marks and an optional brush region.

use crate::axis::{Axis, AxisEdge, AxisScale};
use crate::geometry::{PointF, RectF};
use crate::mark::{Mark, MarkId, Shape};
use crate::scene::{classes, Primitive, Scene, TextAnchor};
use crate::selection::ControllerId;
use crate::types::Layout;

/// Font size used for the title and tick labels.
pub const LABEL_SIZE: f32 = 20.0;
/// Tick mark length in pixels.
pub const TICK_SIZE: f64 = 6.0;

/// Brushable area of a frame and the controller that owns its brush.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushRegion {
    /// Bounds in frame pixels; drags are clamped to it.
    pub bounds: RectF,
    pub controller: ControllerId,
    /// Extent currently drawn, frame pixels.
    pub active: Option<RectF>,
}

/// Placements are additive; there is no removal or re-layout.
#[derive(Clone, Debug)]
pub struct Frame {
    layout: Layout,
    title: Option<String>,
    axes: Vec<Axis>,
    marks: Vec<Mark>,
    brush: Option<BrushRegion>,
}

impl Frame {
    pub fn new(layout: Layout) -> Self {
        Self { layout, title: None, axes: Vec::new(), marks: Vec::new(), brush: None }
    }

    pub fn layout(&self) -> &Layout { &self.layout }
    pub fn width(&self) -> u32 { self.layout.width }
    pub fn height(&self) -> u32 { self.layout.height }

    /// Frame-pixel offset of the plot area's top-left corner.
    pub fn origin(&self) -> PointF {
        PointF::new(self.layout.insets.left as f64, self.layout.insets.top as f64)
    }

    /// Plot area in frame pixels.
    pub fn plot_rect(&self) -> RectF {
        let o = self.origin();
        RectF::from_ltwh(o.x, o.y, self.layout.plot_width(), self.layout.plot_height())
    }

    /// Frame pixels to plot-local pixels.
    pub fn to_plot_local(&self, p: PointF) -> PointF {
        let o = self.origin();
        PointF::new(p.x - o.x, p.y - o.y)
    }

    pub fn place_mark(&mut self, mut mark: Mark) -> MarkId {
        let id = MarkId(self.marks.len());
        mark.id = id;
        mark.origin = self.origin();
        self.marks.push(mark);
        id
    }

    pub fn place_axis(&mut self, scale: &AxisScale, edge: AxisEdge, tick_count: usize) {
        self.axes.push(Axis::new(scale, edge, tick_count));
    }

    pub fn place_title(&mut self, text: impl Into<String>) {
        self.title = Some(text.into());
    }

    pub fn register_brush_region(&mut self, bounds: RectF, controller: ControllerId) {
        self.brush = Some(BrushRegion { bounds, controller, active: None });
    }

    pub fn title(&self) -> Option<&str> { self.title.as_deref() }
    pub fn axes(&self) -> &[Axis] { &self.axes }
    pub fn marks(&self) -> &[Mark] { &self.marks }
    pub fn marks_mut(&mut self) -> &mut [Mark] { &mut self.marks }
    pub fn mark(&self, id: MarkId) -> Option<&Mark> { self.marks.get(id.0) }
    pub fn mark_mut(&mut self, id: MarkId) -> Option<&mut Mark> { self.marks.get_mut(id.0) }
    pub fn brush_region(&self) -> Option<&BrushRegion> { self.brush.as_ref() }

    /// Record the extent being drawn; ignored when no brush region is registered.
    pub fn set_active_brush(&mut self, extent: Option<RectF>) {
        if let Some(b) = self.brush.as_mut() {
            b.active = extent;
        }
    }

    /// Topmost mark containing the frame-pixel point.
    pub fn hit_test(&self, p: PointF) -> Option<MarkId> {
        self.marks.iter().rev().find(|m| m.contains(p)).map(|m| m.id)
    }

    /// Display list in paint order: marks, axes, title, brush overlay.
    pub fn scene(&self) -> Scene {
        let mut scene = Scene::new(self.layout.width, self.layout.height);
        let o = self.origin();

        for m in &self.marks {
            let mut cls = vec!["mark".to_string()];
            cls.extend(m.classes());
            let at = m.position();
            match m.shape {
                Shape::Circle { r, .. } => {
                    scene.push(Primitive::Circle { center: at, radius: r, classes: cls })
                }
                Shape::Rect { width, height, .. } => scene.push(Primitive::Rect {
                    rect: RectF::from_ltwh(at.x, at.y, width, height),
                    classes: cls,
                }),
            }
        }

        let plot = self.plot_rect();
        for axis in &self.axes {
            match axis.edge {
                AxisEdge::Bottom => {
                    let y = plot.bottom;
                    scene.push(Primitive::Line {
                        from: PointF::new(o.x + axis.span.0, y),
                        to: PointF::new(o.x + axis.span.1, y),
                        classes: classes(&["axis", "axis-bottom"]),
                    });
                    for t in &axis.ticks {
                        let x = o.x + t.offset;
                        scene.push(Primitive::Line {
                            from: PointF::new(x, y),
                            to: PointF::new(x, y + TICK_SIZE),
                            classes: classes(&["tick"]),
                        });
                        scene.push(Primitive::Text {
                            at: PointF::new(x, y + TICK_SIZE + LABEL_SIZE as f64),
                            text: t.label.clone(),
                            anchor: TextAnchor::Middle,
                            size: LABEL_SIZE,
                            classes: classes(&["tick-label"]),
                        });
                    }
                }
                AxisEdge::Left => {
                    let x = plot.left;
                    scene.push(Primitive::Line {
                        from: PointF::new(x, o.y + axis.span.0),
                        to: PointF::new(x, o.y + axis.span.1),
                        classes: classes(&["axis", "axis-left"]),
                    });
                    for t in &axis.ticks {
                        let y = o.y + t.offset;
                        scene.push(Primitive::Line {
                            from: PointF::new(x - TICK_SIZE, y),
                            to: PointF::new(x, y),
                            classes: classes(&["tick"]),
                        });
                        scene.push(Primitive::Text {
                            at: PointF::new(x - TICK_SIZE - 3.0, y + LABEL_SIZE as f64 * 0.35),
                            text: t.label.clone(),
                            anchor: TextAnchor::End,
                            size: LABEL_SIZE,
                            classes: classes(&["tick-label"]),
                        });
                    }
                }
            }
        }

        if let Some(title) = &self.title {
            scene.push(Primitive::Text {
                at: PointF::new(plot.left + plot.width() * 0.5, o.y * 0.5),
                text: title.clone(),
                anchor: TextAnchor::Middle,
                size: LABEL_SIZE,
                classes: classes(&["title"]),
            });
        }

        if let Some(rect) = self.brush.and_then(|b| b.active) {
            scene.push(Primitive::Rect { rect, classes: classes(&["brush"]) });
        }
        scene
    }
}
