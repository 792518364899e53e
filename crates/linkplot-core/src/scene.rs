// File: crates/linkplot-core/src/scene.rs
// Summary: Renderer-agnostic display list (circles, rects, lines, text) in frame pixels.

use crate::geometry::{PointF, RectF};

/// Horizontal alignment of a text primitive relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Drawing primitive. `classes` carry styling intent (`point setosa selected border`,
/// `axis`, `tick`, `title`, `brush`); backends map them to paints.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Circle { center: PointF, radius: f64, classes: Vec<String> },
    Rect { rect: RectF, classes: Vec<String> },
    Line { from: PointF, to: PointF, classes: Vec<String> },
    Text { at: PointF, text: String, anchor: TextAnchor, size: f32, classes: Vec<String> },
}

impl Primitive {
    pub fn classes(&self) -> &[String] {
        match self {
            Primitive::Circle { classes, .. }
            | Primitive::Rect { classes, .. }
            | Primitive::Line { classes, .. }
            | Primitive::Text { classes, .. } => classes,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }
}

/// Everything needed to paint one frame, in paint order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, primitives: Vec::new() }
    }

    pub fn push(&mut self, p: Primitive) {
        self.primitives.push(p);
    }

    /// Primitives carrying `class`.
    pub fn with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Primitive> + 'a {
        self.primitives.iter().filter(move |p| p.has_class(class))
    }
}

pub(crate) fn classes(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
