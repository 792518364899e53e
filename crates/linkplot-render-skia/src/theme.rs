// File: crates/linkplot-render-skia/src/theme.rs
// Summary: Light/Dark theming: frame colors, mark palette by class, selection and border styles.

use skia_safe as skia;

/// Mark fill keyed by a classification class (e.g. `setosa`).
pub type Swatch = (&'static str, skia::Color);

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub tick: skia::Color,
    pub tick_label: skia::Color,
    pub title: skia::Color,
    /// Fill for marks whose classes match no swatch.
    pub point: skia::Color,
    pub bar: skia::Color,
    pub palette: [Swatch; 3],
    pub selected: skia::Color,
    pub border: skia::Color,
    pub border_width: f32,
    pub brush_fill: skia::Color,
    pub brush_stroke: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            tick_label: skia::Color::from_argb(255, 20, 20, 30),
            title: skia::Color::from_argb(255, 20, 20, 30),
            point: skia::Color::from_argb(255, 70, 130, 180),
            bar: skia::Color::from_argb(255, 70, 130, 180),
            palette: [
                ("setosa", skia::Color::from_argb(255, 231, 76, 60)),
                ("versicolor", skia::Color::from_argb(255, 46, 160, 67)),
                ("virginica", skia::Color::from_argb(255, 52, 101, 214)),
            ],
            selected: skia::Color::from_argb(255, 255, 165, 0),
            border: skia::Color::from_argb(255, 0, 0, 0),
            border_width: 2.5,
            brush_fill: skia::Color::from_argb(60, 119, 119, 119),
            brush_stroke: skia::Color::from_argb(255, 255, 255, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            tick_label: skia::Color::from_argb(255, 235, 235, 245),
            title: skia::Color::from_argb(255, 235, 235, 245),
            point: skia::Color::from_argb(255, 64, 160, 255),
            bar: skia::Color::from_argb(255, 96, 156, 255),
            palette: [
                ("setosa", skia::Color::from_argb(255, 255, 110, 100)),
                ("versicolor", skia::Color::from_argb(255, 40, 200, 120)),
                ("virginica", skia::Color::from_argb(255, 120, 160, 255)),
            ],
            selected: skia::Color::from_argb(255, 255, 230, 70),
            border: skia::Color::from_argb(255, 255, 255, 255),
            border_width: 2.5,
            brush_fill: skia::Color::from_argb(70, 200, 200, 210),
            brush_stroke: skia::Color::from_argb(255, 200, 200, 210),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            tick_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            title: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            point: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            bar: skia::Color::from_argb(255, 0x00, 0xaa, 0xff),
            palette: [
                ("setosa", skia::Color::from_argb(255, 0xff, 0x00, 0x00)),
                ("versicolor", skia::Color::from_argb(255, 0x00, 0xff, 0x00)),
                ("virginica", skia::Color::from_argb(255, 0x00, 0xaa, 0xff)),
            ],
            selected: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            border: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            border_width: 3.0,
            brush_fill: skia::Color::from_argb(90, 0xff, 0xff, 0xff),
            brush_stroke: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }

    /// Base fill for a mark: the first palette swatch named in `classes`,
    /// else the bar or point default.
    pub fn mark_fill(&self, classes: &[String]) -> skia::Color {
        for (class, color) in &self.palette {
            if classes.iter().any(|c| c == class) {
                return *color;
            }
        }
        if classes.iter().any(|c| c == "bar") {
            self.bar
        } else {
            self.point
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
