// File: crates/linkplot-core/src/chart.rs
// Summary: Chart specs (scatter / bar) and the builder that turns rows into scales, marks and a frame.

use std::fmt;
use std::sync::Arc;

use crate::axis::{AxisEdge, AxisScale};
use crate::data::{Dataset, Row};
use crate::domain::{CategoricalDomain, NumericDomain};
use crate::error::Result;
use crate::frame::Frame;
use crate::mark::{Mark, Shape};
use crate::scale::{BandScale, LinearScale};
use crate::types::Layout;

/// Derives a mark's classification (style classes) from its row.
pub type Classifier = Arc<dyn Fn(&Row) -> String + Send + Sync>;
/// Derives a mark's identity (display key) from its row.
pub type Identifier = Arc<dyn Fn(&Row) -> String + Send + Sync>;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChartId(pub String);

impl ChartId {
    pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl From<&str> for ChartId {
    fn from(s: &str) -> Self { Self(s.to_string()) }
}

impl From<String> for ChartId {
    fn from(s: String) -> Self { Self(s) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Scatter,
    Bar,
}

/// Scatter plot: one circle per row at (x_attr, y_attr).
#[derive(Clone)]
pub struct ScatterSpec {
    pub title: String,
    pub x_attr: String,
    pub y_attr: String,
    /// Defaults to the constant `"point"`.
    pub classify: Option<Classifier>,
    /// Defaults to `"(x, y)"` built from the raw values.
    pub identify: Option<Identifier>,
}

impl ScatterSpec {
    pub fn new(title: impl Into<String>, x_attr: impl Into<String>, y_attr: impl Into<String>) -> Self {
        Self { title: title.into(), x_attr: x_attr.into(), y_attr: y_attr.into(), classify: None, identify: None }
    }

    pub fn classify(mut self, f: impl Fn(&Row) -> String + Send + Sync + 'static) -> Self {
        self.classify = Some(Arc::new(f));
        self
    }

    pub fn identify(mut self, f: impl Fn(&Row) -> String + Send + Sync + 'static) -> Self {
        self.identify = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for ScatterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScatterSpec")
            .field("title", &self.title)
            .field("x_attr", &self.x_attr)
            .field("y_attr", &self.y_attr)
            .finish_non_exhaustive()
    }
}

/// Bar chart: one rect per row, banded by category, height by value.
#[derive(Clone)]
pub struct BarSpec {
    pub title: String,
    pub category_attr: String,
    pub value_attr: String,
    /// Defaults to the constant `"bar"`.
    pub classify: Option<Classifier>,
    /// Defaults to `"category: value"`.
    pub identify: Option<Identifier>,
}

impl BarSpec {
    pub fn new(title: impl Into<String>, category_attr: impl Into<String>, value_attr: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category_attr: category_attr.into(),
            value_attr: value_attr.into(),
            classify: None,
            identify: None,
        }
    }

    pub fn classify(mut self, f: impl Fn(&Row) -> String + Send + Sync + 'static) -> Self {
        self.classify = Some(Arc::new(f));
        self
    }

    pub fn identify(mut self, f: impl Fn(&Row) -> String + Send + Sync + 'static) -> Self {
        self.identify = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for BarSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BarSpec")
            .field("title", &self.title)
            .field("category_attr", &self.category_attr)
            .field("value_attr", &self.value_attr)
            .finish_non_exhaustive()
    }
}

/// Tagged chart configuration; selects the mark strategy.
#[derive(Clone, Debug)]
pub enum ChartSpec {
    Scatter(ScatterSpec),
    Bar(BarSpec),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Scatter(s) => &s.title,
            ChartSpec::Bar(s) => &s.title,
        }
    }

    pub fn kind(&self) -> ChartKind {
        match self {
            ChartSpec::Scatter(_) => ChartKind::Scatter,
            ChartSpec::Bar(_) => ChartKind::Bar,
        }
    }

    fn strategy(&self) -> &dyn ChartStrategy {
        match self {
            ChartSpec::Scatter(s) => s,
            ChartSpec::Bar(s) => s,
        }
    }
}

impl From<ScatterSpec> for ChartSpec {
    fn from(s: ScatterSpec) -> Self { ChartSpec::Scatter(s) }
}

impl From<BarSpec> for ChartSpec {
    fn from(s: BarSpec) -> Self { ChartSpec::Bar(s) }
}

/// Scales a strategy produced; `x` feeds the bottom axis, `y` the left axis.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartScales {
    pub x: AxisScale,
    pub y: LinearScale,
}

/// Variant-specific part of a build: compute scales and place marks.
pub trait ChartStrategy {
    fn place_marks(&self, rows: &[Row], layout: &Layout, frame: &mut Frame) -> Result<ChartScales>;
}

impl ChartStrategy for ScatterSpec {
    fn place_marks(&self, rows: &[Row], layout: &Layout, frame: &mut Frame) -> Result<ChartScales> {
        let x_domain = NumericDomain::from_rows(rows, &self.x_attr, layout.domain_floor, layout.domain_padding)?;
        let y_domain = NumericDomain::from_rows(rows, &self.y_attr, layout.domain_floor, layout.domain_padding)?;
        let x_scale = LinearScale::from_domain(&x_domain, (0.0, layout.plot_width()))?;
        // y inverted: larger values sit higher on screen.
        let y_scale = LinearScale::from_domain(&y_domain, (layout.plot_height(), 0.0))?;

        for (i, row) in rows.iter().enumerate() {
            let x = row.numeric(&self.x_attr, i)?;
            let y = row.numeric(&self.y_attr, i)?;
            let classification = match &self.classify {
                Some(f) => f(row),
                None => "point".to_string(),
            };
            let identity = match &self.identify {
                Some(f) => f(row),
                None => format!("({}, {})", row.text(&self.x_attr, i)?, row.text(&self.y_attr, i)?),
            };
            let shape = Shape::Circle { cx: x_scale.map(x), cy: y_scale.map(y), r: layout.point_radius };
            frame.place_mark(Mark::new(i, identity, classification, shape));
        }
        Ok(ChartScales { x: x_scale.into(), y: y_scale })
    }
}

impl ChartStrategy for BarSpec {
    fn place_marks(&self, rows: &[Row], layout: &Layout, frame: &mut Frame) -> Result<ChartScales> {
        let plot_h = layout.plot_height();
        let categories = CategoricalDomain::from_rows(rows, &self.category_attr)?;
        let band = BandScale::new(categories, (0.0, layout.plot_width()), layout.band_padding);
        let value_domain = NumericDomain::from_rows(rows, &self.value_attr, layout.domain_floor, layout.domain_padding)?;
        let value_scale = LinearScale::from_domain(&value_domain, (plot_h, 0.0))?;

        for (i, row) in rows.iter().enumerate() {
            let category = row.text(&self.category_attr, i)?;
            let value = row.numeric(&self.value_attr, i)?;
            let x = band.map(category)?;
            let y = value_scale.map(value);
            // Values below the domain floor hang beneath the baseline.
            let (top, height) = if y <= plot_h { (y, plot_h - y) } else { (plot_h, y - plot_h) };
            let classification = match &self.classify {
                Some(f) => f(row),
                None => "bar".to_string(),
            };
            let identity = match &self.identify {
                Some(f) => f(row),
                None => format!("{}: {}", category, row.text(&self.value_attr, i)?),
            };
            let shape = Shape::Rect { x, y: top, width: band.bandwidth(), height };
            frame.place_mark(Mark::new(i, identity, classification, shape));
        }
        Ok(ChartScales { x: band.into(), y: value_scale })
    }
}

/// A built chart: its frame (marks, axes, title) plus the scales that placed them.
#[derive(Clone, Debug)]
pub struct Chart {
    pub id: ChartId,
    pub kind: ChartKind,
    pub dataset: Arc<Dataset>,
    pub frame: Frame,
    pub scales: ChartScales,
}

impl Chart {
    /// Only scatter marks respond to click toggling.
    pub fn clickable(&self) -> bool {
        self.kind == ChartKind::Scatter
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.dataset.rows.get(index)
    }

    /// Marks currently flagged `selected`.
    pub fn selected_count(&self) -> usize {
        self.frame.marks().iter().filter(|m| m.selected).count()
    }
}

/// Builds charts under one immutable layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChartBuilder {
    layout: Layout,
}

impl ChartBuilder {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &Layout { &self.layout }

    pub fn build(&self, id: impl Into<ChartId>, spec: &ChartSpec, dataset: Arc<Dataset>) -> Result<Chart> {
        let id = id.into();
        let mut frame = Frame::new(self.layout);
        let scales = spec.strategy().place_marks(&dataset.rows, &self.layout, &mut frame)?;

        frame.place_axis(&scales.x, AxisEdge::Bottom, self.layout.tick_count);
        frame.place_axis(&AxisScale::Linear(scales.y), AxisEdge::Left, self.layout.tick_count);
        frame.place_title(spec.title());

        tracing::info!(
            "Built {:?} chart '{}' with {} marks from {}",
            spec.kind(), id, frame.marks().len(), dataset.name
        );
        Ok(Chart { id, kind: spec.kind(), dataset, frame, scales })
    }
}
