// File: crates/linkplot-core/src/axis.rs
// Summary: Axis model: edge placement plus tick positions and labels derived from a scale.

use crate::scale::{BandScale, LinearScale};

/// Plot edge an axis is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisEdge {
    Bottom,
    Left,
}

/// Any scale an axis can be drawn for.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisScale {
    Linear(LinearScale),
    Band(BandScale),
}

impl From<LinearScale> for AxisScale {
    fn from(s: LinearScale) -> Self { AxisScale::Linear(s) }
}

impl From<BandScale> for AxisScale {
    fn from(s: BandScale) -> Self { AxisScale::Band(s) }
}

impl AxisScale {
    pub fn range(&self) -> (f64, f64) {
        match self {
            AxisScale::Linear(s) => s.range(),
            AxisScale::Band(s) => s.range(),
        }
    }
}

/// One tick, positioned in plot-local pixels along the axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub edge: AxisEdge,
    /// Extent of the axis line in plot-local pixels.
    pub span: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Numeric scales get round-number ticks (about `tick_count`); band scales tick every category.
    pub fn new(scale: &AxisScale, edge: AxisEdge, tick_count: usize) -> Self {
        let ticks = match scale {
            AxisScale::Linear(s) => {
                let fmt = s.tick_format(tick_count);
                s.ticks(tick_count)
                    .into_iter()
                    .map(|v| Tick { offset: s.map(v), label: fmt(v) })
                    .collect()
            }
            AxisScale::Band(s) => s
                .categories()
                .iter()
                .enumerate()
                .map(|(i, c)| Tick { offset: s.band_start(i) + s.bandwidth() * 0.5, label: c.clone() })
                .collect(),
        };
        let (r0, r1) = scale.range();
        Self { edge, span: (r0.min(r1), r0.max(r1)), ticks }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|t| t.label.as_str()).collect()
    }
}
