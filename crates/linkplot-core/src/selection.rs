// File: crates/linkplot-core/src/selection.rs
// Summary: Brush selection controller; recomputes `selected` across linked charts on every brush tick.
// Notes:
// - Brush extents arrive in frame pixels of the chart being brushed and are converted to
//   plot-local pixels exactly once, here. Mark anchors are stored plot-local, so both sides
//   of the membership test share one coordinate space.
// - Marks in other charts are matched through a registry keyed by (chart, mark).

use std::collections::{HashMap, HashSet};

use crate::chart::{Chart, ChartId};
use crate::error::{ChartError, Result};
use crate::geometry::{is_within, RectF};
use crate::mark::MarkId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControllerId(pub usize);

/// How marks in different charts are recognized as the same datum.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum LinkKey {
    /// Same dataset and row index.
    #[default]
    Row,
    /// Equal value of the named attribute (e.g. `Species`), across datasets.
    Attribute(String),
    /// Row identity within the brushed chart's dataset, the named attribute across others.
    RowThenAttribute(String),
}

impl LinkKey {
    fn attribute(&self) -> Option<&str> {
        match self {
            LinkKey::Row => None,
            LinkKey::Attribute(a) | LinkKey::RowThenAttribute(a) => Some(a),
        }
    }
}

/// Outcome of a zero-area brush.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DegenerateExtent {
    /// Treated as no selection; every mark is deselected.
    #[default]
    Clear,
    /// Selects marks whose anchor sits exactly on the extent.
    PointHit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionPolicy {
    /// Deselect everything when a drag ends without an extent.
    pub clear_on_end: bool,
    pub degenerate: DegenerateExtent,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self { clear_on_end: true, degenerate: DegenerateExtent::Clear }
    }
}

impl SelectionPolicy {
    /// An extent that selects nothing by construction: missing, or zero-area under `Clear`.
    pub fn is_empty_extent(&self, extent: Option<RectF>) -> bool {
        match extent {
            None => true,
            Some(e) => e.is_degenerate() && self.degenerate == DegenerateExtent::Clear,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BrushState {
    Idle,
    /// `extent` is in frame pixels of `chart`.
    Dragging { chart: ChartId, extent: RectF },
}

/// Link identity of one registered mark.
#[derive(Clone, Debug, PartialEq, Eq)]
struct LinkEntry {
    dataset: String,
    row: usize,
    /// Value of the link attribute; `None` when the row lacks it.
    value: Option<String>,
}

/// Per-tick summary returned to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SelectionSummary {
    /// Selected marks across every tracked chart.
    pub selected: usize,
    /// Selected marks in the brushed chart alone.
    pub in_source: usize,
}

#[derive(Debug)]
pub struct SelectionController {
    id: ControllerId,
    link: LinkKey,
    policy: SelectionPolicy,
    charts: Vec<ChartId>,
    registry: HashMap<(ChartId, MarkId), LinkEntry>,
    state: BrushState,
}

impl SelectionController {
    pub fn new(id: ControllerId, link: LinkKey, policy: SelectionPolicy) -> Self {
        Self {
            id,
            link,
            policy,
            charts: Vec::new(),
            registry: HashMap::new(),
            state: BrushState::Idle,
        }
    }

    pub fn id(&self) -> ControllerId { self.id }
    pub fn policy(&self) -> &SelectionPolicy { &self.policy }
    pub fn state(&self) -> &BrushState { &self.state }
    pub fn tracked(&self) -> &[ChartId] { &self.charts }

    pub fn tracks(&self, chart: &ChartId) -> bool {
        self.charts.contains(chart)
    }

    /// Register every mark of `chart`. Marks whose row lacks the link attribute are tracked
    /// but never matched by attribute.
    pub fn track(&mut self, chart: &Chart) {
        if !self.tracks(&chart.id) {
            self.charts.push(chart.id.clone());
        }
        let attr = self.link.attribute().map(str::to_string);
        let mut unkeyed = 0usize;
        for mark in chart.frame.marks() {
            let value = attr
                .as_deref()
                .and_then(|a| chart.row(mark.row).and_then(|r| r.get(a)))
                .map(str::to_string);
            if attr.is_some() && value.is_none() {
                unkeyed += 1;
            }
            let entry = LinkEntry { dataset: chart.dataset.name.clone(), row: mark.row, value };
            self.registry.insert((chart.id.clone(), mark.id), entry);
        }
        if unkeyed > 0 {
            tracing::debug!("Chart '{}': {} marks have no link key", chart.id, unkeyed);
        }
        tracing::debug!("Controller {:?} tracks {} charts", self.id, self.charts.len());
    }

    /// Drag start: same recomputation as a drag tick.
    pub fn start(&mut self, source: &ChartId, extent: RectF, charts: &mut [Chart]) -> Result<SelectionSummary> {
        self.drag(source, extent, charts)
    }

    /// Drag tick: store the extent, then recompute `selected` for every tracked mark.
    pub fn drag(&mut self, source: &ChartId, extent: RectF, charts: &mut [Chart]) -> Result<SelectionSummary> {
        if !self.tracks(source) {
            return Err(ChartError::UnknownChart(source.to_string()));
        }
        self.state = BrushState::Dragging { chart: source.clone(), extent };
        let summary = self.apply(source, Some(extent), charts)?;
        tracing::debug!(
            "Brush on '{}' [{:.1},{:.1} - {:.1},{:.1}]: {} selected ({} in source)",
            source, extent.left, extent.top, extent.right, extent.bottom, summary.selected, summary.in_source
        );
        Ok(summary)
    }

    /// Drag end. An empty extent (see [`SelectionPolicy::is_empty_extent`]) clears selection
    /// when `clear_on_end` is set; otherwise the last highlights stay.
    pub fn end(&mut self, source: &ChartId, extent: Option<RectF>, charts: &mut [Chart]) -> Result<SelectionSummary> {
        if !self.tracks(source) {
            return Err(ChartError::UnknownChart(source.to_string()));
        }
        self.state = BrushState::Idle;
        if self.policy.is_empty_extent(extent) {
            if self.policy.clear_on_end {
                return self.apply(source, None, charts);
            }
            return Ok(self.summarize(source, charts));
        }
        self.apply(source, extent, charts)
    }

    /// Clear every `selected` flag in tracked charts and return to Idle.
    pub fn clear(&mut self, charts: &mut [Chart]) {
        self.state = BrushState::Idle;
        for chart in charts.iter_mut().filter(|c| self.charts.contains(&c.id)) {
            for mark in chart.frame.marks_mut() {
                mark.selected = false;
            }
        }
    }

    /// Current extent in plot-local pixels of the brushed chart.
    pub fn local_extent(&self, charts: &[Chart]) -> Option<RectF> {
        match &self.state {
            BrushState::Idle => None,
            BrushState::Dragging { chart, extent } => {
                let c = charts.iter().find(|c| &c.id == chart)?;
                let o = c.frame.origin();
                Some(extent.translate(-o.x, -o.y))
            }
        }
    }

    fn apply(&self, source: &ChartId, extent: Option<RectF>, charts: &mut [Chart]) -> Result<SelectionSummary> {
        let src = charts
            .iter()
            .find(|c| &c.id == source)
            .ok_or_else(|| ChartError::UnknownChart(source.to_string()))?;

        // The single frame -> plot-local conversion.
        let o = src.frame.origin();
        let local = extent
            .map(|e| e.translate(-o.x, -o.y))
            .filter(|e| !e.is_degenerate() || self.policy.degenerate == DegenerateExtent::PointHit);

        let mut hits: HashSet<MarkId> = HashSet::new();
        let mut rows: HashSet<(&str, usize)> = HashSet::new();
        let mut values: HashSet<&str> = HashSet::new();
        if let Some(local) = local {
            for mark in src.frame.marks() {
                let a = mark.anchor();
                if !is_within(&local, a.x, a.y) {
                    continue;
                }
                hits.insert(mark.id);
                if let Some(e) = self.registry.get(&(source.clone(), mark.id)) {
                    rows.insert((e.dataset.as_str(), e.row));
                    if let Some(v) = &e.value {
                        values.insert(v.as_str());
                    }
                }
            }
        }
        let source_dataset = src.dataset.name.clone();

        let mut summary = SelectionSummary::default();
        for chart in charts.iter_mut().filter(|c| self.charts.contains(&c.id)) {
            let is_source = &chart.id == source;
            for mark in chart.frame.marks_mut() {
                mark.selected = if is_source {
                    hits.contains(&mark.id)
                } else {
                    self.registry.get(&(chart.id.clone(), mark.id)).map_or(false, |e| {
                        let by_row = rows.contains(&(e.dataset.as_str(), e.row));
                        let by_value = e.value.as_deref().map_or(false, |v| values.contains(v));
                        match self.link {
                            LinkKey::Row => by_row,
                            LinkKey::Attribute(_) => by_value,
                            LinkKey::RowThenAttribute(_) if e.dataset == source_dataset => by_row,
                            LinkKey::RowThenAttribute(_) => by_value,
                        }
                    })
                };
                if mark.selected {
                    summary.selected += 1;
                    if is_source {
                        summary.in_source += 1;
                    }
                }
            }
        }
        Ok(summary)
    }

    fn summarize(&self, source: &ChartId, charts: &[Chart]) -> SelectionSummary {
        let mut summary = SelectionSummary::default();
        for chart in charts.iter().filter(|c| self.charts.contains(&c.id)) {
            let n = chart.selected_count();
            summary.selected += n;
            if &chart.id == source {
                summary.in_source += n;
            }
        }
        summary
    }
}
