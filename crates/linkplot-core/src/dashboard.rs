// File: crates/linkplot-core/src/dashboard.rs
// Summary: Bootstrap: builds declared charts, wires selection controllers, dispatches pointer events.
// Notes:
// - The dashboard exclusively owns charts, controllers and the display region, so every event
//   handler runs with `&mut self` and handlers never overlap.
// - A chart id can be built once; repeated declarations are rejected instead of stacking frames.
//   An id whose build failed may be tried again.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::chart::{Chart, ChartBuilder, ChartId, ChartSpec};
use crate::click::{click_at, DisplayRegion};
use crate::data::{Dataset, RowSource};
use crate::error::{ChartError, Result};
use crate::geometry::{PointF, RectF};
use crate::interaction::{BrushPhase, Gesture, Interaction, PointerEvent};
use crate::selection::{ControllerId, LinkKey, SelectionController, SelectionPolicy, SelectionSummary};
use crate::types::Layout;

/// One entry of the static chart list.
#[derive(Clone, Debug)]
pub struct ChartDeclaration {
    pub id: ChartId,
    pub data_path: PathBuf,
    pub spec: ChartSpec,
    /// Register a brush over the plot area.
    pub brush: bool,
    /// Charts sharing a group share one selection controller.
    pub link_group: Option<String>,
}

impl ChartDeclaration {
    pub fn new(id: impl Into<ChartId>, data_path: impl Into<PathBuf>, spec: impl Into<ChartSpec>) -> Self {
        Self { id: id.into(), data_path: data_path.into(), spec: spec.into(), brush: false, link_group: None }
    }

    pub fn with_brush(mut self) -> Self {
        self.brush = true;
        self
    }

    pub fn linked(mut self, group: impl Into<String>) -> Self {
        self.link_group = Some(group.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildState {
    Building,
    Built,
    Failed(String),
}

/// Outcome of building a declaration list.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub built: Vec<ChartId>,
    pub failed: Vec<(ChartId, ChartError)>,
}

impl BuildReport {
    pub fn is_complete(&self) -> bool { self.failed.is_empty() }
}

#[derive(Debug)]
pub struct Dashboard {
    builder: ChartBuilder,
    policy: SelectionPolicy,
    charts: Vec<Chart>,
    states: HashMap<ChartId, BuildState>,
    controllers: Vec<SelectionController>,
    group_links: HashMap<String, LinkKey>,
    groups: HashMap<String, ControllerId>,
    chart_controller: HashMap<ChartId, ControllerId>,
    datasets: HashMap<PathBuf, Arc<Dataset>>,
    display: DisplayRegion,
    gesture: Option<Gesture>,
}

impl Dashboard {
    pub fn new(layout: Layout, policy: SelectionPolicy) -> Self {
        Self {
            builder: ChartBuilder::new(layout),
            policy,
            charts: Vec::new(),
            states: HashMap::new(),
            controllers: Vec::new(),
            group_links: HashMap::new(),
            groups: HashMap::new(),
            chart_controller: HashMap::new(),
            datasets: HashMap::new(),
            display: DisplayRegion::new(),
            gesture: None,
        }
    }

    /// Choose how a link group matches marks; groups default to `LinkKey::Row`.
    /// Must be called before the group's first chart is built.
    pub fn define_group(&mut self, group: impl Into<String>, link: LinkKey) {
        self.group_links.insert(group.into(), link);
    }

    pub fn charts(&self) -> &[Chart] { &self.charts }
    pub fn display(&self) -> &DisplayRegion { &self.display }
    pub fn controllers(&self) -> &[SelectionController] { &self.controllers }
    pub fn state(&self, id: &ChartId) -> Option<&BuildState> { self.states.get(id) }

    pub fn chart(&self, id: &ChartId) -> Option<&Chart> {
        self.charts.iter().find(|c| &c.id == id)
    }

    pub fn controller_for(&self, id: &ChartId) -> Option<&SelectionController> {
        self.chart_controller.get(id).and_then(|c| self.controllers.get(c.0))
    }

    /// Build every declaration; failures are collected, never fatal to siblings.
    pub fn build_all(&mut self, decls: &[ChartDeclaration], source: &dyn RowSource) -> BuildReport {
        let mut report = BuildReport::default();
        for decl in decls {
            match self.build(decl, source) {
                Ok(id) => report.built.push(id),
                Err(e) => {
                    tracing::warn!("Chart '{}' failed to build: {}", decl.id, e);
                    report.failed.push((decl.id.clone(), e));
                }
            }
        }
        tracing::info!("Built {}/{} charts", report.built.len(), decls.len());
        report
    }

    /// Load the declaration's rows (cached per path) and build it.
    pub fn build(&mut self, decl: &ChartDeclaration, source: &dyn RowSource) -> Result<ChartId> {
        self.claim(&decl.id)?;
        match self.dataset(&decl.data_path, source) {
            Ok(dataset) => self.finish_build(decl, dataset),
            Err(e) => {
                self.states.insert(decl.id.clone(), BuildState::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Build against rows already in memory; `decl.data_path` is ignored.
    pub fn build_with_dataset(&mut self, decl: &ChartDeclaration, dataset: Arc<Dataset>) -> Result<ChartId> {
        self.claim(&decl.id)?;
        self.finish_build(decl, dataset)
    }

    /// A `Failed` id may be built again; `Building` and `Built` ids may not.
    fn claim(&mut self, id: &ChartId) -> Result<()> {
        match self.states.get(id) {
            Some(BuildState::Building | BuildState::Built) => {
                return Err(ChartError::DuplicateChart(id.to_string()));
            }
            Some(BuildState::Failed(reason)) => {
                tracing::info!("Retrying chart '{}' after failed build: {}", id, reason);
            }
            None => {}
        }
        self.states.insert(id.clone(), BuildState::Building);
        Ok(())
    }

    fn dataset(&mut self, path: &Path, source: &dyn RowSource) -> Result<Arc<Dataset>> {
        if let Some(ds) = self.datasets.get(path) {
            return Ok(Arc::clone(ds));
        }
        let ds = Arc::new(source.load(path)?);
        self.datasets.insert(path.to_path_buf(), Arc::clone(&ds));
        Ok(ds)
    }

    fn finish_build(&mut self, decl: &ChartDeclaration, dataset: Arc<Dataset>) -> Result<ChartId> {
        let mut chart = match self.builder.build(decl.id.clone(), &decl.spec, dataset) {
            Ok(c) => c,
            Err(e) => {
                self.states.insert(decl.id.clone(), BuildState::Failed(e.to_string()));
                return Err(e);
            }
        };

        let controller = match &decl.link_group {
            Some(group) => Some(self.group_controller(group)),
            None if decl.brush => Some(self.new_controller(LinkKey::Row)),
            None => None,
        };
        if let Some(cid) = controller {
            if decl.brush {
                let plot = chart.frame.plot_rect();
                chart.frame.register_brush_region(plot, cid);
            }
            self.controllers[cid.0].track(&chart);
            self.chart_controller.insert(chart.id.clone(), cid);
        }

        let id = chart.id.clone();
        self.charts.push(chart);
        self.states.insert(id.clone(), BuildState::Built);
        Ok(id)
    }

    fn new_controller(&mut self, link: LinkKey) -> ControllerId {
        let id = ControllerId(self.controllers.len());
        self.controllers.push(SelectionController::new(id, link, self.policy));
        id
    }

    fn group_controller(&mut self, group: &str) -> ControllerId {
        if let Some(id) = self.groups.get(group) {
            return *id;
        }
        let link = self.group_links.get(group).cloned().unwrap_or_default();
        let id = self.new_controller(link);
        self.groups.insert(group.to_string(), id);
        id
    }

    /// Programmatic brush update on `chart` (frame pixels). `extent` is only optional for `End`.
    pub fn brush(&mut self, chart: &ChartId, phase: BrushPhase, extent: Option<RectF>) -> Result<SelectionSummary> {
        let cid = self.brush_controller(chart)?;
        let controller = &mut self.controllers[cid.0];
        let summary = match (phase, extent) {
            (BrushPhase::Start, Some(e)) => controller.start(chart, e, &mut self.charts)?,
            (BrushPhase::Drag, Some(e)) => controller.drag(chart, e, &mut self.charts)?,
            (BrushPhase::Start | BrushPhase::Drag, None) | (BrushPhase::End, _) => {
                controller.end(chart, extent, &mut self.charts)?
            }
        };
        let shown = if phase == BrushPhase::End && self.policy.is_empty_extent(extent) { None } else { extent };
        // One brush per controller: the overlay moves with it.
        let controller = &self.controllers[cid.0];
        for c in self.charts.iter_mut().filter(|c| controller.tracks(&c.id)) {
            c.frame.set_active_brush(if &c.id == chart { shown } else { None });
        }
        Ok(summary)
    }

    fn brush_controller(&self, chart: &ChartId) -> Result<ControllerId> {
        let c = self.chart(chart).ok_or_else(|| ChartError::UnknownChart(chart.to_string()))?;
        c.frame
            .brush_region()
            .map(|b| b.controller)
            .ok_or_else(|| ChartError::NoBrushRegion(chart.to_string()))
    }

    /// Route a pointer event delivered to `chart`.
    pub fn dispatch(&mut self, chart: &ChartId, event: PointerEvent) -> Result<Interaction> {
        let bounds = self
            .chart(chart)
            .ok_or_else(|| ChartError::UnknownChart(chart.to_string()))?
            .frame
            .brush_region()
            .map(|b| b.bounds);

        match event {
            PointerEvent::Down(p) => {
                let inside = bounds.filter(|b| b.contains(p));
                self.gesture = Some(Gesture::new(chart.clone(), p, inside));
                Ok(Interaction::None)
            }
            PointerEvent::Move(p) => {
                let mut g = match self.gesture.take() {
                    Some(g) if &g.chart == chart => g,
                    other => {
                        self.gesture = other;
                        return Ok(Interaction::None);
                    }
                };
                let first = g.note_move(p);
                let extent = g.extent_to(p);
                let brushing = g.brushing() && g.moved;
                self.gesture = Some(g);
                if !brushing {
                    return Ok(Interaction::None);
                }
                let phase = if first { BrushPhase::Start } else { BrushPhase::Drag };
                let s = self.brush(chart, phase, Some(extent))?;
                Ok(Interaction::Brushed { selected: s.selected, in_source: s.in_source })
            }
            PointerEvent::Up(p) => match self.gesture.take() {
                Some(g) if &g.chart == chart => self.release(g, p),
                // Released over another chart: finish the owner's gesture where it was last seen.
                Some(g) if g.moved => {
                    let at = g.last;
                    self.release(g, at)
                }
                _ => Ok(Interaction::None),
            },
            PointerEvent::Click(p) => self.click(chart, p),
        }
    }

    /// Chart owning the press in progress; pointer moves and releases belong to it until the release.
    pub fn gesture_chart(&self) -> Option<&ChartId> {
        self.gesture.as_ref().map(|g| &g.chart)
    }

    fn release(&mut self, g: Gesture, p: PointF) -> Result<Interaction> {
        let chart = g.chart.clone();
        if g.moved {
            if !g.brushing() {
                return Ok(Interaction::None);
            }
            let extent = g.extent_to(p);
            let s = self.brush(&chart, BrushPhase::End, Some(extent))?;
            return Ok(if self.policy.is_empty_extent(Some(extent)) {
                Interaction::BrushCleared
            } else {
                Interaction::BrushEnded { selected: s.selected }
            });
        }
        // A press without a drag empties the brush, then acts as a click.
        let cleared = g.brushing();
        if cleared {
            self.brush(&chart, BrushPhase::End, None)?;
        }
        match self.click(&chart, p)? {
            Interaction::None if cleared => Ok(Interaction::BrushCleared),
            other => Ok(other),
        }
    }

    /// Toggle the mark under a frame-pixel point on `chart`.
    pub fn click(&mut self, chart: &ChartId, at: PointF) -> Result<Interaction> {
        let c = self
            .charts
            .iter_mut()
            .find(|c| &c.id == chart)
            .ok_or_else(|| ChartError::UnknownChart(chart.to_string()))?;
        Ok(match click_at(c, at, &mut self.display) {
            Some(o) => Interaction::Clicked { identity: o.identity, bordered: o.bordered },
            None => Interaction::None,
        })
    }
}
